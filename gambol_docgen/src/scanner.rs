//! Comment-Block Scanner
//!
//! Line-oriented extraction of `/** ... */` documentation blocks from native
//! source files. A line holding nothing but `/**` opens a block, a line holding
//! nothing but `*/` closes it, and everything between is collected with the
//! leading comment decoration stripped. Lines outside a block are ignored.
//!
//! This is a comment scraper, not a lexer: it does not track string literals,
//! nested comments, or any code structure, so marker lines buried in odd places
//! will be taken at face value. Engine sources follow the documentation comment
//! convention closely enough that this has never mattered.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// File extensions scanned when a directory is walked.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["c", "cpp", "h", "hpp"];

/// Whether a path carries one of the [`SOURCE_EXTENSIONS`].
pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Open a file and iterate the documentation blocks in it.
///
/// # Errors
/// Fails when the file cannot be opened; read failures surface through the
/// iterator items.
pub fn scan_file(path: &Path) -> io::Result<DocBlocks<BufReader<File>>> {
    Ok(DocBlocks::new(BufReader::new(File::open(path)?)))
}

/// Lazy iterator over the raw documentation-block texts in one source.
///
/// Each yielded block is the text between one `/**` and the next `*/`, one
/// line per source line, every line stripped and newline-terminated. A block
/// still open at end of input is discarded; block state never crosses inputs
/// because each source gets its own iterator.
pub struct DocBlocks<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> DocBlocks<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }
}

impl<R: BufRead> Iterator for DocBlocks<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut in_block = false;
        let mut block = String::new();
        loop {
            let line = match self.lines.next() {
                None => return None,
                Some(Err(err)) => return Some(Err(err)),
                Some(Ok(line)) => line,
            };
            let trimmed = line.trim();
            if !in_block {
                if trimmed == "/**" {
                    in_block = true;
                }
            } else if trimmed == "*/" {
                return Some(Ok(block));
            } else {
                block.push_str(strip_decoration(trimmed));
                block.push('\n');
            }
        }
    }
}

/// Strip the leading `*` and at most one following space from a trimmed block
/// line. A second space survives, which is how call-signature lines keep their
/// indentation through the scan.
fn strip_decoration(line: &str) -> &str {
    match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}
