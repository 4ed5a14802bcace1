//! Block Classification and the Source Walk
//!
//! The [`Extractor`] drives the scanner over every requested source, interprets
//! each raw block by its leading `Class:`/`Method:` tag line, and collects the
//! typed records. Malformed blocks are warned about and skipped; the run only
//! dies on real I/O failures. After the walk both record lists are sorted by
//! name so output is reproducible across runs.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{debug, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::record::{ClassDoc, MethodDoc};
use crate::scanner::{self, DocBlocks};

static TAG_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^([a-zA-Z]+):").expect("tag pattern compiles"));

/// Scans sources and accumulates documentation records.
#[derive(Debug, Default)]
pub struct Extractor {
    pub classes: Vec<ClassDoc>,
    pub methods: Vec<MethodDoc>,
    warnings: Vec<String>,
    /// Print a running `Examining <path>` line per file (the CLI turns this on).
    pub progress: bool,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings emitted so far, in order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Scan every given path and sort the collected records.
    ///
    /// Files are scanned as-is; directories are walked recursively (sorted, so
    /// record order is reproducible) taking only native-source extensions.
    /// Paths that are neither get a warning and are skipped.
    ///
    /// # Errors
    /// Fails on I/O errors while reading a file or walking a directory. There
    /// is no recovery for those; a malformed block is never an error.
    pub fn scan_paths(&mut self, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            if path.is_file() {
                self.scan_file(path)?;
            } else if path.is_dir() {
                self.scan_dir(path)?;
            } else {
                self.emit_warning(format!("Cannot read '{}'. Ignoring.", path.display()));
            }
        }
        self.sort_records();
        Ok(())
    }

    /// Scan one file (regardless of extension).
    ///
    /// # Errors
    /// Fails when the file cannot be opened or read.
    pub fn scan_file(&mut self, path: &Path) -> Result<()> {
        if self.progress {
            print!("\rExamining {}", path.display());
            let _ = io::stdout().flush();
        }
        debug!("scanning {}", path.display());
        let blocks = scanner::scan_file(path).with_context(|| format!("opening '{}'", path.display()))?;
        self.consume(blocks).with_context(|| format!("reading '{}'", path.display()))
    }

    /// Feed an in-memory source through the scanner.
    pub fn scan_source(&mut self, source: &str) {
        self.consume(DocBlocks::new(source.as_bytes()))
            .expect("reads from memory cannot fail");
    }

    fn scan_dir(&mut self, dir: &Path) -> Result<()> {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walking '{}'", dir.display()))?;
            if entry.file_type().is_file() && scanner::has_source_extension(entry.path()) {
                self.scan_file(entry.path())?;
            }
        }
        Ok(())
    }

    fn consume<R: BufRead>(&mut self, blocks: DocBlocks<R>) -> io::Result<()> {
        for block in blocks {
            self.classify(&block?);
        }
        Ok(())
    }

    /// Sort both record lists by name (stable, case-sensitive). Idempotent.
    pub fn sort_records(&mut self) {
        self.classes.sort_by(|a, b| a.name.cmp(&b.name));
        self.methods.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Interpret one raw block text and append zero or one record.
    fn classify(&mut self, block: &str) {
        let Some(first) = block.lines().next() else {
            self.emit_warning("Skipping invalid documentation comment block".to_string());
            return;
        };
        let Some(caps) = TAG_LINE.captures(first) else {
            self.emit_warning("Skipping invalid documentation comment block".to_string());
            return;
        };
        let tag = &caps[1];
        let rest = &first[caps[0].len()..];
        let body = block.split_once('\n').map_or("", |(_, body)| body);
        match tag.to_ascii_lowercase().as_str() {
            "class" => self.build_class(rest, body),
            "method" => self.build_method(rest, body),
            _ => self.emit_warning(format!("Skipping invalid documentation type '{tag}'")),
        }
    }

    fn build_class(&mut self, name: &str, body: &str) {
        let name = name.trim();
        debug!("found class '{name}'");
        self.classes.push(ClassDoc {
            name: name.to_string(),
            // blank padding between the tag line and the prose is not content
            documentation: body.trim_start_matches('\n').to_string(),
        });
    }

    fn build_method(&mut self, spec: &str, body: &str) {
        let spec = spec.trim();
        let (class_name, name, is_instance) = if let Some((class_name, name)) = spec.split_once('#') {
            (class_name, name, true)
        } else if let Some((class_name, name)) = spec.rsplit_once("::") {
            (class_name, name, false)
        } else {
            self.emit_warning(format!("Invalid method spec '{spec}'. Ignoring."));
            return;
        };
        debug!("found method '{spec}'");

        // signature lines: indented, possibly padded by blank lines; the
        // documentation text starts at the first non-blank, non-indented line
        let lines: Vec<&str> = body.lines().collect();
        let mut call_seqs = Vec::new();
        let mut doc_start = lines.len();
        for (idx, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            if line.starts_with(char::is_whitespace) {
                call_seqs.push(line.trim().to_string());
                continue;
            }
            doc_start = idx;
            break;
        }
        if call_seqs.is_empty() {
            self.emit_warning(format!("No call sequence found for '{spec}'"));
        }

        let mut documentation = String::new();
        for line in &lines[doc_start..] {
            documentation.push_str(line);
            documentation.push('\n');
        }

        self.methods.push(MethodDoc {
            name: name.to_string(),
            class_name: class_name.to_string(),
            is_instance,
            call_seqs,
            documentation,
        });
    }

    fn emit_warning(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }
}
