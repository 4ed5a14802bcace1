#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

//! Scraper and renderer for the Gambol scripting API documentation.
//!
//! The engine sources carry `/** ... */` comment blocks tagged `Class:` or
//! `Method:`; the [`Extractor`] walks the sources, collects those blocks into
//! typed records, and the [`HtmlGenerator`] renders one HTML page per class
//! through a markdown engine. The `gambol_docgen` binary wires both together
//! behind a small CLI.

// Core modules
pub mod extract;
pub mod record;
pub mod render;
pub mod scanner;

// Re-exports for convenience
pub use extract::Extractor;
pub use record::{ClassDoc, MethodDoc};
pub use render::{DEFAULT_TEMPLATE, HtmlGenerator, apply_template, class_markdown, markdown_to_html};
pub use scanner::{DocBlocks, SOURCE_EXTENSIONS, has_source_extension, scan_file};
