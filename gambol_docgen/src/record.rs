//! Extracted documentation records.
//!
//! One record per documentation block. Records are plain data: the extractor
//! appends them in scan order and sorts them by name once the scan finishes,
//! and nothing merges duplicates. A class documented twice produces two
//! records, and downstream consumers must cope.

use serde::{Deserialize, Serialize};

/// One documented scripting class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDoc {
    pub name: String,
    /// Markdown body following the tag line.
    pub documentation: String,
}

/// One documented scripting method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDoc {
    pub name: String,
    /// Name of the class the method is documented under.
    pub class_name: String,
    /// `Class#method` blocks are instance methods, `Class::method` blocks are
    /// class methods.
    pub is_instance: bool,
    /// Call signatures in documentation order, e.g. `bar(x) → y`.
    pub call_seqs: Vec<String>,
    pub documentation: String,
}
