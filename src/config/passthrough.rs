//! `passthrough` configuration entries.
//!
//! Declares source globs the engine copies verbatim into the output tree.
//! This crate only carries and validates the rules; the copying itself is
//! the engine's job.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single passthrough copy rule.
///
/// # Formats
/// ```toml
/// # Mirror the source path into the output tree
/// passthrough = ["assets/img/**/*"]
///
/// # Or remap under a different output prefix
/// passthrough = [
///     "assets/img/**/*",
///     { source = "posts/img/**/*", target = "assets/img" },
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PassthroughEntry {
    /// Source glob copied to the same relative path.
    Simple(String),
    /// Source glob copied under a different output prefix.
    WithTarget { source: String, target: PathBuf },
}

impl PassthroughEntry {
    /// Source glob, relative to the input directory
    pub fn source(&self) -> &str {
        match self {
            PassthroughEntry::Simple(source) => source,
            PassthroughEntry::WithTarget { source, .. } => source,
        }
    }

    /// Output prefix, if the rule remaps one
    pub fn target(&self) -> Option<&Path> {
        match self {
            PassthroughEntry::Simple(_) => None,
            PassthroughEntry::WithTarget { target, .. } => Some(target),
        }
    }
}
