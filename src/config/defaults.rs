//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

use std::{collections::BTreeMap, path::PathBuf};

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [dir] Section Defaults
// ============================================================================

pub mod dir {
    use std::path::PathBuf;

    pub fn input() -> PathBuf {
        "src".into()
    }

    pub fn output() -> PathBuf {
        "_site".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    pub fn formats() -> Vec<String> {
        vec!["md".into(), "njk".into(), "html".into()]
    }

    pub mod pagination {
        pub fn size() -> usize {
            10
        }
    }

    pub mod front_matter {
        pub fn excerpt_separator() -> String {
            "<!-- excerpt -->".into()
        }
    }
}

// ============================================================================
// [layouts] Section Defaults
// ============================================================================

pub fn layouts() -> BTreeMap<String, PathBuf> {
    BTreeMap::from([
        ("default".into(), "layouts/default.njk".into()),
        ("post".into(), "layouts/post.njk".into()),
    ])
}
