//! `[build]` section configuration.
//!
//! Contains collection pipeline settings: template formats, pagination,
//! and front matter parsing options.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in folio.toml - collection pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// formats = ["md", "njk", "html"]
///
/// [build.pagination]
/// size = 5
///
/// [build.front_matter]
/// excerpt = true
/// excerpt_separator = "<!-- excerpt -->"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Template formats the engine renders (file extensions without dot).
    #[serde(default = "defaults::build::formats")]
    #[educe(Default = defaults::build::formats())]
    pub formats: Vec<String>,

    /// Pagination settings for paged collections.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Front matter parsing options.
    #[serde(default)]
    pub front_matter: FrontMatterConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.pagination]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PaginationConfig {
    /// Posts per page for the paged collections.
    ///
    /// Must be at least 1; `SiteConfig::validate` rejects 0 before any
    /// collection is built.
    #[serde(default = "defaults::build::pagination::size")]
    #[educe(Default = defaults::build::pagination::size())]
    pub size: usize,
}

/// `[build.front_matter]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FrontMatterConfig {
    /// Extract an excerpt from the body.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub excerpt: bool,

    /// Marker separating the excerpt from the rest of the body.
    #[serde(default = "defaults::build::front_matter::excerpt_separator")]
    #[educe(Default = defaults::build::front_matter::excerpt_separator())]
    pub excerpt_separator: String,
}

// ============================================================================
// Tests
// ============================================================================
