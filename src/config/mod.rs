//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                       |
//! |---------------|-----------------------------------------------|
//! | `passthrough` | Globs the engine copies into the output tree  |
//! | `[dir]`       | Source and output directory layout            |
//! | `[build]`     | Template formats, pagination, front matter    |
//! | `[layouts]`   | Layout alias → layout file map                |
//! | `[extra]`     | User-defined custom fields                    |
//!
//! # Example
//!
//! ```toml
//! passthrough = ["assets/img/**/*"]
//!
//! [dir]
//! input = "src"
//! output = "_site"
//!
//! [build]
//! formats = ["md", "njk", "html"]
//!
//! [build.pagination]
//! size = 5
//!
//! [layouts]
//! default = "layouts/default.njk"
//! post = "layouts/post.njk"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```
//!
//! The configuration is parsed once at build start and validated before any
//! collection is built. Anything a collection builder would otherwise trip
//! over mid-build (a zero page size, input and output pointing at the same
//! directory) is rejected here instead.

mod build;
pub mod defaults;
mod dir;
mod error;
mod passthrough;

// Re-export public types used by other modules
pub use build::{BuildConfig, FrontMatterConfig, PaginationConfig};
pub use dir::DirConfig;
pub use error::ConfigError;
pub use passthrough::PassthroughEntry;

use crate::log;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Passthrough copy rules (data only; the engine does the copying)
    #[serde(default)]
    pub passthrough: Vec<PassthroughEntry>,

    /// Source and output directory layout
    #[serde(default)]
    pub dir: DirConfig,

    /// Collection pipeline settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Layout aliases: template-facing name → layout file
    #[serde(default = "defaults::layouts")]
    #[educe(Default = defaults::layouts())]
    pub layouts: BTreeMap<String, PathBuf>,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load and validate configuration at build start.
    ///
    /// This is the entry point a build process should use: every
    /// validation failure surfaces here, before any collection is built.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::from_path(path)?;
        config.validate()?;
        log!(
            "config";
            "loaded {} (page size {}, {} layout aliases)",
            path.display(),
            config.build.pagination.size,
            config.layouts.len()
        );
        Ok(config)
    }

    /// Page size for the paged collections.
    ///
    /// Returns the validated non-zero size; fails with the same error
    /// `validate` raises so callers that skipped validation still cannot
    /// reach the pager with a zero size.
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.build.pagination.size).ok_or_else(|| {
            ConfigError::Validation("[build.pagination.size] must be at least 1".into()).into()
        })
    }

    /// Excerpt separator, when excerpt extraction is enabled
    pub fn excerpt_separator(&self) -> Option<&str> {
        self.build
            .front_matter
            .excerpt
            .then_some(self.build.front_matter.excerpt_separator.as_str())
    }

    /// Resolve a layout alias to its layout file
    pub fn layout(&self, alias: &str) -> Option<&Path> {
        self.layouts.get(alias).map(PathBuf::as_path)
    }

    /// Validate configuration before the build runs
    pub fn validate(&self) -> Result<()> {
        if self.build.pagination.size == 0 {
            bail!(ConfigError::Validation(
                "[build.pagination.size] must be at least 1".into()
            ));
        }

        if self.dir.input == self.dir.output {
            bail!(ConfigError::Validation(
                "[dir.input] and [dir.output] must point at different directories".into()
            ));
        }

        if self.build.front_matter.excerpt
            && self.build.front_matter.excerpt_separator.trim().is_empty()
        {
            bail!(ConfigError::Validation(
                "[build.front_matter.excerpt_separator] must not be empty".into()
            ));
        }

        for entry in &self.passthrough {
            if entry.source().trim().is_empty() {
                bail!(ConfigError::Validation(
                    "passthrough entries must have a non-empty source".into()
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
