//! `[dir]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[dir]` section in folio.toml - source and output directory layout.
///
/// Both paths are relative to the project root. The engine resolves and
/// walks them; this crate only validates that they point at different
/// places.
///
/// # Example
/// ```toml
/// [dir]
/// input = "src"
/// output = "_site"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct DirConfig {
    /// Content source directory.
    #[serde(default = "defaults::dir::input")]
    #[educe(Default = defaults::dir::input())]
    pub input: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::dir::output")]
    #[educe(Default = defaults::dir::output())]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_dir_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.dir.input, PathBuf::from("src"));
        assert_eq!(config.dir.output, PathBuf::from("_site"));
    }

    #[test]
    fn test_dir_config_custom() {
        let config = r#"
            [dir]
            input = "content"
            output = "dist"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.dir.input, PathBuf::from("content"));
        assert_eq!(config.dir.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_dir_unknown_field_rejection() {
        let config = r#"
            [dir]
            input = "src"
            unknown = "field"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
