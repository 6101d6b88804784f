//! Plugin seams for output shaping.
//!
//! External tooling (minifiers, syntax highlighters, typography passes)
//! attaches through two narrow capability traits instead of becoming crate
//! dependencies: a [`Transform`] reshapes rendered output bytes, a
//! [`Filter`] reshapes a single template value. The registry holds the
//! instances registered at startup; the engine drives them while rendering.
//!
//! The one filter shipped here is `readableDate`, which templates use to
//! print a post's date under its title.

use crate::utils::date::DateTimeUtc;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::{borrow::Cow, collections::BTreeMap, path::Path};

// ============================================================================
// Capability Traits
// ============================================================================

/// Reshapes rendered output bytes.
///
/// Implemented by external plugins (HTML minifier, feed prettifier, ...).
/// A transform declares which output paths it handles; the registry skips
/// it for everything else.
pub trait Transform {
    /// Name shown in build logs and error context
    fn name(&self) -> &str;

    /// Whether this transform handles the given output path
    fn applies_to(&self, path: &Path) -> bool;

    /// Reshape the output bytes
    fn apply(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Reshapes a single template value.
///
/// Filters are pure: value in, value out, no surrounding context.
pub trait Filter {
    /// Name templates call the filter by
    fn name(&self) -> &str;

    /// Reshape the value
    fn apply(&self, value: &Value) -> Result<Value>;
}

// ============================================================================
// Plugin Registry
// ============================================================================

/// Transforms and filters registered for a build.
///
/// Constructed once at process start and passed to the engine alongside
/// the collection registry; nothing registers itself globally.
#[derive(Default)]
pub struct PluginRegistry {
    transforms: Vec<Box<dyn Transform>>,
    filters: BTreeMap<String, Box<dyn Filter>>,
}

impl PluginRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in filters registered
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_filter(Box::new(ReadableDate));
        registry
    }

    /// Add a transform; transforms run in registration order
    pub fn register_transform(&mut self, transform: Box<dyn Transform>) {
        self.transforms.push(transform);
    }

    /// Add or replace a named filter
    pub fn register_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.insert(filter.name().to_owned(), filter);
    }

    /// Registered filter names, in sorted order
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Run every applicable transform over the output bytes, in
    /// registration order.
    ///
    /// Returns `Cow::Borrowed` when no transform touched the input.
    pub fn transform<'a>(&self, path: &Path, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let mut output = Cow::Borrowed(input);

        for transform in &self.transforms {
            if transform.applies_to(path) {
                let reshaped = transform
                    .apply(&output)
                    .with_context(|| format!("transform `{}` failed", transform.name()))?;
                output = Cow::Owned(reshaped);
            }
        }

        Ok(output)
    }

    /// Apply a filter by name. Unknown names are an error: a template
    /// calling a filter that was never registered is a build bug.
    pub fn filter(&self, name: &str, value: &Value) -> Result<Value> {
        let Some(filter) = self.filters.get(name) else {
            bail!("unknown filter `{name}`");
        };
        filter.apply(value)
    }
}

// ============================================================================
// Built-in Filters
// ============================================================================

/// `readableDate`: ISO date string → "DD Mon YYYY".
pub struct ReadableDate;

impl Filter for ReadableDate {
    fn name(&self) -> &str {
        "readableDate"
    }

    fn apply(&self, value: &Value) -> Result<Value> {
        let Some(raw) = value.as_str() else {
            bail!("readableDate expects a string, got {value}");
        };
        let Some(date) = DateTimeUtc::parse(raw) else {
            bail!("readableDate cannot parse `{raw}`");
        };
        Ok(Value::String(date.to_readable()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Test transform that collapses indentation on html outputs
    struct TrimLines;

    impl Transform for TrimLines {
        fn name(&self) -> &str {
            "trimLines"
        }

        fn applies_to(&self, path: &Path) -> bool {
            path.extension().is_some_and(|ext| ext == "html")
        }

        fn apply(&self, input: &[u8]) -> Result<Vec<u8>> {
            let text = std::str::from_utf8(input)?;
            Ok(text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("")
                .into_bytes())
        }
    }

    /// Test transform that always fails
    struct Broken;

    impl Transform for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn applies_to(&self, _path: &Path) -> bool {
            true
        }

        fn apply(&self, _input: &[u8]) -> Result<Vec<u8>> {
            bail!("boom");
        }
    }

    #[test]
    fn test_transform_applies_by_path() {
        let mut registry = PluginRegistry::new();
        registry.register_transform(Box::new(TrimLines));

        let input = b"<p>\n  indented\n</p>\n";

        let html = registry
            .transform(Path::new("index.html"), input)
            .unwrap();
        assert_eq!(&*html, b"<p>indented</p>");

        // Non-matching paths pass through untouched and unallocated
        let css = registry.transform(Path::new("style.css"), input).unwrap();
        assert!(matches!(css, Cow::Borrowed(_)));
        assert_eq!(&*css, input);
    }

    #[test]
    fn test_transform_empty_registry_borrows() {
        let registry = PluginRegistry::new();
        let output = registry
            .transform(Path::new("index.html"), b"untouched")
            .unwrap();

        assert!(matches!(output, Cow::Borrowed(_)));
    }

    #[test]
    fn test_transform_failure_names_plugin() {
        let mut registry = PluginRegistry::new();
        registry.register_transform(Box::new(Broken));

        let err = registry
            .transform(Path::new("index.html"), b"anything")
            .unwrap_err();

        assert!(format!("{err:#}").contains("broken"));
    }

    #[test]
    fn test_filter_readable_date() {
        let registry = PluginRegistry::standard();

        let formatted = registry
            .filter("readableDate", &json!("2024-03-01"))
            .unwrap();
        assert_eq!(formatted, json!("01 Mar 2024"));

        // Time component is accepted and dropped from the readable form
        let formatted = registry
            .filter("readableDate", &json!("2024-12-25T09:30:00Z"))
            .unwrap();
        assert_eq!(formatted, json!("25 Dec 2024"));
    }

    #[test]
    fn test_filter_readable_date_rejects_bad_input() {
        let registry = PluginRegistry::standard();

        assert!(registry.filter("readableDate", &json!(42)).is_err());
        assert!(
            registry
                .filter("readableDate", &json!("not a date"))
                .is_err()
        );
    }

    #[test]
    fn test_filter_unknown_name() {
        let registry = PluginRegistry::standard();
        let err = registry.filter("shout", &json!("hi")).unwrap_err();

        assert!(err.to_string().contains("shout"));
    }

    #[test]
    fn test_register_custom_filter() {
        struct Upper;

        impl Filter for Upper {
            fn name(&self) -> &str {
                "upper"
            }

            fn apply(&self, value: &Value) -> Result<Value> {
                let Some(s) = value.as_str() else {
                    bail!("upper expects a string");
                };
                Ok(Value::String(s.to_uppercase()))
            }
        }

        let mut registry = PluginRegistry::standard();
        registry.register_filter(Box::new(Upper));

        let names: Vec<&str> = registry.filter_names().collect();
        assert_eq!(names, vec!["readableDate", "upper"]);

        assert_eq!(
            registry.filter("upper", &json!("quiet")).unwrap(),
            json!("QUIET")
        );
    }
}
