//! Content items and their normalized accessors.
//!
//! The engine owns file I/O and front matter parsing; it hands this crate
//! one `ContentItem` per source file. Raw metadata stays exactly as the
//! engine parsed it. The accessors here are where date strings, tags and
//! slugs get normalized, so every collection builder sees the same view.

use crate::utils::{date::DateTimeUtc, slug::slugify};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// A single content file as handed over by the engine.
///
/// Immutable during a build: collection builders only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Source path relative to the input directory
    pub path: PathBuf,

    /// Page title (from front matter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Raw publication date string; may be absent or unparseable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Tags as written in front matter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Draft flag; drafts never reach published collections
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    /// Explicit slug override (from front matter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Raw body, opaque to the collection pipeline
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,

    /// Remaining front matter fields, passed through untouched
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl ContentItem {
    /// Create an item with only its source path set
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: None,
            date: None,
            tags: Vec::new(),
            draft: false,
            slug: None,
            body: String::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Parsed publication date.
    ///
    /// `None` when the date is missing or not a valid
    /// `YYYY-MM-DD` / `YYYY-MM-DDTHH:MM:SSZ` string; such items never
    /// count as published posts.
    pub fn published_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse)
    }

    /// Tags with surrounding whitespace trimmed and blank entries dropped
    pub fn normalized_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
    }

    /// URL slug: the explicit front matter override when present,
    /// otherwise derived from the source file stem. Either way the result
    /// goes through slugification.
    pub fn slug(&self) -> String {
        if let Some(slug) = &self.slug {
            return slugify(slug);
        }

        let stem = self.path.file_stem().and_then(|s| s.to_str());

        // index files take their slug from the containing directory
        let stem = match stem {
            Some("index") => self
                .path
                .parent()
                .and_then(Path::file_name)
                .and_then(|s| s.to_str())
                .unwrap_or("index"),
            Some(stem) => stem,
            None => "",
        };

        slugify(stem)
    }

    /// Excerpt: the body text before the first separator marker
    pub fn excerpt(&self, separator: &str) -> Option<&str> {
        self.body
            .split_once(separator)
            .map(|(before, _)| before.trim())
    }
}
