//! Named collections derived from the flat content item list.
//!
//! # Collections
//!
//! | Name              | Shape                                     |
//! |-------------------|-------------------------------------------|
//! | `posts`           | published posts, newest first             |
//! | `tagList`         | distinct tags, lexicographic order        |
//! | `pagedPosts`      | posts split into fixed-size pages         |
//! | `pagedPostsByTag` | per-tag page runs in global post order    |
//!
//! The registry is an explicit value constructed once at build start and
//! handed to whoever builds collections; there is no global registration
//! and no shared mutable state. Builders are pure: read-only items plus
//! config in, derived collection out, recomputed fresh every build.

pub mod paged;
pub mod pager;
pub mod posts;
pub mod tags;

pub use paged::{paged_posts, paged_posts_by_tag};
pub use pager::{Page, paginate};
pub use posts::{Post, posts};
pub use tags::tag_list;

use crate::config::SiteConfig;
use crate::content::ContentItem;
use crate::log;
use anyhow::{Result, bail};
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Collection Values
// ============================================================================

/// A built collection, in one of the four shapes templates consume.
#[derive(Debug, Clone)]
pub enum Collection<'a> {
    Posts(Vec<Post<'a>>),
    TagList(BTreeSet<String>),
    PagedPosts(Vec<Page<'a>>),
    PagedPostsByTag(BTreeMap<String, Vec<Page<'a>>>),
}

impl<'a> Collection<'a> {
    pub fn as_posts(&self) -> Option<&[Post<'a>]> {
        match self {
            Collection::Posts(posts) => Some(posts),
            _ => None,
        }
    }

    pub fn as_tag_list(&self) -> Option<&BTreeSet<String>> {
        match self {
            Collection::TagList(tags) => Some(tags),
            _ => None,
        }
    }

    pub fn as_paged_posts(&self) -> Option<&[Page<'a>]> {
        match self {
            Collection::PagedPosts(pages) => Some(pages),
            _ => None,
        }
    }

    pub fn as_paged_posts_by_tag(&self) -> Option<&BTreeMap<String, Vec<Page<'a>>>> {
        match self {
            Collection::PagedPostsByTag(map) => Some(map),
            _ => None,
        }
    }

    /// Short human description for build logs
    fn summary(&self) -> String {
        match self {
            Collection::Posts(posts) => format!("{} posts", posts.len()),
            Collection::TagList(tags) => format!("{} tags", tags.len()),
            Collection::PagedPosts(pages) => format!("{} pages", pages.len()),
            Collection::PagedPostsByTag(map) => {
                let pages: usize = map.values().map(Vec::len).sum();
                format!("{} tags, {} pages", map.len(), pages)
            }
        }
    }
}

// ============================================================================
// Collection Registry
// ============================================================================

/// A collection builder: read-only items plus config in, collection out.
pub type BuilderFn = for<'a> fn(&'a [ContentItem], &SiteConfig) -> Result<Collection<'a>>;

/// Maps collection names to builder functions.
///
/// `standard()` registers the four built-in collections under their
/// template-facing names; `register` adds or replaces entries. Build
/// order and `build_all` output order follow the sorted name order.
pub struct CollectionRegistry {
    builders: BTreeMap<String, BuilderFn>,
}

impl CollectionRegistry {
    /// Registry with the built-in collections registered
    pub fn standard() -> Self {
        let mut registry = Self {
            builders: BTreeMap::new(),
        };
        registry.register("posts", build_posts);
        registry.register("tagList", build_tag_list);
        registry.register("pagedPosts", build_paged_posts);
        registry.register("pagedPostsByTag", build_paged_posts_by_tag);
        registry
    }

    /// Add or replace a named builder
    pub fn register(&mut self, name: impl Into<String>, builder: BuilderFn) {
        self.builders.insert(name.into(), builder);
    }

    /// Registered collection names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    /// Build one collection by name
    pub fn build<'a>(
        &self,
        name: &str,
        items: &'a [ContentItem],
        config: &SiteConfig,
    ) -> Result<Collection<'a>> {
        let Some(builder) = self.builders.get(name) else {
            bail!("unknown collection `{name}`");
        };
        builder(items, config)
    }

    /// Build every registered collection.
    ///
    /// Sequential single pass; the first builder failure aborts the build.
    pub fn build_all<'a>(
        &self,
        items: &'a [ContentItem],
        config: &SiteConfig,
    ) -> Result<BTreeMap<String, Collection<'a>>> {
        let mut collections = BTreeMap::new();
        for (name, builder) in &self.builders {
            let collection = builder(items, config)?;
            log!("collect"; "{name}: {}", collection.summary());
            collections.insert(name.clone(), collection);
        }
        Ok(collections)
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Built-in Builders
// ============================================================================

fn build_posts<'a>(items: &'a [ContentItem], _config: &SiteConfig) -> Result<Collection<'a>> {
    Ok(Collection::Posts(posts::posts(items)))
}

fn build_tag_list<'a>(items: &'a [ContentItem], _config: &SiteConfig) -> Result<Collection<'a>> {
    let posts = posts::posts(items);
    Ok(Collection::TagList(tags::tag_list(&posts)))
}

fn build_paged_posts<'a>(items: &'a [ContentItem], config: &SiteConfig) -> Result<Collection<'a>> {
    let posts = posts::posts(items);
    Ok(Collection::PagedPosts(paged::paged_posts(
        &posts,
        config.page_size()?,
    )))
}

fn build_paged_posts_by_tag<'a>(
    items: &'a [ContentItem],
    config: &SiteConfig,
) -> Result<Collection<'a>> {
    let posts = posts::posts(items);
    let tags = tags::tag_list(&posts);
    Ok(Collection::PagedPostsByTag(paged::paged_posts_by_tag(
        &posts,
        &tags,
        config.page_size()?,
    )))
}

// ============================================================================
// Tests
// ============================================================================
