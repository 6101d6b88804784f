//! Folio - content collections and pagination for static blog builds.
//!
//! The templating engine owns the files: it parses front matter, renders
//! markdown and writes output. This crate owns what happens in between.
//! It takes the engine's flat list of [`ContentItem`]s plus a validated
//! [`SiteConfig`] and derives the named collections templates iterate
//! over, along with the filter/transform seams external plugins hook
//! into.
//!
//! # Example
//!
//! ```
//! use folio::{CollectionRegistry, ContentItem, SiteConfig};
//!
//! let mut post = ContentItem::new("posts/hello.md");
//! post.date = Some("2024-03-01".into());
//! post.tags = vec!["rust".into()];
//!
//! let config = SiteConfig::default();
//! config.validate().unwrap();
//!
//! let registry = CollectionRegistry::standard();
//! let collections = registry.build_all(std::slice::from_ref(&post), &config).unwrap();
//!
//! let posts = collections["posts"].as_posts().unwrap();
//! assert_eq!(posts[0].item.slug(), "hello");
//! ```

pub mod collections;
pub mod config;
pub mod content;
pub mod logger;
pub mod plugin;
pub mod utils;

pub use collections::{Collection, CollectionRegistry, Page, Post};
pub use config::SiteConfig;
pub use content::ContentItem;
pub use plugin::{Filter, PluginRegistry, Transform};
