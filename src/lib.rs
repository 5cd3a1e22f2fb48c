//! Normalization and enrichment for articles fetched from a WordPress-style
//! content API.
//!
//! This crate is the pure middle stage between an HTTP collaborator (which
//! fetches raw article/tag/category records) and a templating collaborator
//! (which renders the enriched records). It provides:
//!
//! - **Tag stripping**: remove markup from HTML fragments and decode entities
//! - **Article transformation**: attach image/author, reformat dates, and
//!   build truncated excerpts
//! - **URL rewriting**: point legacy admin-host links at the public host
//! - **Tag/category filtering**: id extraction, series detection, and
//!   category whitelisting
//!
//! Records are open JSON mappings ([`serde_json::Value`]) rather than closed
//! structs: the content API attaches fields this crate does not know about,
//! and they must pass through to the renderer unchanged.
//!
//! # Examples
//!
//! ```
//! use blogprep::{strip_tags, transform_article};
//! use serde_json::json;
//!
//! assert_eq!(strip_tags("<p>Hello &amp; welcome</p>"), "Hello & welcome");
//!
//! let mut article = json!({ "date_gmt": "2023-06-09T10:00:00" });
//! transform_article(&mut article, Some("banner.png"), None).unwrap();
//! assert_eq!(article["date"], "9 June 2023");
//! assert_eq!(article["image"], "banner.png");
//! ```
//!
//! All operations are synchronous and free of I/O. [`transform_article`] is
//! the only one that mutates its input; everything else is a pure function.
//! Calls are safe from multiple threads as long as no single article record
//! is shared across concurrent transform calls.

pub mod article;
pub mod html;
pub mod links;
pub mod tags;

pub use article::{transform_article, TransformError, EXCERPT_ELLIPSIS, EXCERPT_LIMIT};
pub use html::strip_tags;
pub use links::rewrite_feed_urls;
pub use tags::{filter_categories, is_in_series, tag_ids, TagError, CATEGORY_WHITELIST};
