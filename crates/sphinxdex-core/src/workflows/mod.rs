//! # Workflows Module
//!
//! High-level entry points that combine the engine's single-term lookups into the behavior
//! of a documentation search box.
//!
//! - **Search Workflow** ([`search`]) - Multi-word search with stopword removal, AND
//!   semantics across words, object matches grouped ahead of page matches, and optional
//!   typeahead on the last word.

pub mod search;
