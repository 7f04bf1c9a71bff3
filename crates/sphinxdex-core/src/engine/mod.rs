//! # Engine Module
//!
//! The stateless logic core: an immutable [`index::SearchIndex`] assembled once by
//! [`builder::IndexBuilder`] (directly or from a parsed artifact) and queried read-only.
//!
//! - [`config`] - Options for multi-word search
//! - [`loader`] - Load from text or files, serialize back out
//! - [`query`] - Exact-term, prefix and object lookups
//! - [`error`] - Error types surfaced to callers

pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod query;
