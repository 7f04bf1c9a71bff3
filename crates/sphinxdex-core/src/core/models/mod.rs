//! Data models for a loaded search index.
//!
//! Everything here is plain data: documents and their references, postings recorded
//! against terms, documented objects with their type table, and the per-domain schema
//! versions used for cache invalidation.

pub mod document;
pub mod env;
pub mod ids;
pub mod object;
pub mod posting;
pub mod term;
