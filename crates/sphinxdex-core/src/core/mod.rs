//! # Core Module
//!
//! Fundamental building blocks for reading Sphinx search indexes.
//!
//! ## Architecture
//!
//! - **Index Representation** ([`models`]) - Documents, postings, object types and
//!   environment versions
//! - **File I/O** ([`io`]) - Reading and writing the `searchindex.js` artifact, including
//!   its JavaScript object-literal wrapper
//! - **Text Handling** ([`utils`]) - Case folding, query splitting and stopwords

pub mod io;
pub mod models;
pub mod utils;
