//! # sphinxdex Core Library
//!
//! A loader and query engine for the `searchindex.js` artifacts that Sphinx emits next to
//! every HTML documentation build. The artifact is a static, precomputed lookup structure
//! mapping stemmed terms and documented objects to the pages that mention them.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`DocumentSet`, `Posting`,
//!   `EnvVersion`, object types) and the reader/writer for the serialized artifact.
//!
//! - **[`engine`]: The Logic Core.** The immutable `SearchIndex`, its builder, and the
//!   exact-term, prefix and object lookups that answer "which documents mention term T".
//!
//! - **[`workflows`]: The Public API.** Multi-word search combining term, title and object
//!   matches the way a documentation search box does.
//!
//! ```ignore
//! use sphinxdex::engine::loader;
//!
//! let index = loader::load_path("docs/searchindex.js")?;
//! for doc in index.query("grompp") {
//!     println!("{} ({})", doc.title, doc.filename);
//! }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
pub(crate) mod test_utils;
