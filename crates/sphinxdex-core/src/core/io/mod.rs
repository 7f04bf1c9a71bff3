//! Provides input/output functionality for Sphinx search index artifacts.
//!
//! Sphinx writes its index as a JavaScript call, `Search.setIndex({...})`, whose argument is
//! an object literal that may use unquoted keys. This module unwraps and normalizes that
//! literal, maps it onto a serde model of the on-disk layout, and writes it back out either
//! in the same JavaScript form or as plain JSON.

pub mod error;
pub mod literal;
pub mod raw;
pub mod searchindex;
pub mod traits;
