use std::io;
use thiserror::Error;

/// The serialized index is structurally unusable. Fatal; there is no recovery path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedIndexError {
    #[error("Expected a `Search.setIndex(...)` call or a bare object literal")]
    InvalidWrapper,
    #[error("Index literal is not valid JSON after key normalization: {0}")]
    Syntax(String),
    #[error("Top-level value must be an object")]
    NotAnObject,
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Field '{field}' has the wrong shape: {message}")]
    WrongShape { field: &'static str, message: String },
    #[error("Field '{field}' has {found} entries but there are {expected} documents")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Entry '{key}' in '{table}' references document {doc}, but only {len} documents exist")]
    DanglingDocument {
        table: &'static str,
        key: String,
        doc: usize,
        len: usize,
    },
    #[error("Object '{object}' references unknown object type code {code}")]
    UnknownObjectType { object: String, code: u32 },
    #[error("Object '{object}' has invalid priority {value}")]
    InvalidPriority { object: String, value: i64 },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed search index: {0}")]
    Malformed(#[from] MalformedIndexError),
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
