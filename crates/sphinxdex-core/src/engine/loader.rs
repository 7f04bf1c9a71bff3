use super::error::{IndexError, MalformedIndexError};
use super::index::SearchIndex;
use crate::core::io::searchindex::{self, JsonFile, SetIndexFile};
use crate::core::io::traits::IndexFile;
use std::path::Path;
use tracing::{debug, info};

/// On-disk encodings an index can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    SetIndex, // `Search.setIndex({...})`, as Sphinx writes it
    Json,
}

/// Parses and validates a serialized index.
///
/// # Errors
///
/// Returns [`MalformedIndexError`] if required fields (`docnames`, `terms`) are absent, if
/// any field has the wrong shape, or if cross-references are dangling.
pub fn load(raw: &str) -> Result<SearchIndex, MalformedIndexError> {
    let raw = searchindex::parse_str(raw)?;
    SearchIndex::from_raw(raw)
}

/// Reads, parses and validates the index stored at `path`.
///
/// # Errors
///
/// Returns [`IndexError::Io`] if the file cannot be read and [`IndexError::Malformed`] if
/// its content is not a well-formed index.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<SearchIndex, IndexError> {
    let path = path.as_ref();
    debug!("Reading search index from {:?}", path);
    let raw = SetIndexFile::read_from_path(path).map_err(|e| IndexError::from_format(path, e))?;
    let index = SearchIndex::from_raw(raw)?;
    info!(
        "Loaded search index from {:?} ({} documents, {} terms).",
        path,
        index.documents().len(),
        index.term_index().len()
    );
    Ok(index)
}

/// Serializes `index` to a string in the requested encoding.
///
/// # Errors
///
/// Returns [`IndexError::Serialize`] if JSON serialization fails.
pub fn serialize(index: &SearchIndex, encoding: Encoding) -> Result<String, IndexError> {
    let raw = index.to_raw();
    let text = match encoding {
        Encoding::SetIndex => searchindex::to_js_string(&raw)?,
        Encoding::Json => serde_json::to_string_pretty(&raw)?,
    };
    Ok(text)
}

/// Writes `index` to `path` in the requested encoding, replacing any existing file.
///
/// # Errors
///
/// Returns [`IndexError::Io`] if the file cannot be written.
pub fn save_path<P: AsRef<Path>>(
    index: &SearchIndex,
    path: P,
    encoding: Encoding,
) -> Result<(), IndexError> {
    let path = path.as_ref();
    let raw = index.to_raw();
    let result = match encoding {
        Encoding::SetIndex => SetIndexFile::write_to_path(&raw, path),
        Encoding::Json => JsonFile::write_to_path(&raw, path),
    };
    result.map_err(|e| IndexError::from_format(path, e))?;
    debug!("Wrote search index to {:?} as {:?}.", path, encoding);
    Ok(())
}
