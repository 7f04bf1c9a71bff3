use super::error::{FormatError, MalformedIndexError};
use super::literal;
use super::raw::RawSearchIndex;
use super::traits::IndexFile;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::io::{Read, Write};

/// Parses the text of a `searchindex.js` file (or an equivalent bare JSON object).
///
/// `docnames` and `terms` are required. Every other table defaults to empty when absent,
/// except `titles` and `filenames`, which fall back to the document names.
///
/// # Errors
///
/// Returns [`MalformedIndexError`] when the wrapper, syntax or any field shape is invalid.
/// Cross-field invariants (lengths, document ids) are checked when the index is built.
pub fn parse_str(source: &str) -> Result<RawSearchIndex, MalformedIndexError> {
    let literal = literal::unwrap_set_index(source)?;
    let json = literal::quote_bare_keys(literal);
    let value: Value =
        serde_json::from_str(&json).map_err(|e| MalformedIndexError::Syntax(e.to_string()))?;
    let Value::Object(mut root) = value else {
        return Err(MalformedIndexError::NotAnObject);
    };

    let docnames: Vec<String> = required(&mut root, "docnames")?;
    let terms = required(&mut root, "terms")?;
    let titles = optional(&mut root, "titles")?.unwrap_or_else(|| docnames.clone());
    let filenames = optional(&mut root, "filenames")?.unwrap_or_else(|| docnames.clone());

    Ok(RawSearchIndex {
        envversion: optional(&mut root, "envversion")?.unwrap_or_default(),
        objects: optional(&mut root, "objects")?.unwrap_or_default(),
        objnames: optional(&mut root, "objnames")?.unwrap_or_default(),
        objtypes: optional(&mut root, "objtypes")?.unwrap_or_default(),
        titleterms: optional(&mut root, "titleterms")?.unwrap_or_default(),
        docnames,
        filenames,
        terms,
        titles,
    })
}

fn optional<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, MalformedIndexError> {
    match root.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| MalformedIndexError::WrongShape {
                field,
                message: e.to_string(),
            }),
    }
}

fn required<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    field: &'static str,
) -> Result<T, MalformedIndexError> {
    optional(root, field)?.ok_or(MalformedIndexError::MissingField(field))
}

/// Renders the index as the JavaScript file Sphinx writes next to `search.html`.
pub fn to_js_string(index: &RawSearchIndex) -> Result<String, serde_json::Error> {
    Ok(format!("Search.setIndex({})", serde_json::to_string(index)?))
}

/// The `searchindex.js` encoding: a `Search.setIndex(...)` call around an object literal.
pub struct SetIndexFile;

impl IndexFile for SetIndexFile {
    type Error = FormatError;

    fn read_from(reader: &mut impl Read) -> Result<RawSearchIndex, Self::Error> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(parse_str(&source)?)
    }

    fn write_to(index: &RawSearchIndex, writer: &mut impl Write) -> Result<(), Self::Error> {
        writer.write_all(to_js_string(index)?.as_bytes())?;
        Ok(())
    }
}

/// Plain JSON encoding of the same layout, for consumers outside a browser.
pub struct JsonFile;

impl IndexFile for JsonFile {
    type Error = FormatError;

    fn read_from(reader: &mut impl Read) -> Result<RawSearchIndex, Self::Error> {
        SetIndexFile::read_from(reader)
    }

    fn write_to(index: &RawSearchIndex, writer: &mut impl Write) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut *writer, index)?;
        writeln!(writer)?;
        Ok(())
    }
}
