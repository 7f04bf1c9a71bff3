use super::ids::DocId;
use super::object::SymbolRef;
use serde::Serialize;

/// The index table a posting was recorded from.
///
/// Variants are ordered the way search results are grouped: object matches first,
/// then title matches, then full-text matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Object,
    Title,
    Body,
}

/// A (document, object, type) tuple recorded against a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub doc: DocId,
    pub field: Field,
    pub object: Option<SymbolRef>, // Present only for `Field::Object`
}

impl Posting {
    pub fn body(doc: DocId) -> Self {
        Self {
            doc,
            field: Field::Body,
            object: None,
        }
    }

    pub fn title(doc: DocId) -> Self {
        Self {
            doc,
            field: Field::Title,
            object: None,
        }
    }

    pub fn object(doc: DocId, symbol: SymbolRef) -> Self {
        Self {
            doc,
            field: Field::Object,
            object: Some(symbol),
        }
    }

}
