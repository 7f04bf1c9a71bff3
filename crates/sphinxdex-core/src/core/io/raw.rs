//! Serde model of the on-disk `searchindex.js` layout.
//!
//! Field names and value shapes follow what Sphinx writes. The struct only derives
//! `Serialize`; reading goes through [`super::searchindex::parse_str`], which checks each
//! field individually so errors can name the offending field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawSearchIndex {
    pub docnames: Vec<String>,
    pub envversion: BTreeMap<String, i64>,
    pub filenames: Vec<String>,
    pub objects: BTreeMap<String, RawObjectGroup>,
    pub objnames: BTreeMap<u32, RawObjectName>,
    pub objtypes: BTreeMap<u32, String>,
    pub terms: BTreeMap<String, RawDocIds>,
    pub titles: Vec<String>,
    pub titleterms: BTreeMap<String, RawDocIds>,
}

/// `[domain, role, display name]`, e.g. `["py", "function", "Python function"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObjectName(pub String, pub String, pub String);

/// The objects recorded under one namespace prefix.
///
/// Older Sphinx releases write a map from name to entry; newer ones write a list of entries
/// that carry the name as a fifth element. Both are accepted; the map layout is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawObjectGroup {
    Named(BTreeMap<String, RawNamedEntry>),
    Listed(Vec<RawListedEntry>),
}

/// `[doc, type code, priority, anchor]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNamedEntry(pub usize, pub u32, pub i64, pub String);

/// `[doc, type code, priority, anchor, name]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListedEntry(pub usize, pub u32, pub i64, pub String, pub String);

/// A flattened object entry, independent of the group layout it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObjectEntry<'a> {
    pub name: &'a str,
    pub doc: usize,
    pub type_code: u32,
    pub priority: i64,
    pub anchor: &'a str,
}

impl RawObjectGroup {
    pub fn entries(&self) -> Vec<RawObjectEntry<'_>> {
        match self {
            Self::Named(map) => map
                .iter()
                .map(|(name, RawNamedEntry(doc, type_code, priority, anchor))| {
                    RawObjectEntry {
                        name,
                        doc: *doc,
                        type_code: *type_code,
                        priority: *priority,
                        anchor,
                    }
                })
                .collect(),
            Self::Listed(list) => list
                .iter()
                .map(
                    |RawListedEntry(doc, type_code, priority, anchor, name)| RawObjectEntry {
                        name,
                        doc: *doc,
                        type_code: *type_code,
                        priority: *priority,
                        anchor,
                    },
                )
                .collect(),
        }
    }
}

/// A term's documents: Sphinx writes a bare number when only one document matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDocIds {
    One(usize),
    Many(Vec<usize>),
}

impl RawDocIds {
    pub fn from_ids(mut ids: Vec<usize>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        if ids.len() == 1 {
            Self::One(ids[0])
        } else {
            Self::Many(ids)
        }
    }

    pub fn ids(&self) -> &[usize] {
        match self {
            Self::One(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        }
    }
}
