use super::builder::IndexBuilder;
use super::error::MalformedIndexError;
use crate::core::io::raw::{RawDocIds, RawNamedEntry, RawObjectGroup, RawObjectName, RawSearchIndex};
use crate::core::models::{
    document::DocumentSet,
    env::EnvVersion,
    ids::DocId,
    object::{ObjectEntry, ObjectType, ObjectTypeTable, Priority},
    term::TermIndex,
};
use std::collections::{BTreeMap, BTreeSet};

/// A loaded, validated and immutable documentation search index.
///
/// Holds the document set, the raw text and title term tables, the documented objects and
/// the derived [`TermIndex`] that queries run against. All reads are side-effect free, so a
/// shared reference can be handed to any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub(crate) documents: DocumentSet,
    pub(crate) env: EnvVersion,
    pub(crate) object_types: ObjectTypeTable,
    pub(crate) objects: Vec<ObjectEntry>,
    pub(crate) body_terms: BTreeMap<String, BTreeSet<DocId>>,
    pub(crate) title_terms: BTreeMap<String, BTreeSet<DocId>>,
    pub(crate) terms: TermIndex,
}

impl SearchIndex {
    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn env_version(&self) -> &EnvVersion {
        &self.env
    }

    pub fn object_types(&self) -> &ObjectTypeTable {
        &self.object_types
    }

    pub fn objects(&self) -> &[ObjectEntry] {
        &self.objects
    }

    pub fn term_index(&self) -> &TermIndex {
        &self.terms
    }

    pub fn body_term_count(&self) -> usize {
        self.body_terms.len()
    }

    pub fn title_term_count(&self) -> usize {
        self.title_terms.len()
    }

    /// Builds an index from the parsed on-disk layout.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedIndexError`] if `titles` or `filenames` disagree in length with
    /// `docnames`, if an object priority is out of range, or if any cross-reference is
    /// dangling (see [`IndexBuilder::build`]).
    pub fn from_raw(raw: RawSearchIndex) -> Result<Self, MalformedIndexError> {
        let expected = raw.docnames.len();
        for (field, found) in [("titles", raw.titles.len()), ("filenames", raw.filenames.len())] {
            if found != expected {
                return Err(MalformedIndexError::LengthMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }

        let mut builder = IndexBuilder::new();
        for ((name, title), filename) in raw.docnames.iter().zip(&raw.titles).zip(&raw.filenames) {
            builder.add_document(name, title, filename);
        }
        for (domain, version) in &raw.envversion {
            builder.env_version(domain, *version);
        }

        let codes: BTreeSet<u32> = raw
            .objtypes
            .keys()
            .chain(raw.objnames.keys())
            .copied()
            .collect();
        for code in codes {
            builder.add_object_type(code, object_type_for(code, &raw));
        }

        for (prefix, group) in &raw.objects {
            for entry in group.entries() {
                let priority = Priority::try_from(entry.priority).map_err(|e| {
                    MalformedIndexError::InvalidPriority {
                        object: join_name(prefix, entry.name),
                        value: e.0,
                    }
                })?;
                builder.add_object(
                    DocId(entry.doc),
                    prefix,
                    entry.name,
                    entry.type_code,
                    priority,
                    entry.anchor,
                );
            }
        }

        for (term, docs) in &raw.terms {
            for &doc in docs.ids() {
                builder.add_body_term(term, DocId(doc));
            }
        }
        for (term, docs) in &raw.titleterms {
            for &doc in docs.ids() {
                builder.add_title_term(term, DocId(doc));
            }
        }

        builder.build()
    }

    /// Converts back to the on-disk layout. Objects are always written in the map layout.
    pub fn to_raw(&self) -> RawSearchIndex {
        let mut raw = RawSearchIndex::default();

        for (_, doc) in self.documents.iter() {
            raw.docnames.push(doc.name.clone());
            raw.titles.push(doc.title.clone());
            raw.filenames.push(doc.filename.clone());
        }
        raw.envversion = self
            .env
            .iter()
            .map(|(domain, version)| (domain.to_string(), version))
            .collect();

        for (code, ty) in self.object_types.iter() {
            raw.objtypes.insert(code, ty.qualified_role());
            raw.objnames.insert(
                code,
                RawObjectName(ty.domain.clone(), ty.role.clone(), ty.display_name.clone()),
            );
        }

        let mut groups: BTreeMap<String, BTreeMap<String, RawNamedEntry>> = BTreeMap::new();
        for entry in &self.objects {
            let symbol = &entry.symbol;
            groups.entry(symbol.prefix.clone()).or_default().insert(
                symbol.name.clone(),
                RawNamedEntry(
                    entry.doc.index(),
                    symbol.type_code,
                    symbol.priority.as_i64(),
                    symbol.anchor.clone(),
                ),
            );
        }
        raw.objects = groups
            .into_iter()
            .map(|(prefix, entries)| (prefix, RawObjectGroup::Named(entries)))
            .collect();

        raw.terms = to_raw_terms(&self.body_terms);
        raw.titleterms = to_raw_terms(&self.title_terms);
        raw
    }
}

fn object_type_for(code: u32, raw: &RawSearchIndex) -> ObjectType {
    if let Some(RawObjectName(domain, role, display_name)) = raw.objnames.get(&code) {
        return ObjectType::new(domain, role, display_name);
    }
    let qualified = raw.objtypes.get(&code).map(String::as_str).unwrap_or("");
    let (domain, role) = qualified.split_once(':').unwrap_or(("", qualified));
    ObjectType::new(domain, role, qualified)
}

fn join_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn to_raw_terms(terms: &BTreeMap<String, BTreeSet<DocId>>) -> BTreeMap<String, RawDocIds> {
    terms
        .iter()
        .map(|(term, docs)| {
            let ids = docs.iter().map(|doc| doc.index()).collect();
            (term.clone(), RawDocIds::from_ids(ids))
        })
        .collect()
}
