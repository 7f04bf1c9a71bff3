use super::error::MalformedIndexError;
use super::index::SearchIndex;
use crate::core::models::{
    document::{Document, DocumentSet},
    env::EnvVersion,
    ids::DocId,
    object::{ObjectEntry, ObjectKind, ObjectType, ObjectTypeTable, Priority, SymbolRef},
    posting::Posting,
    term::TermIndex,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Assembles a [`SearchIndex`] once; the result is immutable.
///
/// Entries may be added in any order. Cross-references (document ids, object type codes) are
/// only checked in [`IndexBuilder::build`], so terms can be recorded before the documents or
/// types they point at.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    documents: DocumentSet,
    env: EnvVersion,
    object_types: ObjectTypeTable,
    objects: Vec<ObjectEntry>,
    body_terms: BTreeMap<String, BTreeSet<DocId>>,
    title_terms: BTreeMap<String, BTreeSet<DocId>>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, name: &str, title: &str, filename: &str) -> DocId {
        self.documents.push(Document::new(name, title, filename))
    }

    pub fn env_version(&mut self, domain: &str, version: i64) -> &mut Self {
        self.env.insert(domain, version);
        self
    }

    pub fn add_object_type(&mut self, code: u32, object_type: ObjectType) -> &mut Self {
        self.object_types.insert(code, object_type);
        self
    }

    /// Returns the code for `domain:role`, registering the type if it is new.
    pub fn object_type(&mut self, domain: &str, role: &str, display_name: &str) -> u32 {
        self.object_types.ensure(domain, role, display_name)
    }

    pub fn add_body_term(&mut self, term: &str, doc: DocId) -> &mut Self {
        self.body_terms
            .entry(term.to_string())
            .or_default()
            .insert(doc);
        self
    }

    pub fn add_title_term(&mut self, term: &str, doc: DocId) -> &mut Self {
        self.title_terms
            .entry(term.to_string())
            .or_default()
            .insert(doc);
        self
    }

    pub fn add_object(
        &mut self,
        doc: DocId,
        prefix: &str,
        name: &str,
        type_code: u32,
        priority: Priority,
        anchor: &str,
    ) -> &mut Self {
        self.objects.push(ObjectEntry {
            doc,
            symbol: SymbolRef {
                prefix: prefix.to_string(),
                name: name.to_string(),
                type_code,
                kind: ObjectKind::Other, // resolved against the type table in `build`
                priority,
                anchor: anchor.to_string(),
            },
        });
        self
    }

    /// Validates cross-references and derives the term index.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedIndexError::DanglingDocument`] if any term or object points past
    /// the document list, and [`MalformedIndexError::UnknownObjectType`] if an object uses a
    /// type code missing from the type table.
    pub fn build(mut self) -> Result<SearchIndex, MalformedIndexError> {
        let len = self.documents.len();

        for (table, terms) in [("terms", &self.body_terms), ("titleterms", &self.title_terms)] {
            for (term, docs) in terms {
                if let Some(doc) = docs.iter().find(|doc| !self.documents.contains(**doc)) {
                    return Err(MalformedIndexError::DanglingDocument {
                        table,
                        key: term.clone(),
                        doc: doc.index(),
                        len,
                    });
                }
            }
        }

        for entry in &mut self.objects {
            let symbol = &mut entry.symbol;
            if !self.documents.contains(entry.doc) {
                return Err(MalformedIndexError::DanglingDocument {
                    table: "objects",
                    key: symbol.full_name(),
                    doc: entry.doc.index(),
                    len,
                });
            }
            let object_type = self.object_types.get(symbol.type_code).ok_or_else(|| {
                MalformedIndexError::UnknownObjectType {
                    object: symbol.full_name(),
                    code: symbol.type_code,
                }
            })?;
            symbol.kind = object_type.kind;
        }

        let terms = build_term_index(&self.body_terms, &self.title_terms, &self.objects);
        debug!(
            "Built search index: {} documents, {} terms, {} objects.",
            len,
            terms.len(),
            self.objects.len()
        );

        Ok(SearchIndex {
            documents: self.documents,
            env: self.env,
            object_types: self.object_types,
            objects: self.objects,
            body_terms: self.body_terms,
            title_terms: self.title_terms,
            terms,
        })
    }
}

// Hidden objects stay in the object table but are never reachable through a term.
fn build_term_index(
    body_terms: &BTreeMap<String, BTreeSet<DocId>>,
    title_terms: &BTreeMap<String, BTreeSet<DocId>>,
    objects: &[ObjectEntry],
) -> TermIndex {
    let mut index = TermIndex::new();

    for (term, docs) in body_terms {
        for &doc in docs {
            index.insert(term, Posting::body(doc));
        }
    }
    for (term, docs) in title_terms {
        for &doc in docs {
            index.insert(term, Posting::title(doc));
        }
    }
    for entry in objects.iter().filter(|e| !e.symbol.priority.is_hidden()) {
        let posting = Posting::object(entry.doc, entry.symbol.clone());
        index.insert(entry.symbol.short_name(), posting.clone());
        index.insert(&entry.symbol.full_name(), posting);
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::posting::Field;

    fn two_document_builder() -> IndexBuilder {
        let mut builder = IndexBuilder::new();
        builder.add_document("pyrexMD.rex", "pyrexMD.rex", "pyrexMD.rex.rst");
        builder.add_document("pyrexMD.gmx", "pyrexMD.gmx", "pyrexMD.gmx.rst");
        builder
    }

    #[test]
    fn build_indexes_body_title_and_object_terms() {
        let mut builder = two_document_builder();
        let function = builder.object_type("py", "function", "Python function");
        builder
            .add_body_term("replica", DocId(0))
            .add_title_term("gmx", DocId(1))
            .add_object(DocId(1), "pyrexMD.gmx", "grompp", function, Priority::Default, "");

        let index = builder.build().unwrap();
        let terms = index.term_index();

        assert_eq!(terms.get("replica").unwrap()[0].field, Field::Body);
        assert_eq!(terms.get("gmx").unwrap()[0].field, Field::Title);

        let by_short = terms.get("grompp").unwrap();
        let by_full = terms.get("pyrexmd.gmx.grompp").unwrap();
        assert_eq!(by_short, by_full);
        assert_eq!(
            by_short[0].object.as_ref().map(|symbol| symbol.kind),
            Some(ObjectKind::Function)
        );
        assert_eq!(by_short[0].doc, DocId(1));
    }

    #[test]
    fn build_rejects_terms_pointing_past_the_document_list() {
        let mut builder = two_document_builder();
        builder.add_body_term("gdt", DocId(5));
        assert_eq!(
            builder.build().unwrap_err(),
            MalformedIndexError::DanglingDocument {
                table: "terms",
                key: "gdt".into(),
                doc: 5,
                len: 2
            }
        );

        let mut builder = two_document_builder();
        builder.add_title_term("rex", DocId(2));
        assert!(matches!(
            builder.build(),
            Err(MalformedIndexError::DanglingDocument {
                table: "titleterms",
                ..
            })
        ));
    }

    #[test]
    fn build_rejects_objects_with_unknown_documents_or_types() {
        let mut builder = two_document_builder();
        builder.add_object(DocId(9), "pyrexMD", "gmx", 0, Priority::Important, "-");
        builder.add_object_type(0, ObjectType::new("py", "module", "Python module"));
        assert!(matches!(
            builder.build(),
            Err(MalformedIndexError::DanglingDocument {
                table: "objects",
                doc: 9,
                ..
            })
        ));

        let mut builder = two_document_builder();
        builder.add_object(DocId(1), "pyrexMD.gmx", "grompp", 4, Priority::Default, "");
        assert_eq!(
            builder.build().unwrap_err(),
            MalformedIndexError::UnknownObjectType {
                object: "pyrexMD.gmx.grompp".into(),
                code: 4
            }
        );
    }

    #[test]
    fn hidden_objects_are_kept_but_not_indexed() {
        let mut builder = two_document_builder();
        let function = builder.object_type("py", "function", "Python function");
        builder.add_object(DocId(0), "pyrexMD.rex", "_helper", function, Priority::Hidden, "");

        let index = builder.build().unwrap();
        assert_eq!(index.objects().len(), 1);
        assert!(index.term_index().get("_helper").is_none());
    }

    #[test]
    fn empty_builder_produces_an_empty_index() {
        let index = IndexBuilder::new().build().unwrap();
        assert!(index.documents().is_empty());
        assert!(index.term_index().is_empty());
    }
}
