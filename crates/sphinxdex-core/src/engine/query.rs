use super::index::SearchIndex;
use crate::core::models::{
    document::DocumentRef,
    ids::DocId,
    object::{ObjectEntry, ObjectKind, Priority},
    posting::Posting,
};
use crate::core::utils::text::fold;
use serde::Serialize;
use std::collections::BTreeSet;

/// A documented object matched by name, resolved against its document and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectHit {
    pub name: String,
    pub kind: ObjectKind,
    pub type_label: String, // e.g., "Python function"
    pub priority: Priority,
    pub anchor: String,
    pub document: DocumentRef,
}

impl ObjectHit {
    pub fn url(&self, file_suffix: &str) -> String {
        self.document.page_url(file_suffix, Some(&self.anchor))
    }
}

impl SearchIndex {
    /// Postings recorded against `term` (case-insensitive). Empty for unknown terms.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.terms.get(term).unwrap_or(&[])
    }

    /// Postings of every term starting with `prefix`, in term order.
    pub fn postings_with_prefix(&self, prefix: &str) -> Vec<&Posting> {
        if fold(prefix).is_empty() {
            return Vec::new();
        }
        self.terms
            .with_prefix(prefix)
            .flat_map(|(_, postings)| postings.iter())
            .collect()
    }

    /// Documents mentioning `term`, by case-insensitive exact match.
    ///
    /// Unknown terms yield an empty result. Results are unique and ordered by document id.
    pub fn query(&self, term: &str) -> Vec<DocumentRef> {
        self.references(self.postings(term).iter())
    }

    /// Union of the documents of every term sharing `prefix`, for typeahead search.
    ///
    /// An empty prefix yields an empty result rather than every document.
    pub fn query_prefix(&self, prefix: &str) -> Vec<DocumentRef> {
        self.references(self.postings_with_prefix(prefix).into_iter())
    }

    /// Term keys starting with `prefix`, in order, truncated to `limit` if given.
    pub fn terms_with_prefix(&self, prefix: &str, limit: Option<usize>) -> Vec<&str> {
        if fold(prefix).is_empty() {
            return Vec::new();
        }
        self.terms
            .with_prefix(prefix)
            .map(|(term, _)| term)
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// Objects whose full dotted name contains `needle` (case-insensitive).
    ///
    /// Hidden objects are skipped. Results are ordered by priority, then by name.
    pub fn find_objects(&self, needle: &str) -> Vec<ObjectHit> {
        let needle = fold(needle);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<ObjectHit> = self
            .objects
            .iter()
            .filter(|entry| !entry.symbol.priority.is_hidden())
            .filter(|entry| fold(&entry.symbol.full_name()).contains(&needle))
            .filter_map(|entry| self.object_hit(entry))
            .collect();
        sort_object_hits(&mut hits);
        hits
    }

    /// Resolves an object entry against the document set and type table.
    pub fn object_hit(&self, entry: &ObjectEntry) -> Option<ObjectHit> {
        let document = self.documents.reference(entry.doc)?;
        let object_type = self.object_types.get(entry.symbol.type_code)?;
        Some(ObjectHit {
            name: entry.symbol.full_name(),
            kind: entry.symbol.kind,
            type_label: object_type.display_name.clone(),
            priority: entry.symbol.priority,
            anchor: entry.symbol.resolved_anchor(&object_type.role),
            document,
        })
    }

    pub(crate) fn references<'a>(
        &self,
        postings: impl Iterator<Item = &'a Posting>,
    ) -> Vec<DocumentRef> {
        let docs: BTreeSet<DocId> = postings.map(|posting| posting.doc).collect();
        docs.into_iter()
            .filter_map(|doc| self.documents.reference(doc))
            .collect()
    }
}

pub(crate) fn sort_object_hits(hits: &mut [ObjectHit]) {
    hits.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Documents mentioning `term`; see [`SearchIndex::query`].
pub fn query(index: &SearchIndex, term: &str) -> Vec<DocumentRef> {
    index.query(term)
}

/// Documents of every term sharing `prefix`; see [`SearchIndex::query_prefix`].
pub fn query_prefix(index: &SearchIndex, prefix: &str) -> Vec<DocumentRef> {
    index.query_prefix(prefix)
}
