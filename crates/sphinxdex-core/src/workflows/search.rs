use crate::core::models::document::DocumentRef;
use crate::core::models::ids::DocId;
use crate::core::models::object::ObjectEntry;
use crate::core::models::posting::{Field, Posting};
use crate::core::utils::text::{fold, query_words};
use crate::engine::config::SearchOptions;
use crate::engine::index::SearchIndex;
use crate::engine::query::{ObjectHit, sort_object_hits};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHit {
    pub document: DocumentRef,
    pub title_match: bool, // At least one word matched the page title
}

/// Search output, grouped the way the Sphinx search page renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub objects: Vec<ObjectHit>,
    pub documents: Vec<DocumentHit>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.objects.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.documents.is_empty()
    }

    fn truncate(&mut self, limit: usize) {
        self.objects.truncate(limit);
        let remaining = limit - self.objects.len();
        self.documents.truncate(remaining);
    }
}

/// Runs a free-form, multi-word query against `index`.
///
/// The query is split into words, case-folded, and stripped of stopwords. A page matches
/// only when every word matches it as a body term, a title term or an object name. Object
/// hits come first, ordered by priority then name; pages follow, title matches before
/// body-only matches, then by document id.
///
/// An empty or all-stopword query yields empty results.
#[instrument(skip(index, options), name = "search_workflow")]
pub fn run(index: &SearchIndex, query: &str, options: &SearchOptions) -> SearchResults {
    let words = query_words(query);
    if words.is_empty() {
        debug!("Query has no searchable words.");
        return SearchResults::default();
    }

    let objects = if options.include_objects {
        object_hits(index, &words)
    } else {
        Vec::new()
    };
    let documents = document_hits(index, &words, options);

    let mut results = SearchResults { objects, documents };
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }
    debug!(
        "Search matched {} objects and {} documents.",
        results.objects.len(),
        results.documents.len()
    );
    results
}

fn field_enabled(field: Field, options: &SearchOptions) -> bool {
    match field {
        Field::Body => true,
        Field::Title => options.include_titles,
        Field::Object => options.include_objects,
    }
}

fn word_postings<'a>(index: &'a SearchIndex, word: &str, as_prefix: bool) -> Vec<&'a Posting> {
    if as_prefix {
        index.postings_with_prefix(word)
    } else {
        index.postings(word).iter().collect()
    }
}

fn document_hits(index: &SearchIndex, words: &[String], options: &SearchOptions) -> Vec<DocumentHit> {
    let mut matched: Option<BTreeSet<DocId>> = None;
    let mut titled: BTreeSet<DocId> = BTreeSet::new();

    for (i, word) in words.iter().enumerate() {
        let as_prefix = options.prefix_last_word && i + 1 == words.len();
        let mut docs = BTreeSet::new();
        for posting in word_postings(index, word, as_prefix) {
            if !field_enabled(posting.field, options) {
                continue;
            }
            docs.insert(posting.doc);
            if posting.field == Field::Title {
                titled.insert(posting.doc);
            }
        }

        let remaining = match matched {
            Some(previous) => previous.intersection(&docs).copied().collect(),
            None => docs,
        };
        if remaining.is_empty() {
            return Vec::new();
        }
        matched = Some(remaining);
    }

    let mut hits: Vec<DocumentHit> = matched
        .unwrap_or_default()
        .into_iter()
        .filter_map(|doc| {
            index.documents().reference(doc).map(|document| DocumentHit {
                document,
                title_match: titled.contains(&doc),
            })
        })
        .collect();
    hits.sort_by(|a, b| {
        b.title_match
            .cmp(&a.title_match)
            .then_with(|| a.document.id.cmp(&b.document.id))
    });
    hits
}

// An object matches when at least one word occurs in its full name and every other word
// occurs in its full name or in the title of its page.
fn object_hits(index: &SearchIndex, words: &[String]) -> Vec<ObjectHit> {
    let mut titles: BTreeMap<DocId, String> = BTreeMap::new();
    let mut hits: Vec<ObjectHit> = index
        .objects()
        .iter()
        .filter(|entry| !entry.symbol.priority.is_hidden())
        .filter(|entry| object_matches(index, entry, words, &mut titles))
        .filter_map(|entry| index.object_hit(entry))
        .collect();
    sort_object_hits(&mut hits);
    hits
}

fn object_matches(
    index: &SearchIndex,
    entry: &ObjectEntry,
    words: &[String],
    titles: &mut BTreeMap<DocId, String>,
) -> bool {
    let name = fold(&entry.symbol.full_name());
    if !words.iter().any(|word| name.contains(word.as_str())) {
        return false;
    }
    let title = titles.entry(entry.doc).or_insert_with(|| {
        index
            .documents()
            .get(entry.doc)
            .map(|doc| fold(&doc.title))
            .unwrap_or_default()
    });
    words
        .iter()
        .all(|word| name.contains(word.as_str()) || title.contains(word.as_str()))
}
