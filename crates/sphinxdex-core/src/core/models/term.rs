use super::posting::Posting;
use crate::core::utils::text::fold;
use std::collections::BTreeMap;

/// Inverted index from case-folded term to the postings recorded against it.
///
/// Keys are kept sorted so that every term sharing a prefix forms one contiguous range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermIndex {
    terms: BTreeMap<String, Vec<Posting>>,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: &str, posting: Posting) {
        let key = fold(term);
        if key.is_empty() {
            return;
        }
        let postings = self.terms.entry(key).or_default();
        if !postings.contains(&posting) {
            postings.push(posting);
        }
    }

    pub fn get(&self, term: &str) -> Option<&[Posting]> {
        self.terms.get(&fold(term)).map(Vec::as_slice)
    }

    /// Iterates all terms starting with `prefix` (case-insensitive), in term order.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        let prefix = fold(prefix);
        self.terms
            .range(prefix.clone()..)
            .take_while(move |(term, _)| term.starts_with(prefix.as_str()))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Posting])> {
        self.terms
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }
}
