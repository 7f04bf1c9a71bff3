use super::ids::DocId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,     // Document name without suffix (e.g., "pyrexMD.gmx")
    pub title: String,    // Display title rendered in search results
    pub filename: String, // Source file the page was built from (e.g., "pyrexMD.gmx.rst")
}

impl Document {
    pub fn new(name: &str, title: &str, filename: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            filename: filename.to_string(),
        }
    }
}

/// Ordered set of documents; a document's position is its [`DocId`].
///
/// Ids are stable for the lifetime of one generated index and are never reused or
/// reassigned, since documents can only be appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<Document>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, document: Document) -> DocId {
        self.documents.push(document);
        DocId(self.documents.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: DocId) -> bool {
        id.index() < self.documents.len()
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &Document)> {
        self.documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (DocId(i), doc))
    }

    pub fn reference(&self, id: DocId) -> Option<DocumentRef> {
        self.get(id).map(|doc| DocumentRef {
            id,
            name: doc.name.clone(),
            title: doc.title.clone(),
            filename: doc.filename.clone(),
        })
    }
}

/// A query result: enough to render one clickable search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRef {
    pub id: DocId,
    pub name: String,
    pub title: String,
    pub filename: String,
}

impl DocumentRef {
    /// Builds the relative page link the way the Sphinx search widget does:
    /// document name, then the HTML file suffix, then an optional `#anchor`.
    pub fn page_url(&self, file_suffix: &str, anchor: Option<&str>) -> String {
        match anchor {
            Some(anchor) if !anchor.is_empty() => {
                format!("{}{}#{}", self.name, file_suffix, anchor)
            }
            _ => format!("{}{}", self.name, file_suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> DocumentSet {
        let mut set = DocumentSet::new();
        set.push(Document::new("pyrexMD.rex", "pyrexMD.rex", "pyrexMD.rex.rst"));
        set.push(Document::new("pyrexMD.gmx", "pyrexMD.gmx", "pyrexMD.gmx.rst"));
        set
    }

    #[test]
    fn push_assigns_sequential_ids() {
        let mut set = DocumentSet::new();
        assert!(set.is_empty());
        let first = set.push(Document::new("a", "A", "a.rst"));
        let second = set.push(Document::new("b", "B", "b.rst"));
        assert_eq!(first, DocId(0));
        assert_eq!(second, DocId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn contains_rejects_ids_past_the_end() {
        let set = sample_set();
        assert!(set.contains(DocId(0)));
        assert!(set.contains(DocId(1)));
        assert!(!set.contains(DocId(2)));
    }

    #[test]
    fn reference_copies_title_and_filename() {
        let set = sample_set();
        let doc_ref = set.reference(DocId(1)).unwrap();
        assert_eq!(doc_ref.id, DocId(1));
        assert_eq!(doc_ref.title, "pyrexMD.gmx");
        assert_eq!(doc_ref.filename, "pyrexMD.gmx.rst");
        assert!(set.reference(DocId(7)).is_none());
    }

    #[test]
    fn page_url_appends_suffix_and_anchor() {
        let doc_ref = sample_set().reference(DocId(1)).unwrap();
        assert_eq!(doc_ref.page_url(".html", None), "pyrexMD.gmx.html");
        assert_eq!(doc_ref.page_url(".html", Some("")), "pyrexMD.gmx.html");
        assert_eq!(
            doc_ref.page_url(".html", Some("pyrexMD.gmx.grompp")),
            "pyrexMD.gmx.html#pyrexMD.gmx.grompp"
        );
    }
}
