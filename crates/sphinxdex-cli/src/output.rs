use crate::error::{CliError, Result};
use clap::ValueEnum;
use serde::Serialize;
use sphinxdex::core::models::document::DocumentRef;
use sphinxdex::core::models::env::EnvChange;
use sphinxdex::engine::query::ObjectHit;
use sphinxdex::workflows::search::SearchResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Csv,
}

/// One printable result row.
///
/// JSON and CSV output go through `Serialize`; plain output uses [`Record::columns`].
pub trait Record: Serialize {
    fn columns(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub id: usize,
    pub name: String,
    pub title: String,
    pub url: String,
}

impl DocumentRecord {
    pub fn new(document: &DocumentRef, file_suffix: &str) -> Self {
        Self {
            id: document.id.index(),
            name: document.name.clone(),
            title: document.title.clone(),
            url: document.page_url(file_suffix, None),
        }
    }
}

impl Record for DocumentRecord {
    fn columns(&self) -> Vec<String> {
        vec![self.title.clone(), self.url.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRecord {
    pub name: String,
    pub kind: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub priority: String,
    pub page: String,
    pub url: String,
}

impl ObjectRecord {
    pub fn new(hit: &ObjectHit, file_suffix: &str) -> Self {
        Self {
            name: hit.name.clone(),
            kind: hit.kind.to_string(),
            type_label: hit.type_label.clone(),
            priority: hit.priority.to_string(),
            page: hit.document.title.clone(),
            url: hit.url(file_suffix),
        }
    }
}

impl Record for ObjectRecord {
    fn columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("({})", self.type_label),
            self.url.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    pub term: String,
    pub documents: usize,
}

impl Record for TermRecord {
    fn columns(&self) -> Vec<String> {
        vec![self.term.clone(), self.documents.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    #[serde(rename = "match")]
    pub matched_by: &'static str, // "object", "title" or "text"
    pub name: String,
    pub title: String,
    pub url: String,
}

impl SearchRecord {
    pub fn from_results(results: &SearchResults, file_suffix: &str) -> Vec<Self> {
        let objects = results.objects.iter().map(|hit| Self {
            matched_by: "object",
            name: hit.name.clone(),
            title: hit.document.title.clone(),
            url: hit.url(file_suffix),
        });
        let documents = results.documents.iter().map(|hit| Self {
            matched_by: if hit.title_match { "title" } else { "text" },
            name: hit.document.name.clone(),
            title: hit.document.title.clone(),
            url: hit.document.page_url(file_suffix, None),
        });
        objects.chain(documents).collect()
    }
}

impl Record for SearchRecord {
    fn columns(&self) -> Vec<String> {
        vec![
            format!("[{}]", self.matched_by),
            self.name.clone(),
            self.url.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    pub field: String,
    pub value: String,
}

impl FieldRecord {
    pub fn new(field: impl Into<String>, value: impl ToString) -> Self {
        Self {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

impl Record for FieldRecord {
    fn columns(&self) -> Vec<String> {
        vec![format!("{}:", self.field), self.value.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvChangeRecord {
    pub change: &'static str,
    pub domain: String,
    pub from: Option<i64>,
    pub to: Option<i64>,
    #[serde(skip)]
    display: String,
}

impl From<&EnvChange> for EnvChangeRecord {
    fn from(change: &EnvChange) -> Self {
        let display = change.to_string();
        match change {
            EnvChange::Added { domain, version } => Self {
                change: "added",
                domain: domain.clone(),
                from: None,
                to: Some(*version),
                display,
            },
            EnvChange::Removed { domain, version } => Self {
                change: "removed",
                domain: domain.clone(),
                from: Some(*version),
                to: None,
                display,
            },
            EnvChange::Changed { domain, from, to } => Self {
                change: "changed",
                domain: domain.clone(),
                from: Some(*from),
                to: Some(*to),
                display,
            },
        }
    }
}

impl Record for EnvChangeRecord {
    fn columns(&self) -> Vec<String> {
        vec![self.display.clone()]
    }
}

/// Renders `records` in the requested format. The result always ends with a newline
/// unless it is empty.
pub fn render<R: Record>(records: &[R], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(records)),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(records)
                .map_err(|e| CliError::Other(e.into()))?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Csv => render_csv(records),
    }
}

fn render_plain<R: Record>(records: &[R]) -> String {
    let rows: Vec<Vec<String>> = records.iter().map(Record::columns).collect();
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn render_csv<R: Record>(records: &[R]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to flush CSV output: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| CliError::Other(e.into()))
}
