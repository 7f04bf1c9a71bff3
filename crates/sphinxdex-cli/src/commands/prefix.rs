use crate::cli::PrefixArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::output::{DocumentRecord, TermRecord};
use sphinxdex::engine::index::SearchIndex;

pub fn run(args: PrefixArgs, config: &AppConfig) -> Result<()> {
    let index = super::load_index(config)?;
    if args.terms {
        super::emit(&term_records(&index, &args.prefix, config), config)
    } else {
        super::emit(&document_records(&index, &args.prefix, config), config)
    }
}

fn document_records(index: &SearchIndex, prefix: &str, config: &AppConfig) -> Vec<DocumentRecord> {
    super::take_limit(index.query_prefix(prefix), config.limit)
        .iter()
        .map(|doc| DocumentRecord::new(doc, &config.file_suffix))
        .collect()
}

fn term_records(index: &SearchIndex, prefix: &str, config: &AppConfig) -> Vec<TermRecord> {
    index
        .terms_with_prefix(prefix, config.limit)
        .into_iter()
        .map(|term| TermRecord {
            term: term.to_string(),
            documents: index.query(term).len(),
        })
        .collect()
}
