use crate::cli::QueryArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::output::DocumentRecord;
use sphinxdex::engine::index::SearchIndex;
use tracing::info;

pub fn run(args: QueryArgs, config: &AppConfig) -> Result<()> {
    let index = super::load_index(config)?;
    let records = records(&index, &args.term, config);
    info!("Term '{}' occurs in {} document(s).", args.term, records.len());
    super::emit(&records, config)
}

fn records(index: &SearchIndex, term: &str, config: &AppConfig) -> Vec<DocumentRecord> {
    super::take_limit(index.query(term), config.limit)
        .iter()
        .map(|doc| DocumentRecord::new(doc, &config.file_suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SAMPLE_INDEX, config_for};
    use sphinxdex::engine::loader::load;
    use std::path::PathBuf;

    #[test]
    fn records_link_each_matching_page() {
        let index = load(SAMPLE_INDEX).unwrap();
        let config = config_for(PathBuf::from("searchindex.js"));

        let hits = records(&index, "GROMPP", &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 0);
        assert_eq!(hits[0].title, "API Reference");
        assert_eq!(hits[0].url, "api.html");

        assert!(records(&index, "missing", &config).is_empty());
    }

    #[test]
    fn records_respect_the_limit() {
        let index = load(SAMPLE_INDEX).unwrap();
        let mut config = config_for(PathBuf::from("searchindex.js"));
        assert_eq!(records(&index, "gromac", &config).len(), 2);

        config.limit = Some(1);
        let records = records(&index, "gromac", &config);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "api");
    }

    #[test]
    fn run_fails_cleanly_for_a_missing_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path().join("searchindex.js"));
        let args = QueryArgs {
            term: "grompp".to_string(),
        };
        assert!(matches!(
            run(args, &config),
            Err(crate::error::CliError::Index(_))
        ));
    }
}
