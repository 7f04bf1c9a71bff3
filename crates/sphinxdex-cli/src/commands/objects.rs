use crate::cli::ObjectsArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::output::ObjectRecord;
use sphinxdex::engine::index::SearchIndex;
use tracing::info;

pub fn run(args: ObjectsArgs, config: &AppConfig) -> Result<()> {
    let index = super::load_index(config)?;
    let records = records(&index, &args.needle, config);
    info!("Found {} object(s) matching '{}'.", records.len(), args.needle);
    super::emit(&records, config)
}

fn records(index: &SearchIndex, needle: &str, config: &AppConfig) -> Vec<ObjectRecord> {
    super::take_limit(index.find_objects(needle), config.limit)
        .iter()
        .map(|hit| ObjectRecord::new(hit, &config.file_suffix))
        .collect()
}
