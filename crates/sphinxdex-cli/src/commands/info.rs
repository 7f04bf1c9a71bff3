use crate::config::models::AppConfig;
use crate::error::Result;
use crate::output::FieldRecord;
use sphinxdex::engine::index::SearchIndex;

pub fn run(config: &AppConfig) -> Result<()> {
    let index = super::load_index(config)?;
    super::emit(&records(&index, config), config)
}

fn records(index: &SearchIndex, config: &AppConfig) -> Vec<FieldRecord> {
    let hidden = index
        .objects()
        .iter()
        .filter(|entry| entry.symbol.priority.is_hidden())
        .count();

    let mut records = vec![
        FieldRecord::new("index", config.index_path.display()),
        FieldRecord::new("documents", index.documents().len()),
        FieldRecord::new("terms", index.term_index().len()),
        FieldRecord::new("body terms", index.body_term_count()),
        FieldRecord::new("title terms", index.title_term_count()),
        FieldRecord::new("objects", index.objects().len()),
        FieldRecord::new("hidden objects", hidden),
        FieldRecord::new("object types", index.object_types().len()),
    ];
    records.extend(
        index
            .env_version()
            .iter()
            .map(|(domain, version)| FieldRecord::new(format!("env {}", domain), version)),
    );
    records
}
