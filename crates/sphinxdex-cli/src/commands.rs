pub mod check_env;
pub mod export;
pub mod info;
pub mod objects;
pub mod prefix;
pub mod query;
pub mod search;

use crate::config::models::AppConfig;
use crate::error::Result;
use crate::output::{self, Record};
use sphinxdex::engine::index::SearchIndex;
use sphinxdex::engine::loader;
use tracing::info;

fn load_index(config: &AppConfig) -> Result<SearchIndex> {
    info!("Loading search index from {:?}", config.index_path);
    Ok(loader::load_path(&config.index_path)?)
}

fn emit<R: Record>(records: &[R], config: &AppConfig) -> Result<()> {
    let text = output::render(records, config.format)?;
    print!("{}", text);
    Ok(())
}

fn take_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}
