use crate::cli::SearchArgs;
use crate::config::models::AppConfig;
use crate::error::Result;
use crate::output::SearchRecord;
use sphinxdex::engine::config::SearchOptions;
use sphinxdex::engine::index::SearchIndex;
use sphinxdex::workflows::search;
use tracing::info;

pub fn run(args: SearchArgs, config: &AppConfig) -> Result<()> {
    let index = super::load_index(config)?;
    let records = records(&index, &args, config);
    info!("Search returned {} result(s).", records.len());
    super::emit(&records, config)
}

fn options(args: &SearchArgs, config: &AppConfig) -> SearchOptions {
    let mut options = config.search.clone();
    if args.no_objects {
        options.include_objects = false;
    }
    if args.no_titles {
        options.include_titles = false;
    }
    if args.typeahead {
        options.prefix_last_word = true;
    }
    options
}

fn records(index: &SearchIndex, args: &SearchArgs, config: &AppConfig) -> Vec<SearchRecord> {
    let query = args.words.join(" ");
    let results = search::run(index, &query, &options(args, config));
    SearchRecord::from_results(&results, &config.file_suffix)
}
