use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::locations;
use crate::utils::parser;
use sphinxdex::engine::config::SearchOptionsBuilder;
use std::path::PathBuf;
use tracing::debug;

pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => match locations::default_config_file() {
            Some(path) if path.is_file() => {
                debug!("Using default configuration file: {:?}", path);
                FileConfig::from_file(&path)?
            }
            _ => FileConfig::default(),
        },
    };
    merge_with_cli(file_config, cli)
}

/// Resolves every setting as CLI flag, then `--set`, then config file, then default.
pub fn merge_with_cli(file_config: FileConfig, cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = apply_set_values(file_config, &cli.set_values)?;

    let index_file = file_config.index.take().unwrap_or_default();
    let index_path = cli
        .index
        .clone()
        .or(index_file.path)
        .unwrap_or_else(|| PathBuf::from(&defaults.index_path));
    let file_suffix = index_file.file_suffix.unwrap_or(defaults.file_suffix);

    let output_file = file_config.output.take().unwrap_or_default();
    let format = match (cli.format, output_file.format) {
        (Some(format), _) => format,
        (None, Some(name)) => {
            parser::parse_output_format(&name).map_err(|e| CliError::Config(e.to_string()))?
        }
        (None, None) => defaults.format,
    };
    let limit = cli.limit.or(output_file.limit).or(defaults.limit);

    let search_file = file_config.search.take().unwrap_or_default();
    let mut builder = SearchOptionsBuilder::new()
        .include_objects(
            search_file
                .include_objects
                .unwrap_or(defaults.include_objects),
        )
        .include_titles(search_file.include_titles.unwrap_or(defaults.include_titles))
        .prefix_last_word(search_file.typeahead.unwrap_or(defaults.typeahead));
    if let Some(limit) = limit {
        builder = builder.limit(limit);
    }
    let search = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(
        "Resolved configuration: index={:?}, format={:?}, limit={:?}",
        index_path, format, limit
    );

    Ok(AppConfig {
        index_path,
        file_suffix,
        format,
        limit,
        search,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let invalid = |e: parser::ParseError| CliError::Config(e.to_string());

        match key {
            "index.path" => {
                config.index.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value));
            }
            "index.file-suffix" => {
                config.index.get_or_insert_with(Default::default).file_suffix =
                    Some(value.to_string());
            }
            "output.format" => {
                parser::parse_output_format(value).map_err(invalid)?;
                config.output.get_or_insert_with(Default::default).format =
                    Some(value.to_string());
            }
            "output.limit" => {
                config.output.get_or_insert_with(Default::default).limit =
                    Some(parser::parse_usize(key, value).map_err(invalid)?);
            }
            "search.include-objects" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .include_objects = Some(parser::parse_bool(key, value).map_err(invalid)?);
            }
            "search.include-titles" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .include_titles = Some(parser::parse_bool(key, value).map_err(invalid)?);
            }
            "search.typeahead" => {
                config.search.get_or_insert_with(Default::default).typeahead =
                    Some(parser::parse_bool(key, value).map_err(invalid)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
