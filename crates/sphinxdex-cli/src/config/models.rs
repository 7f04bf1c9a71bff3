use crate::output::OutputFormat;
use sphinxdex::engine::config::SearchOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub index_path: PathBuf,
    pub file_suffix: String, // Appended to document names to form page URLs
    pub format: OutputFormat,
    pub limit: Option<usize>,
    pub search: SearchOptions,
}
