use crate::output::OutputFormat;

pub struct DefaultsConfig {
    pub index_path: String,
    pub file_suffix: String,
    pub format: OutputFormat,
    pub limit: Option<usize>,
    pub include_objects: bool,
    pub include_titles: bool,
    pub typeahead: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            index_path: "searchindex.js".to_string(),
            file_suffix: ".html".to_string(),
            format: OutputFormat::Plain,
            limit: None,
            include_objects: true,
            include_titles: true,
            typeahead: false,
        }
    }
}
