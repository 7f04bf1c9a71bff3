use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: &'static str,
    },
}

/// Controls how a multi-word search combines term, title and object matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub include_objects: bool,
    pub include_titles: bool,
    pub prefix_last_word: bool, // Typeahead: match the last word as a prefix
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_objects: true,
            include_titles: true,
            prefix_last_word: false,
            limit: None,
        }
    }
}

#[derive(Default)]
pub struct SearchOptionsBuilder {
    include_objects: Option<bool>,
    include_titles: Option<bool>,
    prefix_last_word: Option<bool>,
    limit: Option<usize>,
}

impl SearchOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_objects(mut self, include: bool) -> Self {
        self.include_objects = Some(include);
        self
    }

    pub fn include_titles(mut self, include: bool) -> Self {
        self.include_titles = Some(include);
        self
    }

    pub fn prefix_last_word(mut self, prefix: bool) -> Self {
        self.prefix_last_word = Some(prefix);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<SearchOptions, ConfigError> {
        if self.limit == Some(0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "limit",
                reason: "must be at least 1",
            });
        }
        let defaults = SearchOptions::default();
        Ok(SearchOptions {
            include_objects: self.include_objects.unwrap_or(defaults.include_objects),
            include_titles: self.include_titles.unwrap_or(defaults.include_titles),
            prefix_last_word: self.prefix_last_word.unwrap_or(defaults.prefix_last_word),
            limit: self.limit,
        })
    }
}
