use crate::output::OutputFormat;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Unknown output format '{0}'. Expected 'plain', 'json' or 'csv'.")]
    UnknownOutputFormat(String),

    #[error("Invalid boolean value for {key}: '{value}'. Expected 'true' or 'false'.")]
    InvalidBool { key: String, value: String },

    #[error("Invalid integer value for {key}: '{value}'.")]
    InvalidInteger { key: String, value: String },
}

/// Splits `KEY=VALUE` at the first `=`. Both sides are trimmed; the key must be non-empty.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(pair.to_string())),
    }
}

pub fn parse_output_format(s: &str) -> Result<OutputFormat, ParseError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "plain" | "text" => Ok(OutputFormat::Plain),
        "json" => Ok(OutputFormat::Json),
        "csv" => Ok(OutputFormat::Csv),
        _ => Err(ParseError::UnknownOutputFormat(s.to_string())),
    }
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ParseError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

pub fn parse_usize(key: &str, value: &str) -> Result<usize, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
        })
}
