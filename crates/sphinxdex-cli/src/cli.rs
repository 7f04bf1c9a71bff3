use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "sphinxdex - Query the searchindex.js artifact of a Sphinx documentation build from the command line.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the user configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the search index to query (e.g., _build/html/searchindex.js).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Output format, overriding the config file.
    #[arg(short, long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Maximum number of results to print, overriding the config file.
    #[arg(short = 'n', long, global = true, value_name = "INT")]
    pub limit: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.limit=5
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the pages that contain a term (case-insensitive exact match).
    Query(QueryArgs),
    /// List the pages of every term sharing a prefix, or the terms themselves.
    Prefix(PrefixArgs),
    /// Run a multi-word search the way the documentation search page does.
    Search(SearchArgs),
    /// Find documented objects (modules, functions, classes) by name.
    Objects(ObjectsArgs),
    /// Summarize the index: documents, terms, objects and environment versions.
    Info,
    /// Compare environment versions with another index; fails if they differ.
    CheckEnv(CheckEnvArgs),
    /// Write the loaded index back out, as `Search.setIndex(...)` or plain JSON.
    Export(ExportArgs),
}

/// Arguments for the `query` subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// The term to look up.
    #[arg(value_name = "TERM")]
    pub term: String,
}

/// Arguments for the `prefix` subcommand.
#[derive(Args, Debug)]
pub struct PrefixArgs {
    /// The prefix terms must start with.
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// List matching terms instead of the pages they occur on.
    #[arg(long)]
    pub terms: bool,
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// The words to search for. Stopwords are ignored.
    #[arg(value_name = "WORDS", required = true, num_args(1..))]
    pub words: Vec<String>,

    /// Do not match or report documented objects.
    #[arg(long)]
    pub no_objects: bool,

    /// Do not match page titles.
    #[arg(long)]
    pub no_titles: bool,

    /// Match the last word as a prefix, as a search box does while typing.
    #[arg(long)]
    pub typeahead: bool,
}

/// Arguments for the `objects` subcommand.
#[derive(Args, Debug)]
pub struct ObjectsArgs {
    /// Substring of the full dotted object name (case-insensitive).
    #[arg(value_name = "NEEDLE")]
    pub needle: String,
}

/// Arguments for the `check-env` subcommand.
#[derive(Args, Debug)]
pub struct CheckEnvArgs {
    /// Path to the index to compare against (typically a fresh build).
    #[arg(value_name = "OTHER")]
    pub other: PathBuf,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path of the file to write.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Write plain JSON instead of the `Search.setIndex(...)` wrapper.
    #[arg(long)]
    pub json: bool,
}
