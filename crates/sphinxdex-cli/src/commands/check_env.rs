use crate::cli::CheckEnvArgs;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::output::{EnvChangeRecord, OutputFormat};
use sphinxdex::engine::loader;
use tracing::{info, warn};

pub fn run(args: CheckEnvArgs, config: &AppConfig) -> Result<()> {
    let index = super::load_index(config)?;
    info!("Loading reference index from {:?}", args.other);
    let other = loader::load_path(&args.other)?;

    let changes = index.env_version().diff(other.env_version());
    if changes.is_empty() {
        info!("Environment versions match.");
        if config.format == OutputFormat::Plain {
            println!("Environment versions match.");
        }
        return Ok(());
    }

    let records: Vec<EnvChangeRecord> = changes.iter().map(EnvChangeRecord::from).collect();
    super::emit(&records, config)?;
    warn!(
        "{:?} was built with different environment versions than {:?}.",
        config.index_path, args.other
    );
    Err(CliError::StaleIndex(changes.len()))
}
