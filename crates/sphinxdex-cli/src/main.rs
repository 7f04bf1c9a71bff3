mod cli;
mod commands;
mod config;
mod error;
mod locations;
mod logging;
mod output;
mod utils;

#[cfg(test)]
mod test_utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🔎 sphinxdex CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::builder::build_config(&cli)?;

    let command_result = match cli.command {
        Commands::Query(args) => {
            info!("Dispatching to 'query' command.");
            commands::query::run(args, &app_config)
        }
        Commands::Prefix(args) => {
            info!("Dispatching to 'prefix' command.");
            commands::prefix::run(args, &app_config)
        }
        Commands::Search(args) => {
            info!("Dispatching to 'search' command.");
            commands::search::run(args, &app_config)
        }
        Commands::Objects(args) => {
            info!("Dispatching to 'objects' command.");
            commands::objects::run(args, &app_config)
        }
        Commands::Info => {
            info!("Dispatching to 'info' command.");
            commands::info::run(&app_config)
        }
        Commands::CheckEnv(args) => {
            info!("Dispatching to 'check-env' command.");
            commands::check_env::run(args, &app_config)
        }
        Commands::Export(args) => {
            info!("Dispatching to 'export' command.");
            commands::export::run(args, &app_config)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
