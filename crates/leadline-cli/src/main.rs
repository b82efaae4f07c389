//! Leadline CLI
//!
//! Entry point for the contact-form and click-tracking relay.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use leadline_cli::commands::{cmd_check, cmd_serve};
use leadline_cli::config_handlers::cmd_config_export;
use leadline_cli::{Args, Command};
use leadline_core::Config;

const DEFAULT_LOG_FILTER: &str = "info,leadline=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Serve { bind, config } => {
            let config = Config::try_from(config).context("invalid configuration")?;
            cmd_serve(config, bind).await?;
        }
        Command::Config { docker_env, config } => {
            let config = Config::try_from(config).context("invalid configuration")?;
            cmd_config_export(&config, docker_env, &mut std::io::stdout().lock())?;
        }
        Command::Check {
            name,
            fax,
            timestamp,
        } => {
            cmd_check(name, fax, timestamp, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { DEFAULT_LOG_FILTER };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}
