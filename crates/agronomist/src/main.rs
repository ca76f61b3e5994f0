//! Agronomist - plant disease analysis and crop recommendation.
//!
//! Runs a single disease or crop request from the command line, or serves
//! both flows over HTTP.

mod cli;

use clap::Parser;
use cli::{
    Cli, Commands, build_advisor, handle_crop_command, handle_disease_command,
    handle_serve_command,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Credentials may live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config_path = cli.config.as_deref();
    info!(config_file = ?config_path, "Starting agronomist");

    match cli.command {
        Commands::Disease(args) => {
            let advisor = build_advisor(config_path, args.upload_dir.clone())?;
            handle_disease_command(&advisor, args).await?;
        }
        Commands::Crop(args) => {
            let advisor = build_advisor(config_path, PathBuf::from("."))?;
            handle_crop_command(&advisor, args).await?;
        }
        Commands::Serve(args) => {
            let advisor = build_advisor(config_path, args.upload_dir.clone())?;
            handle_serve_command(advisor, args).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so command output stays clean on stdout.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
