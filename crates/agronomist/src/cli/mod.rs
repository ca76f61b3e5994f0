//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the agronomist binary.

mod commands;
mod crop;
mod disease;
mod serve;

pub use commands::{Cli, Commands, CropArgs, DiseaseArgs, ServeArgs};
pub use crop::handle_crop_command;
pub use disease::handle_disease_command;
pub use serve::handle_serve_command;

use agronomist::{Advisor, AgronomistResult, GatewayConfig, GeminiClient};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Build the shared advisor: load configuration, fail fast without a key.
pub fn build_advisor(config_path: Option<&Path>, upload_dir: PathBuf) -> AgronomistResult<Advisor> {
    let config = GatewayConfig::from_env(config_path)?;
    let client = GeminiClient::new(config)?;
    Ok(Advisor::new(Arc::new(client), upload_dir))
}
