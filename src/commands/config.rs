//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use jobboard_core::config::AppConfig;
use jobboard_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Table => {
                println!("Configuration (file: {})", config_path);
                output::print_kv("API base URL", &config.api.base_url);
                output::print_kv("API timeout", &format!("{}s", config.api.timeout_seconds));
                output::print_kv("Session file", &config.session.storage_path);
                output::print_kv(
                    "Reference cities",
                    &config.search.reference_cities.len().to_string(),
                );
                output::print_kv(
                    "Employment types",
                    &config.search.employment_types.join(", "),
                );
                output::print_kv("Log level", &config.logging.level);
                output::print_kv("Log format", &config.logging.format);
            }
        },
    }

    Ok(())
}
