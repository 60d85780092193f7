//! Envlink CLI Binary
//!
//! Command-line interface for loading and inspecting chained .env files.

use clap::Parser;
use envlink::cli::{self, Cli};
use envlink::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    match cli::execute(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI arguments.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
