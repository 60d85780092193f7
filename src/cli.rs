//! Envlink CLI: clap definitions and command execution.

use crate::env::Env;
use crate::loader;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Envlink CLI - inspect chained .env files
#[derive(Parser)]
#[command(name = "envlink")]
#[command(about = "Load and inspect chained .env files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Allow chained files to overwrite keys that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a file and print every entry
    Show {
        /// Env source file
        file: PathBuf,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Load a file and print the value of one key
    Get {
        /// Env source file
        file: PathBuf,
        /// Key to look up
        key: String,
    },
    /// Verify that required keys are present and non-empty
    Check {
        /// Env source file
        file: PathBuf,
        /// Comma-separated list of required keys
        #[arg(long, value_delimiter = ',', required = true)]
        require: Vec<String>,
    },
}

/// Execute a parsed command, returning the text to print on stdout.
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Show { file, format } => {
            let env = loader::load(file, cli.overwrite)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            render_entries(&env, format)
        }
        Commands::Get { file, key } => {
            let env = loader::load(file, cli.overwrite)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            Ok(env.get(key))
        }
        Commands::Check { file, require } => {
            let env = loader::load(file, cli.overwrite)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            let required: Vec<&str> = require.iter().map(String::as_str).collect();
            let missing = env.check_required(&required);
            if missing.is_empty() {
                return Ok(format!("All {} required keys are set", require.len()));
            }
            let listing: Vec<String> = missing.iter().map(|k| k.red().to_string()).collect();
            bail!("Missing or empty keys: {}", listing.join(", "));
        }
    }
}

fn render_entries(env: &Env, format: &str) -> anyhow::Result<String> {
    match format {
        "json" => {
            let map: BTreeMap<String, String> = env.entries().into_iter().collect();
            serde_json::to_string_pretty(&map).context("Failed to serialize entries")
        }
        "table" => {
            let mut table = Table::new();
            table.set_header(vec!["Key", "Value"]);
            for (key, value) in env.entries() {
                table.add_row(vec![key, value]);
            }
            Ok(table.to_string())
        }
        other => bail!("Unknown output format: {} (must be 'table' or 'json')", other),
    }
}
