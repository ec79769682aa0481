use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use migcheck_config::FileFormat;
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;
use commands::{cmd_check, cmd_init, cmd_schema, cmd_status};

/// migcheck command-line interface.
#[derive(Parser, Debug)]
#[command(name = "migcheck", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize migcheck.json with defaults.
    Init {
        /// Format of the migration history file.
        #[arg(long = "history-format", value_enum, default_value_t = FileFormat::Json)]
        history_format: FileFormat,
    },
    /// Show configuration, migration counts and the current verdict.
    Status,
    /// Run the migration status check. Exits with 1 when migrations drifted.
    Check {
        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write JSON Schemas for migcheck.json, the history file and verdicts.
    Schema {
        /// Output directory for schema files.
        #[arg(short = 'o', long = "out", default_value = "schemas")]
        out: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MIGCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Init { history_format } => cmd_init(history_format)?,
        Commands::Status => cmd_status()?,
        Commands::Check { json } => {
            if !cmd_check(json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Schema { out } => cmd_schema(out)?,
    }
    Ok(ExitCode::SUCCESS)
}
