//! bettybot CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use bettybot::observability::{self, LogFormat};
use clap::{Parser, Subcommand};
use commands::{BuildCommand, RegistryArgs, WebCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bettybot")]
#[command(version)]
#[command(about = "Render themed template modules into documents", long_about = None)]
struct Cli {
    #[command(flatten)]
    registries: RegistryArgs,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a JSON configuration and print the result
    Build {
        /// Path to the JSON configuration
        config: PathBuf,

        /// Write each file to `<outputDir>/<filename>` instead of printing
        #[arg(long)]
        write: bool,
    },
    /// Start the HTTP server
    Web {
        /// Port to listen on (overrides settings)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    observability::init(format)?;

    let settings = cli.registries.settings()?;

    match cli.command {
        Commands::Build { config, write } => {
            BuildCommand::new(config, write).execute(&settings)?;
        }
        Commands::Web { port } => {
            WebCommand::new(port).execute(settings)?;
        }
    }

    Ok(())
}
