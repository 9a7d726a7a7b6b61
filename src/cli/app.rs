//! Main CLI application structure

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{catalog_cmd, export_cmd};
use crate::export::ExportFormat;

#[derive(Parser)]
#[command(name = "oslex")]
#[command(author, version, about = "Export OSRS Leagues task progress for osleague.tools")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for status messages
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an export from an observed-task feed
    ///
    /// The feed is a JSON array of {"name": ..., "completed": ...}
    /// rows, one per task as shown in the client.
    Export {
        /// Export kind: csv or snippet
        #[arg(value_parser = ExportFormat::from_str)]
        kind: ExportFormat,

        /// Task feed to read; '-' reads from stdin
        #[arg(long, short, default_value = "-")]
        input: String,

        /// Write the result to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Alternate task catalog (same JSON shape as the bundled dataset)
        #[arg(long, env = "OSLEX_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Inspect a task catalog
    #[command(subcommand)]
    Catalog(catalog_cmd::CatalogCommands),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("oslex starting");

    match cli.command {
        Commands::Export {
            kind,
            input,
            output: dest,
            catalog,
        } => export_cmd::run(&output, kind, &input, dest.as_deref(), catalog.as_deref())?,

        Commands::Catalog(cmd) => catalog_cmd::run(cmd, &output)?,
    }

    Ok(())
}
