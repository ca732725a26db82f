//! Command-line front end for the RDoC clinical matching engine.
//!
//! Presentation glue only: loads the taxonomy, drives `rdoc-matching`, and
//! renders results. Contains no matching logic.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rdoc_core::taxonomy::TaxonomyMatrix;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;
mod transcript;

#[derive(Parser)]
#[command(name = "rdoc")]
#[command(version)]
#[command(about = "Map free-text clinical descriptions onto the RDoC taxonomy")]
struct Cli {
    /// Path to the taxonomy matrix JSON file
    #[arg(short, long, global = true, default_value = "rdoc_matrix.json")]
    matrix: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List taxonomy domains and their constructs
    Domains,
    /// Analyze one or more free-text snippets and print findings
    Analyze(commands::analyze::AnalyzeArgs),
    /// Interactive session: accumulate a transcript, re-analyze each turn
    Session,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Taxonomy load failure is fatal at startup, with an operator-facing
    // message naming the file.
    let matrix = TaxonomyMatrix::load_from_path(&cli.matrix)
        .with_context(|| format!("failed to load taxonomy matrix from {}", cli.matrix.display()))?;
    let matrix = Arc::new(matrix);

    match cli.command {
        Commands::Domains => commands::domains::run(&matrix),
        Commands::Analyze(args) => commands::analyze::run(matrix, args),
        Commands::Session => commands::session::run(matrix),
    }
}
