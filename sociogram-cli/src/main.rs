//! Sociogram CLI - Command-line interface for Sociogram
//!
//! This is the main entry point for users exploring a "who likes whom"
//! relation. It loads the two source files, builds the graph once, then
//! answers queries either through the interactive menu (the default) or as
//! a single --query invocation suitable for scripting.

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "sociogram")]
#[command(author = "Sociogram Contributors")]
#[command(version)]
#[command(about = "Structural queries over a \"who likes whom\" relation", long_about = None)]
struct Cli {
    /// Roster file: whitespace-separated distinct names
    names: PathBuf,

    /// Likes file: per line, a name followed by the names it likes
    likes: PathBuf,

    /// Run a single query and exit instead of opening the menu
    #[arg(short, long, value_enum)]
    query: Option<QueryKind>,

    /// Print the query result as JSON
    #[arg(long, requires = "query")]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// The three queries exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum QueryKind {
    /// Those whom nobody loves
    Isolated,
    /// Those whose love is not answered
    Unrequited,
    /// Those who collected the most likes
    Popular,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.query {
        Some(kind) => commands::run_query(&cli.names, &cli.likes, kind, cli.json),
        None => commands::run_menu(&cli.names, &cli.likes),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
