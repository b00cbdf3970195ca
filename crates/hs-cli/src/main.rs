//! CLI frontend for the Heldenschmiede character generator.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hs",
    about = "Heldenschmiede — a weighted random character generator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log table loading and every draw to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one random character
    Generate {
        /// Directory containing races.json, classes.json, skills.json, backgrounds.json
        #[arg(short, long, default_value = "data")]
        data: PathBuf,

        /// RNG seed for a reproducible character
        #[arg(short, long)]
        seed: Option<u64>,

        /// Attach a generated description
        #[arg(long)]
        describe: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show the effective weights behind every draw
        #[arg(long)]
        explain: bool,
    },

    /// Validate the tables and report every issue
    Check {
        /// Directory containing the table files
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },

    /// List the entries of one table
    List {
        /// Which table to list
        #[arg(value_enum)]
        table: TableKind,

        /// Directory containing the table files
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableKind {
    Races,
    Classes,
    Skills,
    Backgrounds,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            data,
            seed,
            describe,
            format,
            explain,
        } => commands::generate::run(&data, seed, describe, format, explain),
        Commands::Check { data } => commands::check::run(&data),
        Commands::List { table, data } => commands::list::run(&data, table),
    }
}
