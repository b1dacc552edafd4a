//! Roomtone CLI - acoustic diagnostics for audio files.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roomtone")]
#[command(author, version, about = "Band energy, resonance and RT60 analysis", long_about = None)]
struct Cli {
    /// Settings file (defaults to the user config file when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show duration, sample rate and format of a WAV file
    Info(commands::info::InfoArgs),

    /// Report band energy, resonance peak and RT60
    Analyze(commands::analyze::AnalyzeArgs),

    /// Shorten reverberation toward a target RT60
    Compensate(commands::compensate::CompensateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = roomtone_config::Settings::resolve(cli.config.as_deref())?;
    tracing::debug!(?settings, "settings resolved");

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Analyze(args) => commands::analyze::run(args, &settings),
        Commands::Compensate(args) => commands::compensate::run(args, &settings),
    }
}
