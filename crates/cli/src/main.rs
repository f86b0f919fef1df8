//! arkbak CLI - watches Ark save files and keeps timestamped backups

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;
mod logging;
mod prompt;
mod settings;
mod shutdown;
mod util;

/// arkbak - Automatic backups of Ark save files
#[derive(Parser)]
#[command(name = "arkbak")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, global = true, value_parser = settings::LOG_LEVELS)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the save folder and back up on every save (default)
    Watch {
        /// Save folder (prompted for when omitted)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Take a backup right now
    Backup {
        /// Save folder (prompted for when omitted)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// List existing backups
    List {
        /// Save folder (prompted for when omitted)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Show the settings file
    Config {
        /// Only print the settings file location
        #[arg(long)]
        path_only: bool,
        /// Print an example settings file
        #[arg(long)]
        example: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = settings::load()?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| settings.log.level.clone());
    logging::init(&level)?;

    match cli.command.unwrap_or(Commands::Watch { path: None }) {
        Commands::Watch { path } => cmd::watch::run(path, &settings).await,
        Commands::Backup { path } => cmd::backup::run(path, &settings).await,
        Commands::List { path } => cmd::list::run(path, &settings).await,
        Commands::Config { path_only, example } => {
            cmd::config::run(&settings, path_only, example).await
        }
    }
}
