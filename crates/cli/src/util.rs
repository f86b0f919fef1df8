//! Shared helpers for CLI commands

use crate::prompt::PathResolver;
use crate::settings::Settings;
use anyhow::{Context, Result};
use ark_core::WatchConfig;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Work out the save folder
///
/// Precedence: `--path` flag, then `watch.source_dir` from settings, then an
/// interactive prompt on stdin.
pub fn resolve_watch_config(flag: Option<PathBuf>, settings: &Settings) -> Result<WatchConfig> {
    if let Some(path) = flag.or_else(|| settings.watch.source_dir.clone()) {
        let config = WatchConfig::new(&path)
            .with_context(|| format!("Invalid save folder {}", path.display()))?;
        info!("Using save folder {}", config.source_dir().display());
        return Ok(config);
    }

    let stdin = io::stdin();
    PathResolver::new(stdin.lock(), io::stdout()).resolve()
}

/// [`resolve_watch_config`] on the blocking pool
///
/// The prompt reads stdin synchronously and must stay off the runtime
/// threads.
pub async fn watch_config(flag: Option<PathBuf>, settings: &Settings) -> Result<WatchConfig> {
    let settings = settings.clone();
    tokio::task::spawn_blocking(move || resolve_watch_config(flag, &settings))
        .await
        .context("Save folder lookup task failed")?
}
