//! Watch the save folder and back up on every save

use crate::settings::Settings;
use crate::{shutdown, util};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing::info;
use watcher::WatchLoop;

pub async fn run(path: Option<PathBuf>, settings: &Settings) -> Result<()> {
    println!("{}", "Ark save file backup".bold());
    println!("-----------------------");

    let config = util::watch_config(path, settings).await?;

    println!("Start watching:");
    for name in config.watched_files() {
        println!("- {}", name);
    }
    println!(
        "{} {}",
        "Backups go to".dimmed(),
        config.backup_root().display().dimmed()
    );

    let handle = watcher::spawn(WatchLoop::new(config))?;
    let subscription = handle.subscription();
    let mut worker = tokio::task::spawn_blocking(move || handle.join());

    let joined = tokio::select! {
        joined = &mut worker => joined,
        _ = shutdown::wait_for_signal() => {
            subscription.close();
            worker.await
        }
    };

    // A failed backup is returned as is; main reports it
    let summary = joined.context("Watch loop task failed")??;

    info!("Stopped watching");
    println!(
        "{} {} events, {} backups",
        "Stopped.".yellow(),
        summary.events_seen,
        summary.backups_taken
    );

    Ok(())
}
