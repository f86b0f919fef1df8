//! List existing snapshots

use crate::settings::Settings;
use crate::util;
use anyhow::{Context, Result};
use ark_core::list_snapshots;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub async fn run(path: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let config = util::watch_config(path, settings).await?;
    let snapshots = list_snapshots(&config).with_context(|| {
        format!("Failed to list snapshots in {}", config.backup_root().display())
    })?;

    if snapshots.is_empty() {
        println!("{}", "No backups yet".dimmed());
        return Ok(());
    }

    println!("{}", config.backup_root().display().bold());
    for snapshot in &snapshots {
        let note = if snapshot.taken_at.is_none() {
            " (not a snapshot)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}  {} files{}", snapshot.name.cyan(), snapshot.file_count, note);
    }
    println!("{} snapshots", snapshots.len());

    Ok(())
}
