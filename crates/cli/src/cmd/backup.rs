//! Take one snapshot immediately

use crate::settings::Settings;
use crate::util;
use anyhow::{Context, Result};
use ark_core::BackupWriter;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub async fn run(path: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let config = util::watch_config(path, settings).await?;
    let writer = BackupWriter::new(config);

    let report = writer.backup().context("Backup failed")?;

    println!("{} {}", "✓".green(), report.snapshot_dir.display());
    for name in &report.copied {
        println!("  {} {}", "copied ".cyan(), name);
    }
    for name in &report.skipped {
        println!("  {} {}", "missing".yellow(), name);
    }
    println!(
        "{} copied, {} skipped ({} bytes)",
        report.copied.len(),
        report.skipped.len(),
        report.bytes_copied
    );

    Ok(())
}
