//! Snapshot writer
//!
//! A backup always copies **every** watched file, no matter which one
//! triggered it. The save files reference each other, so a snapshot holding
//! only the changed file would not be restorable on its own.
//!
//! Layout produced:
//! ```text
//! <source>/
//!   ark_savefile_backups/
//!     2024-05-01_21:37/
//!       TheIsland.ark
//!       LocalPlayer.arkprofile
//!       PlayerLocalData.arkprofile
//! ```
//!
//! Snapshot folders have minute resolution. Backups taken within the same
//! minute land in the same folder and overwrite each other's copies.

use crate::config::{WatchConfig, SNAPSHOT_FORMAT};
use crate::error::BackupError;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a single backup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Snapshot folder the copies were written to
    pub snapshot_dir: PathBuf,
    /// Files copied, in watch order
    pub copied: Vec<String>,
    /// Files that did not exist and were skipped
    pub skipped: Vec<String>,
    /// Total bytes written
    pub bytes_copied: u64,
}

impl BackupReport {
    /// True when every watched file was copied
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Copies the watched file set into timestamped snapshot folders
#[derive(Debug, Clone)]
pub struct BackupWriter {
    config: WatchConfig,
}

impl BackupWriter {
    pub fn new(config: WatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Back up all watched files into the snapshot for the current minute
    pub fn backup(&self) -> Result<BackupReport, BackupError> {
        self.backup_at(Local::now())
    }

    /// Back up all watched files into the snapshot named after `at`
    ///
    /// Missing source files are logged and skipped. Any folder creation,
    /// read or write failure aborts the run; files already copied stay in
    /// place and a partially written copy may remain.
    pub fn backup_at<Tz>(&self, at: DateTime<Tz>) -> Result<BackupReport, BackupError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let backup_root = self.config.backup_root();
        ensure_folder(&backup_root)?;

        let snapshot_dir = backup_root.join(snapshot_name(&at));
        ensure_folder(&snapshot_dir)?;

        info!("Creating backup in {}", snapshot_dir.display());

        let mut report = BackupReport {
            snapshot_dir,
            copied: Vec::new(),
            skipped: Vec::new(),
            bytes_copied: 0,
        };

        for name in self.config.watched_files() {
            let source = self.config.source_file(name);

            // Only a definite "not there" is a skip; stat errors fall through
            // to the read below and fail it
            if let Ok(false) = source.try_exists() {
                warn!("Save file could not be found, skipping: {}", name);
                report.skipped.push(name.clone());
                continue;
            }

            let destination = report.snapshot_dir.join(name);
            let bytes = copy_file(&source, &destination)?;
            debug!("Copied {} ({} bytes)", name, bytes);

            report.copied.push(name.clone());
            report.bytes_copied += bytes;
        }

        info!(
            "Backup finished: {} copied, {} skipped",
            report.copied.len(),
            report.skipped.len()
        );

        Ok(report)
    }
}

/// Folder name for a snapshot taken at `at`
pub fn snapshot_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(SNAPSHOT_FORMAT).to_string()
}

/// Create `path` and its parents if missing
fn ensure_folder(path: &Path) -> Result<(), BackupError> {
    fs::create_dir_all(path).map_err(|source| BackupError::CreateFolder {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `source` fully, then write it to a freshly created `destination`
fn copy_file(source: &Path, destination: &Path) -> Result<u64, BackupError> {
    let contents = fs::read(source).map_err(|e| BackupError::ReadSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let write_err = |e: std::io::Error| BackupError::WriteCopy {
        path: destination.to_path_buf(),
        source: e,
    };

    let mut file = File::create(destination).map_err(write_err)?;
    file.write_all(&contents).map_err(write_err)?;

    Ok(contents.len() as u64)
}
