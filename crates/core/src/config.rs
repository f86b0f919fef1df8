//! Process-wide watch configuration
//!
//! The watched file names and the backup folder name are fixed for the
//! lifetime of the process. They are bundled with the validated source
//! directory into a single immutable [`WatchConfig`] that every component
//! receives, so tests can point it at a temporary directory.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Save files that are backed up together
pub const WATCHED_FILES: [&str; 3] = [
    "TheIsland.ark",
    "LocalPlayer.arkprofile",
    "PlayerLocalData.arkprofile",
];

/// Folder inside the source directory holding all snapshots
pub const BACKUP_FOLDER: &str = "ark_savefile_backups";

/// Snapshot folder name format (minute resolution, local time)
pub const SNAPSHOT_FORMAT: &str = "%Y-%m-%d_%H:%M";

/// Immutable configuration shared by the filter, writer and watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Directory containing the save files (trailing separators removed)
    source_dir: PathBuf,

    /// Watched file names, in backup order
    watched_files: Vec<String>,

    /// Snapshot root folder name, relative to `source_dir`
    backup_folder: String,
}

impl WatchConfig {
    /// Build a configuration for `source_dir` with the default file set
    ///
    /// Fails if the directory does not exist at this moment. Existence is
    /// not re-checked later.
    pub fn new(source_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source_dir = source_dir.as_ref();

        if !source_dir.exists() {
            return Err(ConfigError::NotFound(source_dir.to_path_buf()));
        }
        if !source_dir.is_dir() {
            return Err(ConfigError::NotADirectory(source_dir.to_path_buf()));
        }

        Ok(Self {
            source_dir: trim_trailing_separators(source_dir),
            watched_files: WATCHED_FILES.iter().map(|s| s.to_string()).collect(),
            backup_folder: BACKUP_FOLDER.to_string(),
        })
    }

    /// Replace the watched file set
    pub fn with_watched_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.watched_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Directory being watched and read from
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Watched file names in backup order
    pub fn watched_files(&self) -> &[String] {
        &self.watched_files
    }

    /// `<source>/ark_savefile_backups`
    pub fn backup_root(&self) -> PathBuf {
        self.source_dir.join(&self.backup_folder)
    }

    /// Full path of a watched file inside the source directory
    pub fn source_file(&self, name: &str) -> PathBuf {
        self.source_dir.join(name)
    }
}

/// Strip trailing path separators, keeping a bare root intact
///
/// Rebuilding from components works on the raw OS string, so non UTF-8
/// folder names are handled too. Doubled separators collapse as a side
/// effect.
fn trim_trailing_separators(path: &Path) -> PathBuf {
    let rebuilt: PathBuf = path.components().collect();
    if rebuilt.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        rebuilt
    }
}
