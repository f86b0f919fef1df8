//! Error types for configuration and backups

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Source directory validation failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Source directory does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Failures while materializing a snapshot
///
/// Any of these aborts the whole backup; missing source files are not errors.
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Failed to create backup folder {}: {source}", .path.display())]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read save file {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write backup copy {}: {source}", .path.display())]
    WriteCopy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
