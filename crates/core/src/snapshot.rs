//! Listing of existing snapshot folders

use crate::config::{WatchConfig, SNAPSHOT_FORMAT};
use chrono::NaiveDateTime;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A snapshot folder found under the backup root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    /// Folder name
    pub name: String,
    /// Full folder path
    pub path: PathBuf,
    /// Number of regular files directly inside the folder
    pub file_count: usize,
    /// Time parsed from the folder name (None for foreign folders)
    pub taken_at: Option<NaiveDateTime>,
}

/// List snapshot folders, oldest first
///
/// Returns an empty list when no backup has been taken yet.
pub fn list_snapshots(config: &WatchConfig) -> io::Result<Vec<SnapshotInfo>> {
    let root = config.backup_root();
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut snapshots = Vec::new();

    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let file_count = count_files(entry.path())?;
        let taken_at = NaiveDateTime::parse_from_str(&name, SNAPSHOT_FORMAT).ok();

        snapshots.push(SnapshotInfo {
            name,
            path: entry.into_path(),
            file_count,
            taken_at,
        });
    }

    Ok(snapshots)
}

fn count_files(dir: &std::path::Path) -> io::Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        if entry?.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}
