//! Save-file backup primitives for arkbak
//!
//! This crate provides:
//! - Immutable watch configuration (source directory + watched files)
//! - Literal path matching for change notifications
//! - Minute-granularity snapshot writer
//! - Snapshot listing

pub mod backup;
pub mod config;
pub mod error;
pub mod filter;
pub mod snapshot;

// Re-exports
pub use backup::{BackupReport, BackupWriter};
pub use config::{WatchConfig, BACKUP_FOLDER, SNAPSHOT_FORMAT, WATCHED_FILES};
pub use error::{BackupError, ConfigError};
pub use filter::EventFilter;
pub use snapshot::{list_snapshots, SnapshotInfo};
