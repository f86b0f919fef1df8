//! File system watching for arkbak
//!
//! This crate provides:
//! - Classification of raw notify events into write / non-write changes
//! - The sequential watch loop that turns save-file writes into backups
//! - A handle owning the notify subscription and the worker thread

pub mod event;
pub mod handle;
pub mod watch_loop;

pub use event::{EventKind, WatchEvent};
pub use handle::{spawn, StateCell, Subscription, WatchHandle, WatchState};
pub use watch_loop::{WatchLoop, WatchSummary};
