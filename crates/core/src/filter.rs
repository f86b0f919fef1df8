//! Literal path matching for change notifications
//!
//! A notification path matches when it is equal to
//! `<source_dir><separator><watched name>`. There is no case folding, no
//! symlink resolution and no separator normalization on the event side, so
//! sub-paths and differently spelled paths never match. Comparison is on the
//! raw OS string, so folder names that are not valid UTF-8 still match.

use crate::config::WatchConfig;
use std::ffi::OsString;
use std::path::{Path, MAIN_SEPARATOR};

/// Decides whether a changed path is one of the watched save files
#[derive(Debug, Clone)]
pub struct EventFilter {
    /// Expected full paths, one per watched file
    candidates: Vec<(OsString, String)>,
}

impl EventFilter {
    /// Precompute the expected path of every watched file
    pub fn new(config: &WatchConfig) -> Self {
        let source = config.source_dir().as_os_str();
        let mut base = source.to_os_string();

        // WatchConfig already trimmed trailing separators; only a bare root
        // still ends in one
        let ends_with_separator = source
            .as_encoded_bytes()
            .last()
            .is_some_and(|b| b.is_ascii() && std::path::is_separator(char::from(*b)));
        if !ends_with_separator {
            base.push(MAIN_SEPARATOR.to_string());
        }

        let candidates = config
            .watched_files()
            .iter()
            .map(|name| {
                let mut full = base.clone();
                full.push(name);
                (full, name.clone())
            })
            .collect();

        Self { candidates }
    }

    /// Watched file name that `path` refers to, if any
    pub fn matched_name(&self, path: &Path) -> Option<&str> {
        let path = path.as_os_str();

        self.candidates
            .iter()
            .find(|(full, _)| full.as_os_str() == path)
            .map(|(_, name)| name.as_str())
    }
}
