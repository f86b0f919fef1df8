//! Sequential event processing
//!
//! Every notification is handled to completion before the next one is
//! received. A backup therefore blocks the loop, and events arriving while
//! it runs simply queue up behind it.

use crate::event::WatchEvent;
use crate::handle::{StateCell, WatchState};
use anyhow::{Context, Result};
use ark_core::{BackupReport, BackupWriter, EventFilter, WatchConfig};
use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

/// Counters reported when the loop exits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSummary {
    /// Notifications received
    pub events_seen: u64,
    /// Notifications classified as content writes
    pub write_events: u64,
    /// Backups taken
    pub backups_taken: u64,
    /// Subscription errors logged and skipped
    pub errors: u64,
}

/// Routes write events on watched files to the backup writer
pub struct WatchLoop {
    filter: EventFilter,
    writer: BackupWriter,
}

impl WatchLoop {
    pub fn new(config: WatchConfig) -> Self {
        Self {
            filter: EventFilter::new(&config),
            writer: BackupWriter::new(config),
        }
    }

    pub fn config(&self) -> &WatchConfig {
        self.writer.config()
    }

    /// Handle a single event
    ///
    /// Returns the backup report when the event was a write to a watched
    /// file. A failed backup is returned as an error and should end the loop.
    pub fn handle_event(&self, event: &WatchEvent) -> Result<Option<BackupReport>> {
        info!("Event: {:?} {:?}", event.kind, event.paths);

        if !event.kind.is_write() {
            debug!("Not a write event, ignoring");
            return Ok(None);
        }

        let Some(name) = event
            .paths
            .iter()
            .find_map(|path| self.filter.matched_name(path))
        else {
            info!(
                "File is not in the watch list and is ignored: {:?}",
                event.paths
            );
            return Ok(None);
        };

        // One watched file changed; all of them are backed up together
        info!("Save file modified, backing up: {}", name);
        let report = self
            .writer
            .backup()
            .with_context(|| format!("Backup triggered by {} failed", name))?;

        Ok(Some(report))
    }

    /// Consume notifications until the channel disconnects
    ///
    /// Subscription errors are logged and skipped. The first failed backup
    /// stops the loop and is returned.
    pub fn run(
        &self,
        events: Receiver<notify::Result<notify::Event>>,
        state: &StateCell,
    ) -> Result<WatchSummary> {
        state.transition(WatchState::Starting, WatchState::Watching);

        let mut summary = WatchSummary::default();
        let result = self.drain(&events, &mut summary);
        state.set(WatchState::Stopped);

        match &result {
            Ok(()) => info!(
                "Watch loop stopped: {} events, {} backups, {} errors",
                summary.events_seen, summary.backups_taken, summary.errors
            ),
            Err(_) => warn!(
                "Watch loop aborted after {} events, {} backups",
                summary.events_seen, summary.backups_taken
            ),
        }

        result.map(|()| summary)
    }

    fn drain(
        &self,
        events: &Receiver<notify::Result<notify::Event>>,
        summary: &mut WatchSummary,
    ) -> Result<()> {
        for res in events.iter() {
            match res {
                Ok(event) => {
                    summary.events_seen += 1;
                    let event = WatchEvent::from(event);
                    if event.kind.is_write() {
                        summary.write_events += 1;
                    }
                    if self.handle_event(&event)?.is_some() {
                        summary.backups_taken += 1;
                    }
                }
                Err(e) => {
                    summary.errors += 1;
                    warn!("Watch error: {}", e);
                }
            }
        }
        Ok(())
    }
}
