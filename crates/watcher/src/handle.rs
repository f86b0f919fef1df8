//! Watch subscription lifecycle
//!
//! ```text
//! Starting --watch ok--> Watching --close()--> Draining
//!                           |                     |
//!                           +---- channel closed / backup failed ----> Stopped
//! ```
//!
//! The notify watcher lives inside [`Subscription`]. Dropping it tears down
//! the backend, which drops the channel sender; the worker then processes
//! whatever is still queued and exits.

use crate::watch_loop::{WatchLoop, WatchSummary};
use anyhow::{Context, Result};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

/// Watch loop lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchState {
    #[default]
    Starting,
    Watching,
    Draining,
    Stopped,
}

/// Shared, observable lifecycle state
#[derive(Debug, Clone, Default)]
pub struct StateCell(Arc<RwLock<WatchState>>);

impl StateCell {
    pub fn get(&self) -> WatchState {
        *self.0.read()
    }

    pub fn set(&self, state: WatchState) {
        let mut current = self.0.write();
        if *current != state {
            debug!("Watch state {:?} -> {:?}", *current, state);
            *current = state;
        }
    }

    /// Move to `to` only if currently in `from`
    pub fn transition(&self, from: WatchState, to: WatchState) -> bool {
        let mut current = self.0.write();
        if *current == from {
            debug!("Watch state {:?} -> {:?}", from, to);
            *current = to;
            true
        } else {
            false
        }
    }
}

/// Owner of the notify watcher
///
/// Cloneable so a signal handler can close it while another task waits on
/// the worker thread.
#[derive(Clone)]
pub struct Subscription {
    watcher: Arc<Mutex<Option<RecommendedWatcher>>>,
    state: StateCell,
}

impl Subscription {
    fn new(watcher: RecommendedWatcher, state: StateCell) -> Self {
        Self {
            watcher: Arc::new(Mutex::new(Some(watcher))),
            state,
        }
    }

    /// Stop receiving notifications; already queued events are still handled
    pub fn close(&self) {
        let watcher = self.watcher.lock().take();
        if let Some(watcher) = watcher {
            self.state.transition(WatchState::Watching, WatchState::Draining);
            drop(watcher);
            info!("Watch subscription closed");
        }
    }
}

/// Running watch loop
pub struct WatchHandle {
    thread: JoinHandle<Result<WatchSummary>>,
    subscription: Subscription,
    state: StateCell,
}

impl WatchHandle {
    pub fn subscription(&self) -> Subscription {
        self.subscription.clone()
    }

    pub fn state(&self) -> WatchState {
        self.state.get()
    }

    /// Wait for the worker to finish
    ///
    /// Returns the loop's error if a backup failed.
    pub fn join(self) -> Result<WatchSummary> {
        let result = self
            .thread
            .join()
            .map_err(|_| anyhow::anyhow!("Watch loop thread panicked"))?;

        // The worker may have stopped on its own after a failed backup
        self.subscription.close();
        self.state.set(WatchState::Stopped);
        result
    }

    /// Close the subscription and wait for the queue to drain
    pub fn stop(self) -> Result<WatchSummary> {
        self.subscription.close();
        self.join()
    }
}

/// Subscribe to the source directory and start the worker thread
///
/// The watch is non-recursive: only direct children of the source directory
/// are observed. Failing to register it is a configuration error.
pub fn spawn(watch_loop: WatchLoop) -> Result<WatchHandle> {
    let state = StateCell::default();
    let (tx, rx) = crossbeam_channel::unbounded();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        // Receiver gone means the loop already stopped
        let _ = tx.send(res);
    })
    .context("Failed to create file watcher")?;

    let source_dir = watch_loop.config().source_dir().to_path_buf();
    watcher
        .watch(&source_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", source_dir.display()))?;

    state.set(WatchState::Watching);
    info!("Watching {}", source_dir.display());

    let subscription = Subscription::new(watcher, state.clone());
    let worker_state = state.clone();

    let thread = thread::Builder::new()
        .name("arkbak-watch".to_string())
        .spawn(move || watch_loop.run(rx, &worker_state))
        .context("Failed to spawn watch loop thread")?;

    Ok(WatchHandle {
        thread,
        subscription,
        state,
    })
}
