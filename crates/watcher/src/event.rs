//! Normalized file system events

use notify::event::ModifyKind;
use std::path::PathBuf;

/// File system event as seen by the watch loop
#[derive(Debug, Clone)]
pub struct WatchEvent {
    /// Paths that changed (two for some renames)
    pub paths: Vec<PathBuf>,
    /// Type of change
    pub kind: EventKind,
}

/// Type of file system event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// File content written
    Write,
    /// File created
    Create,
    /// File deleted
    Delete,
    /// File renamed or moved
    Rename,
    /// Permissions, timestamps and other metadata changed
    Metadata,
    /// Access and anything the backend could not describe
    Other,
}

impl EventKind {
    /// Map a notify event kind onto the kinds the loop cares about
    ///
    /// A modification with no further detail counts as a write, since some
    /// backends (Windows, polling) never report anything more specific.
    pub fn classify(kind: &notify::EventKind) -> Self {
        match kind {
            notify::EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => Self::Write,
            notify::EventKind::Modify(ModifyKind::Name(_)) => Self::Rename,
            notify::EventKind::Modify(ModifyKind::Metadata(_)) => Self::Metadata,
            notify::EventKind::Create(_) => Self::Create,
            notify::EventKind::Remove(_) => Self::Delete,
            _ => Self::Other,
        }
    }

    /// True for content writes, the only kind that triggers a backup
    pub fn is_write(self) -> bool {
        self == Self::Write
    }
}

impl From<notify::Event> for WatchEvent {
    fn from(event: notify::Event) -> Self {
        Self {
            kind: EventKind::classify(&event.kind),
            paths: event.paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{
        AccessKind, CreateKind, DataChange, MetadataKind, RemoveKind, RenameMode,
    };

    #[test]
    fn test_content_changes_are_writes() {
        let kinds = [
            notify::EventKind::Modify(ModifyKind::Data(DataChange::Content)),
            notify::EventKind::Modify(ModifyKind::Data(DataChange::Size)),
            notify::EventKind::Modify(ModifyKind::Data(DataChange::Any)),
            notify::EventKind::Modify(ModifyKind::Any),
        ];

        for kind in kinds {
            assert_eq!(EventKind::classify(&kind), EventKind::Write, "{:?}", kind);
        }
    }

    #[test]
    fn test_other_kinds_are_not_writes() {
        let cases = [
            (notify::EventKind::Create(CreateKind::File), EventKind::Create),
            (notify::EventKind::Remove(RemoveKind::File), EventKind::Delete),
            (
                notify::EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
                EventKind::Rename,
            ),
            (
                notify::EventKind::Modify(ModifyKind::Metadata(MetadataKind::WriteTime)),
                EventKind::Metadata,
            ),
            (notify::EventKind::Access(AccessKind::Any), EventKind::Other),
            (notify::EventKind::Any, EventKind::Other),
            (notify::EventKind::Other, EventKind::Other),
        ];

        for (raw, expected) in cases {
            let kind = EventKind::classify(&raw);
            assert_eq!(kind, expected, "{:?}", raw);
            assert!(!kind.is_write());
        }
    }

    #[test]
    fn test_from_notify_event_keeps_paths() {
        let event = notify::Event::new(notify::EventKind::Modify(ModifyKind::Name(
            RenameMode::Both,
        )))
        .add_path(PathBuf::from("/saves/old.ark"))
        .add_path(PathBuf::from("/saves/TheIsland.ark"));

        let event = WatchEvent::from(event);
        assert_eq!(event.kind, EventKind::Rename);
        assert_eq!(event.paths.len(), 2);
    }
}
