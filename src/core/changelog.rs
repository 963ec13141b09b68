//! Layer 3: Bounded per-item history
//!
//! ChangeKind: closed set of tracked transitions
//! ChangeLogEntry: immutable history record
//! ChangeLog: keeps only the most recent entries, oldest evicted on push

use serde::{Deserialize, Serialize};

use super::identity::EntryId;
use super::time::Timestamp;

/// Maximum history entries retained per item.
pub const CHANGE_LOG_CAP: usize = 2;

/// Closed set of tracked item transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Created,
    Completed,
    Archived,
    Unarchived,
    StatusChanged,
    StageChanged,
    LinkAdded,
    SubitemAdded,
    SubitemCompleted,
    MarkedWin,
    OutputAdded,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Completed => "completed",
            Self::Archived => "archived",
            Self::Unarchived => "unarchived",
            Self::StatusChanged => "status_changed",
            Self::StageChanged => "stage_changed",
            Self::LinkAdded => "link_added",
            Self::SubitemAdded => "subitem_added",
            Self::SubitemCompleted => "subitem_completed",
            Self::MarkedWin => "marked_win",
            Self::OutputAdded => "output_added",
        }
    }
}

/// Immutable history record. Once pushed, never edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLogEntry {
    pub id: EntryId,
    pub kind: ChangeKind,
    pub at: Timestamp,
    pub description: String,
    /// Display label before the transition (stage/status changes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Display label after the transition (stage/status changes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Attachment detail: link label or sub-item title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ChangeLogEntry {
    pub fn new(kind: ChangeKind, description: impl Into<String>) -> Self {
        Self {
            id: EntryId::generate(),
            kind,
            at: Timestamp::now(),
            description: description.into(),
            from: None,
            to: None,
            detail: None,
        }
    }

    pub fn with_transition(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Recent-history trail, bounded to [`CHANGE_LOG_CAP`] entries.
///
/// Imported documents may carry longer logs; the bound is re-imposed on
/// the next push.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeLog(Vec<ChangeLogEntry>);

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append, evicting the oldest entries beyond the cap.
    pub fn push(&mut self, entry: ChangeLogEntry) {
        while self.0.len() >= CHANGE_LOG_CAP {
            self.0.remove(0);
        }
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[ChangeLogEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
