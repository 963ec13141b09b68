//! Layer 2: Domain enums
//!
//! ItemType: milestone, blocker, goal, output
//! Stage: old, recent, short_term, long_term (timeline buckets)
//! BlockerStatus: open, mitigated, resolved
//! Priority / ViewType / LinkType: sub-board and attachment classification

use serde::{Deserialize, Serialize};

/// Item classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Milestone,
    Blocker,
    Goal,
    Output,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Milestone => "milestone",
            Self::Blocker => "blocker",
            Self::Goal => "goal",
            Self::Output => "output",
        }
    }
}

/// Timeline bucket forming the board's columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Old,
    Recent,
    ShortTerm,
    LongTerm,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::Recent => "recent",
            Self::ShortTerm => "short_term",
            Self::LongTerm => "long_term",
        }
    }

    /// Human display label, recorded in stage-change history entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Older",
            Self::Recent => "Recent",
            Self::ShortTerm => "Short-term",
            Self::LongTerm => "Long-term",
        }
    }
}

/// Blocker lifecycle state, meaningful only for `ItemType::Blocker`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockerStatus {
    Open,
    Mitigated,
    Resolved,
}

impl BlockerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Mitigated => "mitigated",
            Self::Resolved => "resolved",
        }
    }

    /// Human display label, recorded in status-change history entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Mitigated => "Mitigated",
            Self::Resolved => "Resolved",
        }
    }
}

/// Sub-item priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// How an item's nested mini-board is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    #[default]
    Tasks,
    Kanban,
    Roadmap,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Kanban => "kanban",
            Self::Roadmap => "roadmap",
        }
    }
}

/// External link classification.
///
/// Publication, presentation and data links count as outputs and get the
/// `output_added` history entry instead of `link_added`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Publication,
    Presentation,
    Data,
    #[default]
    Other,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publication => "publication",
            Self::Presentation => "presentation",
            Self::Data => "data",
            Self::Other => "other",
        }
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Self::Publication | Self::Presentation | Self::Data)
    }
}
