//! Layer 5: Nested mini-board types
//!
//! SubItem: task nested under an item
//! SubStage / SubSwimlane: the item's own board axes
//! StatusTag: colored status chip for sub-items
//! SubItemConfig: per-item board configuration, lazily materialized

use serde::{Deserialize, Serialize};

use super::domain::{Priority, ViewType};
use super::identity::{StatusTagId, SubItemId, SubStageId, SubSwimlaneId};

/// Task nested under a roadmap item. Owned exclusively by its parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub id: SubItemId,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_tag: Option<StatusTagId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_stage: Option<SubStageId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_swimlane: Option<SubSwimlaneId>,
    pub order: u32,
}

impl SubItem {
    pub fn new(title: impl Into<String>, order: u32) -> Self {
        Self {
            id: SubItemId::generate(),
            title: title.into(),
            completed: false,
            priority: None,
            status_tag: None,
            sub_stage: None,
            sub_swimlane: None,
            order,
        }
    }
}

/// Stage column on an item's mini-board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubStage {
    pub id: SubStageId,
    pub name: String,
    pub order: u32,
}

impl SubStage {
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        Self {
            id: SubStageId::generate(),
            name: name.into(),
            order,
        }
    }
}

/// Swimlane row on an item's mini-board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSwimlane {
    pub id: SubSwimlaneId,
    pub name: String,
    pub order: u32,
}

impl SubSwimlane {
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        Self {
            id: SubSwimlaneId::generate(),
            name: name.into(),
            order,
        }
    }
}

/// Colored status chip assignable to sub-items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTag {
    pub id: StatusTagId,
    pub name: String,
    pub color: String,
}

impl StatusTag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: StatusTagId::generate(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Per-item mini-board configuration.
///
/// Materialized on the first sub-board mutation. The default stage and
/// tag sets use stable slug ids so that unconfigured items project the
/// same board on every read, and so that lazy materialization matches
/// what was already rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubItemConfig {
    pub view: ViewType,
    pub stages: Vec<SubStage>,
    pub swimlanes: Vec<SubSwimlane>,
    pub status_tags: Vec<StatusTag>,
}

impl SubItemConfig {
    /// The fixed default stage set: Backlog, Up Next, In Progress, Done.
    pub fn default_stages() -> Vec<SubStage> {
        [
            ("backlog", "Backlog"),
            ("up-next", "Up Next"),
            ("in-progress", "In Progress"),
            ("done", "Done"),
        ]
        .iter()
        .enumerate()
        .map(|(i, (id, name))| SubStage {
            id: SubStageId::from(*id),
            name: (*name).to_string(),
            order: i as u32,
        })
        .collect()
    }

    /// The fixed default status tag set.
    pub fn default_status_tags() -> Vec<StatusTag> {
        [
            ("not-started", "Not Started", "#9ca3af"),
            ("in-progress", "In Progress", "#3b82f6"),
            ("blocked", "Blocked", "#ef4444"),
            ("in-review", "In Review", "#a855f7"),
            ("done", "Done", "#22c55e"),
        ]
        .iter()
        .map(|(id, name, color)| StatusTag {
            id: StatusTagId::from(*id),
            name: (*name).to_string(),
            color: (*color).to_string(),
        })
        .collect()
    }
}

impl Default for SubItemConfig {
    fn default() -> Self {
        Self {
            view: ViewType::Tasks,
            stages: Self::default_stages(),
            swimlanes: Vec::new(),
            status_tags: Self::default_status_tags(),
        }
    }
}
