//! Layer 7: The roadmap item
//!
//! One unit of work placed at a swimlane x stage cell. Owns its links,
//! check-ins, sub-items and mini-board config; references its swimlane
//! and other items (dependencies, outputs) by id only.

use serde::{Deserialize, Serialize};

use super::changelog::ChangeLog;
use super::composite::{CheckIn, ExternalLink};
use super::domain::{BlockerStatus, ItemType, Stage};
use super::identity::{ItemId, SubItemId, SwimlaneId};
use super::subboard::{SubItem, SubItemConfig};
use super::time::Timestamp;

/// The core domain entity of the board.
///
/// `depends_on` and `enables` are reciprocal: `b in a.depends_on` holds
/// exactly when `a in b.enables`. Store mutations keep both sides in
/// step; imported documents are taken at their word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: ItemId,
    pub item_type: ItemType,
    pub title: String,
    /// Markdown body, rendered elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stage: Stage,
    pub swimlane: SwimlaneId,
    /// Free-form calendar date strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    /// Meaningful only when `item_type` is blocker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocker_status: Option<BlockerStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enables: Vec<ItemId>,
    /// Outputs linked to this goal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_ids: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ExternalLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub check_ins: Vec<CheckIn>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub is_win: bool,
    /// Hidden from default views but retained, never a deletion.
    #[serde(default)]
    pub archived: bool,
    /// Position within the stage cell.
    pub order: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<SubItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_item_config: Option<SubItemConfig>,
    pub item_last_updated: Timestamp,
    #[serde(default, skip_serializing_if = "ChangeLog::is_empty")]
    pub change_log: ChangeLog,
}

impl RoadmapItem {
    pub fn new(
        item_type: ItemType,
        title: impl Into<String>,
        stage: Stage,
        swimlane: SwimlaneId,
        order: u32,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            item_type,
            title: title.into(),
            description: None,
            stage,
            swimlane,
            reported_date: None,
            target_date: None,
            blocker_status: None,
            depends_on: Vec::new(),
            enables: Vec::new(),
            output_ids: Vec::new(),
            links: Vec::new(),
            check_ins: Vec::new(),
            completed: false,
            is_win: false,
            archived: false,
            order,
            sub_items: Vec::new(),
            sub_item_config: None,
            item_last_updated: Timestamp::now(),
            change_log: ChangeLog::new(),
        }
    }

    /// Refresh the per-item recency stamp.
    pub fn touch(&mut self) {
        self.item_last_updated = Timestamp::now();
    }

    /// Mini-board config, materialized on first use.
    ///
    /// Every sub-board mutation goes through here so the lazily created
    /// config is identical to the defaults readers were already shown.
    pub fn sub_board_mut(&mut self) -> &mut SubItemConfig {
        self.sub_item_config.get_or_insert_with(SubItemConfig::default)
    }

    pub fn sub_item(&self, id: &SubItemId) -> Option<&SubItem> {
        self.sub_items.iter().find(|s| &s.id == id)
    }

    pub fn sub_item_mut(&mut self, id: &SubItemId) -> Option<&mut SubItem> {
        self.sub_items.iter_mut().find(|s| &s.id == id)
    }
}
