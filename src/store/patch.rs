//! Partial-update records merged onto existing entities.
//!
//! FieldPatch distinguishes "leave alone" from "clear" for optional
//! fields; plain `Option` covers fields that cannot be cleared.

use crate::core::{
    BlockerStatus, ItemType, Priority, RoadmapItem, Stage, StatusTagId, SubItem, SubStageId,
    SubSwimlaneId, SwimlaneId,
};

/// Three-way patch for an optional field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldPatch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T: Clone> FieldPatch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, FieldPatch::Keep)
    }

    fn apply_to(&self, slot: &mut Option<T>) {
        match self {
            FieldPatch::Keep => {}
            FieldPatch::Clear => *slot = None,
            FieldPatch::Set(value) => *slot = Some(value.clone()),
        }
    }
}

/// Field merge for `update_item`.
#[derive(Clone, Debug, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: FieldPatch<String>,
    pub item_type: Option<ItemType>,
    pub stage: Option<Stage>,
    pub swimlane: Option<SwimlaneId>,
    pub reported_date: FieldPatch<String>,
    pub target_date: FieldPatch<String>,
    pub blocker_status: FieldPatch<BlockerStatus>,
    pub completed: Option<bool>,
    pub is_win: Option<bool>,
    pub order: Option<u32>,
}

impl ItemPatch {
    pub fn apply(&self, item: &mut RoadmapItem) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        self.description.apply_to(&mut item.description);
        if let Some(item_type) = self.item_type {
            item.item_type = item_type;
        }
        if let Some(stage) = self.stage {
            item.stage = stage;
        }
        if let Some(swimlane) = &self.swimlane {
            item.swimlane = swimlane.clone();
        }
        self.reported_date.apply_to(&mut item.reported_date);
        self.target_date.apply_to(&mut item.target_date);
        self.blocker_status.apply_to(&mut item.blocker_status);
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
        if let Some(is_win) = self.is_win {
            item.is_win = is_win;
        }
        if let Some(order) = self.order {
            item.order = order;
        }
    }
}

/// Field merge for `update_sub_item`.
#[derive(Clone, Debug, Default)]
pub struct SubItemPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub priority: FieldPatch<Priority>,
    pub status_tag: FieldPatch<StatusTagId>,
    pub sub_stage: FieldPatch<SubStageId>,
    pub sub_swimlane: FieldPatch<SubSwimlaneId>,
    pub order: Option<u32>,
}

impl SubItemPatch {
    pub fn apply(&self, sub_item: &mut SubItem) {
        if let Some(title) = &self.title {
            sub_item.title = title.clone();
        }
        if let Some(completed) = self.completed {
            sub_item.completed = completed;
        }
        self.priority.apply_to(&mut sub_item.priority);
        self.status_tag.apply_to(&mut sub_item.status_tag);
        self.sub_stage.apply_to(&mut sub_item.sub_stage);
        self.sub_swimlane.apply_to(&mut sub_item.sub_swimlane);
        if let Some(order) = self.order {
            sub_item.order = order;
        }
    }
}

/// Field merge for `update_swimlane`.
#[derive(Clone, Debug, Default)]
pub struct SwimlanePatch {
    pub name: Option<String>,
    pub color: Option<String>,
}
