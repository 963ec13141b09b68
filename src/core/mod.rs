//! Core document model for the roadmap board
//!
//! Module hierarchy follows type dependency order:
//! - time: Timestamp (Layer 0)
//! - identity: id newtypes for every entity (Layer 1)
//! - domain: ItemType, Stage, BlockerStatus, Priority, ViewType, LinkType (Layer 2)
//! - changelog: bounded per-item history (Layer 3)
//! - composite: ExternalLink, CheckIn (Layer 4)
//! - subboard: SubItem, SubStage, SubSwimlane, StatusTag, SubItemConfig (Layer 5)
//! - swimlane: Swimlane (Layer 6)
//! - item: RoadmapItem (Layer 7)
//! - document: Document root aggregate (Layer 8)

pub mod changelog;
pub mod composite;
pub mod document;
pub mod domain;
pub mod identity;
pub mod item;
pub mod subboard;
pub mod swimlane;
pub mod time;

pub use changelog::{ChangeKind, ChangeLog, ChangeLogEntry, CHANGE_LOG_CAP};
pub use composite::{CheckIn, ExternalLink};
pub use document::{Document, DEFAULT_TITLE};
pub use domain::{BlockerStatus, ItemType, LinkType, Priority, Stage, ViewType};
pub use identity::{
    CheckInId, EntryId, ItemId, LinkId, StatusTagId, SubItemId, SubStageId, SubSwimlaneId,
    SwimlaneId,
};
pub use item::RoadmapItem;
pub use subboard::{StatusTag, SubItem, SubItemConfig, SubStage, SubSwimlane};
pub use swimlane::Swimlane;
pub use time::Timestamp;
