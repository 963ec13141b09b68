#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod query;
pub mod snapshot;
pub mod store;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{
    BlockerStatus, ChangeKind, ChangeLog, ChangeLogEntry, CheckIn, CheckInId, Document, EntryId,
    ExternalLink, ItemId, ItemType, LinkId, LinkType, Priority, RoadmapItem, Stage, StatusTag,
    StatusTagId, SubItem, SubItemConfig, SubItemId, SubStage, SubStageId, SubSwimlane,
    SubSwimlaneId, Swimlane, SwimlaneId, Timestamp, ViewType, CHANGE_LOG_CAP,
};
pub use crate::query::{FilterState, SubItemCount};
pub use crate::snapshot::SnapshotError;
pub use crate::store::{
    DocumentStore, FieldPatch, ItemDraft, ItemPatch, LoadPort, MemoryPersistence, NullPersistence,
    PersistencePort, PortError, SubItemPatch, SwimlanePatch,
};
pub use crate::view::{Tab, ViewState};
