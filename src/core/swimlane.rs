//! Layer 6: Swimlane
//!
//! Named, colored horizontal lane. Owned exclusively by the document;
//! deletion cascades to every item referencing it.

use serde::{Deserialize, Serialize};

use super::identity::SwimlaneId;

/// Horizontal lane grouping items, usually a team or workstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swimlane {
    pub id: SwimlaneId,
    pub name: String,
    pub color: String,
    /// Display sort position and reorder target.
    pub order: u32,
}

impl Swimlane {
    pub fn new(name: impl Into<String>, color: impl Into<String>, order: u32) -> Self {
        Self {
            id: SwimlaneId::generate(),
            name: name.into(),
            color: color.into(),
            order,
        }
    }
}
