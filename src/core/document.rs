//! Layer 8: Document root
//!
//! The single aggregate the store mutates and the serializer snapshots.
//!
//! INVARIANT: dependency symmetry and reference scrubbing are maintained
//! here so every mutation path shares one implementation. Items with a
//! `swimlane` that matches nothing are legal (import is unvalidated) and
//! render as unknown-lane items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::identity::{ItemId, SwimlaneId};
use super::item::RoadmapItem;
use super::swimlane::Swimlane;
use super::time::Timestamp;

/// Title given to a document created without persisted state.
pub const DEFAULT_TITLE: &str = "Roadmap";

/// The root aggregate: swimlanes plus items.
///
/// Items are keyed by id; their board position lives on the item itself
/// (`order` within a stage cell), so map order is irrelevant. Swimlanes
/// keep a `Vec` with an authoritative `order` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub last_updated: Timestamp,
    #[serde(default)]
    pub swimlanes: Vec<Swimlane>,
    #[serde(default)]
    pub items: BTreeMap<ItemId, RoadmapItem>,
}

impl Document {
    /// Fresh empty document, used when no persisted state is available.
    pub fn empty() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            last_updated: Timestamp::now(),
            swimlanes: Vec::new(),
            items: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn item(&self, id: &ItemId) -> Option<&RoadmapItem> {
        self.items.get(id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut RoadmapItem> {
        self.items.get_mut(id)
    }

    pub fn swimlane(&self, id: &SwimlaneId) -> Option<&Swimlane> {
        self.swimlanes.iter().find(|s| &s.id == id)
    }

    pub fn swimlane_mut(&mut self, id: &SwimlaneId) -> Option<&mut Swimlane> {
        self.swimlanes.iter_mut().find(|s| &s.id == id)
    }

    pub fn items_in_swimlane<'a>(
        &'a self,
        id: &'a SwimlaneId,
    ) -> impl Iterator<Item = &'a RoadmapItem> {
        self.items.values().filter(move |i| &i.swimlane == id)
    }

    // =========================================================================
    // Integrity
    // =========================================================================

    /// Connect two items: `from` depends on `to`, `to` enables `from`.
    ///
    /// Idempotent; self-edges and unknown ids are refused. Returns whether
    /// anything changed.
    pub fn connect_dependency(&mut self, from: &ItemId, to: &ItemId) -> bool {
        if from == to || !self.items.contains_key(from) || !self.items.contains_key(to) {
            return false;
        }
        let already = self
            .items
            .get(from)
            .is_some_and(|i| i.depends_on.contains(to));
        if already {
            return false;
        }
        if let Some(item) = self.items.get_mut(from) {
            item.depends_on.push(to.clone());
        }
        if let Some(item) = self.items.get_mut(to) {
            item.enables.push(from.clone());
        }
        true
    }

    /// Remove the dependency edge in both directions. Returns whether
    /// anything changed.
    pub fn disconnect_dependency(&mut self, from: &ItemId, to: &ItemId) -> bool {
        let mut changed = false;
        if let Some(item) = self.items.get_mut(from) {
            let before = item.depends_on.len();
            item.depends_on.retain(|d| d != to);
            changed |= item.depends_on.len() != before;
        }
        if let Some(item) = self.items.get_mut(to) {
            let before = item.enables.len();
            item.enables.retain(|d| d != from);
            changed |= item.enables.len() != before;
        }
        changed
    }

    /// Strip `id` out of every other item's reference lists.
    ///
    /// Called on item deletion so no `depends_on`, `enables` or
    /// `output_ids` entry dangles.
    pub fn scrub_references(&mut self, id: &ItemId) {
        for item in self.items.values_mut() {
            item.depends_on.retain(|d| d != id);
            item.enables.retain(|d| d != id);
            item.output_ids.retain(|d| d != id);
        }
    }

    /// Remove a swimlane and every item that lived in it.
    ///
    /// Dependency ids held by other lanes' items that pointed at the
    /// removed items are left in place; readers resolve them to nothing.
    pub fn remove_swimlane_cascading(&mut self, id: &SwimlaneId) -> bool {
        let before = self.swimlanes.len();
        self.swimlanes.retain(|s| &s.id != id);
        if self.swimlanes.len() == before {
            return false;
        }
        self.items.retain(|_, item| &item.swimlane != id);
        true
    }
}
