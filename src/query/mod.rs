//! The derivation engine
//!
//! Pure projections of the document for rendering. No mutation, no
//! caching; every function is safe to call on each render and degrades
//! to an empty result on missing ids. Costs stay O(n) or O(n * m) in
//! items and their reference lists, fine for the hundreds-of-items
//! documents this model targets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{
    BlockerStatus, Document, ItemId, ItemType, RoadmapItem, Stage, SubItemConfig, SubStage,
    SubSwimlane, Swimlane, SwimlaneId,
};

/// Active filter criteria. An empty set means "no constraint", so the
/// default value filters nothing but hides archived items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub swimlanes: BTreeSet<SwimlaneId>,
    pub stages: BTreeSet<Stage>,
    pub types: BTreeSet<ItemType>,
    pub blocker_statuses: BTreeSet<BlockerStatus>,
    pub show_completed: bool,
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            swimlanes: BTreeSet::new(),
            stages: BTreeSet::new(),
            types: BTreeSet::new(),
            blocker_statuses: BTreeSet::new(),
            show_completed: true,
            search: String::new(),
        }
    }
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// Sub-item completion tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItemCount {
    pub total: usize,
    pub completed: usize,
}

/// Items visible under the current filters.
///
/// Base set is every non-archived item. The swimlane criterion is
/// extended by dependency connectivity: items outside the selected lanes
/// stay visible when an edge in either direction ties them to a selected
/// item, so cross-lane dependency lines keep both endpoints renderable.
/// Stage, type, blocker-status, completed-visibility and search filters
/// then apply in order, each skipped when its criterion is empty.
pub fn filtered_items<'a>(doc: &'a Document, filter: &FilterState) -> Vec<&'a RoadmapItem> {
    let live: Vec<&RoadmapItem> = doc.items.values().filter(|i| !i.archived).collect();

    let mut visible: Vec<&RoadmapItem> = if filter.swimlanes.is_empty() {
        live
    } else {
        let picked: BTreeSet<&ItemId> = live
            .iter()
            .filter(|i| filter.swimlanes.contains(&i.swimlane))
            .map(|i| &i.id)
            .collect();
        // ids the selected items point at, covering edges whose reciprocal
        // half is missing in hand-imported documents
        let reached: BTreeSet<&ItemId> = live
            .iter()
            .filter(|i| picked.contains(&i.id))
            .flat_map(|i| i.depends_on.iter().chain(i.enables.iter()))
            .collect();
        live.into_iter()
            .filter(|i| {
                picked.contains(&i.id)
                    || reached.contains(&i.id)
                    || i.depends_on.iter().any(|d| picked.contains(d))
                    || i.enables.iter().any(|e| picked.contains(e))
            })
            .collect()
    };

    if !filter.stages.is_empty() {
        visible.retain(|i| filter.stages.contains(&i.stage));
    }
    if !filter.types.is_empty() {
        visible.retain(|i| filter.types.contains(&i.item_type));
    }
    if !filter.blocker_statuses.is_empty() {
        visible.retain(|i| {
            i.item_type != ItemType::Blocker
                || i.blocker_status
                    .is_some_and(|s| filter.blocker_statuses.contains(&s))
        });
    }
    if !filter.show_completed {
        visible.retain(|i| !i.completed);
    }
    let query = filter.search.trim().to_lowercase();
    if !query.is_empty() {
        visible.retain(|i| {
            i.title.to_lowercase().contains(&query)
                || i.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        });
    }
    visible
}

/// Swimlanes to render, sorted by order.
///
/// With no swimlane filter, all of them. Otherwise every lane owning at
/// least one filtered item, so lanes pulled in only through cross-lane
/// connectivity still appear.
pub fn filtered_swimlanes<'a>(doc: &'a Document, filter: &FilterState) -> Vec<&'a Swimlane> {
    let mut lanes: Vec<&Swimlane> = if filter.swimlanes.is_empty() {
        doc.swimlanes.iter().collect()
    } else {
        let occupied: BTreeSet<&SwimlaneId> = filtered_items(doc, filter)
            .iter()
            .map(|i| &i.swimlane)
            .collect();
        doc.swimlanes
            .iter()
            .filter(|lane| occupied.contains(&lane.id))
            .collect()
    };
    lanes.sort_by_key(|lane| lane.order);
    lanes
}

/// True when a swimlane filter is active and the item's home lane is not
/// among the selected ones. Drives the cross-lane badge.
pub fn is_cross_swimlane(doc: &Document, filter: &FilterState, id: &ItemId) -> bool {
    if filter.swimlanes.is_empty() {
        return false;
    }
    doc.item(id)
        .is_some_and(|item| !filter.swimlanes.contains(&item.swimlane))
}

/// Items this item depends on, dangling ids dropped.
pub fn dependencies<'a>(doc: &'a Document, id: &ItemId) -> Vec<&'a RoadmapItem> {
    resolve(doc, doc.item(id).map(|i| i.depends_on.as_slice()))
}

/// Items this item enables, dangling ids dropped.
pub fn dependents<'a>(doc: &'a Document, id: &ItemId) -> Vec<&'a RoadmapItem> {
    resolve(doc, doc.item(id).map(|i| i.enables.as_slice()))
}

fn resolve<'a>(doc: &'a Document, ids: Option<&[ItemId]>) -> Vec<&'a RoadmapItem> {
    ids.unwrap_or(&[])
        .iter()
        .filter_map(|id| doc.item(id))
        .collect()
}

/// (prerequisite, dependent) pairs with both endpoints visible under the
/// current filters. Derived from `depends_on` only so each edge appears
/// once; feeds the dependency-line renderer.
pub fn dependency_edges<'a>(
    doc: &'a Document,
    filter: &FilterState,
) -> Vec<(&'a RoadmapItem, &'a RoadmapItem)> {
    let visible = filtered_items(doc, filter);
    let visible_ids: BTreeSet<&ItemId> = visible.iter().map(|i| &i.id).collect();
    visible
        .iter()
        .flat_map(|dependent| {
            dependent
                .depends_on
                .iter()
                .filter(|id| visible_ids.contains(id))
                .filter_map(|id| doc.item(id))
                .map(move |prerequisite| (prerequisite, *dependent))
        })
        .collect()
}

/// Total and completed sub-items of one item.
pub fn sub_item_count(doc: &Document, id: &ItemId) -> SubItemCount {
    let Some(item) = doc.item(id) else {
        return SubItemCount::default();
    };
    SubItemCount {
        total: item.sub_items.len(),
        completed: item.sub_items.iter().filter(|s| s.completed).count(),
    }
}

/// Archived items across the document.
pub fn archived_count(doc: &Document) -> usize {
    doc.items.values().filter(|i| i.archived).count()
}

/// Archived items of one swimlane.
pub fn archived_items<'a>(doc: &'a Document, swimlane: &SwimlaneId) -> Vec<&'a RoadmapItem> {
    doc.items
        .values()
        .filter(|i| i.archived && &i.swimlane == swimlane)
        .collect()
}

/// The item's mini-board stages sorted by order, or the fixed default
/// set when the item has no configuration yet.
pub fn sub_stages(doc: &Document, id: &ItemId) -> Vec<SubStage> {
    let configured = doc
        .item(id)
        .and_then(|i| i.sub_item_config.as_ref())
        .map(|c| c.stages.clone());
    let mut stages = configured.unwrap_or_else(SubItemConfig::default_stages);
    stages.sort_by_key(|s| s.order);
    stages
}

/// The item's mini-board swimlanes sorted by order; none by default.
pub fn sub_swimlanes(doc: &Document, id: &ItemId) -> Vec<SubSwimlane> {
    let mut lanes = doc
        .item(id)
        .and_then(|i| i.sub_item_config.as_ref())
        .map(|c| c.swimlanes.clone())
        .unwrap_or_default();
    lanes.sort_by_key(|s| s.order);
    lanes
}
