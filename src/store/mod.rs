//! The document store
//!
//! Owns the one mutable [`Document`] and every mutation operation. Each
//! operation clones the current document, applies the change, stamps
//! `last_updated` (and `item_last_updated` where an item is touched),
//! swaps the new value in wholesale and hands it to the persistence
//! port. Readers never observe a partial update.
//!
//! Failure semantics: mutations against an absent document or an id that
//! resolves to nothing are silent no-ops returning `None`, and the
//! document is left untouched. Persistence failures are logged and never
//! roll back the in-memory state.

pub mod patch;
pub mod port;
mod reorder;
mod transitions;

pub use patch::{FieldPatch, ItemPatch, SubItemPatch, SwimlanePatch};
pub use port::{LoadPort, MemoryPersistence, NullPersistence, PersistencePort, PortError};

use tracing::{debug, warn};

use crate::core::{
    BlockerStatus, ChangeKind, ChangeLogEntry, CheckIn, CheckInId, Document, ExternalLink, ItemId,
    ItemType, LinkId, LinkType, RoadmapItem, Stage, StatusTag, StatusTagId, SubItem, SubItemId,
    SubStage, SubStageId, SubSwimlane, SubSwimlaneId, Swimlane, SwimlaneId, Timestamp, ViewType,
};
use reorder::reorder_by_ids;

/// Everything needed to create an item; the store supplies the id, the
/// timestamps and the `created` history entry.
#[derive(Clone, Debug)]
pub struct ItemDraft {
    pub item_type: ItemType,
    pub title: String,
    pub description: Option<String>,
    pub stage: Stage,
    pub swimlane: SwimlaneId,
    pub reported_date: Option<String>,
    pub target_date: Option<String>,
    pub blocker_status: Option<BlockerStatus>,
    pub order: u32,
}

impl ItemDraft {
    pub fn new(
        item_type: ItemType,
        title: impl Into<String>,
        stage: Stage,
        swimlane: SwimlaneId,
    ) -> Self {
        Self {
            item_type,
            title: title.into(),
            description: None,
            stage,
            swimlane,
            reported_date: None,
            target_date: None,
            blocker_status: None,
            order: 0,
        }
    }
}

/// The canonical document and its mutation surface.
pub struct DocumentStore {
    document: Option<Document>,
    persistence: Box<dyn PersistencePort>,
}

impl DocumentStore {
    pub fn new(persistence: Box<dyn PersistencePort>) -> Self {
        Self {
            document: None,
            persistence,
        }
    }

    /// Store without a persistence collaborator.
    pub fn detached() -> Self {
        Self::new(Box::new(NullPersistence))
    }

    /// Load the persisted document, or start the empty default one.
    pub fn bootstrap(&mut self, source: &dyn LoadPort) -> Result<(), PortError> {
        let document = source.load()?.unwrap_or_else(Document::empty);
        self.load_data(document);
        Ok(())
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Replace the whole document, used for initial load and import.
    ///
    /// No referential validation: dangling swimlane or item references
    /// are accepted and resolve to nothing at read time.
    pub fn load_data(&mut self, mut document: Document) {
        document.last_updated = Timestamp::now();
        debug!(title = %document.title, items = document.items.len(), "document loaded");
        self.install(document);
    }

    // =========================================================================
    // Commit plumbing
    // =========================================================================

    fn install(&mut self, next: Document) {
        if let Err(err) = self.persistence.save(&next) {
            warn!(error = %err, "persistence save failed, in-memory state kept");
        }
        self.document = Some(next);
    }

    /// Clone-mutate-swap. The closure returns `None` to signal a no-op,
    /// in which case the current document stays in place unchanged.
    fn commit<R>(&mut self, f: impl FnOnce(&mut Document) -> Option<R>) -> Option<R> {
        let current = self.document.as_ref()?;
        let mut next = current.clone();
        let out = f(&mut next)?;
        next.last_updated = Timestamp::now();
        self.install(next);
        Some(out)
    }

    /// Commit scoped to one item; refreshes its recency stamp.
    fn commit_item<R>(
        &mut self,
        id: &ItemId,
        f: impl FnOnce(&mut RoadmapItem) -> Option<R>,
    ) -> Option<R> {
        self.commit(|doc| {
            let item = doc.items.get_mut(id)?;
            let out = f(item)?;
            item.touch();
            Some(out)
        })
    }

    // =========================================================================
    // Swimlanes
    // =========================================================================

    pub fn add_swimlane(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Option<SwimlaneId> {
        let (name, color) = (name.into(), color.into());
        self.commit(|doc| {
            let lane = Swimlane::new(name, color, doc.swimlanes.len() as u32);
            let id = lane.id.clone();
            doc.swimlanes.push(lane);
            Some(id)
        })
    }

    pub fn update_swimlane(&mut self, id: &SwimlaneId, patch: SwimlanePatch) -> Option<()> {
        self.commit(|doc| {
            let lane = doc.swimlane_mut(id)?;
            if let Some(name) = patch.name {
                lane.name = name;
            }
            if let Some(color) = patch.color {
                lane.color = color;
            }
            Some(())
        })
    }

    /// Remove the lane and every item living in it.
    pub fn delete_swimlane(&mut self, id: &SwimlaneId) -> Option<()> {
        self.commit(|doc| doc.remove_swimlane_cascading(id).then_some(()))
    }

    /// Reassign every lane's order to its index in `order`. Lanes missing
    /// from the sequence are dropped, so callers pass the complete id set.
    pub fn reorder_swimlanes(&mut self, order: &[SwimlaneId]) -> Option<()> {
        self.commit(|doc| {
            doc.swimlanes = reorder_by_ids(
                std::mem::take(&mut doc.swimlanes),
                order,
                |lane| &lane.id,
                |lane, o| lane.order = o,
            );
            Some(())
        })
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Returns the generated id synchronously so the UI can follow up
    /// with optimistic updates.
    pub fn add_item(&mut self, draft: ItemDraft) -> Option<ItemId> {
        self.commit(|doc| {
            let mut item = RoadmapItem::new(
                draft.item_type,
                draft.title,
                draft.stage,
                draft.swimlane,
                draft.order,
            );
            item.description = draft.description;
            item.reported_date = draft.reported_date;
            item.target_date = draft.target_date;
            item.blocker_status = draft.blocker_status;
            item.change_log
                .push(ChangeLogEntry::new(ChangeKind::Created, "Created"));
            let id = item.id.clone();
            doc.items.insert(id.clone(), item);
            Some(id)
        })
    }

    /// Merge fields and append the history entries the transition rules
    /// produce for this prev/next pair.
    pub fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> Option<()> {
        self.commit_item(id, |item| {
            let prev = item.clone();
            patch.apply(item);
            for entry in transitions::on_update(&prev, item) {
                item.change_log.push(entry);
            }
            Some(())
        })
    }

    /// Remove the item and scrub its id from every reference list.
    pub fn delete_item(&mut self, id: &ItemId) -> Option<()> {
        self.commit(|doc| {
            doc.items.remove(id)?;
            doc.scrub_references(id);
            Some(())
        })
    }

    /// Archiving also forces completion; unarchiving does not revert it.
    pub fn archive_item(&mut self, id: &ItemId) -> Option<()> {
        self.commit_item(id, |item| {
            if item.archived {
                return None;
            }
            item.archived = true;
            item.completed = true;
            item.change_log
                .push(ChangeLogEntry::new(ChangeKind::Archived, "Archived"));
            Some(())
        })
    }

    pub fn unarchive_item(&mut self, id: &ItemId) -> Option<()> {
        self.commit_item(id, |item| {
            if !item.archived {
                return None;
            }
            item.archived = false;
            item.change_log.push(ChangeLogEntry::new(
                ChangeKind::Unarchived,
                "Restored from archive",
            ));
            Some(())
        })
    }

    // =========================================================================
    // Dependencies
    // =========================================================================

    /// `from` depends on `to`. Both sides updated together; duplicate
    /// adds and self-edges are no-ops.
    pub fn add_dependency(&mut self, from: &ItemId, to: &ItemId) -> Option<()> {
        self.commit(|doc| doc.connect_dependency(from, to).then_some(()))
    }

    pub fn remove_dependency(&mut self, from: &ItemId, to: &ItemId) -> Option<()> {
        self.commit(|doc| doc.disconnect_dependency(from, to).then_some(()))
    }

    // =========================================================================
    // Links and check-ins
    // =========================================================================

    pub fn add_link(
        &mut self,
        item_id: &ItemId,
        url: impl Into<String>,
        label: impl Into<String>,
        link_type: LinkType,
    ) -> Option<LinkId> {
        let link = ExternalLink::new(url, label, link_type);
        self.commit_item(item_id, |item| {
            let id = link.id.clone();
            let (kind, verb) = if link.link_type.is_output() {
                (ChangeKind::OutputAdded, "Output added")
            } else {
                (ChangeKind::LinkAdded, "Link added")
            };
            item.change_log.push(
                ChangeLogEntry::new(kind, format!("{verb}: {}", link.label))
                    .with_detail(link.label.clone()),
            );
            item.links.push(link);
            Some(id)
        })
    }

    pub fn remove_link(&mut self, item_id: &ItemId, link_id: &LinkId) -> Option<()> {
        self.commit_item(item_id, |item| {
            let before = item.links.len();
            item.links.retain(|l| &l.id != link_id);
            (item.links.len() != before).then_some(())
        })
    }

    pub fn add_check_in(
        &mut self,
        item_id: &ItemId,
        label: impl Into<String>,
    ) -> Option<CheckInId> {
        let check_in = CheckIn::new(label);
        self.commit_item(item_id, |item| {
            let id = check_in.id.clone();
            item.check_ins.push(check_in);
            Some(id)
        })
    }

    pub fn set_check_in_completed(
        &mut self,
        item_id: &ItemId,
        check_in_id: &CheckInId,
        completed: bool,
    ) -> Option<()> {
        self.commit_item(item_id, |item| {
            let check_in = item.check_ins.iter_mut().find(|c| &c.id == check_in_id)?;
            check_in.completed = completed;
            Some(())
        })
    }

    pub fn remove_check_in(&mut self, item_id: &ItemId, check_in_id: &CheckInId) -> Option<()> {
        self.commit_item(item_id, |item| {
            let before = item.check_ins.len();
            item.check_ins.retain(|c| &c.id != check_in_id);
            (item.check_ins.len() != before).then_some(())
        })
    }

    // =========================================================================
    // Outputs
    // =========================================================================

    /// Link an output item to a goal. Both ids must resolve.
    pub fn add_output(&mut self, goal_id: &ItemId, output_id: &ItemId) -> Option<()> {
        self.commit(|doc| {
            let output_title = doc.item(output_id)?.title.clone();
            let goal = doc.items.get_mut(goal_id)?;
            if goal.output_ids.contains(output_id) {
                return None;
            }
            goal.output_ids.push(output_id.clone());
            goal.change_log.push(
                ChangeLogEntry::new(
                    ChangeKind::OutputAdded,
                    format!("Output added: {output_title}"),
                )
                .with_detail(output_title),
            );
            goal.touch();
            Some(())
        })
    }

    pub fn remove_output(&mut self, goal_id: &ItemId, output_id: &ItemId) -> Option<()> {
        self.commit_item(goal_id, |goal| {
            let before = goal.output_ids.len();
            goal.output_ids.retain(|o| o != output_id);
            (goal.output_ids.len() != before).then_some(())
        })
    }

    // =========================================================================
    // Sub-items
    // =========================================================================

    pub fn set_sub_item_view(&mut self, item_id: &ItemId, view: ViewType) -> Option<()> {
        self.commit_item(item_id, |item| {
            item.sub_board_mut().view = view;
            Some(())
        })
    }

    pub fn add_sub_item(&mut self, item_id: &ItemId, title: impl Into<String>) -> Option<SubItemId> {
        let title = title.into();
        self.commit_item(item_id, |item| {
            item.sub_board_mut();
            let sub = SubItem::new(title.clone(), item.sub_items.len() as u32);
            let id = sub.id.clone();
            item.sub_items.push(sub);
            item.change_log.push(
                ChangeLogEntry::new(
                    ChangeKind::SubitemAdded,
                    format!("Sub-item added: {title}"),
                )
                .with_detail(title),
            );
            Some(id)
        })
    }

    pub fn update_sub_item(
        &mut self,
        item_id: &ItemId,
        sub_id: &SubItemId,
        patch: SubItemPatch,
    ) -> Option<()> {
        self.commit_item(item_id, |item| {
            let sub = item.sub_item_mut(sub_id)?;
            let was_completed = sub.completed;
            patch.apply(sub);
            let title = sub.title.clone();
            if !was_completed && sub.completed {
                item.change_log.push(
                    ChangeLogEntry::new(
                        ChangeKind::SubitemCompleted,
                        format!("Sub-item completed: {title}"),
                    )
                    .with_detail(title),
                );
            }
            Some(())
        })
    }

    pub fn delete_sub_item(&mut self, item_id: &ItemId, sub_id: &SubItemId) -> Option<()> {
        self.commit_item(item_id, |item| {
            let before = item.sub_items.len();
            item.sub_items.retain(|s| &s.id != sub_id);
            (item.sub_items.len() != before).then_some(())
        })
    }

    pub fn reorder_sub_items(&mut self, item_id: &ItemId, order: &[SubItemId]) -> Option<()> {
        self.commit_item(item_id, |item| {
            item.sub_items = reorder_by_ids(
                std::mem::take(&mut item.sub_items),
                order,
                |s| &s.id,
                |s, o| s.order = o,
            );
            Some(())
        })
    }

    // =========================================================================
    // Sub-stages, sub-swimlanes, status tags
    // =========================================================================

    pub fn add_sub_stage(&mut self, item_id: &ItemId, name: impl Into<String>) -> Option<SubStageId> {
        let name = name.into();
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            let stage = SubStage::new(name, config.stages.len() as u32);
            let id = stage.id.clone();
            config.stages.push(stage);
            Some(id)
        })
    }

    pub fn rename_sub_stage(
        &mut self,
        item_id: &ItemId,
        stage_id: &SubStageId,
        name: impl Into<String>,
    ) -> Option<()> {
        let name = name.into();
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            let stage = config.stages.iter_mut().find(|s| &s.id == stage_id)?;
            stage.name = name;
            Some(())
        })
    }

    /// Sub-items on the removed stage move to the first remaining stage
    /// by order, or detach when none remains. Never deleted.
    pub fn delete_sub_stage(&mut self, item_id: &ItemId, stage_id: &SubStageId) -> Option<()> {
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            let before = config.stages.len();
            config.stages.retain(|s| &s.id != stage_id);
            if config.stages.len() == before {
                return None;
            }
            let fallback = config
                .stages
                .iter()
                .min_by_key(|s| s.order)
                .map(|s| s.id.clone());
            for sub in item.sub_items.iter_mut() {
                if sub.sub_stage.as_ref() == Some(stage_id) {
                    sub.sub_stage = fallback.clone();
                }
            }
            Some(())
        })
    }

    pub fn reorder_sub_stages(&mut self, item_id: &ItemId, order: &[SubStageId]) -> Option<()> {
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            config.stages = reorder_by_ids(
                std::mem::take(&mut config.stages),
                order,
                |s| &s.id,
                |s, o| s.order = o,
            );
            Some(())
        })
    }

    pub fn add_sub_swimlane(
        &mut self,
        item_id: &ItemId,
        name: impl Into<String>,
    ) -> Option<SubSwimlaneId> {
        let name = name.into();
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            let lane = SubSwimlane::new(name, config.swimlanes.len() as u32);
            let id = lane.id.clone();
            config.swimlanes.push(lane);
            Some(id)
        })
    }

    pub fn rename_sub_swimlane(
        &mut self,
        item_id: &ItemId,
        lane_id: &SubSwimlaneId,
        name: impl Into<String>,
    ) -> Option<()> {
        let name = name.into();
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            let lane = config.swimlanes.iter_mut().find(|s| &s.id == lane_id)?;
            lane.name = name;
            Some(())
        })
    }

    /// Orphaned sub-items detach to "no sub-swimlane".
    pub fn delete_sub_swimlane(&mut self, item_id: &ItemId, lane_id: &SubSwimlaneId) -> Option<()> {
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            let before = config.swimlanes.len();
            config.swimlanes.retain(|s| &s.id != lane_id);
            if config.swimlanes.len() == before {
                return None;
            }
            for sub in item.sub_items.iter_mut() {
                if sub.sub_swimlane.as_ref() == Some(lane_id) {
                    sub.sub_swimlane = None;
                }
            }
            Some(())
        })
    }

    pub fn add_status_tag(
        &mut self,
        item_id: &ItemId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Option<StatusTagId> {
        let tag = StatusTag::new(name, color);
        self.commit_item(item_id, |item| {
            let id = tag.id.clone();
            item.sub_board_mut().status_tags.push(tag);
            Some(id)
        })
    }

    /// Sub-items referencing the removed tag lose the reference.
    pub fn remove_status_tag(&mut self, item_id: &ItemId, tag_id: &StatusTagId) -> Option<()> {
        self.commit_item(item_id, |item| {
            let config = item.sub_board_mut();
            let before = config.status_tags.len();
            config.status_tags.retain(|t| &t.id != tag_id);
            if config.status_tags.len() == before {
                return None;
            }
            for sub in item.sub_items.iter_mut() {
                if sub.status_tag.as_ref() == Some(tag_id) {
                    sub.status_tag = None;
                }
            }
            Some(())
        })
    }
}
