//! Change-log side effects of `update_item`.
//!
//! An ordered rule set evaluated against the previous and next item
//! values. Each rule either produces one history entry or nothing.
//! Rising-edge rules fire on false -> true only; un-completing and
//! un-winning leave no trace.

use crate::core::{ChangeKind, ChangeLogEntry, RoadmapItem};

type Rule = fn(&RoadmapItem, &RoadmapItem) -> Option<ChangeLogEntry>;

const RULES: [Rule; 4] = [completed, marked_win, stage_changed, status_changed];

/// Entries to append for one update, in rule order.
pub(crate) fn on_update(prev: &RoadmapItem, next: &RoadmapItem) -> Vec<ChangeLogEntry> {
    RULES.iter().filter_map(|rule| rule(prev, next)).collect()
}

fn completed(prev: &RoadmapItem, next: &RoadmapItem) -> Option<ChangeLogEntry> {
    (!prev.completed && next.completed)
        .then(|| ChangeLogEntry::new(ChangeKind::Completed, "Marked complete"))
}

fn marked_win(prev: &RoadmapItem, next: &RoadmapItem) -> Option<ChangeLogEntry> {
    (!prev.is_win && next.is_win)
        .then(|| ChangeLogEntry::new(ChangeKind::MarkedWin, "Marked as a win"))
}

fn stage_changed(prev: &RoadmapItem, next: &RoadmapItem) -> Option<ChangeLogEntry> {
    if prev.stage == next.stage {
        return None;
    }
    let (from, to) = (prev.stage.label(), next.stage.label());
    Some(
        ChangeLogEntry::new(
            ChangeKind::StageChanged,
            format!("Moved from {from} to {to}"),
        )
        .with_transition(from, to),
    )
}

fn status_changed(prev: &RoadmapItem, next: &RoadmapItem) -> Option<ChangeLogEntry> {
    let to = next.blocker_status?;
    if prev.blocker_status == Some(to) {
        return None;
    }
    let from = prev
        .blocker_status
        .map(|s| s.label())
        .unwrap_or("No status");
    Some(
        ChangeLogEntry::new(
            ChangeKind::StatusChanged,
            format!("Status changed from {from} to {}", to.label()),
        )
        .with_transition(from, to.label()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BlockerStatus, ItemType, Stage, SwimlaneId};

    fn item() -> RoadmapItem {
        RoadmapItem::new(
            ItemType::Blocker,
            "supplier slip",
            Stage::Recent,
            SwimlaneId::from("lane"),
            0,
        )
    }

    #[test]
    fn completed_fires_on_rising_edge_only() {
        let prev = item();
        let mut next = prev.clone();
        next.completed = true;
        assert_eq!(on_update(&prev, &next).len(), 1);
        // falling edge: nothing
        assert!(on_update(&next, &prev).is_empty());
        // steady state: nothing
        assert!(on_update(&next, &next).is_empty());
    }

    #[test]
    fn stage_change_records_labels() {
        let prev = item();
        let mut next = prev.clone();
        next.stage = Stage::LongTerm;
        let entries = on_update(&prev, &next);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, ChangeKind::StageChanged);
        assert_eq!(entries[0].from.as_deref(), Some("Recent"));
        assert_eq!(entries[0].to.as_deref(), Some("Long-term"));
    }

    #[test]
    fn status_change_needs_a_next_status() {
        let mut prev = item();
        prev.blocker_status = Some(BlockerStatus::Open);
        let mut next = prev.clone();
        next.blocker_status = None;
        // clearing the status is not a tracked transition
        assert!(on_update(&prev, &next).is_empty());

        next.blocker_status = Some(BlockerStatus::Resolved);
        let entries = on_update(&prev, &next);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, ChangeKind::StatusChanged);
        assert_eq!(entries[0].from.as_deref(), Some("Open"));
        assert_eq!(entries[0].to.as_deref(), Some("Resolved"));
    }

    #[test]
    fn independent_rules_stack() {
        let prev = item();
        let mut next = prev.clone();
        next.completed = true;
        next.is_win = true;
        next.stage = Stage::Old;
        let kinds: Vec<_> = on_update(&prev, &next).iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Completed,
                ChangeKind::MarkedWin,
                ChangeKind::StageChanged
            ]
        );
    }
}
