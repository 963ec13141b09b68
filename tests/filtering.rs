//! Derivation engine: filter composition, cross-swimlane connectivity,
//! archived exclusivity, dependency resolution.

use std::collections::BTreeSet;

use lanes::query::{
    archived_count, archived_items, dependencies, dependency_edges, dependents, filtered_items,
    filtered_swimlanes, is_cross_swimlane, sub_item_count,
};
use lanes::{
    BlockerStatus, Document, DocumentStore, FilterState, ItemDraft, ItemId, ItemPatch, ItemType,
    Stage, SwimlaneId,
};

fn seeded() -> (DocumentStore, SwimlaneId, SwimlaneId) {
    let mut store = DocumentStore::detached();
    store.load_data(Document::empty());
    let s1 = store.add_swimlane("Science", "#0ea5e9").unwrap();
    let s2 = store.add_swimlane("Engineering", "#f97316").unwrap();
    (store, s1, s2)
}

fn add(
    store: &mut DocumentStore,
    lane: &SwimlaneId,
    item_type: ItemType,
    stage: Stage,
    title: &str,
) -> ItemId {
    store
        .add_item(ItemDraft::new(item_type, title, stage, lane.clone()))
        .unwrap()
}

fn lane_filter(lanes: &[&SwimlaneId]) -> FilterState {
    FilterState {
        swimlanes: lanes.iter().map(|l| (*l).clone()).collect(),
        ..Default::default()
    }
}

fn titles(items: &[&lanes::RoadmapItem]) -> BTreeSet<String> {
    items.iter().map(|i| i.title.clone()).collect()
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn default_filter_shows_every_live_item() {
    let (mut store, s1, s2) = seeded();
    add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "m1");
    add(&mut store, &s2, ItemType::Goal, Stage::LongTerm, "g1");
    let doc = store.document().unwrap();
    assert_eq!(filtered_items(doc, &FilterState::default()).len(), 2);
}

#[test]
fn cross_swimlane_dependencies_stay_visible() {
    let (mut store, s1, s2) = seeded();
    let m1 = add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "M1");
    let m2 = add(&mut store, &s2, ItemType::Milestone, Stage::Recent, "M2");
    store.add_dependency(&m2, &m1);

    let doc = store.document().unwrap();
    let filter = lane_filter(&[&s2]);

    let items = filtered_items(doc, &filter);
    assert_eq!(titles(&items), set(&["M1", "M2"]));

    // the lane pulled in only via connectivity appears, sorted by order
    let lane_names: Vec<_> = filtered_swimlanes(doc, &filter)
        .iter()
        .map(|l| l.name.clone())
        .collect();
    assert_eq!(lane_names, vec!["Science", "Engineering"]);

    // badge only the visitor
    assert!(is_cross_swimlane(doc, &filter, &m1));
    assert!(!is_cross_swimlane(doc, &filter, &m2));

    // both endpoints visible means the edge renders
    let edges = dependency_edges(doc, &filter);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].0.id, m1);
    assert_eq!(edges[0].1.id, m2);
}

#[test]
fn connectivity_does_not_chase_transitive_chains() {
    let (mut store, s1, s2) = seeded();
    let s3 = store.add_swimlane("Ops", "#a3a3a3").unwrap();
    let a = add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "a");
    let b = add(&mut store, &s2, ItemType::Milestone, Stage::Recent, "b");
    let c = add(&mut store, &s3, ItemType::Milestone, Stage::Recent, "c");
    store.add_dependency(&b, &a);
    store.add_dependency(&c, &b);

    let doc = store.document().unwrap();
    let items = filtered_items(doc, &lane_filter(&[&s1]));
    // b is one hop from a selected item; c is two hops away and stays out
    assert_eq!(titles(&items), set(&["a", "b"]));
}

#[test]
fn stage_and_type_filters_compose() {
    let (mut store, s1, _) = seeded();
    add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "recent milestone");
    add(&mut store, &s1, ItemType::Goal, Stage::Recent, "recent goal");
    add(&mut store, &s1, ItemType::Milestone, Stage::LongTerm, "far milestone");

    let doc = store.document().unwrap();
    let filter = FilterState {
        stages: BTreeSet::from([Stage::Recent]),
        types: BTreeSet::from([ItemType::Milestone]),
        ..Default::default()
    };
    let items = filtered_items(doc, &filter);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "recent milestone");
}

#[test]
fn blocker_status_filter_never_constrains_other_types() {
    let (mut store, s1, _) = seeded();
    let blocker = add(&mut store, &s1, ItemType::Blocker, Stage::Recent, "open blocker");
    store.update_item(
        &blocker,
        ItemPatch {
            blocker_status: lanes::FieldPatch::Set(BlockerStatus::Open),
            ..Default::default()
        },
    );
    let resolved = add(&mut store, &s1, ItemType::Blocker, Stage::Recent, "resolved blocker");
    store.update_item(
        &resolved,
        ItemPatch {
            blocker_status: lanes::FieldPatch::Set(BlockerStatus::Resolved),
            ..Default::default()
        },
    );
    add(&mut store, &s1, ItemType::Blocker, Stage::Recent, "statusless blocker");
    add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "plain milestone");

    let doc = store.document().unwrap();
    let filter = FilterState {
        blocker_statuses: BTreeSet::from([BlockerStatus::Open]),
        ..Default::default()
    };
    let items = filtered_items(doc, &filter);
    assert_eq!(titles(&items), set(&["open blocker", "plain milestone"]));
}

#[test]
fn search_and_completed_visibility_compose() {
    let (mut store, s1, _) = seeded();
    let id = add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "Calibration run Q3");

    let doc = store.document().unwrap();
    let searched = FilterState {
        search: "calib".to_string(),
        ..Default::default()
    };
    assert_eq!(filtered_items(doc, &searched).len(), 1);

    let miss = FilterState {
        search: "xyz".to_string(),
        ..Default::default()
    };
    assert!(filtered_items(doc, &miss).is_empty());

    store.update_item(
        &id,
        ItemPatch {
            completed: Some(true),
            ..Default::default()
        },
    );
    let doc = store.document().unwrap();
    let hidden_completed = FilterState {
        search: "calib".to_string(),
        show_completed: false,
        ..Default::default()
    };
    // completed visibility wins regardless of the search match
    assert!(filtered_items(doc, &hidden_completed).is_empty());
}

#[test]
fn search_matches_descriptions_too() {
    let (mut store, s1, _) = seeded();
    let id = add(&mut store, &s1, ItemType::Goal, Stage::Recent, "untitled");
    store.update_item(
        &id,
        ItemPatch {
            description: lanes::FieldPatch::Set("uses the spectrometer rig".to_string()),
            ..Default::default()
        },
    );
    let doc = store.document().unwrap();
    let filter = FilterState {
        search: "SPECTRO".to_string(),
        ..Default::default()
    };
    assert_eq!(filtered_items(doc, &filter).len(), 1);
}

#[test]
fn archived_items_leave_default_views_but_stay_addressable() {
    let (mut store, s1, _) = seeded();
    let a = add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "kept");
    let b = add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "shelved");
    store.add_dependency(&a, &b);
    store.archive_item(&b);

    let doc = store.document().unwrap();
    let items = filtered_items(doc, &FilterState::default());
    assert_eq!(titles(&items), BTreeSet::from(["kept".to_string()]));
    assert!(dependency_edges(doc, &FilterState::default()).is_empty());

    // still addressable and resolvable by id
    assert!(doc.item(&b).is_some());
    assert_eq!(dependencies(doc, &a).len(), 1);
    assert_eq!(archived_count(doc), 1);
    assert_eq!(archived_items(doc, &s1).len(), 1);
}

#[test]
fn dependency_resolution_drops_dangling_ids() {
    let (mut store, s1, _) = seeded();
    let a = add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "a");
    let b = add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "b");
    store.add_dependency(&a, &b);

    // simulate a hand-imported document with a dangling reference
    let mut doc = store.document().unwrap().clone();
    doc.item_mut(&a)
        .unwrap()
        .depends_on
        .push(ItemId::from("ghost"));
    assert_eq!(dependencies(&doc, &a).len(), 1);
    assert_eq!(dependents(&doc, &b).len(), 1);
}

#[test]
fn sub_item_counts_tally_completion() {
    let (mut store, s1, _) = seeded();
    let id = add(&mut store, &s1, ItemType::Goal, Stage::Recent, "parent");
    let s = store.add_sub_item(&id, "one").unwrap();
    store.add_sub_item(&id, "two");
    store.update_sub_item(
        &id,
        &s,
        lanes::SubItemPatch {
            completed: Some(true),
            ..Default::default()
        },
    );
    let doc = store.document().unwrap();
    let count = sub_item_count(doc, &id);
    assert_eq!((count.total, count.completed), (2, 1));
}

#[test]
fn filtered_swimlanes_sort_by_order() {
    let (mut store, s1, s2) = seeded();
    add(&mut store, &s1, ItemType::Milestone, Stage::Recent, "m1");
    add(&mut store, &s2, ItemType::Milestone, Stage::Recent, "m2");
    store.reorder_swimlanes(&[s2.clone(), s1.clone()]);
    let doc = store.document().unwrap();
    let names: Vec<_> = filtered_swimlanes(doc, &FilterState::default())
        .iter()
        .map(|l| l.name.clone())
        .collect();
    assert_eq!(names, vec!["Engineering", "Science"]);
}
