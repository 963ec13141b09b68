//! Export/import serializer
//!
//! Whole-document, per-swimlane and per-item JSON snapshots, pretty
//! printed and schema-identical to the live document so every export is
//! re-importable. Import performs no schema validation; a parse failure
//! surfaces before any store state changes.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::{Document, ItemId, SwimlaneId};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("swimlane `{0}` not found")]
    UnknownSwimlane(String),

    #[error("item `{0}` not found")]
    UnknownItem(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Serialize the whole document.
pub fn export_document(doc: &Document) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Serialize a synthetic document holding one swimlane and its items.
pub fn export_swimlane(doc: &Document, id: &SwimlaneId) -> Result<String, SnapshotError> {
    let lane = doc
        .swimlane(id)
        .ok_or_else(|| SnapshotError::UnknownSwimlane(id.to_string()))?;
    let narrowed = Document {
        title: format!("{} - {}", doc.title, lane.name),
        last_updated: doc.last_updated,
        swimlanes: vec![lane.clone()],
        items: doc
            .items
            .iter()
            .filter(|(_, item)| &item.swimlane == id)
            .map(|(item_id, item)| (item_id.clone(), item.clone()))
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&narrowed)?)
}

/// Serialize a synthetic single-item document. The item's home lane is
/// included when it resolves; a dangling lane reference exports as-is.
pub fn export_item(doc: &Document, id: &ItemId) -> Result<String, SnapshotError> {
    let item = doc
        .item(id)
        .ok_or_else(|| SnapshotError::UnknownItem(id.to_string()))?;
    let narrowed = Document {
        title: format!("{} - {}", doc.title, item.title),
        last_updated: doc.last_updated,
        swimlanes: doc.swimlane(&item.swimlane).cloned().into_iter().collect(),
        items: BTreeMap::from([(id.clone(), item.clone())]),
    };
    Ok(serde_json::to_string_pretty(&narrowed)?)
}

/// Parse arbitrary JSON as a full document. The caller feeds the result
/// to `DocumentStore::load_data`.
pub fn import_document(json: &str) -> Result<Document, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
