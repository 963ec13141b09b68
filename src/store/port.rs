//! Persistence seams for the document store.
//!
//! The store never performs I/O itself. It loads through a [`LoadPort`]
//! once at bootstrap and hands every new document snapshot to a
//! [`PersistencePort`]. Real adapters debounce and write asynchronously;
//! the ones shipped here exist for embedding defaults and tests.

use std::sync::Mutex;

use thiserror::Error;

use crate::core::Document;

/// Failure reported by a persistence collaborator.
#[derive(Debug, Error, Clone)]
#[error("persistence port failed: {reason}")]
pub struct PortError {
    pub reason: String,
}

impl PortError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Supplies the previously persisted document, if any.
pub trait LoadPort {
    fn load(&self) -> Result<Option<Document>, PortError>;
}

/// Observes each new document snapshot.
///
/// Save failures are reported upward (logged) and never roll back the
/// in-memory mutation that triggered them.
pub trait PersistencePort {
    fn save(&self, document: &Document) -> Result<(), PortError>;
}

/// Discards every snapshot. Loads nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPersistence;

impl LoadPort for NullPersistence {
    fn load(&self) -> Result<Option<Document>, PortError> {
        Ok(None)
    }
}

impl PersistencePort for NullPersistence {
    fn save(&self, _document: &Document) -> Result<(), PortError> {
        Ok(())
    }
}

/// Retains the most recent snapshot in memory.
///
/// Synchronous stand-in for the debounced adapters a real embedding
/// wires up; tests inspect what would have been written.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    saved: Mutex<Option<Document>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_saved(&self) -> Option<Document> {
        self.saved.lock().ok().and_then(|guard| guard.clone())
    }
}

impl LoadPort for MemoryPersistence {
    fn load(&self) -> Result<Option<Document>, PortError> {
        Ok(self.last_saved())
    }
}

impl PersistencePort for MemoryPersistence {
    fn save(&self, document: &Document) -> Result<(), PortError> {
        let mut guard = self
            .saved
            .lock()
            .map_err(|_| PortError::new("memory persistence poisoned"))?;
        *guard = Some(document.clone());
        Ok(())
    }
}
