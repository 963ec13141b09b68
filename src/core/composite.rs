//! Layer 4: Small owned value records
//!
//! ExternalLink: url + label + classification
//! CheckIn: goal progress note with a done flag
//!
//! Both live inside their owning item and die with it.

use serde::{Deserialize, Serialize};

use super::domain::LinkType;
use super::identity::{CheckInId, LinkId};

/// External link attached to an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub id: LinkId,
    pub url: String,
    pub label: String,
    pub link_type: LinkType,
}

impl ExternalLink {
    pub fn new(url: impl Into<String>, label: impl Into<String>, link_type: LinkType) -> Self {
        Self {
            id: LinkId::generate(),
            url: url.into(),
            label: label.into(),
            link_type,
        }
    }
}

/// Check-in on a goal item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: CheckInId,
    pub label: String,
    pub completed: bool,
}

impl CheckIn {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: CheckInId::generate(),
            label: label.into(),
            completed: false,
        }
    }
}
