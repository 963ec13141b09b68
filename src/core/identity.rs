//! Layer 1: Identity atoms
//!
//! One uuid-backed generator, one string newtype per entity kind.
//! Ids are opaque: imported documents may carry foreign id strings,
//! so no format is enforced beyond being a string.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh URL-safe identifier.
///
/// Hyphenated uuid v4. Collision-resistant across documents far beyond
/// the tens-of-thousands-of-entities scale this model targets.
pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a new unique id.
            pub fn generate() -> Self {
                Self(fresh_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:?})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

entity_id! {
    /// Swimlane identifier.
    SwimlaneId
}

entity_id! {
    /// Roadmap item identifier.
    ItemId
}

entity_id! {
    /// Sub-item identifier, unique within the document (not just the parent).
    SubItemId
}

entity_id! {
    /// Custom sub-board stage identifier.
    SubStageId
}

entity_id! {
    /// Custom sub-board swimlane identifier.
    SubSwimlaneId
}

entity_id! {
    /// Sub-board status tag identifier.
    StatusTagId
}

entity_id! {
    /// External link identifier.
    LinkId
}

entity_id! {
    /// Check-in identifier.
    CheckInId
}

entity_id! {
    /// Change-log entry identifier.
    EntryId
}
