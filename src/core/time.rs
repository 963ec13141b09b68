//! Layer 0: Time primitives
//!
//! Timestamp: RFC 3339 wall-clock instant for `last_updated` stamps and
//! change-log entries. Calendar dates on items stay free-form strings.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Wall-clock instant, serialized RFC 3339.
///
/// Single-editor model: timestamps record recency for display and for
/// last-write-wins persistence, never causal ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn as_datetime(&self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_rfc3339() {
        let ts = Timestamp::from(OffsetDateTime::UNIX_EPOCH);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"1970-01-01T00:00:00Z\"");
    }

    #[test]
    fn round_trips() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
