//! Caller-owned, append-only record of stock movements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One human-readable line in an [`ActivityLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl core::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

/// Append-only activity log.
///
/// Kept apart from the inventory itself; callers pass it explicitly into the
/// operations that record (currently only `InventoryStore::add`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.record_at(Utc::now(), message);
    }

    pub fn record_at(&mut self, at: DateTime<Utc>, message: impl Into<String>) {
        self.entries.push(ActivityEntry {
            at,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entries_render_with_timestamp_prefix() {
        let mut log = ActivityLog::new();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        log.record_at(at, "Added 10 of apple");

        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines, vec!["2024-03-01 09:30:00 UTC: Added 10 of apple".to_string()]);
    }

    #[test]
    fn record_appends_in_order() {
        let mut log = ActivityLog::new();
        log.record("first");
        log.record("second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "first");
        assert_eq!(log.entries()[1].message, "second");
        assert!(log.entries()[0].at <= log.entries()[1].at);
    }
}
