//! Stored string records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A stored string, keyed by its content identity.
///
/// Records are immutable after creation: `id` is always the SHA-256 of
/// `value`, and `created_at` is assigned once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

/// Formats a timestamp for external consumers: UTC, second precision,
/// literal `Z` suffix. Sub-second digits are truncated, not rounded.
pub fn format_utc_z(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
