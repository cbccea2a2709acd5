//! JSON record format of persisted history.
//!
//! History is stored as an array of `{expression, result, timestamp}`
//! objects with ISO-8601 UTC timestamps at millisecond precision, the shape
//! a browser produces with `JSON.stringify` on the same data.

use crate::core::HistoryEntry;
use crate::storage::error::{PersistenceError, RecordViolation};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Serializable form of a [`HistoryEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub expression: String,
    pub result: String,
    pub timestamp: String,
}

impl From<&HistoryEntry> for StoredRecord {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            expression: entry.expression.clone(),
            result: entry.result.clone(),
            timestamp: entry
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

/// Serialize entries to the stored JSON payload.
pub fn encode(entries: &[HistoryEntry]) -> Result<String, PersistenceError> {
    let records: Vec<StoredRecord> = entries.iter().map(StoredRecord::from).collect();
    serde_json::to_string(&records).map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

/// Parse a stored payload back into entries.
///
/// Every record is validated before anything is returned; all violations
/// are reported together rather than stopping at the first.
pub fn decode(payload: &str) -> Result<Vec<HistoryEntry>, PersistenceError> {
    let records: Vec<StoredRecord> =
        serde_json::from_str(payload).map_err(|e| PersistenceError::Malformed(e.to_string()))?;

    let mut entries = Vec::with_capacity(records.len());
    let mut checks: Vec<Validation<(), NonEmptyVec<RecordViolation>>> =
        Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        match parse_timestamp(&record.timestamp) {
            Some(timestamp) => {
                entries.push(HistoryEntry::new(record.expression, record.result, timestamp));
                checks.push(Validation::success(()));
            }
            None => checks.push(Validation::fail(RecordViolation::InvalidTimestamp {
                index,
                value: record.timestamp,
            })),
        }
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(entries),
        Validation::Failure(violations) => Err(PersistenceError::InvalidRecords(
            violations.iter().cloned().collect(),
        )),
    }
}
