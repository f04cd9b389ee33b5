//! Canned backend outcomes.
//!
//! Built through [`Envelope`] so fixtures take the same classification path
//! as real responses.

use record_client::{BatchOutcome, Envelope, Record, RecordLookup, RecordResult, RecordSet};
use serde_json::Value;

fn record_value(record: Record) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

/// Successful list response
pub fn records(rows: Vec<Record>) -> RecordSet {
    Envelope {
        success: true,
        data: Some(Value::Array(rows.into_iter().map(record_value).collect())),
        ..Default::default()
    }
    .into_records()
}

/// Successful lookup with the given row
pub fn found(row: Record) -> RecordLookup {
    Envelope {
        success: true,
        data: Some(record_value(row)),
        ..Default::default()
    }
    .into_record()
}

/// Successful lookup with `data: null`
pub fn not_found() -> RecordLookup {
    Envelope {
        success: true,
        data: Some(Value::Null),
        ..Default::default()
    }
    .into_record()
}

/// Envelope-level failure
pub fn failure<T>(message: &str) -> record_client::Outcome<T> {
    record_client::Outcome::failure(message)
}

/// Batch response with the given per-record results
pub fn batch(results: Vec<RecordResult>) -> BatchOutcome {
    Envelope {
        success: true,
        results: Some(results),
        ..Default::default()
    }
    .into_batch()
}

/// Per-record success carrying the stored row
pub fn stored(row: Value) -> RecordResult {
    RecordResult {
        success: true,
        data: Some(row),
        message: None,
    }
}

/// Per-record success without data (delete)
pub fn deleted() -> RecordResult {
    RecordResult {
        success: true,
        ..Default::default()
    }
}

/// Per-record failure
pub fn rejected(message: &str) -> RecordResult {
    RecordResult {
        success: false,
        data: None,
        message: Some(message.to_string()),
    }
}
