//! Response envelopes.
//!
//! Every backend call answers with `{success, message?, data?, results?}`.
//! [`Envelope`] is the loose wire form; the classifiers turn it into an
//! [`Outcome`] so callers match on success/failure instead of probing
//! optional fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::record::Record;

/// Message used when a failed envelope carries none.
pub const UNKNOWN_FAILURE: &str = "Request failed";

/// Classified envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure { message: String },
}

impl<T> Outcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Per-record result of a batch write.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Succeeded(Option<Record>),
    /// `message` is `None` when the backend gave no (or an empty) message
    Failed { message: Option<String> },
}

impl RecordOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RecordOutcome::Succeeded(_))
    }
}

/// Rows returned by a list query
pub type RecordSet = Outcome<Vec<Record>>;
/// Single row returned by an id lookup, `None` when the backend had no data
pub type RecordLookup = Outcome<Option<Record>>;
/// Per-record results of a create, update or delete batch
pub type BatchOutcome = Outcome<Vec<RecordOutcome>>;

/// Wire form of a per-record batch result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wire form of a backend response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// A single object or an array of objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RecordResult>>,
}

impl Envelope {
    fn failure_message(message: Option<String>) -> String {
        message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_FAILURE.to_string())
    }

    /// Classify as a list of rows.
    ///
    /// Only an array counts as rows; a missing, `null` or single-object `data`
    /// is an empty list.
    pub fn into_records(self) -> RecordSet {
        if !self.success {
            return Outcome::failure(Self::failure_message(self.message));
        }

        let records = match self.data {
            Some(Value::Array(items)) => items.into_iter().filter_map(object_record).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                warn!(data = %other, "Ignoring non-array data in list response");
                Vec::new()
            }
        };

        Outcome::Success(records)
    }

    /// Classify as a single-row lookup.
    ///
    /// The row is taken from `data` whenever it holds an object; only a missing
    /// row on a failed envelope is reported as a failure.
    pub fn into_record(self) -> RecordLookup {
        let record = match self.data {
            Some(Value::Array(items)) => items.into_iter().find_map(object_record),
            Some(value) => object_record(value),
            None => None,
        };

        match record {
            Some(record) => Outcome::Success(Some(record)),
            None if self.success => Outcome::Success(None),
            None => Outcome::failure(Self::failure_message(self.message)),
        }
    }

    /// Classify as batch write results. A missing `results` list is empty.
    pub fn into_batch(self) -> BatchOutcome {
        if !self.success {
            return Outcome::failure(Self::failure_message(self.message));
        }

        let results = self
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|result| {
                if result.success {
                    RecordOutcome::Succeeded(result.data.and_then(object_record))
                } else {
                    RecordOutcome::Failed {
                        message: result.message.filter(|m| !m.is_empty()),
                    }
                }
            })
            .collect();

        Outcome::Success(results)
    }
}

fn object_record(value: Value) -> Option<Record> {
    match value {
        Value::Object(fields) => Some(Record::new(fields)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_records_from_array() {
        let outcome = envelope(json!({
            "success": true,
            "data": [{"Id": 1}, {"Id": 2}, 3]
        }))
        .into_records();

        match outcome {
            Outcome::Success(records) => {
                let ids: Vec<_> = records.iter().filter_map(Record::id).collect();
                assert_eq!(ids, vec![1, 2]);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_records_missing_data_is_empty() {
        assert_eq!(
            envelope(json!({"success": true})).into_records(),
            Outcome::Success(vec![])
        );
        assert_eq!(
            envelope(json!({"success": true, "data": null})).into_records(),
            Outcome::Success(vec![])
        );
    }

    #[test]
    fn test_records_single_object_data_is_empty() {
        let outcome = envelope(json!({
            "success": true,
            "data": {"Id": 1, "title_c": "lone"}
        }))
        .into_records();

        assert_eq!(outcome, Outcome::Success(vec![]));
    }

    #[test]
    fn test_failure_keeps_message() {
        assert_eq!(
            envelope(json!({"success": false, "message": "quota exceeded"})).into_records(),
            Outcome::failure("quota exceeded")
        );
    }

    #[test]
    fn test_failure_without_message_uses_default() {
        assert_eq!(
            envelope(json!({"success": false})).into_batch(),
            Outcome::failure(UNKNOWN_FAILURE)
        );
    }

    #[test]
    fn test_lookup_null_data() {
        assert_eq!(
            envelope(json!({"success": true, "data": null})).into_record(),
            Outcome::Success(None)
        );
    }

    #[test]
    fn test_lookup_object_data() {
        let outcome = envelope(json!({"success": true, "data": {"Id": 9}})).into_record();
        match outcome {
            Outcome::Success(Some(record)) => assert_eq!(record.id(), Some(9)),
            other => panic!("expected a record, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_failed_envelope_without_data() {
        assert_eq!(
            envelope(json!({"success": false, "message": "Record does not exist"})).into_record(),
            Outcome::failure("Record does not exist")
        );
    }

    #[test]
    fn test_batch_results() {
        let outcome = envelope(json!({
            "success": true,
            "results": [
                {"success": true, "data": {"Id": 4}},
                {"success": false, "message": "bad"},
                {"success": false, "message": ""}
            ]
        }))
        .into_batch();

        let Outcome::Success(results) = outcome else {
            panic!("expected success");
        };
        assert_eq!(results.len(), 3);
        assert!(matches!(&results[0], RecordOutcome::Succeeded(Some(r)) if r.id() == Some(4)));
        assert_eq!(
            results[1],
            RecordOutcome::Failed {
                message: Some("bad".to_string())
            }
        );
        assert_eq!(results[2], RecordOutcome::Failed { message: None });
    }

    #[test]
    fn test_batch_missing_results_is_empty() {
        assert_eq!(
            envelope(json!({"success": true})).into_batch(),
            Outcome::Success(vec![])
        );
    }
}
