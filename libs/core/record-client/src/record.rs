//! Backend rows and write payloads.
//!
//! The backend is loosely typed: any field may be missing, `null`, or carry a
//! "falsy" placeholder (`false`, `0`, `""`). Accessors on [`Record`] treat all
//! of those as absent and substitute the field's [`Fallback`].

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{Fallback, Field};

/// Integer identifier assigned by the backend
pub type RecordId = i64;

/// System identifier field present on every record
pub const ID_FIELD: &str = "Id";

/// Current time as an ISO-8601 UTC timestamp with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Coerce a UI-held identifier to a [`RecordId`].
///
/// Accepts leading whitespace, an optional sign and the leading run of ASCII
/// digits; trailing characters are ignored (`"12abc"` is `12`). Returns `None`
/// when there are no digits or the value does not fit.
pub fn parse_record_id(input: &str) -> Option<RecordId> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: RecordId = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && n.is_finite()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.is_finite()).map(|n| n.trunc() as i64)),
        Value::String(text) => parse_record_id(text),
        Value::Bool(flag) => Some(i64::from(*flag)),
        _ => None,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn fallback_text(fallback: Fallback) -> Option<String> {
    match fallback {
        Fallback::Text(text) => Some(text.to_string()),
        Fallback::Integer(n) => Some(n.to_string()),
        Fallback::Flag(flag) => Some(flag.to_string()),
        Fallback::Now => Some(timestamp_now()),
        Fallback::Null => None,
    }
}

/// One row as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw value, `None` when the key is absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Raw value of a field, `None` when absent or falsy.
    pub fn truthy(&self, field: &Field) -> Option<&Value> {
        self.0.get(field.backend).filter(|value| is_truthy(value))
    }

    pub fn id(&self) -> Option<RecordId> {
        self.0.get(ID_FIELD).and_then(as_integer)
    }

    /// Text value, or the field's fallback rendered as text.
    pub fn text(&self, field: &Field) -> String {
        self.optional_text(field).unwrap_or_default()
    }

    /// Text value, `None` only when absent/falsy and the fallback is [`Fallback::Null`].
    pub fn optional_text(&self, field: &Field) -> Option<String> {
        match self.truthy(field) {
            Some(value) => Some(as_text(value)),
            None => fallback_text(field.fallback),
        }
    }

    pub fn integer(&self, field: &Field) -> i64 {
        self.truthy(field)
            .and_then(as_integer)
            .unwrap_or(match field.fallback {
                Fallback::Integer(n) => n,
                _ => 0,
            })
    }

    pub fn flag(&self, field: &Field) -> bool {
        match self.truthy(field) {
            Some(_) => true,
            None => matches!(field.fallback, Fallback::Flag(true)),
        }
    }

    /// Identifier of a referenced record.
    ///
    /// Lookup fields arrive either as the scalar id or as an object exposing
    /// `Id`; both are accepted.
    pub fn reference(&self, field: &Field) -> RecordId {
        let referenced = match self.truthy(field) {
            Some(Value::Object(lookup)) => lookup
                .get(ID_FIELD)
                .filter(|id| is_truthy(id))
                .and_then(as_integer),
            Some(scalar) => as_integer(scalar),
            None => None,
        };

        referenced.unwrap_or(match field.fallback {
            Fallback::Integer(n) => n,
            _ => 0,
        })
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Field values for one record in a create or update batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordPayload(Map<String, Value>);

impl RecordPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload addressing an existing record.
    pub fn for_record(id: RecordId) -> Self {
        let mut payload = Self::new();
        payload.0.insert(ID_FIELD.to_string(), Value::from(id));
        payload
    }

    pub fn set(&mut self, field: &Field, value: impl Into<Value>) -> &mut Self {
        self.0.insert(field.backend.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
