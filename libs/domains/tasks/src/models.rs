use record_client::{RecordId, parse_record_id};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use ts_rs::TS;

/// Task priority levels
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TaskPriority {
    Low,
    /// Default priority
    #[default]
    Medium,
    High,
}

/// Task entity, in the shape the UI consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Backend-assigned identifier
    #[serde(rename = "Id")]
    #[ts(type = "number")]
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    /// Date string as stored by the backend
    pub due_date: Option<String>,
    pub completed: bool,
    /// ISO-8601 timestamp
    pub created_at: String,
    pub completed_at: Option<String>,
    #[ts(type = "number")]
    pub order: i64,
    #[ts(type = "number")]
    pub category_id: RecordId,
}

/// DTO for creating a new task
///
/// The creation timestamp is always set at submission time and the
/// completion timestamp always starts empty, so neither is accepted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    /// Empty strings are stored as no due date
    pub due_date: Option<String>,
    pub completed: bool,
    #[ts(type = "number")]
    pub order: i64,
    /// `None` or `0` files the task under the default category. Accepts the
    /// select-box string form (`"3"`) as well as a number.
    #[serde(deserialize_with = "record_id_input")]
    #[ts(type = "number | string | null")]
    pub category_id: Option<RecordId>,
}

/// DTO for updating an existing task
///
/// Only fields that are present are written; `Some(None)` writes `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "present")]
    #[ts(as = "Option<String>")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[ts(as = "Option<String>")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[ts(as = "Option<TaskPriority>")]
    pub priority: Option<Option<TaskPriority>>,
    #[serde(default, deserialize_with = "present")]
    #[ts(as = "Option<String>")]
    pub due_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[ts(as = "Option<bool>")]
    pub completed: Option<Option<bool>>,
    #[serde(default, deserialize_with = "present")]
    #[ts(as = "Option<String>")]
    pub completed_at: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[ts(type = "number | null")]
    pub order: Option<Option<i64>>,
    /// Unparseable strings are written as `null`
    #[serde(default, deserialize_with = "present_record_id")]
    #[ts(type = "number | string | null")]
    pub category_id: Option<Option<RecordId>>,
}

impl UpdateTask {
    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Keeps an explicit `null` distinguishable from a missing key.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Integer(RecordId),
    Float(f64),
    Text(String),
}

/// Category ids arrive as numbers or as strings from form controls.
fn record_id_input<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<IdInput>::deserialize(deserializer)?.and_then(|input| match input {
        IdInput::Integer(id) => Some(id),
        IdInput::Float(value) => Some(value.trunc() as RecordId),
        IdInput::Text(text) => parse_record_id(&text),
    });
    Ok(id)
}

fn present_record_id<'de, D>(deserializer: D) -> Result<Option<Option<RecordId>>, D::Error>
where
    D: Deserializer<'de>,
{
    record_id_input(deserializer).map(Some)
}
