//! Task record conversions
//!
//! - backend [`Record`] → UI [`Task`], substituting field fallbacks
//! - [`CreateTask`] → full create payload
//! - [`UpdateTask`] → sparse update payload holding only the present fields

use record_client::{Record, RecordId, RecordPayload};
use serde_json::Value;
use tracing::warn;

use crate::fields::{
    CATEGORY_ID, COMPLETED, COMPLETED_AT, CREATED_AT, DEFAULT_CATEGORY_ID, DESCRIPTION, DUE_DATE,
    NAME, ORDER, PRIORITY, TITLE,
};
use crate::models::{CreateTask, Task, TaskPriority, UpdateTask};

fn priority_from(raw: &str) -> TaskPriority {
    raw.parse().unwrap_or_else(|_| {
        warn!(priority = raw, "Unknown task priority, using default");
        TaskPriority::default()
    })
}

fn nullable(value: Option<&str>) -> Value {
    match value {
        Some(text) if !text.is_empty() => Value::from(text),
        _ => Value::Null,
    }
}

// ============================================================================
// Backend → UI
// ============================================================================

impl From<&Record> for Task {
    fn from(record: &Record) -> Self {
        let id = record.id().unwrap_or_else(|| {
            warn!("Task record without Id");
            0
        });

        Self {
            id,
            title: record.text(&TITLE),
            description: record.text(&DESCRIPTION),
            priority: priority_from(&record.text(&PRIORITY)),
            due_date: record.optional_text(&DUE_DATE),
            completed: record.flag(&COMPLETED),
            created_at: record.text(&CREATED_AT),
            completed_at: record.optional_text(&COMPLETED_AT),
            order: record.integer(&ORDER),
            category_id: record.reference(&CATEGORY_ID),
        }
    }
}

impl From<Record> for Task {
    fn from(record: Record) -> Self {
        Task::from(&record)
    }
}

// ============================================================================
// UI → Backend
// ============================================================================

impl CreateTask {
    /// Payload for a new record created at `created_at`.
    pub fn to_payload(&self, created_at: &str) -> RecordPayload {
        let category_id = self
            .category_id
            .filter(|id| *id != 0)
            .unwrap_or(DEFAULT_CATEGORY_ID);

        let mut payload = RecordPayload::new();
        payload
            .set(&NAME, self.title.as_str())
            .set(&TITLE, self.title.as_str())
            .set(&DESCRIPTION, self.description.as_str())
            .set(&PRIORITY, self.priority.to_string())
            .set(&DUE_DATE, nullable(self.due_date.as_deref()))
            .set(&COMPLETED, self.completed)
            .set(&CREATED_AT, created_at)
            .set(&COMPLETED_AT, Value::Null)
            .set(&ORDER, self.order)
            .set(&CATEGORY_ID, category_id);
        payload
    }
}

impl UpdateTask {
    /// Payload for record `id` holding only the fields present in `self`.
    ///
    /// A present `None` is written as `null`.
    pub fn to_payload(&self, id: RecordId) -> RecordPayload {
        let mut payload = RecordPayload::for_record(id);

        if let Some(title) = &self.title {
            let title = or_null(title.as_deref());
            payload.set(&NAME, title.clone()).set(&TITLE, title);
        }
        if let Some(description) = &self.description {
            payload.set(&DESCRIPTION, or_null(description.as_deref()));
        }
        if let Some(priority) = self.priority {
            payload.set(&PRIORITY, or_null(priority.map(|p| p.to_string())));
        }
        if let Some(due_date) = &self.due_date {
            payload.set(&DUE_DATE, or_null(due_date.as_deref()));
        }
        if let Some(completed) = self.completed {
            payload.set(&COMPLETED, or_null(completed));
        }
        if let Some(completed_at) = &self.completed_at {
            payload.set(&COMPLETED_AT, or_null(completed_at.as_deref()));
        }
        if let Some(order) = self.order {
            payload.set(&ORDER, or_null(order));
        }
        if let Some(category_id) = self.category_id {
            payload.set(&CATEGORY_ID, or_null(category_id));
        }

        payload
    }
}

fn or_null<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}
