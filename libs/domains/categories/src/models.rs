use record_client::RecordId;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category entity, in the shape the UI consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend-assigned identifier
    #[serde(rename = "Id")]
    #[ts(type = "number")]
    pub id: RecordId,
    pub name: String,
    /// CSS color, `#3B82F6` when unset
    pub color: String,
    /// Icon name, `Folder` when unset
    pub icon: String,
    #[ts(type = "number")]
    pub task_count: i64,
    /// Sort position, ascending
    #[ts(type = "number")]
    pub order: i64,
}
