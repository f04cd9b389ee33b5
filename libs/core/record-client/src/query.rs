//! Request descriptors, serialized in the backend's wire shapes.

use serde::Serialize;
use strum::Display;

use crate::record::{RecordId, RecordPayload};

/// Sort direction for an [`OrderBy`] clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SortType {
    Asc,
    Desc,
}

/// `{"field": {"Name": "<backend field>"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    field: FieldName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FieldName {
    #[serde(rename = "Name")]
    name: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: FieldName { name: name.into() },
        }
    }

    pub fn name(&self) -> &str {
        &self.field.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    #[serde(rename = "sorttype")]
    pub sort_type: SortType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagingInfo {
    pub limit: u32,
    pub offset: u32,
}

/// Parameters for `fetch_records` and `get_record_by_id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchQuery {
    pub fields: Vec<FieldDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging_info: Option<PagingInfo>,
}

impl FetchQuery {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    pub fn order_by(mut self, field_name: &str, sort_type: SortType) -> Self {
        self.order_by.push(OrderBy {
            field_name: field_name.to_string(),
            sort_type,
        });
        self
    }

    pub fn page(mut self, limit: u32, offset: u32) -> Self {
        self.paging_info = Some(PagingInfo { limit, offset });
        self
    }
}

/// Parameters for `create_record` and `update_record`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordsPayload {
    pub records: Vec<RecordPayload>,
}

impl RecordsPayload {
    pub fn single(record: RecordPayload) -> Self {
        Self {
            records: vec![record],
        }
    }
}

/// Parameters for `delete_record`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletePayload {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<RecordId>,
}

impl DeletePayload {
    pub fn single(id: RecordId) -> Self {
        Self {
            record_ids: vec![id],
        }
    }
}
