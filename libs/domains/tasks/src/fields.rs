//! Backend field table for the `task_c` collection.

use record_client::{Fallback, Field, RecordId, Schema};

pub const DEFAULT_CATEGORY_ID: RecordId = 1;

/// Page size for task listings
pub const LIST_LIMIT: u32 = 100;

/// System display name; written alongside the title, never read
pub const NAME: Field = Field::system("Name", Fallback::Text(""));
pub const TITLE: Field = Field::new("title", "title_c", Fallback::Text(""));
pub const DESCRIPTION: Field = Field::new("description", "description_c", Fallback::Text(""));
pub const PRIORITY: Field = Field::new("priority", "priority_c", Fallback::Text("medium"));
pub const DUE_DATE: Field = Field::new("dueDate", "due_date_c", Fallback::Null);
pub const COMPLETED: Field = Field::new("completed", "completed_c", Fallback::Flag(false));
pub const CREATED_AT: Field = Field::new("createdAt", "created_at_c", Fallback::Now);
pub const COMPLETED_AT: Field = Field::new("completedAt", "completed_at_c", Fallback::Null);
pub const ORDER: Field = Field::new("order", "order_c", Fallback::Integer(0));
/// Lookup into `category_c`; scalar id or `{Id, Name}` object
pub const CATEGORY_ID: Field = Field::new(
    "categoryId",
    "category_id_c",
    Fallback::Integer(DEFAULT_CATEGORY_ID),
);

pub static TASK_SCHEMA: Schema = Schema::new(
    "task_c",
    &[
        NAME,
        TITLE,
        DESCRIPTION,
        PRIORITY,
        DUE_DATE,
        COMPLETED,
        CREATED_AT,
        COMPLETED_AT,
        ORDER,
        CATEGORY_ID,
    ],
);
