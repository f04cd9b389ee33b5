//! Backend field table for the `category_c` collection.

use record_client::{Fallback, Field, Schema};

pub const DEFAULT_COLOR: &str = "#3B82F6";
pub const DEFAULT_ICON: &str = "Folder";

/// Page size for category listings
pub const LIST_LIMIT: u32 = 50;

/// System display name, used when `name_c` is empty
pub const NAME: Field = Field::system("Name", Fallback::Text(""));
/// Falls through to [`NAME`], hence no fallback of its own
pub const DISPLAY_NAME: Field = Field::new("name", "name_c", Fallback::Null);
pub const COLOR: Field = Field::new("color", "color_c", Fallback::Text(DEFAULT_COLOR));
pub const ICON: Field = Field::new("icon", "icon_c", Fallback::Text(DEFAULT_ICON));
pub const TASK_COUNT: Field = Field::new("taskCount", "task_count_c", Fallback::Integer(0));
pub const ORDER: Field = Field::new("order", "order_c", Fallback::Integer(0));

pub static CATEGORY_SCHEMA: Schema = Schema::new(
    "category_c",
    &[NAME, DISPLAY_NAME, COLOR, ICON, TASK_COUNT, ORDER],
);
