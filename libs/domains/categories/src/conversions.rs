//! Backend record → UI category mapping

use record_client::Record;
use tracing::warn;

use crate::fields::{COLOR, DISPLAY_NAME, ICON, NAME, ORDER, TASK_COUNT};
use crate::models::Category;

impl From<&Record> for Category {
    fn from(record: &Record) -> Self {
        let id = record.id().unwrap_or_else(|| {
            warn!("Category record without Id");
            0
        });

        Self {
            id,
            name: record
                .optional_text(&DISPLAY_NAME)
                .unwrap_or_else(|| record.text(&NAME)),
            color: record.text(&COLOR),
            icon: record.text(&ICON),
            task_count: record.integer(&TASK_COUNT),
            order: record.integer(&ORDER),
        }
    }
}

impl From<Record> for Category {
    fn from(record: Record) -> Self {
        Category::from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CATEGORY_SCHEMA;
    use serde_json::json;
    use test_utils::{TestDataBuilder, record};

    #[test]
    fn test_full_record_maps_every_field() {
        let builder = TestDataBuilder::from_test_name("category_full_record");
        let category = Category::from(builder.category_record(2));

        assert_eq!(category.id, 2);
        assert_eq!(category.name, builder.name("category", "2"));
        assert_eq!(category.color, "#10B981");
        assert_eq!(category.icon, "Briefcase");
        assert_eq!(category.task_count, 3);
        assert_eq!(category.order, 2);
    }

    #[test]
    fn test_defaults_for_sparse_record() {
        let category = Category::from(record(json!({"Id": 8})));

        assert_eq!(
            category,
            Category {
                id: 8,
                name: String::new(),
                color: "#3B82F6".to_string(),
                icon: "Folder".to_string(),
                task_count: 0,
                order: 0,
            }
        );
    }

    #[test]
    fn test_falsy_values_take_defaults() {
        let category = Category::from(record(json!({
            "Id": 1,
            "name_c": "",
            "color_c": "",
            "icon_c": null,
            "task_count_c": 0,
            "order_c": false
        })));

        assert_eq!(category.color, "#3B82F6");
        assert_eq!(category.icon, "Folder");
        assert_eq!(category.task_count, 0);
        assert_eq!(category.order, 0);
    }

    #[test]
    fn test_name_falls_back_to_system_name() {
        let category = Category::from(record(json!({"Id": 3, "name_c": "", "Name": "Errands"})));
        assert_eq!(category.name, "Errands");

        let category = Category::from(record(json!({
            "Id": 3,
            "name_c": "Home",
            "Name": "Errands"
        })));
        assert_eq!(category.name, "Home");
    }

    #[test]
    fn test_ui_shape_matches_field_table() {
        let value = serde_json::to_value(Category::from(record(json!({"Id": 1})))).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        let mut expected: Vec<String> = CATEGORY_SCHEMA.ui_names().map(str::to_string).collect();
        expected.push("Id".to_string());
        expected.sort();

        assert_eq!(keys, expected);
    }
}
