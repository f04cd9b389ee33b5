use record_client::{Record, RecordId};
use serde_json::{Value, json};

/// Builder for backend rows with deterministic content
///
/// This ensures tests are reproducible: the same test name always yields the
/// same titles, orders and category references.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_list_categories");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("task", "main"), "test-task-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Fully populated task row as the backend returns it
    pub fn task_json(&self, id: RecordId) -> Value {
        let title = self.name("task", &id.to_string());
        json!({
            "Id": id,
            "Name": title,
            "title_c": title,
            "description_c": format!("Description for task {}", id),
            "priority_c": "high",
            "due_date_c": "2025-01-31",
            "completed_c": false,
            "created_at_c": "2025-01-01T09:30:00.000Z",
            "completed_at_c": null,
            "order_c": (self.seed % 10) as i64 + 1,
            "category_id_c": {"Id": 2, "Name": "Work"}
        })
    }

    pub fn task_record(&self, id: RecordId) -> Record {
        record(self.task_json(id))
    }

    /// Fully populated category row as the backend returns it
    pub fn category_json(&self, id: RecordId) -> Value {
        let name = self.name("category", &id.to_string());
        json!({
            "Id": id,
            "Name": name,
            "name_c": name,
            "color_c": "#10B981",
            "icon_c": "Briefcase",
            "task_count_c": 3,
            "order_c": id
        })
    }

    pub fn category_record(&self, id: RecordId) -> Record {
        record(self.category_json(id))
    }
}

/// Build a [`Record`] from a JSON object literal.
///
/// Panics when `value` is not an object.
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(fields) => Record::new(fields),
        other => panic!("record fixture must be a JSON object, got {}", other),
    }
}
