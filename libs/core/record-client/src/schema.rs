//! Static field tables.
//!
//! Each collection is described once by a [`Schema`] built in a `static`
//! item. [`Schema::new`] is a `const fn` that rejects empty or duplicated
//! names, so a bad table fails the build instead of a request.

use crate::query::FieldDescriptor;

/// Value substituted when a backend field is absent or falsy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Text(&'static str),
    Integer(i64),
    Flag(bool),
    /// The UI field stays empty (`null`)
    Null,
    /// Current time as an ISO-8601 timestamp
    Now,
}

/// One backend field and the UI field it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// UI field name; `None` for backend system fields with no UI counterpart
    pub ui: Option<&'static str>,
    pub backend: &'static str,
    pub fallback: Fallback,
}

impl Field {
    pub const fn new(ui: &'static str, backend: &'static str, fallback: Fallback) -> Self {
        Self {
            ui: Some(ui),
            backend,
            fallback,
        }
    }

    pub const fn system(backend: &'static str, fallback: Fallback) -> Self {
        Self {
            ui: None,
            backend,
            fallback,
        }
    }
}

/// Field table for one backend collection.
#[derive(Debug)]
pub struct Schema {
    pub table: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    /// Build a schema, panicking at compile time when used in a `static`
    /// if a name is empty or repeated.
    pub const fn new(table: &'static str, fields: &'static [Field]) -> Self {
        assert!(!table.is_empty(), "schema table name must not be empty");

        let mut i = 0;
        while i < fields.len() {
            assert!(!fields[i].backend.is_empty(), "backend field name must not be empty");

            let mut j = i + 1;
            while j < fields.len() {
                assert!(
                    !str_eq(fields[i].backend, fields[j].backend),
                    "duplicate backend field name in schema"
                );
                if let (Some(a), Some(b)) = (fields[i].ui, fields[j].ui) {
                    assert!(!str_eq(a, b), "duplicate UI field name in schema");
                }
                j += 1;
            }
            i += 1;
        }

        Self { table, fields }
    }

    /// Field descriptors requesting every column in the table, in order.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.fields
            .iter()
            .map(|field| FieldDescriptor::new(field.backend))
            .collect()
    }

    /// Look up a field by its UI name.
    pub fn by_ui(&self, ui: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.ui == Some(ui))
    }

    /// UI field names, in table order.
    pub fn ui_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter_map(|field| field.ui)
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: Field = Field::system("Name", Fallback::Text(""));
    const TITLE: Field = Field::new("title", "title_c", Fallback::Text(""));
    const DONE: Field = Field::new("done", "done_c", Fallback::Flag(false));

    static SAMPLE: Schema = Schema::new("sample_c", &[NAME, TITLE, DONE]);

    #[test]
    fn test_descriptors_follow_table_order() {
        let names: Vec<_> = SAMPLE
            .descriptors()
            .into_iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["Name", "title_c", "done_c"]);
    }

    #[test]
    fn test_lookup_by_ui_name() {
        assert_eq!(SAMPLE.by_ui("done"), Some(&DONE));
        assert_eq!(SAMPLE.by_ui("Name"), None);
    }

    #[test]
    fn test_ui_names_skip_system_fields() {
        let names: Vec<_> = SAMPLE.ui_names().collect();
        assert_eq!(names, vec!["title", "done"]);
    }

    #[test]
    fn test_str_eq() {
        assert!(str_eq("order_c", "order_c"));
        assert!(!str_eq("order_c", "order"));
        assert!(!str_eq("icon_c", "name_c"));
    }

    #[test]
    #[should_panic(expected = "duplicate backend field name")]
    fn test_duplicate_backend_name_rejected() {
        let fields: &'static [Field] = Box::leak(Box::new([TITLE, TITLE]));
        let _ = Schema::new("broken_c", fields);
    }
}
