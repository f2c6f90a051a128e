//! Filter expressions over top-level record fields.

use serde_json::Value as JsonValue;

use super::Record;

/// A predicate on records, evaluated natively by each backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Conjunction. Empty matches every record.
    All(Vec<Filter>),
    /// Disjunction. Empty matches nothing.
    Any(Vec<Filter>),
    /// Field equals the value exactly.
    Eq { field: String, value: JsonValue },
    /// Case-insensitive substring match on a text field, or on any element
    /// of an array field.
    Contains { field: String, needle: String },
}

impl Filter {
    /// Matches every record.
    pub fn all() -> Self {
        Filter::All(Vec::new())
    }

    pub fn eq(field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            needle: needle.into(),
        }
    }

    /// Evaluates the filter against a record in memory.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::All(filters) => filters.iter().all(|f| f.matches(record)),
            Filter::Any(filters) => filters.iter().any(|f| f.matches(record)),
            Filter::Eq { field, value } => record.get_raw(field) == Some(value),
            Filter::Contains { field, needle } => {
                let needle = needle.to_lowercase();
                match record.get_raw(field) {
                    Some(JsonValue::String(text)) => text.to_lowercase().contains(&needle),
                    Some(JsonValue::Array(items)) => items
                        .iter()
                        .filter_map(JsonValue::as_str)
                        .any(|text| text.to_lowercase().contains(&needle)),
                    _ => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: JsonValue) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_eq_is_exact() {
        let r = record(json!({"realm": "forest"}));
        assert!(Filter::eq("realm", "forest").matches(&r));
        assert!(!Filter::eq("realm", "Forest").matches(&r));
        assert!(!Filter::eq("mood", "calm").matches(&r));
    }

    #[test]
    fn test_contains_ignores_case() {
        let r = record(json!({"title": "Ancient Forest Design"}));
        assert!(Filter::contains("title", "forest").matches(&r));
        assert!(Filter::contains("title", "ANCIENT").matches(&r));
        assert!(Filter::contains("title", "").matches(&r));
        assert!(!Filter::contains("title", "mountain").matches(&r));
    }

    #[test]
    fn test_contains_on_array_matches_any_element() {
        let r = record(json!({"tags": ["lore", "Forest-Zone"]}));
        assert!(Filter::contains("tags", "forest").matches(&r));
        assert!(!Filter::contains("tags", "boss").matches(&r));
    }

    #[test]
    fn test_empty_combinators() {
        let r = record(json!({}));
        assert!(Filter::all().matches(&r));
        assert!(!Filter::Any(vec![]).matches(&r));
    }
}
