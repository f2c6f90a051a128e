//! Field-level decoding of untrusted JSON bodies.
//!
//! Each entity's create input is read field by field so that a failure names
//! the offending field. Decoding of each value is delegated to serde, which
//! also enforces the closed enums.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::AppError;

use super::Fields;

/// Reads typed fields out of a JSON object.
pub struct FieldReader<'a> {
    object: &'a Fields,
}

impl<'a> FieldReader<'a> {
    /// Wraps a request body, which must be a JSON object.
    pub fn new(body: &'a JsonValue) -> Result<Self, AppError> {
        match body {
            JsonValue::Object(object) => Ok(Self { object }),
            other => Err(AppError::validation(
                "body",
                format!("expected a JSON object, got {}", json_kind(other)),
            )),
        }
    }

    /// Reads a field that must be present and non-null.
    pub fn required<T: DeserializeOwned>(&self, field: &str) -> Result<T, AppError> {
        match self.present(field) {
            Some(value) => decode(field, value),
            None => Err(AppError::validation(field, "field required")),
        }
    }

    /// Reads a field that may be absent or null.
    pub fn optional<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>, AppError> {
        self.present(field).map(|v| decode(field, v)).transpose()
    }

    /// Reads a field, falling back to `T::default()` when absent or null.
    pub fn or_default<T: DeserializeOwned + Default>(&self, field: &str) -> Result<T, AppError> {
        Ok(self.optional(field)?.unwrap_or_default())
    }

    /// Reads a required integer. Integral floats such as `90.0` are accepted.
    pub fn required_int(&self, field: &str) -> Result<i64, AppError> {
        match self.present(field) {
            Some(value) => integer(field, value),
            None => Err(AppError::validation(field, "field required")),
        }
    }

    /// Reads an integer field that must be at least `min`, defaulting to `default`.
    pub fn int_at_least(&self, field: &str, min: i64, default: i64) -> Result<i64, AppError> {
        let value = match self.present(field) {
            Some(value) => integer(field, value)?,
            None => default,
        };
        if value < min {
            return Err(AppError::validation(
                field,
                format!("must be greater than or equal to {}", min),
            ));
        }
        Ok(value)
    }

    /// Reads a string-to-integer map, empty when absent or null.
    pub fn int_map(&self, field: &str) -> Result<BTreeMap<String, i64>, AppError> {
        let raw: BTreeMap<String, JsonValue> = self.or_default(field)?;
        raw.iter()
            .map(|(key, value)| Ok((key.clone(), integer(field, value)?)))
            .collect()
    }

    /// Keys present in the body.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.object.keys().map(String::as_str)
    }

    fn present(&self, field: &str) -> Option<&'a JsonValue> {
        self.object.get(field).filter(|v| !v.is_null())
    }
}

fn decode<T: DeserializeOwned>(field: &str, value: &JsonValue) -> Result<T, AppError> {
    serde_json::from_value(value.clone()).map_err(|e| AppError::validation(field, e.to_string()))
}

/// Accepts JSON integers and floats with no fractional part.
fn integer(field: &str, value: &JsonValue) -> Result<i64, AppError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(AppError::validation(
            field,
            format!("expected an integer, got {}", json_kind(value)),
        )),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Realm;
    use serde_json::json;

    fn field_of(err: AppError) -> String {
        match err {
            AppError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_object_body() {
        let body = json!(["not", "an", "object"]);
        let err = FieldReader::new(&body).err().unwrap();
        assert_eq!(field_of(err), "body");
    }

    #[test]
    fn test_required_missing_and_null() {
        let body = json!({"name": null});
        let reader = FieldReader::new(&body).unwrap();
        assert_eq!(field_of(reader.required::<String>("name").unwrap_err()), "name");
        assert_eq!(field_of(reader.required::<String>("lore").unwrap_err()), "lore");
    }

    #[test]
    fn test_enum_violation_names_field() {
        let body = json!({"realm": "ocean"});
        let reader = FieldReader::new(&body).unwrap();
        let err = reader.required::<Realm>("realm").unwrap_err();
        assert!(err.to_string().contains("unknown variant `ocean`"));
        assert_eq!(field_of(err), "realm");
    }

    #[test]
    fn test_or_default_and_optional() {
        let body = json!({"tags": ["a", "b"], "description": null});
        let reader = FieldReader::new(&body).unwrap();
        assert_eq!(reader.or_default::<Vec<String>>("tags").unwrap(), vec!["a", "b"]);
        assert!(reader.or_default::<Vec<String>>("objectives").unwrap().is_empty());
        assert_eq!(reader.optional::<String>("description").unwrap(), None);
    }

    #[test]
    fn test_int_at_least() {
        let body = json!({"required_level": 0});
        let reader = FieldReader::new(&body).unwrap();
        assert_eq!(
            field_of(reader.int_at_least("required_level", 1, 1).unwrap_err()),
            "required_level"
        );
        assert_eq!(reader.int_at_least("missing", 1, 1).unwrap(), 1);
    }

    #[test]
    fn test_integers_accept_integral_floats() {
        let body = json!({
            "tempo": 90.0,
            "swing": 90.5,
            "mood": "tense",
            "required_level": 3.0,
            "damage_profile": {"physical": 75.0, "spirit": 25},
            "bad_profile": {"physical": 7.5}
        });
        let reader = FieldReader::new(&body).unwrap();

        assert_eq!(reader.required_int("tempo").unwrap(), 90);
        assert_eq!(field_of(reader.required_int("swing").unwrap_err()), "swing");
        assert_eq!(field_of(reader.required_int("mood").unwrap_err()), "mood");
        assert_eq!(field_of(reader.required_int("bpm").unwrap_err()), "bpm");
        assert_eq!(reader.int_at_least("required_level", 1, 1).unwrap(), 3);

        let profile = reader.int_map("damage_profile").unwrap();
        assert_eq!(profile.get("physical"), Some(&75));
        assert_eq!(profile.get("spirit"), Some(&25));
        assert_eq!(field_of(reader.int_map("bad_profile").unwrap_err()), "bad_profile");
        assert!(reader.int_map("missing").unwrap().is_empty());
    }
}
