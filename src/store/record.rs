//! Record and streaming types for store results.

use std::pin::Pin;

use futures::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::models::Fields;

/// A stream of records from a find.
///
/// Records are produced on demand; the stream is finite and cannot be restarted.
pub type RecordStream<'a> = Pin<Box<dyn Stream<Item = Result<Record, AppError>> + Send + 'a>>;

/// A stored record: a JSON object with typed access to its top-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    data: Fields,
}

impl Record {
    /// Creates a record from a field map.
    pub fn new(data: Fields) -> Self {
        Self { data }
    }

    /// Serializes an entity into its stored form.
    pub fn from_entity<T: Serialize>(entity: &T) -> Result<Self, AppError> {
        match serde_json::to_value(entity) {
            Ok(JsonValue::Object(data)) => Ok(Self { data }),
            Ok(other) => Err(AppError::Internal(format!(
                "entity serialized to a non-object value: {}",
                other
            ))),
            Err(e) => Err(AppError::Internal(format!("failed to serialize entity: {}", e))),
        }
    }

    /// Decodes the whole record into an entity.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, AppError> {
        serde_json::from_value(JsonValue::Object(self.data))
            .map_err(|e| AppError::Internal(format!("failed to decode record: {}", e)))
    }

    /// Gets a field, deserializing to the requested type.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is absent or deserialization fails.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, AppError> {
        self.data
            .get(key)
            .ok_or_else(|| AppError::Internal(format!("field not found: {}", key)))
            .and_then(|v| {
                serde_json::from_value(v.clone()).map_err(|e| {
                    AppError::Internal(format!("failed to deserialize '{}': {}", key, e))
                })
            })
    }

    /// Returns the raw JSON value of a field, if present.
    pub fn get_raw(&self, key: &str) -> Option<&JsonValue> {
        self.data.get(key)
    }

    /// The record's `id` field, when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.data.get("id").and_then(JsonValue::as_str)
    }

    /// Copies every top-level field of `patch` over this record, except `id`.
    pub fn merge(&mut self, patch: Record) {
        for (key, value) in patch.data {
            if key != "id" {
                self.data.insert(key, value);
            }
        }
    }

    /// Removes `id` so the patch can never rewrite it.
    pub fn without_id(mut self) -> Self {
        self.data.remove("id");
        self
    }
}

impl From<Fields> for Record {
    fn from(data: Fields) -> Self {
        Self::new(data)
    }
}

impl From<Record> for JsonValue {
    fn from(record: Record) -> Self {
        JsonValue::Object(record.data)
    }
}
