//! Game design documents, the only entity that supports updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;

use super::schema::FieldReader;
use super::{generate_ulid, Collection, DocumentType, Entity, Fields};

/// A versioned game design document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier (ULID).
    pub id: String,
    pub title: String,
    pub document_type: DocumentType,
    /// Free-form document body.
    #[serde(default)]
    pub content: Fields,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
    /// Starts at 1 and grows by one per update.
    #[serde(default = "initial_version")]
    pub version: i64,
}

fn initial_version() -> i64 {
    1
}

impl Entity for Document {
    const COLLECTION: Collection = Collection::Documents;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Validated input for creating a document.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub title: String,
    pub document_type: DocumentType,
    pub content: Fields,
    pub tags: Vec<String>,
}

impl NewDocument {
    /// Validates an untrusted create body.
    pub fn from_json(body: &JsonValue) -> Result<Self, AppError> {
        let reader = FieldReader::new(body)?;
        Ok(Self {
            title: reader.required("title")?,
            document_type: reader.required("document_type")?,
            content: reader.or_default("content")?,
            tags: reader.or_default("tags")?,
        })
    }
}

impl Document {
    /// Builds the canonical record: new id, both timestamps now, version 1.
    pub fn new(input: NewDocument) -> Self {
        let now = Utc::now();
        Self {
            id: generate_ulid(),
            title: input.title,
            document_type: input.document_type,
            content: input.content,
            tags: input.tags,
            created_at: now,
            updated_at: now,
            version: initial_version(),
        }
    }
}

/// Fields a client may change on an existing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Fields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Keys owned by the server. Clients echoing them back are tolerated, but
/// their values are never applied.
const SERVER_MANAGED: &[&str] = &["id", "created_at", "updated_at", "version"];

const PATCHABLE: &[&str] = &["title", "document_type", "content", "tags"];

impl DocumentPatch {
    /// Validates an untrusted partial field map.
    pub fn from_json(body: &JsonValue) -> Result<Self, AppError> {
        let reader = FieldReader::new(body)?;

        if let Some(unknown) = reader
            .keys()
            .find(|k| !SERVER_MANAGED.contains(k) && !PATCHABLE.contains(k))
        {
            return Err(AppError::validation(
                unknown,
                format!("unknown field; updatable fields are {}", PATCHABLE.join(", ")),
            ));
        }

        Ok(Self {
            title: reader.optional("title")?,
            document_type: reader.optional("document_type")?,
            content: reader.optional("content")?,
            tags: reader.optional("tags")?,
        })
    }
}

/// A patch stamped with the server-managed fields, ready to merge.
#[derive(Debug, Clone, Serialize)]
pub struct StampedPatch {
    #[serde(flatten)]
    pub patch: DocumentPatch,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_document_applies_defaults() {
        let input = NewDocument::from_json(&json!({
            "title": "Ancient Forest",
            "document_type": "gdd"
        }))
        .unwrap();
        let doc = Document::new(input);

        assert!(!doc.id.is_empty());
        assert_eq!(doc.version, 1);
        assert_eq!(doc.created_at, doc.updated_at);
        assert!(doc.content.is_empty());
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_new_document_rejects_unknown_type() {
        let err = NewDocument::from_json(&json!({
            "title": "Sheet",
            "document_type": "spreadsheet"
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "document_type"));
    }

    #[test]
    fn test_patch_ignores_server_managed_fields() {
        let patch = DocumentPatch::from_json(&json!({
            "id": "spoofed",
            "version": 99,
            "created_at": "2020-01-01T00:00:00Z",
            "title": "Renamed"
        }))
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert!(patch.document_type.is_none());
    }

    #[test]
    fn test_patch_rejects_unknown_field() {
        let err = DocumentPatch::from_json(&json!({"owner": "someone"})).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "owner"));
    }

    #[test]
    fn test_stamped_patch_serializes_only_supplied_fields() {
        let stamped = StampedPatch {
            patch: DocumentPatch {
                tags: Some(vec!["lore".into()]),
                ..DocumentPatch::default()
            },
            updated_at: Utc::now(),
            version: 2,
        };
        let value = serde_json::to_value(&stamped).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(value.get("title").is_none());
        assert_eq!(value["version"], json!(2));
    }
}
