//! Uploaded binary assets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{generate_ulid, Collection, Entity};

/// Media type recorded when an upload declares none.
pub const UNKNOWN_FILE_TYPE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    /// Public relative path, `uploads/<stored name>`.
    pub file_path: String,
    /// Declared MIME type of the upload.
    pub file_type: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Asset {
    const COLLECTION: Collection = Collection::Assets;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Metadata of an upload, decoded from the multipart form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub description: Option<String>,
}

impl Asset {
    /// Builds the record for bytes already written to `file_path`.
    pub fn new(input: NewAsset, file_path: String, file_type: Option<String>) -> Self {
        Self {
            id: generate_ulid(),
            name: input.name,
            file_path,
            file_type: file_type.unwrap_or_else(|| UNKNOWN_FILE_TYPE.to_string()),
            category: input.category,
            tags: input.tags,
            description: input.description,
            created_at: Utc::now(),
        }
    }
}
