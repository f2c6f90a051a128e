//! Shared entity plumbing: identifiers, open maps and the `Entity` trait.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use ulid::Ulid;

use super::Collection;

/// Open key → value map for free-form content (`content`, `stats`, `rewards`, ...).
///
/// Values are tagged JSON values: string, number, boolean, null, nested map
/// or nested list.
pub type Fields = serde_json::Map<String, JsonValue>;

/// A content record persisted in its own collection.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// The collection records of this type live in.
    const COLLECTION: Collection;

    /// Server-assigned identifier.
    fn id(&self) -> &str;
}

/// Generates a new ULID string.
pub fn generate_ulid() -> String {
    Ulid::new().to_string()
}
