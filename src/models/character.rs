//! Characters and their expression sheets.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;

use super::schema::FieldReader;
use super::{generate_ulid, Collection, Emotion, Entity, Fields, Realm};

/// A playable or non-playable character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub description: String,
    pub realm: Realm,
    /// Free-form role, e.g. "guardian" or "merchant".
    pub character_type: String,
    /// Expression notes keyed by emotion.
    #[serde(default)]
    pub emotions: BTreeMap<Emotion, String>,
    #[serde(default)]
    pub stats: Fields,
    /// Referenced asset ids. Not checked against the asset collection.
    #[serde(default)]
    pub assets: Vec<String>,
    #[serde(default)]
    pub dialogue_lines: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Character {
    const COLLECTION: Collection = Collection::Characters;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCharacter {
    pub name: String,
    pub description: String,
    pub realm: Realm,
    pub character_type: String,
    pub emotions: BTreeMap<Emotion, String>,
    pub stats: Fields,
    pub assets: Vec<String>,
    pub dialogue_lines: Vec<String>,
}

impl NewCharacter {
    pub fn from_json(body: &JsonValue) -> Result<Self, AppError> {
        let reader = FieldReader::new(body)?;
        Ok(Self {
            name: reader.required("name")?,
            description: reader.required("description")?,
            realm: reader.required("realm")?,
            character_type: reader.required("character_type")?,
            emotions: reader.or_default("emotions")?,
            stats: reader.or_default("stats")?,
            assets: reader.or_default("assets")?,
            dialogue_lines: reader.or_default("dialogue_lines")?,
        })
    }
}

impl Character {
    pub fn new(input: NewCharacter) -> Self {
        Self {
            id: generate_ulid(),
            name: input.name,
            description: input.description,
            realm: input.realm,
            character_type: input.character_type,
            emotions: input.emotions,
            stats: input.stats,
            assets: input.assets,
            dialogue_lines: input.dialogue_lines,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_character_defaults() {
        let input = NewCharacter::from_json(&json!({
            "name": "Aria",
            "description": "Forest guardian",
            "realm": "forest",
            "character_type": "guardian"
        }))
        .unwrap();
        let character = Character::new(input);

        assert_eq!(character.realm, Realm::Forest);
        assert!(character.emotions.is_empty());
        assert!(character.stats.is_empty());
        assert!(character.dialogue_lines.is_empty());
    }

    #[test]
    fn test_character_rejects_unknown_emotion() {
        let err = NewCharacter::from_json(&json!({
            "name": "Aria",
            "description": "Forest guardian",
            "realm": "forest",
            "character_type": "guardian",
            "emotions": {"boredom": "yawns"}
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "emotions"));
    }

    #[test]
    fn test_character_requires_description() {
        let err = NewCharacter::from_json(&json!({
            "name": "Aria",
            "realm": "forest",
            "character_type": "guardian"
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "description"));
    }
}
