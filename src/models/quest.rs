//! Quests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;

use super::schema::FieldReader;
use super::{generate_ulid, Collection, Entity, Fields, Realm};

/// Lowest level a quest may require.
pub const MIN_REQUIRED_LEVEL: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub realm: Realm,
    pub quest_type: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub rewards: Fields,
    pub required_level: i64,
    #[serde(default)]
    pub estimated_duration: String,
    /// Character ids. Not checked against the character collection.
    #[serde(default)]
    pub npcs_involved: Vec<String>,
    #[serde(default)]
    pub assets: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Quest {
    const COLLECTION: Collection = Collection::Quests;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewQuest {
    pub title: String,
    pub description: String,
    pub realm: Realm,
    pub quest_type: String,
    pub objectives: Vec<String>,
    pub rewards: Fields,
    pub required_level: i64,
    pub estimated_duration: String,
    pub npcs_involved: Vec<String>,
    pub assets: Vec<String>,
}

impl NewQuest {
    pub fn from_json(body: &JsonValue) -> Result<Self, AppError> {
        let reader = FieldReader::new(body)?;
        Ok(Self {
            title: reader.required("title")?,
            description: reader.required("description")?,
            realm: reader.required("realm")?,
            quest_type: reader.required("quest_type")?,
            objectives: reader.or_default("objectives")?,
            rewards: reader.or_default("rewards")?,
            required_level: reader.int_at_least(
                "required_level",
                MIN_REQUIRED_LEVEL,
                MIN_REQUIRED_LEVEL,
            )?,
            estimated_duration: reader.or_default("estimated_duration")?,
            npcs_involved: reader.or_default("npcs_involved")?,
            assets: reader.or_default("assets")?,
        })
    }
}

impl Quest {
    pub fn new(input: NewQuest) -> Self {
        Self {
            id: generate_ulid(),
            title: input.title,
            description: input.description,
            realm: input.realm,
            quest_type: input.quest_type,
            objectives: input.objectives,
            rewards: input.rewards,
            required_level: input.required_level,
            estimated_duration: input.estimated_duration,
            npcs_involved: input.npcs_involved,
            assets: input.assets,
            created_at: Utc::now(),
        }
    }
}
