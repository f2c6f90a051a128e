//! Adaptive music tracks.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;

use super::schema::FieldReader;
use super::{generate_ulid, Collection, Entity, Realm};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicTrack {
    pub id: String,
    pub name: String,
    pub realm: Realm,
    pub mood: String,
    /// Beats per minute.
    pub tempo: i64,
    /// Musical key, e.g. "D minor".
    pub key: String,
    #[serde(default)]
    pub instrumentation: Vec<String>,
    #[serde(default)]
    pub transition_rules: String,
    /// Layer name to description, e.g. `"combat" -> "add war drums"`.
    #[serde(default)]
    pub intensity_layers: BTreeMap<String, String>,
    /// Audio file in the asset collection, if uploaded.
    #[serde(default)]
    pub asset_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for MusicTrack {
    const COLLECTION: Collection = Collection::MusicTracks;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMusicTrack {
    pub name: String,
    pub realm: Realm,
    pub mood: String,
    pub tempo: i64,
    pub key: String,
    pub instrumentation: Vec<String>,
    pub transition_rules: String,
    pub intensity_layers: BTreeMap<String, String>,
    pub asset_id: Option<String>,
}

impl NewMusicTrack {
    pub fn from_json(body: &JsonValue) -> Result<Self, AppError> {
        let reader = FieldReader::new(body)?;
        Ok(Self {
            name: reader.required("name")?,
            realm: reader.required("realm")?,
            mood: reader.required("mood")?,
            tempo: reader.required_int("tempo")?,
            key: reader.required("key")?,
            instrumentation: reader.or_default("instrumentation")?,
            transition_rules: reader.or_default("transition_rules")?,
            intensity_layers: reader.or_default("intensity_layers")?,
            asset_id: reader.optional("asset_id")?,
        })
    }
}

impl MusicTrack {
    pub fn new(input: NewMusicTrack) -> Self {
        Self {
            id: generate_ulid(),
            name: input.name,
            realm: input.realm,
            mood: input.mood,
            tempo: input.tempo,
            key: input.key,
            instrumentation: input.instrumentation,
            transition_rules: input.transition_rules,
            intensity_layers: input.intensity_layers,
            asset_id: input.asset_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_music_track_optional_asset() {
        let input = NewMusicTrack::from_json(&json!({
            "name": "Whispering Canopy",
            "realm": "forest",
            "mood": "serene",
            "tempo": 72,
            "key": "D minor"
        }))
        .unwrap();
        let track = MusicTrack::new(input);
        assert_eq!(track.asset_id, None);
        assert!(track.intensity_layers.is_empty());
    }

    #[test]
    fn test_music_track_requires_integer_tempo() {
        let err = NewMusicTrack::from_json(&json!({
            "name": "Whispering Canopy",
            "realm": "forest",
            "mood": "serene",
            "tempo": "slow",
            "key": "D minor"
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "tempo"));
    }

    #[test]
    fn test_music_track_accepts_integral_float_tempo() {
        let input = NewMusicTrack::from_json(&json!({
            "name": "Night Drums",
            "realm": "underworld",
            "mood": "tense",
            "tempo": 90.0,
            "key": "D minor"
        }))
        .unwrap();
        assert_eq!(input.tempo, 90);
    }
}
