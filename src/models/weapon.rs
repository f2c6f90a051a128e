//! Weapon sheets.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AppError;

use super::schema::FieldReader;
use super::{generate_ulid, Collection, Entity, Fields, WeaponType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    pub weapon_type: WeaponType,
    pub lore: String,
    /// Damage per element or hit type.
    #[serde(default)]
    pub damage_profile: BTreeMap<String, i64>,
    #[serde(default)]
    pub combo_path: Vec<String>,
    /// Upgrade tiers, each an open map of modifiers.
    #[serde(default)]
    pub upgrade_tree: BTreeMap<String, Fields>,
    #[serde(default)]
    pub vfx_sfx_notes: String,
    #[serde(default)]
    pub accessibility_notes: String,
    #[serde(default)]
    pub assets: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Weapon {
    const COLLECTION: Collection = Collection::Weapons;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWeapon {
    pub name: String,
    pub weapon_type: WeaponType,
    pub lore: String,
    pub damage_profile: BTreeMap<String, i64>,
    pub combo_path: Vec<String>,
    pub upgrade_tree: BTreeMap<String, Fields>,
    pub vfx_sfx_notes: String,
    pub accessibility_notes: String,
    pub assets: Vec<String>,
}

impl NewWeapon {
    pub fn from_json(body: &JsonValue) -> Result<Self, AppError> {
        let reader = FieldReader::new(body)?;
        Ok(Self {
            name: reader.required("name")?,
            weapon_type: reader.required("weapon_type")?,
            lore: reader.required("lore")?,
            damage_profile: reader.int_map("damage_profile")?,
            combo_path: reader.or_default("combo_path")?,
            upgrade_tree: reader.or_default("upgrade_tree")?,
            vfx_sfx_notes: reader.or_default("vfx_sfx_notes")?,
            accessibility_notes: reader.or_default("accessibility_notes")?,
            assets: reader.or_default("assets")?,
        })
    }
}

impl Weapon {
    pub fn new(input: NewWeapon) -> Self {
        Self {
            id: generate_ulid(),
            name: input.name,
            weapon_type: input.weapon_type,
            lore: input.lore,
            damage_profile: input.damage_profile,
            combo_path: input.combo_path,
            upgrade_tree: input.upgrade_tree,
            vfx_sfx_notes: input.vfx_sfx_notes,
            accessibility_notes: input.accessibility_notes,
            assets: input.assets,
            created_at: Utc::now(),
        }
    }
}
