//! Weapon repository.

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Collection, NewWeapon, Weapon, WeaponType};
use crate::store::{QueryExt, DEFAULT_LIMIT};

use super::insert_entity;

#[derive(Debug, Clone)]
pub struct ListWeaponsParams {
    pub weapon_type: Option<WeaponType>,
    pub limit: usize,
}

impl Default for ListWeaponsParams {
    fn default() -> Self {
        Self {
            weapon_type: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Repository for Weapon operations.
#[derive(FromContext, Clone)]
pub struct WeaponRepository {
    store: AppStore,
}

impl WeaponRepository {
    pub async fn create(&self, input: NewWeapon) -> Result<Weapon, AppError> {
        let weapon = Weapon::new(input);
        insert_entity(&self.store, &weapon).await?;

        tracing::info!(id = %weapon.id, weapon_type = %weapon.weapon_type, "Created weapon '{}'", weapon.name);
        Ok(weapon)
    }

    pub async fn list(&self, params: ListWeaponsParams) -> Result<Vec<Weapon>, AppError> {
        self.store
            .query(Collection::Weapons)
            .eq_opt("weapon_type", params.weapon_type.map(|t| t.as_str()))
            .limit(params.limit)
            .fetch_all_as()
            .await
    }

    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Weapon>, AppError> {
        self.store
            .query(Collection::Weapons)
            .contains_any(&["name", "lore"], query)
            .limit(limit)
            .fetch_all_as()
            .await
    }
}
