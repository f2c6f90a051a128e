//! Data access layer, one repository per entity type.
//!
//! Repositories translate entity operations into document store calls and
//! are resolved from the [`Context`](crate::context::Context) with the
//! `FromContext` derive macro.

mod asset;
mod character;
mod document;
mod music;
mod quest;
mod weapon;

pub use asset::{AssetRepository, ListAssetsParams};
pub use character::{CharacterRepository, ListCharactersParams};
pub use document::{DocumentRepository, ListDocumentsParams};
pub use music::{ListMusicParams, MusicRepository};
pub use quest::{ListQuestsParams, QuestRepository};
pub use weapon::{ListWeaponsParams, WeaponRepository};

use crate::context::AppStore;
use crate::error::AppError;
use crate::models::Entity;
use crate::store::Record;

/// Inserts an entity into its collection.
async fn insert_entity<T: Entity>(store: &AppStore, entity: &T) -> Result<(), AppError> {
    store
        .insert(T::COLLECTION, Record::from_entity(entity)?)
        .await
}

/// Fetches an entity by id.
async fn find_entity<T: Entity>(store: &AppStore, id: &str) -> Result<Option<T>, AppError> {
    store
        .find_one(T::COLLECTION, id)
        .await?
        .map(Record::decode)
        .transpose()
}
