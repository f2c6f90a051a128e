//! Character repository.

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Character, Collection, NewCharacter, Realm};
use crate::store::{QueryExt, DEFAULT_LIMIT};

use super::{find_entity, insert_entity};

/// Filters for listing characters.
#[derive(Debug, Clone)]
pub struct ListCharactersParams {
    pub realm: Option<Realm>,
    pub character_type: Option<String>,
    pub limit: usize,
}

impl Default for ListCharactersParams {
    fn default() -> Self {
        Self {
            realm: None,
            character_type: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Repository for Character operations.
#[derive(FromContext, Clone)]
pub struct CharacterRepository {
    store: AppStore,
}

impl CharacterRepository {
    pub async fn create(&self, input: NewCharacter) -> Result<Character, AppError> {
        let character = Character::new(input);
        insert_entity(&self.store, &character).await?;

        tracing::info!(id = %character.id, realm = %character.realm, "Created character '{}'", character.name);
        Ok(character)
    }

    pub async fn list(&self, params: ListCharactersParams) -> Result<Vec<Character>, AppError> {
        self.store
            .query(Collection::Characters)
            .eq_opt("realm", params.realm.map(|r| r.as_str()))
            .eq_opt("character_type", params.character_type)
            .limit(params.limit)
            .fetch_all_as()
            .await
    }

    /// Get a character by ID, failing with `NotFound` if absent.
    pub async fn get(&self, id: &str) -> Result<Character, AppError> {
        find_entity(&self.store, id)
            .await?
            .ok_or_else(|| AppError::not_found(Collection::Characters, id))
    }

    /// Characters whose name or description contains `query`, ignoring case.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Character>, AppError> {
        self.store
            .query(Collection::Characters)
            .contains_any(&["name", "description"], query)
            .limit(limit)
            .fetch_all_as()
            .await
    }
}
