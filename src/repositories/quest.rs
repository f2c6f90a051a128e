//! Quest repository.

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Collection, NewQuest, Quest, Realm};
use crate::store::{QueryExt, DEFAULT_LIMIT};

use super::insert_entity;

#[derive(Debug, Clone)]
pub struct ListQuestsParams {
    pub realm: Option<Realm>,
    pub quest_type: Option<String>,
    pub limit: usize,
}

impl Default for ListQuestsParams {
    fn default() -> Self {
        Self {
            realm: None,
            quest_type: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Repository for Quest operations.
#[derive(FromContext, Clone)]
pub struct QuestRepository {
    store: AppStore,
}

impl QuestRepository {
    pub async fn create(&self, input: NewQuest) -> Result<Quest, AppError> {
        let quest = Quest::new(input);
        insert_entity(&self.store, &quest).await?;

        tracing::info!(id = %quest.id, realm = %quest.realm, "Created quest '{}'", quest.title);
        Ok(quest)
    }

    pub async fn list(&self, params: ListQuestsParams) -> Result<Vec<Quest>, AppError> {
        self.store
            .query(Collection::Quests)
            .eq_opt("realm", params.realm.map(|r| r.as_str()))
            .eq_opt("quest_type", params.quest_type)
            .limit(params.limit)
            .fetch_all_as()
            .await
    }

    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Quest>, AppError> {
        self.store
            .query(Collection::Quests)
            .contains_any(&["title", "description"], query)
            .limit(limit)
            .fetch_all_as()
            .await
    }
}
