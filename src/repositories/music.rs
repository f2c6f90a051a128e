//! Music track repository.

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Collection, MusicTrack, NewMusicTrack, Realm};
use crate::store::{QueryExt, DEFAULT_LIMIT};

use super::insert_entity;

#[derive(Debug, Clone)]
pub struct ListMusicParams {
    pub realm: Option<Realm>,
    pub mood: Option<String>,
    pub limit: usize,
}

impl Default for ListMusicParams {
    fn default() -> Self {
        Self {
            realm: None,
            mood: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Repository for MusicTrack operations.
#[derive(FromContext, Clone)]
pub struct MusicRepository {
    store: AppStore,
}

impl MusicRepository {
    pub async fn create(&self, input: NewMusicTrack) -> Result<MusicTrack, AppError> {
        let track = MusicTrack::new(input);
        insert_entity(&self.store, &track).await?;

        tracing::info!(id = %track.id, realm = %track.realm, "Created music track '{}'", track.name);
        Ok(track)
    }

    pub async fn list(&self, params: ListMusicParams) -> Result<Vec<MusicTrack>, AppError> {
        self.store
            .query(Collection::MusicTracks)
            .eq_opt("realm", params.realm.map(|r| r.as_str()))
            .eq_opt("mood", params.mood)
            .limit(params.limit)
            .fetch_all_as()
            .await
    }

    /// Tracks whose name contains `query`, ignoring case.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<MusicTrack>, AppError> {
        self.store
            .query(Collection::MusicTracks)
            .contains_any(&["name"], query)
            .limit(limit)
            .fetch_all_as()
            .await
    }
}
