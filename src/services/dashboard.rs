//! Dashboard counters.

use serde::Serialize;

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::Collection;

/// Record count per collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub documents: u64,
    pub characters: u64,
    pub weapons: u64,
    pub quests: u64,
    pub music_tracks: u64,
    pub assets: u64,
}

#[derive(FromContext, Clone)]
pub struct DashboardService {
    store: AppStore,
}

impl DashboardService {
    /// Counts every collection concurrently.
    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let (documents, characters, weapons, quests, music_tracks, assets) = futures::try_join!(
            self.store.count(Collection::Documents),
            self.store.count(Collection::Characters),
            self.store.count(Collection::Weapons),
            self.store.count(Collection::Quests),
            self.store.count(Collection::MusicTracks),
            self.store.count(Collection::Assets),
        )?;

        Ok(DashboardStats {
            documents,
            characters,
            weapons,
            quests,
            music_tracks,
            assets,
        })
    }
}
