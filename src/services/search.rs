//! Keyword search across all content collections.

use serde::Serialize;

use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Character, Document, MusicTrack, Quest, Weapon};
use crate::repositories::{
    CharacterRepository, DocumentRepository, MusicRepository, QuestRepository, WeaponRepository,
};

/// Per-collection cap when the caller sets none.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Matches grouped by collection.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub documents: Vec<Document>,
    pub characters: Vec<Character>,
    pub weapons: Vec<Weapon>,
    pub quests: Vec<Quest>,
    pub music: Vec<MusicTrack>,
}

/// Fans a keyword out to every searchable collection.
///
/// Searched fields: document title and tags, character name and
/// description, weapon name and lore, quest title and description, music
/// track name. Assets are not searched.
#[derive(FromContext, Clone)]
pub struct SearchService {
    documents: DocumentRepository,
    characters: CharacterRepository,
    weapons: WeaponRepository,
    quests: QuestRepository,
    music: MusicRepository,
}

impl SearchService {
    /// Runs the per-collection searches concurrently, each capped at `limit`.
    ///
    /// Any failing sub-search fails the whole search.
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResults, AppError> {
        let (documents, characters, weapons, quests, music) = futures::try_join!(
            self.documents.search(query, limit),
            self.characters.search(query, limit),
            self.weapons.search(query, limit),
            self.quests.search(query, limit),
            self.music.search(query, limit),
        )?;

        tracing::debug!(
            query,
            documents = documents.len(),
            characters = characters.len(),
            weapons = weapons.len(),
            quests = quests.len(),
            music = music.len(),
            "Search complete"
        );

        Ok(SearchResults {
            documents,
            characters,
            weapons,
            quests,
            music,
        })
    }
}
