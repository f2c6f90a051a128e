//! Named collections, one per entity type.

use serde::{Deserialize, Serialize};

/// A logical grouping of records of one entity type in the document store.
///
/// Collection names double as table names in the PostgreSQL backend, so the
/// set is closed and every name is a plain lowercase identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Documents,
    Characters,
    Weapons,
    Quests,
    MusicTracks,
    Assets,
}

impl Collection {
    /// Returns the storage name of this collection.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Documents => "documents",
            Collection::Characters => "characters",
            Collection::Weapons => "weapons",
            Collection::Quests => "quests",
            Collection::MusicTracks => "music_tracks",
            Collection::Assets => "assets",
        }
    }

    /// Human-readable name of a single record, used in error messages.
    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Documents => "Document",
            Collection::Characters => "Character",
            Collection::Weapons => "Weapon",
            Collection::Quests => "Quest",
            Collection::MusicTracks => "Music track",
            Collection::Assets => "Asset",
        }
    }

    /// Returns every collection in dashboard order.
    pub fn all() -> &'static [Collection] {
        &[
            Collection::Documents,
            Collection::Characters,
            Collection::Weapons,
            Collection::Quests,
            Collection::MusicTracks,
            Collection::Assets,
        ]
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
