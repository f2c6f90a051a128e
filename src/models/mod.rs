//! Content entities, their closed enums and create-input validation.

mod asset;
mod character;
mod collection;
mod document;
mod entity;
mod enums;
mod music;
mod quest;
pub mod schema;
mod weapon;

pub use asset::{Asset, NewAsset, UNKNOWN_FILE_TYPE};
pub use character::{Character, NewCharacter};
pub use collection::Collection;
pub use document::{Document, DocumentPatch, NewDocument, StampedPatch};
pub use entity::{generate_ulid, Entity, Fields};
pub use enums::{DocumentType, Emotion, Realm, WeaponType};
pub use music::{MusicTrack, NewMusicTrack};
pub use quest::{NewQuest, Quest, MIN_REQUIRED_LEVEL};
pub use schema::FieldReader;
pub use weapon::{NewWeapon, Weapon};
