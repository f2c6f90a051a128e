//! Closed value sets shared by the content entities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares a closed, snake_case string enum with `as_str`, `all`,
/// `Display` and `FromStr`.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Returns the wire representation of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Returns every value in declaration order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!(
                        "Invalid {} '{}'. Valid values: {}",
                        $label,
                        s,
                        [$($value),+].join(", ")
                    )),
                }
            }
        }
    };
}

closed_enum! {
    /// Kind of game design document.
    DocumentType, "document type" {
        Gdd => "gdd",
        ConceptArt => "concept_art",
        CharacterDesign => "character_design",
        WeaponSheet => "weapon_sheet",
        MusicSystem => "music_system",
        Dialogue => "dialogue",
    }
}

closed_enum! {
    /// In-game zone shared by characters, quests and music tracks.
    Realm, "realm" {
        Forest => "forest",
        Mountain => "mountain",
        Underworld => "underworld",
        Galaxy => "galaxy",
        HubVillage => "hub_village",
    }
}

closed_enum! {
    /// Weapon archetype.
    WeaponType, "weapon type" {
        Sword => "sword",
        Spear => "spear",
        Bow => "bow",
        Chakram => "chakram",
        Staff => "staff",
        Greatsword => "greatsword",
    }
}

closed_enum! {
    /// Emotional state keyed in a character's expression sheet.
    Emotion, "emotion" {
        Joy => "joy",
        Calm => "calm",
        Fear => "fear",
        Rage => "rage",
        Sorrow => "sorrow",
    }
}
