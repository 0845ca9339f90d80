use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::poke_type::PokemonType;
use super::validation::{ValidationError, parse_dex_number, validate_name};

/// Base stat block. Values are kept as the free-form text the user entered;
/// nothing downstream computes with them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub sp_atk: String,
    pub sp_def: String,
    pub speed: String,
}

/// A single Pokédex entry.
///
/// `number` holds the canonical decimal text of the dex number (`"7"`, never
/// `"007"`); it is the entry's identity in the store. `types` is the
/// (primary, secondary) selection pair, where `None` means the slot was left
/// unset. All other fields are copied verbatim from the create form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexEntry {
    pub name: String,
    pub number: String,
    pub types: (Option<PokemonType>, Option<PokemonType>),
    pub image: Option<PathBuf>,
    pub height: String,
    pub weight: String,
    pub stats: Stats,
    pub evolves_from: String,
    pub generation: String,
    pub abilities: [String; 2],
    pub hidden_ability: String,
    pub created_at: DateTime<Utc>,
}

impl DexEntry {
    /// Creates a new entry, validating the name and dex number.
    ///
    /// `number` is the raw text from the form; it must parse as a positive
    /// whole number and is stored in canonical decimal form.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        number: &str,
        types: (Option<PokemonType>, Option<PokemonType>),
        image: Option<PathBuf>,
        height: String,
        weight: String,
        stats: Stats,
        evolves_from: String,
        generation: String,
        abilities: [String; 2],
        hidden_ability: String,
    ) -> Result<Self, ValidationError> {
        validate_name(&name)?;
        let number = parse_dex_number(number)?;

        Ok(Self {
            name,
            number: number.to_string(),
            types,
            image,
            height,
            weight,
            stats,
            evolves_from,
            generation,
            abilities,
            hidden_ability,
            created_at: Utc::now(),
        })
    }

    /// Returns the final path component of the image, if an image is set and
    /// its path ends in a file name.
    pub fn image_file_name(&self) -> Option<&str> {
        self.image
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }
}
