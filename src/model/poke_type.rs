use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Elemental type assigned to a Pokémon (up to two per entry).
///
/// Serializes as the lowercase type name (`"grass"`, `"poison"`, …), which is
/// the stable external spelling used in the dex file and the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

static ALL_TYPES: &[PokemonType] = &[
    PokemonType::Normal,
    PokemonType::Fire,
    PokemonType::Water,
    PokemonType::Electric,
    PokemonType::Grass,
    PokemonType::Ice,
    PokemonType::Fighting,
    PokemonType::Poison,
    PokemonType::Ground,
    PokemonType::Flying,
    PokemonType::Psychic,
    PokemonType::Bug,
    PokemonType::Rock,
    PokemonType::Ghost,
    PokemonType::Dragon,
    PokemonType::Dark,
    PokemonType::Steel,
    PokemonType::Fairy,
];

impl PokemonType {
    /// Returns the lowercase type name, matching the serde spelling.
    pub fn name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Returns all types in National Dex introduction order.
    pub fn all() -> &'static [PokemonType] {
        ALL_TYPES
    }

    /// Terminal color used when rendering the type as a badge.
    ///
    /// The palette follows the classic game type colors.
    #[mutants::skip]
    pub fn color(&self) -> Color {
        match self {
            PokemonType::Normal => Color::Rgb(168, 168, 120),
            PokemonType::Fire => Color::Rgb(240, 128, 48),
            PokemonType::Water => Color::Rgb(104, 144, 240),
            PokemonType::Electric => Color::Rgb(248, 208, 48),
            PokemonType::Grass => Color::Rgb(120, 200, 80),
            PokemonType::Ice => Color::Rgb(152, 216, 216),
            PokemonType::Fighting => Color::Rgb(192, 48, 40),
            PokemonType::Poison => Color::Rgb(160, 64, 160),
            PokemonType::Ground => Color::Rgb(224, 192, 104),
            PokemonType::Flying => Color::Rgb(168, 144, 240),
            PokemonType::Psychic => Color::Rgb(248, 88, 136),
            PokemonType::Bug => Color::Rgb(168, 184, 32),
            PokemonType::Rock => Color::Rgb(184, 160, 56),
            PokemonType::Ghost => Color::Rgb(112, 88, 152),
            PokemonType::Dragon => Color::Rgb(112, 56, 248),
            PokemonType::Dark => Color::Rgb(112, 88, 72),
            PokemonType::Steel => Color::Rgb(184, 184, 208),
            PokemonType::Fairy => Color::Rgb(238, 153, 172),
        }
    }

    /// Cycles a type slot forward or backward through `None` plus all types,
    /// wrapping around. `None` sits between [`PokemonType::Fairy`] and
    /// [`PokemonType::Normal`] in the cycle, so an unset slot reaches every
    /// value in 19 steps.
    pub fn cycle_slot(current: Option<PokemonType>, forward: bool) -> Option<PokemonType> {
        let pos = match current {
            None => 0,
            Some(ty) => ALL_TYPES.iter().position(|&x| x == ty).unwrap_or(0) + 1,
        };
        let len = ALL_TYPES.len() + 1;
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        if next == 0 { None } else { Some(ALL_TYPES[next - 1]) }
    }
}

/// Displays the type name with its first letter capitalized (`"Grass"`).
#[mutants::skip]
impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}
