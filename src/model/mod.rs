mod entry;
mod poke_type;
mod validation;

pub use entry::{DexEntry, Stats};
pub use poke_type::PokemonType;
pub use validation::{ValidationError, parse_dex_number, validate_name};
