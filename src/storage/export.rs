use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::error::StoreError;
use crate::model::DexEntry;

/// Column order of the CSV export.
static CSV_HEADER: &[&str] = &[
    "number",
    "name",
    "type1",
    "type2",
    "height",
    "weight",
    "hp",
    "attack",
    "defense",
    "sp_atk",
    "sp_def",
    "speed",
    "evolves_from",
    "generation",
    "ability1",
    "ability2",
    "hidden_ability",
    "image",
    "catalogued",
];

/// Exports the dex as a CSV file at the given path.
///
/// Writes a header row followed by one row per entry, in the order given.
/// Unset types and the unset image render as empty cells.
pub fn export_csv(entries: &[DexEntry], path: &Path) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for entry in entries {
        let image = entry
            .image
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let catalogued = entry.created_at.format("%Y-%m-%d").to_string();
        writer.write_record([
            entry.number.as_str(),
            entry.name.as_str(),
            entry.types.0.map(|t| t.name()).unwrap_or(""),
            entry.types.1.map(|t| t.name()).unwrap_or(""),
            entry.height.as_str(),
            entry.weight.as_str(),
            entry.stats.hp.as_str(),
            entry.stats.attack.as_str(),
            entry.stats.defense.as_str(),
            entry.stats.sp_atk.as_str(),
            entry.stats.sp_def.as_str(),
            entry.stats.speed.as_str(),
            entry.evolves_from.as_str(),
            entry.generation.as_str(),
            entry.abilities[0].as_str(),
            entry.abilities[1].as_str(),
            entry.hidden_ability.as_str(),
            image.as_str(),
            catalogued.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the default export path for the given date.
///
/// Format: `~/fielddex-{YYYYMMDD}.csv`.
///
/// Returns `StoreError::NoHomeDir` if the home directory cannot be
/// determined.
pub fn default_export_path(date: NaiveDate) -> Result<PathBuf, StoreError> {
    let filename = format!("fielddex-{}.csv", date.format("%Y%m%d"));
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(filename))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use super::*;
    use crate::model::{PokemonType, Stats};

    fn make_entry(number: &str, name: &str) -> DexEntry {
        let mut entry = DexEntry::new(
            name.to_string(),
            number,
            (Some(PokemonType::Grass), Some(PokemonType::Poison)),
            None,
            "0.7".to_string(),
            "6.9".to_string(),
            Stats::default(),
            String::new(),
            "1".to_string(),
            ["Overgrow".to_string(), String::new()],
            String::new(),
        )
        .unwrap();
        entry.created_at = Utc.with_ymd_and_hms(2026, 2, 16, 12, 0, 0).unwrap();
        entry
    }

    // --- export_csv tests ---

    #[test]
    fn export_creates_file_with_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dex.csv");

        let entries = [make_entry("1", "Bulbasaur"), make_entry("4", "Charmander")];
        export_csv(&entries, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some(
                "number,name,type1,type2,height,weight,hp,attack,defense,sp_atk,sp_def,speed,\
                 evolves_from,generation,ability1,ability2,hidden_ability,image,catalogued"
            )
        );
        assert_eq!(
            lines.next(),
            Some("1,Bulbasaur,grass,poison,0.7,6.9,,,,,,,,1,Overgrow,,,,2026-02-16")
        );
        assert!(content.contains("Charmander"));
    }

    #[test]
    fn export_empty_dex_produces_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        export_csv(&[], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("number,name,"));
    }

    #[test]
    fn export_renders_unset_types_as_empty_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dex.csv");

        let mut entry = make_entry("132", "Ditto");
        entry.types = (None, None);
        export_csv(&[entry], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("132,Ditto,,,"));
    }

    #[test]
    fn export_includes_image_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dex.csv");

        let mut entry = make_entry("25", "Pikachu");
        entry.image = Some("sprites/pikachu.png".into());
        export_csv(&[entry], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("sprites/pikachu.png"));
    }

    #[test]
    fn export_quotes_names_containing_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dex.csv");

        export_csv(&[make_entry("122", "Mime, Mr.")], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Mime, Mr.\""));
    }

    // --- default_export_path tests ---

    #[test]
    fn default_path_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
        let path = default_export_path(date).unwrap();
        let filename = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(filename, "fielddex-20260216.csv");
    }

    #[test]
    fn default_path_is_in_home_directory() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
        let path = default_export_path(date).unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(path.parent().unwrap(), home);
    }
}
