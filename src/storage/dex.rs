use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use super::error::StoreError;
use crate::model::DexEntry;

/// Manages JSONL-based dex persistence.
///
/// The whole dex lives in a single `dex.jsonl` file, one [`DexEntry`] per
/// line. Creating an entry is a single-line append; deleting rewrites the
/// file without the removed line.
pub struct DexStore {
    base_path: PathBuf,
}

impl DexStore {
    /// Creates a store using the XDG data directory.
    ///
    /// The dex directory (`~/.local/share/fielddex/`) is created if it does
    /// not already exist.
    pub fn new() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        let base_path = data_dir.join("fielddex");
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Creates a store rooted at the given path.
    #[cfg(test)]
    pub(crate) fn with_path(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_path = path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Returns the path of the dex file.
    fn dex_path(&self) -> PathBuf {
        self.base_path.join("dex.jsonl")
    }

    /// Loads all entries sorted by dex number ascending.
    ///
    /// A missing dex file is an empty dex, not an error. Entries whose number
    /// does not parse (hand-edited files) sort last.
    pub fn list(&self) -> Result<Vec<DexEntry>, StoreError> {
        let file = match fs::File::open(self.dex_path()) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let mut entries = reader
            .lines()
            .map(|line| {
                let line = line?;
                serde_json::from_str(&line).map_err(StoreError::Json)
            })
            .collect::<Result<Vec<DexEntry>, StoreError>>()?;

        entries.sort_by_key(|e| e.number.parse::<u64>().unwrap_or(u64::MAX));
        Ok(entries)
    }

    /// Returns the entry with the given dex number, if it exists.
    pub fn get(&self, number: &str) -> Result<Option<DexEntry>, StoreError> {
        Ok(self.list()?.into_iter().find(|e| e.number == number))
    }

    /// Returns the number of entries in the dex.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }

    /// Appends a new entry, checking for duplicates first.
    ///
    /// Returns [`StoreError::DuplicateEntry`] if the dex already contains an
    /// entry with the same number; the file is not modified in that case.
    pub fn create(&self, entry: &DexEntry) -> Result<(), StoreError> {
        if self.get(&entry.number)?.is_some() {
            return Err(StoreError::DuplicateEntry {
                number: entry.number.clone(),
            });
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dex_path())?;
        serde_json::to_writer(&mut file, entry)?;
        writeln!(file)?;

        Ok(())
    }

    /// Deletes the entry with the given dex number, rewriting the dex file.
    ///
    /// Returns `true` if an entry was removed, `false` if the number was not
    /// in the dex.
    pub fn delete(&self, number: &str) -> Result<bool, StoreError> {
        let entries = self.list()?;
        let before = entries.len();
        let kept: Vec<DexEntry> = entries.into_iter().filter(|e| e.number != number).collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.write_all(&kept)?;
        Ok(true)
    }

    /// Writes the full dex file from scratch.
    fn write_all(&self, entries: &[DexEntry]) -> Result<(), StoreError> {
        let mut file = fs::File::create(self.dex_path())?;
        for entry in entries {
            serde_json::to_writer(&mut file, entry)?;
            writeln!(file)?;
        }
        Ok(())
    }
}
