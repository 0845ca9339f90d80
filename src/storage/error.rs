/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization or deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV formatting error occurred during export.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The platform does not provide a home directory.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// An entry with the same dex number already exists.
    ///
    /// Produced by [`crate::storage::DexStore::create`] when a duplicate is
    /// detected.
    #[error("dex number {number} is already catalogued")]
    DuplicateEntry {
        /// The dex number of the conflicting entry.
        number: String,
    },
}
