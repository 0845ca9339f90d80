//! Dex persistence (JSONL) and CSV export.
//!
//! The whole dex is stored as a single `dex.jsonl` file with one entry per
//! line. This makes creating an entry a single-line file append with no
//! read/rewrite.

mod dex;
mod error;
mod export;

pub use dex::DexStore;
pub use error::StoreError;
pub use export::{default_export_path, export_csv};
