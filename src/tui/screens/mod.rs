//! TUI screen implementations.

pub mod dex_list;
pub mod entry_create;
pub mod entry_detail;
pub mod export;
pub mod help;

pub use dex_list::{DexListState, draw_dex_list};
pub use entry_create::{EntryCreateState, draw_entry_create};
pub use entry_detail::{EntryDetailState, draw_entry_detail};
pub use export::{ExportState, draw_export};
pub use help::{HelpState, draw_help};
