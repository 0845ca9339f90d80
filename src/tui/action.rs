//! Actions returned by screen event handlers.

use crate::model::DexEntry;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state, drive the store, and
/// navigate between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Open the entry-create modal over the dex list.
    OpenCreate,
    /// Close the entry-create modal without submitting.
    CloseCreate,
    /// Persist a newly assembled entry, then schedule its detail view.
    CreateEntry(DexEntry),
    /// Open the detail view for the entry with the given dex number.
    ShowDetail(String),
    /// Delete the entry with the given dex number from the store.
    DeleteEntry(String),
    /// Export the whole dex to CSV.
    ExportDex,
    /// Quit the application.
    Quit,
}
