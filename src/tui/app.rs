//! Top-level application state and event loop.

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::{Frame, Terminal};

use crate::storage::{DexStore, StoreError, default_export_path, export_csv};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    DexListState, EntryCreateState, EntryDetailState, ExportState, HelpState, draw_dex_list,
    draw_entry_create, draw_entry_detail, draw_export, draw_help,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// Delay between a successful create and the automatic jump to the new
/// entry's detail view.
const NAV_DELAY: Duration = Duration::from_millis(3000);

/// How long the event loop waits for input before running a tick.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// All screens the app can navigate between.
///
/// The entry-create form is not a screen; it opens as a modal over
/// [`Screen::DexList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Home table of all catalogued entries.
    DexList,
    /// Full view of a single entry.
    EntryDetail,
    /// Export the dex to CSV.
    Export,
    /// Show keybinding help.
    Help,
}

/// A scheduled navigation to an entry's detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingNav {
    /// Dex number of the entry to show.
    number: String,
    /// When the navigation fires.
    due: Instant,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    store: DexStore,
    dex_list: DexListState,
    detail: EntryDetailState,
    export: ExportState,
    help: HelpState,
    /// The entry-create modal, present while open.
    create: Option<EntryCreateState>,
    /// Deferred jump to a just-created entry. Cancelled by any explicit
    /// navigation before it fires.
    pending_nav: Option<PendingNav>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::DexList`] screen.
    ///
    /// A failed initial load is surfaced on the list screen rather than
    /// aborting startup.
    pub fn new(store: DexStore) -> Self {
        let mut dex_list = DexListState::new();
        if let Err(e) = dex_list.load(&store) {
            dex_list.set_error(e.to_string());
        }
        Self {
            screen: Screen::DexList,
            store,
            dex_list,
            detail: EntryDetailState::new(),
            export: ExportState::new(),
            help: HelpState::new(),
            create: None,
            pending_nav: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll for input → dispatch → tick → check quit.
    ///
    /// Polling with a timeout lets a scheduled navigation fire without
    /// waiting for the next keypress.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(POLL_TIMEOUT)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handles a key event: the open modal gets every key first, otherwise
    /// the key goes to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = if let Some(create) = self.create.as_mut() {
            create.handle_key(key)
        } else {
            match self.screen {
                Screen::DexList => self.dex_list.handle_key(key),
                Screen::EntryDetail => self.detail.handle_key(key),
                Screen::Export => self.export.handle_key(key),
                Screen::Help => self.help.handle_key(key),
            }
        };
        self.apply(action);
    }

    /// Fires the scheduled detail navigation once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .pending_nav
            .as_ref()
            .is_some_and(|pending| now >= pending.due);
        if due && let Some(pending) = self.pending_nav.take() {
            self.detail.prepare(&self.store, pending.number);
            self.screen = Screen::EntryDetail;
        }
    }

    /// Applies a screen action to the app state.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::OpenCreate => {
                // A fresh form every time the modal opens
                self.pending_nav = None;
                self.create = Some(EntryCreateState::new());
            }
            Action::CloseCreate => {
                self.create = None;
            }
            Action::CreateEntry(entry) => {
                let number = entry.number.clone();
                // A failed write leaves the dex unchanged; the detail view
                // shows not-found in that case.
                let _ = self.store.create(&entry);
                self.create = None;
                self.reload_list();
                self.pending_nav = Some(PendingNav {
                    number,
                    due: Instant::now() + NAV_DELAY,
                });
            }
            Action::ShowDetail(number) => {
                self.pending_nav = None;
                self.detail.prepare(&self.store, number);
                self.screen = Screen::EntryDetail;
            }
            Action::DeleteEntry(number) => self.delete_entry(&number),
            Action::ExportDex => self.export_dex(),
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Navigates to the given screen, cancelling any scheduled navigation
    /// and preparing the destination's state.
    fn navigate(&mut self, screen: Screen) {
        self.pending_nav = None;
        match screen {
            Screen::DexList => self.reload_list(),
            Screen::EntryDetail => {}
            Screen::Export => self.export.prepare(&self.store),
            Screen::Help => {
                self.help.set_origin(self.screen);
                self.help.reset();
            }
        }
        self.screen = screen;
    }

    /// Reloads the dex list from the store, surfacing errors on the screen.
    fn reload_list(&mut self) {
        if let Err(e) = self.dex_list.load(&self.store) {
            self.dex_list.set_error(e.to_string());
        }
    }

    /// Deletes the entry with the given dex number and reports the result
    /// on the list screen.
    fn delete_entry(&mut self, number: &str) {
        match self.store.delete(number) {
            Ok(true) => {
                self.reload_list();
                self.dex_list.set_notice(format!("Deleted #{number}"));
            }
            Ok(false) => self.dex_list.set_error(format!("No entry #{number}")),
            Err(e) => self.dex_list.set_error(e.to_string()),
        }
    }

    /// Exports the whole dex to the default CSV path.
    fn export_dex(&mut self) {
        let result = default_export_path(Utc::now().date_naive())
            .and_then(|path| self.export_to(&path));
        match result {
            Ok(()) => self.export.set_success(),
            Err(e) => self.export.set_error(e.to_string()),
        }
    }

    /// Writes all entries as CSV to the given path.
    fn export_to(&self, path: &Path) -> Result<(), StoreError> {
        let entries = self.store.list()?;
        export_csv(&entries, path)
    }

    /// Renders the status bar, the current screen, and the modal if open.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&mut self, frame: &mut Frame) {
        let [bar_area, screen_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        let ctx = StatusBarContext {
            entry_count: self.dex_list.entries().len(),
            pending_detail: self.pending_nav.as_ref().map(|p| p.number.clone()),
        };
        draw_status_bar(&ctx, frame, bar_area);

        match self.screen {
            Screen::DexList => draw_dex_list(&self.dex_list, frame, screen_area),
            Screen::EntryDetail => draw_entry_detail(&self.detail, frame, screen_area),
            Screen::Export => draw_export(&self.export, frame, screen_area),
            Screen::Help => draw_help(&self.help, frame, screen_area),
        }

        if let Some(create) = &self.create {
            draw_entry_create(create, frame, modal_area(screen_area));
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the entry-create modal is open.
    pub fn create_open(&self) -> bool {
        self.create.is_some()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the [`DexStore`].
    pub fn store(&self) -> &DexStore {
        &self.store
    }
}

/// Centers the entry-create modal over the screen area.
#[mutants::skip]
fn modal_area(area: Rect) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(90)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Percentage(85)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}
