//! Dex list screen — home table of all catalogued entries.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::DexEntry;
use crate::storage::{DexStore, StoreError};
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the dex list screen.
#[derive(Debug, Clone)]
pub struct DexListState {
    /// Cached entry list from the store, in dex-number order.
    entries: Vec<DexEntry>,
    /// Index of the currently highlighted entry, or `None` if the list is empty.
    selected: Option<usize>,
    /// Dex number awaiting y/n delete confirmation.
    confirm_delete: Option<String>,
    /// Error message from the last failed operation.
    error: Option<String>,
    /// Transient success message (e.g. after delete or export).
    notice: Option<String>,
}

impl Default for DexListState {
    fn default() -> Self {
        Self::new()
    }
}

impl DexListState {
    /// Creates an empty state. Call [`load`](Self::load) to populate from the store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            confirm_delete: None,
            error: None,
            notice: None,
        }
    }

    /// Loads the entry list from the store, updating selection state.
    ///
    /// The previous cursor position is kept when it still points at a row.
    pub fn load(&mut self, store: &DexStore) -> Result<(), StoreError> {
        self.entries = store.list()?;
        self.selected = if self.entries.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.entries.len() - 1))
        };
        self.confirm_delete = None;
        self.error = None;
        Ok(())
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if let Some(number) = self.confirm_delete.clone() {
            return match key.code {
                KeyCode::Char('y') => {
                    self.confirm_delete = None;
                    Action::DeleteEntry(number)
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.confirm_delete = None;
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Home => {
                if !self.entries.is_empty() {
                    self.selected = Some(0);
                }
                Action::None
            }
            KeyCode::End => {
                if !self.entries.is_empty() {
                    self.selected = Some(self.entries.len() - 1);
                }
                Action::None
            }
            KeyCode::Enter => self.show_current(),
            KeyCode::Char('n') => Action::OpenCreate,
            KeyCode::Char('d') => {
                self.confirm_delete = self.current_number();
                Action::None
            }
            KeyCode::Char('e') => Action::Navigate(Screen::Export),
            KeyCode::Char('?') | KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the cached entry list.
    pub fn entries(&self) -> &[DexEntry] {
        &self.entries
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the dex number awaiting delete confirmation, if any.
    pub fn confirm_delete(&self) -> Option<&str> {
        self.confirm_delete.as_deref()
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets an error message to display on this screen.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
        self.notice = None;
    }

    /// Returns the transient notice message, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Sets a transient notice message (shown in place of the footer).
    pub fn set_notice(&mut self, msg: String) {
        self.notice = Some(msg);
        self.error = None;
    }

    /// Returns the dex number of the highlighted entry, if any.
    fn current_number(&self) -> Option<String> {
        self.selected
            .and_then(|i| self.entries.get(i))
            .map(|e| e.number.clone())
    }

    /// Returns an action to open the detail view for the highlighted entry.
    fn show_current(&self) -> Action {
        self.current_number()
            .map_or(Action::None, Action::ShowDetail)
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.entries.len() => Some(i + 1),
            other => other,
        };
    }
}

/// Formats the type pair for a table cell (`"Grass/Poison"`, `"Water"`, `"-"`).
fn types_label(entry: &DexEntry) -> String {
    match entry.types {
        (Some(t1), Some(t2)) => format!("{t1}/{t2}"),
        (Some(t1), None) => t1.to_string(),
        (None, Some(t2)) => t2.to_string(),
        (None, None) => "-".to_string(),
    }
}

/// Renders the dex list screen.
#[mutants::skip]
pub fn draw_dex_list(state: &DexListState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Dex ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.entries().is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("The dex is empty."),
            Line::from("Press 'n' to catalogue a new entry."),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(vec!["No.", "Name", "Types", "HP", "Atk", "Def", "Gen"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if state.selected() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                entry.number.clone(),
                entry.name.clone(),
                types_label(entry),
                entry.stats.hp.clone(),
                entry.stats.attack.clone(),
                entry.stats.defense.clone(),
                entry.generation.clone(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(4),
    ];

    let table = Table::new(rows, widths).header(header);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(table, table_area);

    let footer = Paragraph::new("n: new  Enter: view  d: delete  e: export  F1: help  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    // Confirmation, error, and notice lines replace the footer when present
    if let Some(number) = state.confirm_delete() {
        let name = state
            .entries()
            .iter()
            .find(|e| e.number == number)
            .map(|e| e.name.as_str())
            .unwrap_or("");
        let prompt = Paragraph::new(format!("Delete #{number} {name}? (y/n)"))
            .style(Style::default().fg(Color::Red));
        frame.render_widget(prompt, footer_area);
    } else if let Some(err) = state.error() {
        let err_line = Paragraph::new(err)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(err_line, footer_area);
    } else if let Some(notice) = state.notice() {
        let notice_line = Paragraph::new(notice)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        frame.render_widget(notice_line, footer_area);
    }
}
