//! Entry creation modal — the data entry form for cataloguing a new Pokémon.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::{DexEntry, PokemonType, Stats, parse_dex_number, validate_name};
use crate::tui::action::Action;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the entry name.
const NAME: usize = 0;
/// Field index for the dex number.
const NUMBER: usize = 1;
/// Field index for height.
const HEIGHT: usize = 2;
/// Field index for weight.
const WEIGHT: usize = 3;
/// Field index for the HP base stat.
const HP: usize = 4;
/// Field index for the Attack base stat.
const ATTACK: usize = 5;
/// Field index for the Defense base stat.
const DEFENSE: usize = 6;
/// Field index for the Sp. Atk base stat.
const SP_ATK: usize = 7;
/// Field index for the Sp. Def base stat.
const SP_DEF: usize = 8;
/// Field index for the Speed base stat.
const SPEED: usize = 9;
/// Field index for the evolves-from entry.
const EVOLVES_FROM: usize = 10;
/// Field index for the generation.
const GENERATION: usize = 11;
/// Field index for the first ability.
const ABILITY1: usize = 12;
/// Field index for the second ability.
const ABILITY2: usize = 13;
/// Field index for the hidden ability.
const HIDDEN_ABILITY: usize = 14;
/// Field index for the image path.
const IMAGE: usize = 15;

/// State for the entry creation modal.
#[derive(Debug, Clone)]
pub struct EntryCreateState {
    form: Form,
    type1: Option<PokemonType>,
    type2: Option<PokemonType>,
    duplicate_type: bool,
    general_error: Option<String>,
}

impl Default for EntryCreateState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryCreateState {
    /// Creates a new entry form with empty fields and both type slots unset.
    ///
    /// Two unset slots compare equal, so the duplicate flag starts true.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Name", true),
                FormField::new("Dex Number", true),
                FormField::new("Height", false),
                FormField::new("Weight", false),
                FormField::new("HP", false),
                FormField::new("Attack", false),
                FormField::new("Defense", false),
                FormField::new("Sp. Atk", false),
                FormField::new("Sp. Def", false),
                FormField::new("Speed", false),
                FormField::new("Evolves From", false),
                FormField::new("Generation", false),
                FormField::new("Ability 1", false),
                FormField::new("Ability 2", false),
                FormField::new("Hidden Ability", false),
                FormField::new("Image Path", false),
            ]),
            type1: None,
            type2: None,
            duplicate_type: true,
            general_error: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Alt+t/s cycle the type slots forward; Shift+Alt+T/S cycle backward
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('t') => {
                    self.cycle_type1(true);
                    return Action::None;
                }
                KeyCode::Char('s') => {
                    self.cycle_type2(true);
                    return Action::None;
                }
                _ => {}
            }
        }
        const ALT_SHIFT: KeyModifiers = KeyModifiers::ALT.union(KeyModifiers::SHIFT);
        if key.modifiers == ALT_SHIFT {
            match key.code {
                KeyCode::Char('T') => {
                    self.cycle_type1(false);
                    return Action::None;
                }
                KeyCode::Char('S') => {
                    self.cycle_type2(false);
                    return Action::None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::CloseCreate,
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the primary type slot.
    pub fn type1(&self) -> Option<PokemonType> {
        self.type1
    }

    /// Returns the secondary type slot.
    pub fn type2(&self) -> Option<PokemonType> {
        self.type2
    }

    /// Returns `true` if the two type slots currently hold the same value.
    ///
    /// This is a warning indicator only; it never blocks submission.
    pub fn duplicate_type(&self) -> bool {
        self.duplicate_type
    }

    /// Selects a value for the primary type slot and recomputes the
    /// duplicate flag.
    pub fn select_type1(&mut self, value: Option<PokemonType>) {
        self.type1 = value;
        self.update_duplicate_flag();
    }

    /// Selects a value for the secondary type slot and recomputes the
    /// duplicate flag.
    pub fn select_type2(&mut self, value: Option<PokemonType>) {
        self.type2 = value;
        self.update_duplicate_flag();
    }

    /// Records a chosen image file: stores the path in the image field.
    ///
    /// Silently a no-op when the path has no file name component (the
    /// "no file selected" case).
    pub fn choose_image(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return;
        }
        self.form.set_value(IMAGE, path.display().to_string());
    }

    /// Returns the final path component of the image field, if one is set.
    pub fn image_file_name(&self) -> Option<String> {
        let value = self.form.value(IMAGE);
        if value.is_empty() {
            return None;
        }
        Path::new(value)
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from)
    }

    /// Sets a general error message not tied to any specific field.
    pub fn set_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Resets all state back to initial defaults.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Recomputes the duplicate flag by comparing the two slots for equality.
    ///
    /// `None` is a normal comparable value here: two unset slots are equal.
    fn update_duplicate_flag(&mut self) {
        self.duplicate_type = self.type1 == self.type2;
    }

    /// Cycles the primary type slot forward or backward, wrapping around.
    fn cycle_type1(&mut self, forward: bool) {
        self.select_type1(PokemonType::cycle_slot(self.type1, forward));
    }

    /// Cycles the secondary type slot forward or backward, wrapping around.
    fn cycle_type2(&mut self, forward: bool) {
        self.select_type2(PokemonType::cycle_slot(self.type2, forward));
    }

    /// Validates the form and constructs a [`DexEntry`].
    ///
    /// The duplicate-type flag is not consulted: same-type selections submit
    /// with the warning still showing.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;

        let name = self.form.value(NAME).to_string();
        let number = self.form.value(NUMBER).to_string();

        // Validate each field individually to show all errors at once.
        if let Err(e) = validate_name(&name) {
            self.form.set_error(NAME, e.to_string());
        }
        if let Err(e) = parse_dex_number(&number) {
            self.form.set_error(NUMBER, e.to_string());
        }

        if self.form.has_errors() {
            return Action::None;
        }

        let image_text = self.form.value(IMAGE);
        let image = (!image_text.is_empty())
            .then(|| PathBuf::from(image_text))
            .filter(|p| p.file_name().is_some());

        let stats = Stats {
            hp: self.form.value(HP).to_string(),
            attack: self.form.value(ATTACK).to_string(),
            defense: self.form.value(DEFENSE).to_string(),
            sp_atk: self.form.value(SP_ATK).to_string(),
            sp_def: self.form.value(SP_DEF).to_string(),
            speed: self.form.value(SPEED).to_string(),
        };

        match DexEntry::new(
            name,
            &number,
            (self.type1, self.type2),
            image,
            self.form.value(HEIGHT).to_string(),
            self.form.value(WEIGHT).to_string(),
            stats,
            self.form.value(EVOLVES_FROM).to_string(),
            self.form.value(GENERATION).to_string(),
            [
                self.form.value(ABILITY1).to_string(),
                self.form.value(ABILITY2).to_string(),
            ],
            self.form.value(HIDDEN_ABILITY).to_string(),
        ) {
            Ok(entry) => Action::CreateEntry(entry),
            Err(e) => {
                // Shouldn't happen since we validated above, but handle gracefully.
                self.form.set_error(NAME, e.to_string());
                Action::None
            }
        }
    }
}

/// Formats a type slot for the selector header.
fn slot_label(slot: Option<PokemonType>) -> String {
    match slot {
        Some(ty) => ty.to_string(),
        None => "none".to_string(),
    }
}

/// Renders the entry creation modal over the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_entry_create(state: &EntryCreateState, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Entry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, form_area, error_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(24),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    // Header: type selectors + chosen image name
    let type1_style = match state.type1() {
        Some(ty) => Style::default().fg(ty.color()),
        None => Style::default().fg(Color::DarkGray),
    };
    let type2_style = if state.duplicate_type() {
        Style::default().fg(Color::Red)
    } else {
        match state.type2() {
            Some(ty) => Style::default().fg(ty.color()),
            None => Style::default().fg(Color::DarkGray),
        }
    };

    let mut header_spans = vec![
        Span::styled("Type 1: ", Style::default().fg(Color::White)),
        Span::styled(slot_label(state.type1()), type1_style),
        Span::raw("    "),
        Span::styled("Type 2: ", Style::default().fg(Color::White)),
        Span::styled(slot_label(state.type2()), type2_style),
    ];
    if state.duplicate_type() {
        header_spans.push(Span::styled(
            "  (duplicate)",
            Style::default().fg(Color::Red),
        ));
    }

    let image_line = match state.image_file_name() {
        Some(name) => Line::from(Span::styled(
            format!("Image: {name}"),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            "Image: none",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(
        Paragraph::new(vec![Line::from(header_spans), image_line]),
        header_area,
    );

    // Form fields, two columns
    draw_form(state.form(), frame, form_area, 2);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next  Alt+t/s: type 1/2  Shift+Alt: reverse  Enter: create  Esc: cancel",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
