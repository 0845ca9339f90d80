//! Entry detail screen — full view of a single dex entry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::DexEntry;
use crate::storage::DexStore;
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the entry detail screen.
#[derive(Debug, Clone, Default)]
pub struct EntryDetailState {
    /// The dex number this screen is addressed by.
    number: String,
    /// The loaded entry, or `None` when the number is not in the dex.
    entry: Option<DexEntry>,
    /// Error message if loading from the store failed.
    error: Option<String>,
}

impl EntryDetailState {
    /// Creates an empty state. Call [`prepare`](Self::prepare) before showing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the entry with the given dex number from the store.
    ///
    /// A missing entry is not an error; the screen renders a not-found body.
    /// This is where a silently-failed create lands the user.
    pub fn prepare(&mut self, store: &DexStore, number: String) {
        self.number = number;
        self.error = None;
        match store.get(&self.number) {
            Ok(entry) => self.entry = entry,
            Err(e) => {
                self.entry = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::DexList),
            KeyCode::Char('?') | KeyCode::F(1) => Action::Navigate(Screen::Help),
            _ => Action::None,
        }
    }

    /// Returns the dex number this screen shows.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Returns the loaded entry, if it was found.
    pub fn entry(&self) -> Option<&DexEntry> {
        self.entry.as_ref()
    }

    /// Returns the load error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Builds the body lines for a loaded entry.
fn entry_lines(entry: &DexEntry) -> Vec<Line<'_>> {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);

    let mut type_spans = vec![Span::styled("Types: ", label_style)];
    let badges: Vec<&crate::model::PokemonType> = [entry.types.0.as_ref(), entry.types.1.as_ref()]
        .into_iter()
        .flatten()
        .collect();
    if badges.is_empty() {
        type_spans.push(Span::styled("none", value_style));
    }
    for (i, ty) in badges.iter().enumerate() {
        if i > 0 {
            type_spans.push(Span::raw(" "));
        }
        type_spans.push(Span::styled(
            format!(" {ty} "),
            Style::default().fg(Color::Black).bg(ty.color()),
        ));
    }

    let abilities = {
        let named: Vec<&str> = entry
            .abilities
            .iter()
            .map(String::as_str)
            .filter(|a| !a.is_empty())
            .collect();
        if named.is_empty() {
            "-".to_string()
        } else {
            named.join(", ")
        }
    };
    let hidden = if entry.hidden_ability.is_empty() {
        "-"
    } else {
        entry.hidden_ability.as_str()
    };
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

    vec![
        Line::from(vec![
            Span::styled(
                format!("#{} {}", entry.number, entry.name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(type_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled("HP ", label_style),
            Span::styled(or_dash(&entry.stats.hp), value_style),
            Span::styled("  Atk ", label_style),
            Span::styled(or_dash(&entry.stats.attack), value_style),
            Span::styled("  Def ", label_style),
            Span::styled(or_dash(&entry.stats.defense), value_style),
            Span::styled("  SpA ", label_style),
            Span::styled(or_dash(&entry.stats.sp_atk), value_style),
            Span::styled("  SpD ", label_style),
            Span::styled(or_dash(&entry.stats.sp_def), value_style),
            Span::styled("  Spe ", label_style),
            Span::styled(or_dash(&entry.stats.speed), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Height: ", label_style),
            Span::styled(or_dash(&entry.height), value_style),
            Span::styled("  Weight: ", label_style),
            Span::styled(or_dash(&entry.weight), value_style),
        ]),
        Line::from(vec![
            Span::styled("Abilities: ", label_style),
            Span::styled(abilities, value_style),
            Span::styled("  Hidden: ", label_style),
            Span::styled(hidden.to_string(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Evolves from: ", label_style),
            Span::styled(or_dash(&entry.evolves_from), value_style),
            Span::styled("  Generation: ", label_style),
            Span::styled(or_dash(&entry.generation), value_style),
        ]),
        Line::from(vec![
            Span::styled("Image: ", label_style),
            Span::styled(
                entry.image_file_name().unwrap_or("none").to_string(),
                value_style,
            ),
        ]),
        Line::from(vec![
            Span::styled("Catalogued: ", label_style),
            Span::styled(
                entry.created_at.format("%Y-%m-%d").to_string(),
                value_style,
            ),
        ]),
    ]
}

/// Renders the entry detail screen.
#[mutants::skip]
pub fn draw_entry_detail(state: &EntryDetailState, frame: &mut Frame, area: Rect) {
    let title = format!(" Entry #{} ", state.number());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    if let Some(err) = state.error() {
        let body = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(body, body_area);
    } else if let Some(entry) = state.entry() {
        frame.render_widget(Paragraph::new(entry_lines(entry)), body_area);
    } else {
        let lines = vec![
            Line::from(""),
            Line::from(format!("#{} is not in the dex.", state.number())),
        ];
        frame.render_widget(Paragraph::new(lines), body_area);
    }

    let footer =
        Paragraph::new("q/Esc: back  F1: help").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{PokemonType, Stats};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_entry(number: &str, name: &str) -> DexEntry {
        DexEntry::new(
            name.to_string(),
            number,
            (Some(PokemonType::Grass), Some(PokemonType::Poison)),
            None,
            "0.7".to_string(),
            "6.9".to_string(),
            Stats {
                hp: "45".to_string(),
                attack: "49".to_string(),
                defense: "49".to_string(),
                sp_atk: "65".to_string(),
                sp_def: "65".to_string(),
                speed: "45".to_string(),
            },
            String::new(),
            "1".to_string(),
            ["Overgrow".to_string(), String::new()],
            "Chlorophyll".to_string(),
        )
        .unwrap()
    }

    fn make_store() -> (tempfile::TempDir, DexStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DexStore::with_path(dir.path()).unwrap();
        (dir, store)
    }

    mod prepare {
        use super::*;

        #[test]
        fn loads_existing_entry() {
            let (_dir, store) = make_store();
            store.create(&make_entry("1", "Bulbasaur")).unwrap();

            let mut state = EntryDetailState::new();
            state.prepare(&store, "1".to_string());
            assert_eq!(state.number(), "1");
            assert_eq!(state.entry().map(|e| e.name.as_str()), Some("Bulbasaur"));
            assert_eq!(state.error(), None);
        }

        #[test]
        fn missing_entry_is_not_an_error() {
            let (_dir, store) = make_store();
            let mut state = EntryDetailState::new();
            state.prepare(&store, "151".to_string());
            assert_eq!(state.number(), "151");
            assert!(state.entry().is_none());
            assert_eq!(state.error(), None);
        }

        #[test]
        fn replaces_previous_entry() {
            let (_dir, store) = make_store();
            store.create(&make_entry("1", "Bulbasaur")).unwrap();

            let mut state = EntryDetailState::new();
            state.prepare(&store, "1".to_string());
            assert!(state.entry().is_some());

            state.prepare(&store, "2".to_string());
            assert!(state.entry().is_none());
        }

        #[test]
        fn corrupt_store_sets_error() {
            let (dir, store) = make_store();
            std::fs::write(dir.path().join("dex.jsonl"), "{bad json}\n").unwrap();

            let mut state = EntryDetailState::new();
            state.prepare(&store, "1".to_string());
            assert!(state.entry().is_none());
            assert!(state.error().is_some());
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn q_returns_to_list() {
            let mut state = EntryDetailState::new();
            let action = state.handle_key(press(KeyCode::Char('q')));
            assert_eq!(action, Action::Navigate(Screen::DexList));
        }

        #[test]
        fn esc_returns_to_list() {
            let mut state = EntryDetailState::new();
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::DexList));
        }

        #[test]
        fn f1_opens_help() {
            let mut state = EntryDetailState::new();
            let action = state.handle_key(press(KeyCode::F(1)));
            assert_eq!(action, Action::Navigate(Screen::Help));
        }

        #[test]
        fn unhandled_key_returns_none() {
            let mut state = EntryDetailState::new();
            let action = state.handle_key(press(KeyCode::Char('x')));
            assert_eq!(action, Action::None);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_detail(state: &EntryDetailState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_entry_detail(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_entry_body() {
            let (_dir, store) = make_store();
            store.create(&make_entry("1", "Bulbasaur")).unwrap();
            let mut state = EntryDetailState::new();
            state.prepare(&store, "1".to_string());

            let output = render_detail(&state, 80, 20);
            assert!(output.contains("#1 Bulbasaur"), "should show header");
            assert!(output.contains("Grass"), "should show type badge");
            assert!(output.contains("Poison"), "should show second badge");
            assert!(output.contains("45"), "should show HP stat");
            assert!(output.contains("Overgrow"), "should show ability");
            assert!(output.contains("Chlorophyll"), "should show hidden ability");
        }

        #[test]
        fn renders_image_file_name() {
            let (_dir, store) = make_store();
            let mut entry = make_entry("25", "Pikachu");
            entry.image = Some(PathBuf::from("sprites/pikachu.png"));
            store.create(&entry).unwrap();
            let mut state = EntryDetailState::new();
            state.prepare(&store, "25".to_string());

            let output = render_detail(&state, 80, 20);
            assert!(
                output.contains("Image: pikachu.png"),
                "should show image file name"
            );
        }

        #[test]
        fn renders_not_found_body() {
            let (_dir, store) = make_store();
            let mut state = EntryDetailState::new();
            state.prepare(&store, "151".to_string());

            let output = render_detail(&state, 80, 20);
            assert!(output.contains("Entry #151"), "should show title");
            assert!(
                output.contains("#151 is not in the dex"),
                "should show not-found body"
            );
        }

        #[test]
        fn renders_store_error() {
            let (dir, store) = make_store();
            std::fs::write(dir.path().join("dex.jsonl"), "{bad json}\n").unwrap();
            let mut state = EntryDetailState::new();
            state.prepare(&store, "1".to_string());

            let output = render_detail(&state, 80, 20);
            assert!(output.contains("JSON error"), "should show store error");
        }

        #[test]
        fn renders_footer() {
            let state = EntryDetailState::new();
            let output = render_detail(&state, 80, 20);
            assert!(output.contains("q/Esc: back"), "should show footer");
        }
    }
}
