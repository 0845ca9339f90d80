//! Help screen — scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static DEX_LIST_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "navigate"),
    ("Home / End", "first / last"),
    ("Enter", "open entry"),
    ("n", "new entry"),
    ("d", "delete entry (y/n to confirm)"),
    ("e", "export CSV"),
    ("q / Esc", "quit"),
    ("? / F1", "help"),
];

static ENTRY_CREATE_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter", "create entry"),
    ("Alt+t", "next primary type"),
    ("Shift+Alt+T", "prev primary type"),
    ("Alt+s", "next secondary type"),
    ("Shift+Alt+S", "prev secondary type"),
    ("Esc", "cancel"),
];

static ENTRY_DETAIL_KEYS: &[(&str, &str)] = &[("q / Esc", "back"), ("? / F1", "help")];

static EXPORT_KEYS: &[(&str, &str)] = &[("Enter", "export to CSV"), ("q / Esc", "back")];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top and origin [`Screen::DexList`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::DexList,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the origin screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Sets the origin screen to return to when help is dismissed.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::DexList => "Dex List",
        Screen::EntryDetail => "Entry Detail",
        Screen::Export => "Export",
        Screen::Help => "Help",
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content(origin: Screen) -> Vec<Line<'static>> {
    match origin {
        Screen::DexList => {
            // The create form opens as a modal over the list, so its keys
            // belong with the list's section.
            let mut lines = build_section("Dex List", DEX_LIST_KEYS);
            lines.extend(build_section("New Entry", ENTRY_CREATE_KEYS));
            lines
        }
        Screen::EntryDetail => build_section("Entry Detail", ENTRY_DETAIL_KEYS),
        Screen::Export => build_section("Export", EXPORT_KEYS),
        Screen::Help => build_section("Help", HELP_KEYS),
    }
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", screen_name(state.origin()));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(state.origin());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn new_initializes_scroll_to_zero() {
            let state = HelpState::new();
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn new_initializes_origin_to_dex_list() {
            let state = HelpState::new();
            assert_eq!(state.origin(), Screen::DexList);
        }

        #[test]
        fn default_works() {
            let state = HelpState::default();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.origin(), Screen::DexList);
        }
    }

    mod set_origin {
        use super::*;

        #[test]
        fn set_origin_stores_screen() {
            let mut state = HelpState::new();
            state.set_origin(Screen::EntryDetail);
            assert_eq!(state.origin(), Screen::EntryDetail);
        }

        #[test]
        fn origin_accessor_returns_value() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Export);
            assert_eq!(state.origin(), Screen::Export);
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn up_decrements_scroll() {
            let mut state = HelpState::new();
            state.scroll = 5;
            let action = state.handle_key(press(KeyCode::Up));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 4);
        }

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Up));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn down_increments_scroll() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Down));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn q_navigates_to_dex_list() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Char('q')));
            assert_eq!(action, Action::Navigate(Screen::DexList));
        }

        #[test]
        fn esc_navigates_to_dex_list() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::DexList));
        }

        #[test]
        fn q_navigates_to_origin() {
            let mut state = HelpState::new();
            state.set_origin(Screen::EntryDetail);
            let action = state.handle_key(press(KeyCode::Char('q')));
            assert_eq!(action, Action::Navigate(Screen::EntryDetail));
        }

        #[test]
        fn esc_navigates_to_origin() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Export);
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::Export));
        }

        #[test]
        fn unknown_key_returns_none() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Char('x')));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 0);
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn reset_sets_scroll_to_zero() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 2);
            state.reset();
            assert_eq!(state.scroll(), 0);
        }
    }

    mod screen_name_fn {
        use super::*;

        #[test]
        fn all_variants_have_expected_names() {
            assert_eq!(screen_name(Screen::DexList), "Dex List");
            assert_eq!(screen_name(Screen::EntryDetail), "Entry Detail");
            assert_eq!(screen_name(Screen::Export), "Export");
            assert_eq!(screen_name(Screen::Help), "Help");
        }
    }

    mod help_content_fn {
        use super::*;

        fn content_text(screen: Screen) -> String {
            help_content(screen)
                .into_iter()
                .flat_map(|l| l.spans.into_iter())
                .map(|s| s.content.into_owned())
                .collect()
        }

        #[test]
        fn each_screen_returns_nonempty_content() {
            let screens = [
                Screen::DexList,
                Screen::EntryDetail,
                Screen::Export,
                Screen::Help,
            ];
            for screen in screens {
                assert!(
                    !help_content(screen).is_empty(),
                    "{screen:?} should have content"
                );
            }
        }

        #[test]
        fn content_includes_section_title() {
            assert!(content_text(Screen::DexList).contains("Dex List"));
            assert!(content_text(Screen::EntryDetail).contains("Entry Detail"));
        }

        #[test]
        fn dex_list_content_includes_modal_keys() {
            let text = content_text(Screen::DexList);
            assert!(text.contains("New Entry"), "should include modal section");
            assert!(text.contains("Alt+t"), "should include type cycling keys");
        }

        #[test]
        fn detail_content_excludes_other_sections() {
            let text = content_text(Screen::EntryDetail);
            assert!(!text.contains("New Entry"), "should not include New Entry");
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

        fn render_help(state: &HelpState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_help(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn title_contains_help() {
            let state = HelpState::new();
            let output = render_help(&state, 80, 40);
            assert!(output.contains("Help"), "should show Help title");
        }

        #[test]
        fn title_includes_origin_screen_name() {
            let mut state = HelpState::new();
            state.set_origin(Screen::EntryDetail);
            let output = render_help(&state, 80, 40);
            assert!(
                output.contains("Entry Detail"),
                "title should include origin screen name"
            );
        }

        #[test]
        fn content_contains_dex_list() {
            let state = HelpState::new();
            let output = render_help(&state, 80, 40);
            assert!(output.contains("Dex List"), "should show Dex List section");
        }

        #[test]
        fn content_contains_export() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Export);
            let output = render_help(&state, 80, 40);
            assert!(
                output.contains("export to CSV"),
                "should show Export section content"
            );
        }

        #[test]
        fn renders_only_origin_screen_section() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Export);
            let output = render_help(&state, 80, 40);
            assert!(output.contains("Export"), "should show Export section");
            assert!(
                !output.contains("New Entry"),
                "should not show New Entry section"
            );
        }

        #[test]
        fn footer_contains_q_and_esc() {
            let state = HelpState::new();
            let output = render_help(&state, 80, 40);
            assert!(output.contains('q'), "footer should mention q");
            assert!(output.contains("Esc"), "footer should mention Esc");
        }
    }
}
