//! Status bar widget — persistent one-line dex context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from the store so screens
/// can render without touching storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Number of entries currently in the dex.
    pub entry_count: usize,
    /// Dex number of a scheduled detail-view navigation, if one is pending.
    pub pending_detail: Option<String>,
}

/// Renders a one-line status bar showing the dex context.
///
/// Display format (left-aligned):
/// - No pending navigation: `fielddex  151 entries`
/// - Pending navigation:    `fielddex  151 entries  opening #25...` (Yellow)
///
/// A single entry renders as `1 entry`.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let noun = if ctx.entry_count == 1 {
        "entry"
    } else {
        "entries"
    };

    let mut spans: Vec<Span> = vec![
        Span::styled("fielddex", cyan),
        Span::styled(format!("  {} {noun}", ctx.entry_count), cyan),
    ];

    if let Some(number) = &ctx.pending_detail {
        spans.push(Span::styled(format!("  opening #{number}..."), yellow));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
