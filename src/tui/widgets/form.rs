//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown on the field border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
}

impl FormField {
    /// Creates a new form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            error: None,
            required,
        }
    }
}

/// A multi-field text form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the field at `index`, if it exists.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Inserts a character at the end of the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    /// Deletes the last character from the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Clears the value of the field at `index`.
    pub fn clear_value(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value.clear();
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Resets all field values and errors.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focus = 0;
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders a form within the given area, laying the fields out over
/// `columns` equal-width columns. Fields fill the first column top to
/// bottom before spilling into the next, matching the Tab order.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect, columns: usize) {
    if form.fields.is_empty() {
        return;
    }

    let row_height = 3_u16;
    let columns = columns.max(1);
    let per_column = form.fields.len().div_ceil(columns);

    let col_areas =
        Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(area);

    for (col, chunk) in form.fields.chunks(per_column).enumerate() {
        let constraints: Vec<Constraint> =
            chunk.iter().map(|_| Constraint::Length(row_height)).collect();
        let rows = Layout::vertical(constraints).split(col_areas[col]);

        for (row, field) in chunk.iter().enumerate() {
            let is_focused = col * per_column + row == form.focus;

            let border_color = if field.error.is_some() {
                Color::Red
            } else if is_focused {
                Color::Yellow
            } else {
                Color::DarkGray
            };

            let label = if field.required {
                format!("{} *", field.label)
            } else {
                field.label.clone()
            };

            let block = Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color));

            let mut spans = vec![Span::raw(&field.value)];
            if is_focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }

            let paragraph = Paragraph::new(Line::from(spans)).block(block);
            frame.render_widget(paragraph, rows[row]);

            // Draw the error overlapping the bottom edge of the field
            if let Some(ref err) = field.error {
                let error_line =
                    Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
                let err_area = Rect {
                    x: rows[row].x + 2,
                    y: rows[row].y + row_height.saturating_sub(1),
                    width: rows[row].width.saturating_sub(4),
                    height: 1,
                };
                frame.render_widget(error_line, err_area);
            }
        }
    }
}
