//! Field rendering utilities for forms

use crate::state::{FieldError, FieldId, FieldState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the input box
pub const FIELD_HEIGHT: u16 = 3;
/// Rows reserved below the input for the error text
pub const ERROR_HEIGHT: u16 = 1;

/// Draw a labeled single-line input
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    id: FieldId,
    field: &FieldState,
    is_active: bool,
    is_invalid: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.value.as_str(), style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", id.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the inline error text, or nothing when the field shows no error
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<FieldError>) {
    if let Some(err) = error {
        let line = Paragraph::new(Span::styled(
            format!(" {err}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}

/// Draw the key hint line
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
