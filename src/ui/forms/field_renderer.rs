//! Field rendering utilities for forms

use crate::state::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one input box. Errors turn the border red; the message itself is
/// drawn separately by [`draw_field_error`].
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    has_error: bool,
    is_active: bool,
    accent: Color,
) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(accent));

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        value.split('\n').map(|l| Line::from(l.to_string())).collect()
    };

    if is_active {
        if value.is_empty() {
            lines[0].spans.insert(0, cursor);
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let mut paragraph = Paragraph::new(lines).block(block);
    if field.is_multiline() {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }
    frame.render_widget(paragraph, area);
}

/// Draw the validation message under a field, if any
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let text =
            Paragraph::new(format!("  {message}")).style(Style::default().fg(Color::LightRed));
        frame.render_widget(text, area);
    }
}
