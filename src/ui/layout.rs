//! Layout components (form card, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form card grows
const CARD_MAX_WIDTH: u16 = 72;

/// Split the screen into a centered form card and a status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(chunks[0]);

    (card, chunks[1])
}

/// Draw the status bar with the submission state and key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);

    let mut spans = if app.form.is_submitting() {
        vec![Span::styled(
            " Sending message... ",
            Style::default().fg(Color::Yellow),
        )]
    } else {
        vec![Span::raw(" ")]
    };

    spans.extend([
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled("Ctrl+S", key_style),
        Span::raw(": send  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ]);

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
