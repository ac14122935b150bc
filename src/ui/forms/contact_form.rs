//! Contact form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{Field, NotificationStyle};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draw the "Get In Touch" card with its headline, the three fields and the
/// send button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let accent = NotificationStyle::default().accent;
    let form = &app.form;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Heading and headline
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Min(5),                // Message
            Constraint::Length(1),             // Message error
            Constraint::Length(BUTTON_HEIGHT), // Send button
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new(vec![
        Line::styled("Get In Touch", Style::default().add_modifier(Modifier::BOLD)),
        Line::styled("Ready to Get Started?", Style::default().fg(accent)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let error = form.error_for(field);
        draw_field(
            frame,
            chunks[1 + i * 2],
            field,
            form.values.get(field),
            error.is_some(),
            form.active() == Some(field),
            accent,
        );
        draw_field_error(frame, chunks[2 + i * 2], error);
    }

    let label = if form.is_submitting() {
        "Sending..."
    } else {
        "Send Message ➤"
    };
    render_button(
        frame,
        chunks[7],
        label,
        accent,
        form.on_submit_button(),
        !form.is_submitting(),
    );
}
