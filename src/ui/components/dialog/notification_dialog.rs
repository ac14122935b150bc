//! Notification dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notification, NotificationKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an outcome notification centered on the screen
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let style = notification.style;
    let (icon, accent) = match notification.kind {
        NotificationKind::Success => ("✔", Color::Green),
        NotificationKind::Error => ("✘", Color::Red),
    };

    let key_style = Style::default()
        .fg(style.accent)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            icon,
            title: &notification.title,
            accent,
            background: style.background,
            foreground: style.foreground,
            message: &notification.body,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
