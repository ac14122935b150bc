//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (card_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, card_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlay goes last so it sits on top of the form
    if let Some(notification) = app.notifications.current() {
        components::render_notification_dialog(frame, notification);
    }
}
