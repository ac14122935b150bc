//! Outcome notifications shown as a modal overlay

use ratatui::style::Color;
use std::collections::VecDeque;

/// Kind of outcome being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Styling hints for the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStyle {
    /// Confirm hint and highlight colour
    pub accent: Color,
    pub background: Color,
    pub foreground: Color,
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x7C, 0x3A, 0xED),
            background: Color::Rgb(0x1A, 0x1A, 0x1A),
            foreground: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// A single notification descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub style: NotificationStyle,
}

impl Notification {
    /// Message delivered
    pub fn sent() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Message Sent!".to_string(),
            body: "Your message has been sent successfully. We will get back to you soon!"
                .to_string(),
            style: NotificationStyle::default(),
        }
    }

    /// Delivery failed. The cause is never included.
    pub fn send_failed() -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Oops!".to_string(),
            body: "There was an error sending your message. Please try again later.".to_string(),
            style: NotificationStyle::default(),
        }
    }
}

/// Receives outcome notifications. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// FIFO of notifications waiting to be shown and dismissed
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    /// Notification currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    pub fn is_showing(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Dismiss the notification on screen, revealing the next one
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }
}
