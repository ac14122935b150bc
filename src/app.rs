//! Application state and core logic

use crate::config::ContactConfig;
use crate::state::{ContactForm, Form, NotificationQueue};
use crate::submission::{Outcome, SubmissionController, SubmitAttempt};
use crate::transport::{EmailJsClient, MessageTransport};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Contact form store
    pub form: ContactForm,
    /// Outcome notifications waiting to be dismissed
    pub notifications: NotificationQueue,
    /// Validate/send/settle driver
    controller: SubmissionController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App that delivers through EmailJS
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let missing = config.missing_credentials();
        if !missing.is_empty() {
            tracing::warn!(?missing, "EmailJS credentials not configured, sending will fail");
        }

        let transport = EmailJsClient::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create an App on top of any transport
    pub fn with_transport(transport: Arc<dyn MessageTransport>, config: &ContactConfig) -> Self {
        Self {
            form: ContactForm::new(),
            notifications: NotificationQueue::default(),
            controller: SubmissionController::new(
                transport,
                config.recipient_label.clone(),
                config.timeout(),
            ),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply a settled submission, if any. Called once per event loop tick.
    pub fn tick(&mut self) -> Option<Outcome> {
        self.controller.poll(&mut self.form, &mut self.notifications)
    }

    /// Submit the form
    pub fn submit(&mut self) -> SubmitAttempt {
        self.controller.request_submit(&mut self.form)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Notification overlay is modal
        if self.notifications.is_showing() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notifications.dismiss();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Enter if self.form.on_submit_button() => {
                self.submit();
            }
            KeyCode::Enter => match self.form.active() {
                Some(field) if field.is_multiline() => self.form.push_newline(),
                _ => self.form.next_field(),
            },
            KeyCode::Char(c) if !ctrl => self.form.push_char(c),
            KeyCode::Backspace => self.form.pop_char(),
            _ => {}
        }
    }
}
