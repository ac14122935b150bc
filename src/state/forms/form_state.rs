//! Form state store for the contact form

use super::field::{Field, FormValues};
use super::validator::{validate, FieldErrors};

/// Trait for focus navigation across a form's rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Focus index of the submit button row
pub const SUBMIT_BUTTON_INDEX: usize = 3;

/// Contact form: values, last validation result and submission flag
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub values: FormValues,
    /// Only replaced by [`ContactForm::run_validation`]
    pub errors: FieldErrors,
    pub submission: SubmissionState,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Replace one field's value. Errors are left as they are until the next
    /// validation pass.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    /// Validate the current values and publish the result, replacing any
    /// previous errors. Returns true when the form is valid.
    pub fn run_validation(&mut self) -> bool {
        self.errors = validate(&self.values);
        self.errors.is_empty()
    }

    /// Error for a field from the last validation pass
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Field under focus, `None` when the submit button is focused
    pub fn active(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn on_submit_button(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        self.edit_active(|value| value.push(c));
    }

    /// Remove the last character from the focused field
    pub fn pop_char(&mut self) {
        self.edit_active(|value| {
            value.pop();
        });
    }

    /// Insert a line break, only in multiline fields
    pub fn push_newline(&mut self) {
        if self.active().is_some_and(Field::is_multiline) {
            self.edit_active(|value| value.push('\n'));
        }
    }

    /// Clear all values after a delivered message
    pub fn reset_values(&mut self) {
        self.values = FormValues::default();
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(field) = self.active() {
            let mut value = self.values.get(field).to_owned();
            edit(&mut value);
            self.update_field(field, value);
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        // Three fields plus the submit button row
        Field::ALL.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}
