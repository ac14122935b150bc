//! Form domain layer
//!
//! Field values, validation rules and the contact form store.

mod field;
mod form_state;
mod validator;

pub use field::Field;
pub use form_state::{ContactForm, Form, SubmissionState};

#[cfg(test)]
pub use field::FormValues;
#[cfg(test)]
pub use form_state::SUBMIT_BUTTON_INDEX;
#[cfg(test)]
pub use validator::{EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, NAME_REQUIRED};
