//! Contact form validation rules

use super::field::{Field, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field → error message. A field that passes is absent.
pub type FieldErrors = BTreeMap<Field, String>;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const MESSAGE_REQUIRED: &str = "Message is required";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// Blank after trimming whitespace and byte order marks
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Check every field and return a fresh error map.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&values.name) {
        errors.insert(Field::Name, NAME_REQUIRED.to_string());
    }

    if is_blank(&values.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED.to_string());
    } else if !EMAIL_PATTERN.is_match(&values.email) {
        errors.insert(Field::Email, EMAIL_INVALID.to_string());
    }

    if is_blank(&values.message) {
        errors.insert(Field::Message, MESSAGE_REQUIRED.to_string());
    }

    errors
}
