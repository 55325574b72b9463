//! Contact info validation.
//!
//! A contact is accepted when its trimmed form is either an email address or a
//! phone number. Both patterns are kept exactly as the web form shipped them so
//! that values accepted here are accepted everywhere else.

use crate::constants::{ERROR_CONTACT_INVALID, ERROR_CONTACT_REQUIRED};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Word characters, hyphen or dot, `@`, a single domain label, then a TLD of two
/// or more letters. Case-insensitive. `\w` is restricted to ASCII.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^[\w.-]+@[\w-]+\.[a-z]{2,}$").expect("email pattern is valid"));

/// Optional leading `+`, then 7 to 20 digits, spaces, hyphens, parentheses or dots.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s().-]{7,20}$").expect("phone pattern is valid"));

/// Reasons a contact value is rejected at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{}", ERROR_CONTACT_REQUIRED)]
    EmptyContact,
    #[error("{}", ERROR_CONTACT_INVALID)]
    InvalidFormat,
}

/// Returns true if the trimmed value looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Returns true if the trimmed value looks like a phone number.
pub fn is_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value.trim())
}

/// Returns true if the trimmed value is a valid email address or phone number.
pub fn validate(value: &str) -> bool {
    is_email(value) || is_phone(value)
}

/// Validate a raw contact value and return its trimmed form.
pub fn validate_contact(raw: &str) -> Result<&str, ContactError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContactError::EmptyContact);
    }
    if !validate(trimmed) {
        return Err(ContactError::InvalidFormat);
    }
    Ok(trimmed)
}
