use crate::error::GmailInputError;
use once_cell::sync::Lazy;
use regex::Regex;

static GMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s@]+@gmail\.com$").expect("gmail address pattern is valid")
});

/// Returns `true` when `input` looks like a plain Gmail address.
///
/// The local-part may contain anything except whitespace and `@`; the domain
/// must be exactly `gmail.com`, in any letter case.
pub fn is_valid_gmail(input: &str) -> bool {
    GMAIL_RE.is_match(input)
}

/// Checks an already trimmed address before it is handed to the generator.
///
/// # Errors
/// - [`GmailInputError::Empty`] when `input` is empty
/// - [`GmailInputError::InvalidFormat`] when it is not a Gmail address
pub fn validate_gmail_input(input: &str) -> Result<(), GmailInputError> {
    if input.is_empty() {
        return Err(GmailInputError::Empty);
    }
    if !is_valid_gmail(input) {
        return Err(GmailInputError::InvalidFormat);
    }
    Ok(())
}
