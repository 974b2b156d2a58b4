/// Validation functions for submitted Gmail addresses
pub mod validation;

/// # Variation Generator
///
/// Pure transformation from one Gmail address to the deduplicated list of
/// casing and numeric-suffix variations of its local-part.
///
/// Non-matching input yields an empty list rather than an error; callers that
/// want a user-facing message run [`validate_gmail_input`](crate::handlers::validation::gmail::validate_gmail_input)
/// first.
pub mod variations;
