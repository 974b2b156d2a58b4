/// Checks that a submitted address is a plain Gmail address before any
/// variations are generated.
///
/// The pattern accepted is `^[^\s@]+@gmail\.com$`, compared case-insensitively:
/// - no whitespace anywhere in the local-part
/// - exactly one `@`
/// - the domain is `gmail.com` in any letter case
///
/// # Examples
/// ```
/// use gmail_variator::handlers::validation::gmail::is_valid_gmail;
///
/// assert!(is_valid_gmail("john.doe@gmail.com"));
/// assert!(is_valid_gmail("John.Doe@GMAIL.COM"));
/// assert!(!is_valid_gmail("john doe@gmail.com"));
/// assert!(!is_valid_gmail("john@yahoo.com"));
/// ```
pub mod gmail;
