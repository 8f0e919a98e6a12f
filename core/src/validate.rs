// Input validation helpers
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Checks `value` against a basic `local@domain.tld` pattern after trimming
/// surrounding whitespace.
///
/// ```
/// use kompkit_core::is_email;
///
/// assert!(is_email("user@example.com"));
/// assert!(!is_email("invalid@"));
/// assert!(is_email("  test@domain.org  "));
/// ```
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}
