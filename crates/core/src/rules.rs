//! Field-shape rules shared by the per-entity validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Pattern for a plausible `local-part@domain.tld` address.
///
/// The final label must be at least two ASCII letters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// True when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with `message` when `value` is blank.
pub fn require_present(value: &str, message: &str) -> Result<(), CoreError> {
    if is_blank(value) {
        return Err(CoreError::validation(message));
    }
    Ok(())
}

/// Check an email address against [`EMAIL_PATTERN`]. The value is not trimmed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
