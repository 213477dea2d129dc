//! Validation rules for the skill `name` field.
//!
//! Names use lowercase-hyphenated format (e.g., `pdf-tools`, `my-skill-1`).
//! When the format check fails, targeted hints are emitted for the common
//! mistakes so the overall message points at what to change.

use regex::Regex;

use crate::domain::CheckOutcome;

/// Maximum allowed name length in characters.
pub const MAX_NAME_LENGTH: usize = 64;

/// Characters that trigger the special-character hint.
const SPECIAL_CHARS: &str = r#"!@#$%^&*()+=[]{}|\;:'",.<>?/"#;

/// Validates a skill name.
///
/// An empty name short-circuits with a single error. The length check is
/// non-fatal; the character-class check must match the whole name, and on
/// violation the generic format error is followed by zero or more hints,
/// each evaluated independently in a fixed order.
pub fn check_name(name: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::new();

    if name.is_empty() {
        outcome.error("name cannot be empty");
        return outcome;
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        outcome.error(format!(
            "name exceeds maximum length of {MAX_NAME_LENGTH} characters (got {length})"
        ));
    }

    let pattern = Regex::new(r"^[a-z0-9-]+$").unwrap();
    if !pattern.is_match(name) {
        outcome.error(format!(
            "name must contain only lowercase letters, numbers, and hyphens (got: '{name}')"
        ));

        if name.chars().any(|c| c.is_uppercase()) {
            outcome.error("contains uppercase letters (use lowercase only)");
        }
        if name.contains('_') {
            outcome.error("contains underscores (use hyphens instead)");
        }
        if name.contains(' ') {
            outcome.error("contains spaces (use hyphens instead)");
        }
        if name.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            outcome.error("contains special characters (only hyphens allowed)");
        }
    }

    outcome
}
