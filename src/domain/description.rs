//! Validation rules for the skill `description` field.

use crate::domain::CheckOutcome;

/// Maximum allowed description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Descriptions shorter than this get an advisory warning.
const MIN_DESCRIPTION_LENGTH: usize = 50;

/// Terms considered too unspecific for a description.
const VAGUE_TERMS: [&str; 6] = ["helps", "assists", "general", "various", "stuff", "things"];

/// Validates a skill description.
///
/// An empty description short-circuits with a single error; the length limit
/// is non-fatal. The remaining checks are advisory only and are computed
/// case-insensitively: a missing `use when` phrase, a short description, and
/// vague terms (reported as one combined warning listing every match).
pub fn check_description(description: &str) -> CheckOutcome {
    let mut outcome = CheckOutcome::new();

    if description.is_empty() {
        outcome.error("description cannot be empty");
        return outcome;
    }

    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        outcome.error(format!(
            "description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters (got {length})"
        ));
    }

    let lowered = description.to_lowercase();

    if !lowered.contains("use when") {
        outcome.warn("description should include 'use when' to indicate when to apply this skill");
    }

    if length < MIN_DESCRIPTION_LENGTH {
        outcome.warn(
            "description is quite short - consider adding more detail about what it does and when to use it",
        );
    }

    let found: Vec<&str> = VAGUE_TERMS
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .collect();
    if !found.is_empty() {
        outcome.warn(format!(
            "description contains vague terms: {}. Be more specific.",
            found.join(", ")
        ));
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_description_short_circuits() {
        let outcome = check_description("");
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("empty"));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn overlong_description_reports_length_but_keeps_checking() {
        let description = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        let outcome = check_description(&description);

        assert!(!outcome.is_valid());
        assert!(outcome.errors[0].contains("maximum length"));
        // Warnings are still computed for the overlong text.
        assert!(outcome.warnings.iter().any(|w| w.contains("use when")));
    }

    #[test]
    fn short_description_without_phrase_gets_two_warnings() {
        // 40 characters, no "use when", no vague terms.
        let description = "Extracts tables from PDF bank statements";
        assert_eq!(description.chars().count(), 40);

        let outcome = check_description(description);

        assert!(outcome.is_valid());
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome.warnings.iter().any(|w| w.contains("use when")));
        assert!(outcome.warnings.iter().any(|w| w.contains("quite short")));
    }

    #[test]
    fn good_description_has_no_warnings() {
        let description =
            "Use when extracting tables from PDF bank statements into CSV output files.";

        let outcome = check_description(description);

        assert!(outcome.is_valid());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn use_when_phrase_is_case_insensitive() {
        let description =
            "USE WHEN extracting tables from PDF bank statements into CSV output files.";
        let outcome = check_description(description);
        assert!(!outcome.warnings.iter().any(|w| w.contains("use when")));
    }

    #[test]
    fn vague_terms_combined_into_one_warning() {
        let description =
            "Use when you need a tool that helps with various document processing tasks.";

        let outcome = check_description(description);

        assert!(outcome.is_valid());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("helps, various"));
    }

    #[test]
    fn vague_terms_matched_case_insensitively() {
        let description =
            "Use when you want something that Helps with Stuff around office documents.";

        let outcome = check_description(description);

        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("helps"));
        assert!(outcome.warnings[0].contains("stuff"));
    }
}
