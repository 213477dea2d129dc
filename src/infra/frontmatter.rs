//! Frontmatter extraction for skill files.
//!
//! Skill frontmatter is a `---`-delimited header block of `key: value` lines.
//! This is deliberately not a YAML parser: parsing is line-oriented with no
//! nesting, lists, or multi-line scalars.
//!
//! # Format
//! ```text
//! ---
//! name: pdf-tools
//! description: "Use when extracting tables from PDF files."
//! allowed-tools: Read, Grep
//! ---
//! Body content here...
//! ```

use std::collections::HashMap;

/// The frontmatter delimiter token.
pub const DELIMITER: &str = "---";

/// Result of extracting and checking frontmatter from a skill file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterCheck {
    /// Structural and required-field errors, in the order found.
    pub errors: Vec<String>,
    /// The parsed field mapping. Empty when the block is malformed.
    pub fields: HashMap<String, String>,
}

impl FrontmatterCheck {
    /// Returns true if no structural or required-field errors occurred.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Looks up a field value by key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Extracts and checks the frontmatter block of a skill file.
///
/// The first line must be a bare delimiter (trimmed-equality match, strict on
/// line 1), and a matching closing delimiter must appear before end of input;
/// either failure is structural and produces no mapping. Lines between the
/// delimiters split on the first colon; colon-less lines are skipped. Keys
/// and values are trimmed, one layer of matching quotes is stripped from
/// values, and duplicate keys silently overwrite earlier ones. Missing
/// `name` and `description` fields accumulate as separate errors.
pub fn extract(content: &str) -> FrontmatterCheck {
    let mut check = FrontmatterCheck::default();
    let lines: Vec<&str> = content.lines().collect();

    if lines.first().map(|line| line.trim()) != Some(DELIMITER) {
        check
            .errors
            .push(format!("frontmatter must start with '{DELIMITER}' on line 1"));
        return check;
    }

    let Some(closing) = lines[1..].iter().position(|line| line.trim() == DELIMITER) else {
        check
            .errors
            .push(format!("frontmatter must end with '{DELIMITER}'"));
        return check;
    };

    // lines[1 + closing] is the closing delimiter; parse what sits between.
    for line in &lines[1..1 + closing] {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        check
            .fields
            .insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    for field in ["name", "description"] {
        if !check.fields.contains_key(field) {
            check
                .errors
                .push(format!("missing required field: '{field}'"));
        }
    }

    check
}

/// Strips exactly one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
