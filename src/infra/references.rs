//! Existence checks for files referenced from the skill body.
//!
//! Inline markdown links are matched over the whole document. External
//! `http(s)` targets are exempt; everything else resolves relative to the
//! skill file's directory and is probed on disk. Missing targets are
//! advisory only and never fail validation.

use std::path::Path;

use regex::Regex;

/// A markdown link reference: display text and target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub text: String,
    pub target: String,
}

/// Extracts all inline markdown links `[text](target)` from the document.
pub fn find_links(content: &str) -> Vec<LinkRef> {
    // Link syntax may not span unescaped brackets or parentheses.
    let link_re = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();

    link_re
        .captures_iter(content)
        .map(|caps| LinkRef {
            text: caps[1].to_string(),
            target: caps[2].to_string(),
        })
        .collect()
}

/// Checks that every locally referenced file exists on disk.
///
/// Returns one warning per missing target, naming the target path as written
/// in the document.
pub fn check_references(content: &str, skill_dir: &Path) -> Vec<String> {
    find_links(content)
        .into_iter()
        .filter(|link| !is_external(&link.target))
        .filter(|link| !skill_dir.join(&link.target).exists())
        .map(|link| format!("referenced file not found: {}", link.target))
        .collect()
}

/// Checks if a link target is an external URL exempt from existence checks.
fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}
