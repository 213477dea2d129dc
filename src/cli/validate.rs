//! Validate command handler.

use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::report;
use crate::domain::{check_description, check_name};
use crate::infra::{FsError, check_references, extract, read_skill};

/// Runs every check against the skill file at `skill_path` and prints the
/// report as it goes.
///
/// Checks run in a fixed order: frontmatter, name, description, the
/// `allowed-tools` note, then referenced files. The name and description
/// checks are skipped entirely when the frontmatter itself is invalid, since
/// their inputs are unavailable. Warnings never affect the verdict.
pub fn handle_validate(skill_path: &Path) -> Result<()> {
    println!("Validating: {}\n", skill_path.display());

    // 1. Load the file; a missing input is a hard failure before any check.
    let content = match read_skill(skill_path) {
        Ok(content) => content,
        Err(FsError::NotFound { path }) => {
            println!("error: file not found: {}", path.display());
            bail!("validation failed");
        }
        Err(err) => return Err(err.into()),
    };
    let skill_dir = skill_path.parent().unwrap_or_else(|| Path::new("."));

    let mut all_valid = true;

    // 2. Frontmatter
    report::section("frontmatter");
    let frontmatter = extract(&content);
    if frontmatter.is_valid() {
        report::pass("frontmatter is valid");

        // 3. Name
        if let Some(name) = frontmatter.field("name") {
            println!();
            report::section("name");
            let outcome = check_name(name);
            if outcome.is_valid() {
                report::pass(&format!("name is valid: '{name}'"));
            } else {
                report::fail("name problems", &outcome.errors);
                all_valid = false;
            }
        }

        // 4. Description
        if let Some(description) = frontmatter.field("description") {
            println!();
            report::section("description");
            let outcome = check_description(description);
            report::advise("description advisories", &outcome.warnings);
            if outcome.is_valid() {
                report::pass(&format!(
                    "description is valid ({} characters)",
                    description.chars().count()
                ));
            } else {
                report::fail("description problems", &outcome.errors);
                all_valid = false;
            }
        }

        // 5. Tool restrictions are reported but not validated.
        if let Some(tools) = frontmatter.field("allowed-tools") {
            println!();
            report::section("allowed-tools");
            report::pass(&format!("tool restrictions found: {tools}"));
        }
    } else {
        report::fail("frontmatter problems", &frontmatter.errors);
        all_valid = false;
    }

    // 6. Referenced files: advisory only, never flips the verdict.
    println!();
    report::section("referenced files");
    let missing = check_references(&content, skill_dir);
    if missing.is_empty() {
        report::pass("all referenced files exist");
    } else {
        report::advise("missing referenced files", &missing);
    }

    report::banner(all_valid);

    if !all_valid {
        bail!("validation failed");
    }
    Ok(())
}
