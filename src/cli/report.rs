//! Console formatting for the validation report.
//!
//! The check logic returns plain result structures; everything about how they
//! look on screen lives here.

/// Width of the final summary banner.
const BANNER_WIDTH: usize = 60;

/// Prints a section header for the next check.
pub(crate) fn section(name: &str) {
    println!("Checking {name}...");
}

/// Prints a pass marker with a short message.
pub(crate) fn pass(message: &str) {
    println!("ok: {message}");
}

/// Prints a fail marker followed by each error as a bullet.
pub(crate) fn fail(heading: &str, errors: &[String]) {
    println!("error: {heading}:");
    for error in errors {
        println!("  - {error}");
    }
}

/// Prints advisory warnings as bullets. Prints nothing when the list is empty.
pub(crate) fn advise(heading: &str, warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("warning: {heading}:");
    for warning in warnings {
        println!("  - {warning}");
    }
}

/// Prints the final PASSED/FAILED banner.
pub(crate) fn banner(passed: bool) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{rule}");
    if passed {
        println!("Skill validation PASSED");
        println!("\nYour skill is ready to use.");
    } else {
        println!("Skill validation FAILED");
        println!("\nFix the errors above and run the check again.");
    }
    println!("{rule}");
}
