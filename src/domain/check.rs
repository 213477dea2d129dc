//! Outcome type shared by the field validators.

/// Result of running a single validation check.
///
/// Errors make the check (and the overall run) fail; warnings are purely
/// advisory. Both lists preserve the order in which issues were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Problems that fail the check.
    pub errors: Vec<String>,
    /// Advisory notes that never affect validity.
    pub warnings: Vec<String>,
}

impl CheckOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns true if no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
