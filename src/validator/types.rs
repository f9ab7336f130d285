//! Validation result types

/// Status of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// One progress event emitted while checking a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEvent {
    /// Instance the check ran against; `None` for file-level checks
    pub instance: Option<String>,
    /// Short check identifier (`command`, `auth`, `log_file`, ...)
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

/// Errors and warnings for one file, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Single-error result used by the root-level short circuits
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    /// No errors (warnings allowed)
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
