//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Success,
        }
    }

    /// Create a warning, e.g. a change that may not survive a reload.
    pub fn warning(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Warning,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
