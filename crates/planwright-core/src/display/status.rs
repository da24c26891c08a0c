//! Status lines for generation feedback.

use std::fmt;

/// A one-line notice shown alongside a generated plan.
///
/// Degraded generations carry a warning naming why the automatic breakdown
/// was replaced by the fallback plan.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Warning:" },
            self.message
        )
    }
}
