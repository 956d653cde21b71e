//! Validation result model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single rule evaluation
///
/// Serializes as `{"status":"passed"}` or
/// `{"status":"failed","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    Passed,
    Failed { message: String },
}

impl ValidationResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationResult::Passed)
    }

    pub fn is_failed(&self) -> bool {
        !self.is_passed()
    }

    /// Failure message, `None` for a passing result.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Passed => None,
            ValidationResult::Failed { message } => Some(message.as_str()),
        }
    }

    /// Consumes the result, yielding the failure message if any.
    pub fn into_message(self) -> Option<String> {
        match self {
            ValidationResult::Passed => None,
            ValidationResult::Failed { message } => Some(message),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Passed => write!(f, "passed"),
            ValidationResult::Failed { message } => write!(f, "failed: {}", message),
        }
    }
}

/// The canonical passing result.
pub const fn pass() -> ValidationResult {
    ValidationResult::Passed
}

/// A failing result carrying a user-facing message.
///
/// The message must not be empty; an empty message would be
/// indistinguishable from "no error" once it reaches a form's error map.
pub fn fail(message: impl Into<String>) -> ValidationResult {
    let message = message.into();
    debug_assert!(!message.is_empty(), "validation messages must not be empty");
    ValidationResult::Failed { message }
}
