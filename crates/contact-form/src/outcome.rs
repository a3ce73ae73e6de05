// File: src/outcome.rs
// Purpose: Result of checking one field value against its rule

use serde::{Deserialize, Serialize};

/// Result of checking a single field.
///
/// Serialized for JavaScript as `{"status":"valid"}` or
/// `{"status":"invalid","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    /// Builds an outcome from a predicate result and the message to show on failure
    pub fn check(passed: bool, message: &str) -> Self {
        if passed {
            Self::Valid
        } else {
            Self::Invalid(message.to_string())
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error message, if invalid
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message.as_str()),
        }
    }

    /// Text for the field's error slot: empty when valid
    pub fn error_text(&self) -> &str {
        self.message().unwrap_or("")
    }
}
