// File: src/feedback.rs
// Purpose: Banner message shown after a submit attempt

use serde::{Deserialize, Serialize};

use crate::config::ColorConfig;

pub const SUCCESS_TEXT: &str =
    "Thank you! Your message has been received. We will contact you shortly.";
pub const FIX_ERRORS_TEXT: &str = "Please fix the errors above and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    /// CSS colour for the banner
    pub fn color<'a>(&self, colors: &'a ColorConfig) -> &'a str {
        match self {
            Severity::Error => &colors.error,
            Severity::Success => &colors.success,
        }
    }
}

/// Text destined for the shared feedback banner. Each validation pass replaces
/// the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub text: String,
    pub severity: Severity,
}

impl FeedbackMessage {
    pub fn success() -> Self {
        Self {
            text: SUCCESS_TEXT.to_string(),
            severity: Severity::Success,
        }
    }

    pub fn fix_errors() -> Self {
        Self {
            text: FIX_ERRORS_TEXT.to_string(),
            severity: Severity::Error,
        }
    }
}
