// File: src/state.rs
// Purpose: Aggregate per-field outcomes and the validation failure error

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::ValidationOutcome;

/// Derived status of the whole form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverallStatus {
    /// No submit attempt has been evaluated yet
    Clean,
    HasErrors,
    AllValid,
}

/// One field's latest outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOutcome {
    pub field: String,
    pub outcome: ValidationOutcome,
}

/// Per-field outcomes in field declaration order, plus the derived status.
///
/// Deserializing re-derives the status from the fields; only `clean` is
/// taken from the input as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFormState")]
pub struct FormState {
    fields: Vec<FieldOutcome>,
    status: OverallStatus,
}

impl FormState {
    /// State of a form nobody has submitted yet
    pub fn clean() -> Self {
        Self {
            fields: Vec::new(),
            status: OverallStatus::Clean,
        }
    }

    /// State produced by a full validation pass
    pub fn evaluated(fields: Vec<FieldOutcome>) -> Self {
        let status = status_of(&fields);
        Self { fields, status }
    }

    pub fn status(&self) -> OverallStatus {
        self.status
    }

    pub fn fields(&self) -> &[FieldOutcome] {
        &self.fields
    }

    pub fn outcome(&self, field: &str) -> Option<&ValidationOutcome> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| &f.outcome)
    }

    /// Get the error message for a field, if it is invalid
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.outcome(field).and_then(ValidationOutcome::message)
    }

    pub fn is_all_valid(&self) -> bool {
        self.status == OverallStatus::AllValid
    }

    pub fn has_errors(&self) -> bool {
        self.status == OverallStatus::HasErrors
    }

    /// Every invalid field with its message, in field order
    pub fn errors(&self) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter_map(|f| {
                f.outcome.message().map(|message| FieldError {
                    field: f.field.clone(),
                    message: message.to_string(),
                })
            })
            .collect()
    }

    /// The failure carried by a rejected form, `None` when nothing is invalid
    pub fn failure(&self) -> Option<ValidationFailure> {
        let errors = self.errors();
        if errors.is_empty() {
            None
        } else {
            Some(ValidationFailure { errors })
        }
    }

    /// Replaces one field's outcome, leaving every other field untouched.
    ///
    /// A clean form stays clean: field-exit checks are advisory.
    pub(crate) fn record(&mut self, field: &str, outcome: ValidationOutcome) {
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.outcome = outcome,
            None => self.fields.push(FieldOutcome {
                field: field.to_string(),
                outcome,
            }),
        }

        if self.status != OverallStatus::Clean {
            self.status = status_of(&self.fields);
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::clean()
    }
}

#[derive(Deserialize)]
struct RawFormState {
    fields: Vec<FieldOutcome>,
    status: OverallStatus,
}

impl From<RawFormState> for FormState {
    fn from(raw: RawFormState) -> Self {
        match raw.status {
            OverallStatus::Clean => Self {
                fields: raw.fields,
                status: OverallStatus::Clean,
            },
            _ => Self::evaluated(raw.fields),
        }
    }
}

fn status_of(fields: &[FieldOutcome]) -> OverallStatus {
    if fields.iter().all(|f| f.outcome.is_valid()) {
        OverallStatus::AllValid
    } else {
        OverallStatus::HasErrors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// A rejected submission: one message per offending field.
///
/// This is the only error kind the engine produces. It is expected and
/// user-correctable, so it is rendered next to the fields rather than logged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
