// File: src/engine.rs
// Purpose: Form validation engine - per-field checks, full passes and submit attempts

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::feedback::FeedbackMessage;
use crate::outcome::ValidationOutcome;
use crate::rules;
use crate::state::{FieldOutcome, FormState};

pub const NAME_FIELD: &str = "name";
pub const PHONE_FIELD: &str = "phone";
pub const MESSAGE_FIELD: &str = "message";

/// A field rule: deterministic and side-effect free
pub type Rule = fn(&str) -> ValidationOutcome;

/// A named input and the rule its value must satisfy
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: Rule,
}

impl FieldSpec {
    pub const fn new(name: &'static str, rule: Rule) -> Self {
        Self { name, rule }
    }

    pub fn evaluate(&self, raw: &str) -> ValidationOutcome {
        (self.rule)(raw)
    }
}

/// Raw field values keyed by field name. A missing field reads as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FieldValues {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Result of a submit attempt.
///
/// `Accepted` tells the host to clear every field. `Rejected` tells it to
/// render each field's message next to that field plus the generic banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    Accepted {
        feedback: FeedbackMessage,
    },
    Rejected {
        state: FormState,
        feedback: FeedbackMessage,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    pub fn feedback(&self) -> &FeedbackMessage {
        match self {
            SubmitOutcome::Accepted { feedback } => feedback,
            SubmitOutcome::Rejected { feedback, .. } => feedback,
        }
    }
}

/// Validates a form's fields and decides whether a submit attempt is accepted.
///
/// The engine owns the form's [`FormState`]; field values are always supplied
/// by the caller, so the engine never looks anything up on its own.
#[derive(Debug, Clone)]
pub struct FormValidationEngine {
    fields: Vec<FieldSpec>,
    state: FormState,
}

impl FormValidationEngine {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        debug!(fields = fields.len(), "form validation engine ready");
        Self {
            fields,
            state: FormState::clean(),
        }
    }

    /// Engine for the site's contact form: name, phone and message
    pub fn contact() -> Self {
        Self::new(vec![
            FieldSpec::new(NAME_FIELD, rules::validate_name),
            FieldSpec::new(PHONE_FIELD, rules::validate_phone),
            FieldSpec::new(MESSAGE_FIELD, rules::validate_message),
        ])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks one value against the named field's rule.
    ///
    /// Returns `None` for a field this engine does not know.
    pub fn validate_field(&self, name: &str, raw: &str) -> Option<ValidationOutcome> {
        match self.spec(name) {
            Some(spec) => Some(spec.evaluate(raw)),
            None => {
                warn!(field = name, "validation requested for unknown field");
                None
            }
        }
    }

    /// Field-exit check: validates one field and records only that field's
    /// outcome in the engine state.
    pub fn check_field(&mut self, name: &str, raw: &str) -> Option<ValidationOutcome> {
        let outcome = self.validate_field(name, raw)?;
        self.state.record(name, outcome.clone());
        Some(outcome)
    }

    /// Evaluates every known field independently of the others
    pub fn validate_all(&self, values: &FieldValues) -> FormState {
        FormState::evaluated(
            self.fields
                .iter()
                .map(|spec| FieldOutcome {
                    field: spec.name.to_string(),
                    outcome: spec.evaluate(values.get(spec.name)),
                })
                .collect(),
        )
    }

    /// Re-validates every field from scratch and decides the submission
    pub fn attempt_submit(&mut self, values: &FieldValues) -> SubmitOutcome {
        let state = self.validate_all(values);
        self.state = state.clone();

        if state.is_all_valid() {
            info!("contact form submission accepted");
            SubmitOutcome::Accepted {
                feedback: FeedbackMessage::success(),
            }
        } else {
            SubmitOutcome::Rejected {
                state,
                feedback: FeedbackMessage::fix_errors(),
            }
        }
    }
}

impl Default for FormValidationEngine {
    fn default() -> Self {
        Self::contact()
    }
}
