//! Applies engine results to whatever is displaying the form.
//!
//! The engine only returns values. A [`FormSurface`] is the host's side of the
//! contract: it reads raw field values and renders error slots and the banner.
//! [`FormController`] sits between the two and implements the field-exit and
//! submit behaviour, so any host (DOM, test double) gets identical semantics.

use crate::engine::{FieldValues, FormValidationEngine, SubmitOutcome};
use crate::feedback::FeedbackMessage;
use crate::outcome::ValidationOutcome;

/// Host-provided value accessors and render sinks
pub trait FormSurface {
    /// Current raw value of a field; an absent value is `""`
    fn read_value(&self, field: &str) -> String;

    fn write_value(&mut self, field: &str, value: &str);

    /// Replace the text in a field's error slot (empty clears it)
    fn set_field_error(&mut self, field: &str, text: &str);

    /// Replace the banner; `None` clears text and colour
    fn set_feedback(&mut self, feedback: Option<&FeedbackMessage>);
}

pub struct FormController<S> {
    engine: FormValidationEngine,
    surface: S,
}

impl<S: FormSurface> FormController<S> {
    pub fn new(engine: FormValidationEngine, surface: S) -> Self {
        Self { engine, surface }
    }

    pub fn engine(&self) -> &FormValidationEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Snapshot of every known field's current raw value
    pub fn read_values(&self) -> FieldValues {
        self.engine
            .field_names()
            .map(|name| (name, self.surface.read_value(name)))
            .collect()
    }

    /// Advisory check when a field loses focus. Only that field's error slot
    /// changes; the banner and other fields are left alone.
    pub fn on_field_exit(&mut self, field: &str) -> Option<ValidationOutcome> {
        let raw = self.surface.read_value(field);
        let outcome = self.engine.check_field(field, &raw)?;
        self.surface.set_field_error(field, outcome.error_text());
        Some(outcome)
    }

    /// Full submit attempt: clear previous feedback, re-validate everything,
    /// then render the rejection or reset the form.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.clear_feedback();

        let values = self.read_values();
        let outcome = self.engine.attempt_submit(&values);

        match &outcome {
            SubmitOutcome::Rejected { state, feedback } => {
                for error in state.errors() {
                    self.surface.set_field_error(&error.field, &error.message);
                }
                self.surface.set_feedback(Some(feedback));
            }
            SubmitOutcome::Accepted { feedback } => {
                self.surface.set_feedback(Some(feedback));
                self.reset_fields();
            }
        }

        outcome
    }

    fn clear_feedback(&mut self) {
        for name in self.engine.field_names() {
            self.surface.set_field_error(name, "");
        }
        self.surface.set_feedback(None);
    }

    fn reset_fields(&mut self) {
        for name in self.engine.field_names() {
            self.surface.write_value(name, "");
        }
    }
}
