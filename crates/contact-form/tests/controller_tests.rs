//! Controller behaviour against an in-memory surface
//!
//! The recording surface stands in for the page: it holds field values,
//! error slot text and the banner, and logs every render call so tests can
//! check ordering (clear first, then render).

use std::collections::HashMap;

use contact_form::engine::{MESSAGE_FIELD, NAME_FIELD, PHONE_FIELD};
use contact_form::feedback::{FIX_ERRORS_TEXT, SUCCESS_TEXT};
use contact_form::rules::{MESSAGE_MESSAGE, NAME_MESSAGE, PHONE_MESSAGE};
use contact_form::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Default)]
struct RecordingSurface {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
    banner: Option<FeedbackMessage>,
    calls: Vec<String>,
}

impl RecordingSurface {
    fn with_values(name: &str, phone: &str, message: &str) -> Self {
        let mut surface = Self::default();
        surface.fill(name, phone, message);
        surface
    }

    fn fill(&mut self, name: &str, phone: &str, message: &str) {
        self.values.insert(NAME_FIELD.into(), name.into());
        self.values.insert(PHONE_FIELD.into(), phone.into());
        self.values.insert(MESSAGE_FIELD.into(), message.into());
    }

    fn error(&self, field: &str) -> &str {
        self.errors.get(field).map(String::as_str).unwrap_or("")
    }

    fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}

impl FormSurface for RecordingSurface {
    fn read_value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn write_value(&mut self, field: &str, value: &str) {
        self.calls.push(format!("write:{}", field));
        self.values.insert(field.to_string(), value.to_string());
    }

    fn set_field_error(&mut self, field: &str, text: &str) {
        self.calls.push(format!("error:{}:{}", field, text));
        self.errors.insert(field.to_string(), text.to_string());
    }

    fn set_feedback(&mut self, feedback: Option<&FeedbackMessage>) {
        self.calls.push(match feedback {
            Some(f) => format!("banner:{:?}", f.severity),
            None => "banner:clear".to_string(),
        });
        self.banner = feedback.cloned();
    }
}

fn controller(surface: RecordingSurface) -> FormController<RecordingSurface> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    FormController::new(FormValidationEngine::contact(), surface)
}

#[test]
fn test_accepted_submit_shows_success_and_resets() {
    let mut form = controller(RecordingSurface::with_values(
        "Al",
        "555-123-4567",
        "Hello there, this works",
    ));

    let outcome = form.on_submit();
    assert!(outcome.is_accepted());

    let surface = form.surface();
    assert_eq!(
        surface.banner,
        Some(FeedbackMessage {
            text: SUCCESS_TEXT.into(),
            severity: Severity::Success
        })
    );
    for field in [NAME_FIELD, PHONE_FIELD, MESSAGE_FIELD] {
        assert_eq!(surface.value(field), "");
        assert_eq!(surface.error(field), "");
    }
}

#[test]
fn test_rejected_submit_shows_all_errors_and_keeps_values() {
    let mut form = controller(RecordingSurface::with_values("A", "123", "short"));

    let outcome = form.on_submit();
    assert!(!outcome.is_accepted());

    let surface = form.surface();
    assert_eq!(surface.error(NAME_FIELD), NAME_MESSAGE);
    assert_eq!(surface.error(PHONE_FIELD), PHONE_MESSAGE);
    assert_eq!(surface.error(MESSAGE_FIELD), MESSAGE_MESSAGE);
    assert_eq!(surface.banner.as_ref().map(|b| b.text.as_str()), Some(FIX_ERRORS_TEXT));
    assert_eq!(surface.banner.as_ref().map(|b| b.severity), Some(Severity::Error));

    assert_eq!(surface.value(NAME_FIELD), "A");
    assert_eq!(surface.value(PHONE_FIELD), "123");
    assert!(!surface.calls.iter().any(|c| c.starts_with("write:")));
}

#[test]
fn test_submit_clears_previous_feedback_first() {
    let mut form = controller(RecordingSurface::with_values("A", "5551234", "Long enough message"));
    form.on_submit();
    form.surface_mut().calls.clear();

    form.on_submit();
    let calls = &form.surface().calls;
    assert_eq!(
        &calls[..4],
        &[
            "error:name:".to_string(),
            "error:phone:".to_string(),
            "error:message:".to_string(),
            "banner:clear".to_string(),
        ]
    );
}

#[test]
fn test_fixed_field_error_does_not_bleed_into_next_submit() {
    let mut form = controller(RecordingSurface::with_values("A", "123", "short"));
    form.on_submit();

    form.surface_mut().fill("Alice", "123", "Long enough message");
    form.on_submit();

    let surface = form.surface();
    assert_eq!(surface.error(NAME_FIELD), "");
    assert_eq!(surface.error(PHONE_FIELD), PHONE_MESSAGE);
    assert_eq!(surface.error(MESSAGE_FIELD), "");
}

#[test]
fn test_success_banner_replaced_by_error_banner() {
    let mut form = controller(RecordingSurface::with_values("Al", "5551234", "Long enough message"));
    form.on_submit();
    assert_eq!(form.surface().banner.as_ref().map(|b| b.severity), Some(Severity::Success));

    // Fields were reset, so a second submit is rejected
    form.on_submit();
    assert_eq!(form.surface().banner.as_ref().map(|b| b.severity), Some(Severity::Error));
    assert_eq!(form.surface().error(NAME_FIELD), NAME_MESSAGE);
}

#[test]
fn test_field_exit_updates_only_that_field() {
    let mut form = controller(RecordingSurface::with_values("A", "123", "short"));
    form.on_submit();

    form.surface_mut().values.insert(NAME_FIELD.into(), "Alice".into());
    let outcome = form.on_field_exit(NAME_FIELD);

    assert_eq!(outcome, Some(ValidationOutcome::Valid));
    let surface = form.surface();
    assert_eq!(surface.error(NAME_FIELD), "");
    assert_eq!(surface.error(PHONE_FIELD), PHONE_MESSAGE);
    assert_eq!(surface.error(MESSAGE_FIELD), MESSAGE_MESSAGE);
    assert_eq!(surface.banner.as_ref().map(|b| b.text.as_str()), Some(FIX_ERRORS_TEXT));
}

#[test]
fn test_field_exit_shows_error_before_any_submit() {
    let mut form = controller(RecordingSurface::with_values("", "12ab", ""));

    assert_eq!(
        form.on_field_exit(PHONE_FIELD),
        Some(ValidationOutcome::Invalid(PHONE_MESSAGE.into()))
    );
    assert_eq!(form.surface().error(PHONE_FIELD), PHONE_MESSAGE);
    assert_eq!(form.surface().error(NAME_FIELD), "");
    assert!(form.surface().banner.is_none());
    assert_eq!(form.engine().state().status(), OverallStatus::Clean);
}

#[test]
fn test_field_exit_on_unknown_field_is_a_no_op() {
    let mut form = controller(RecordingSurface::with_values("A", "123", "short"));
    assert_eq!(form.on_field_exit("email"), None);
    assert!(form.surface().calls.is_empty());
}

#[test]
fn test_missing_values_are_treated_as_empty() {
    let mut form = controller(RecordingSurface::default());
    let outcome = form.on_submit();

    let SubmitOutcome::Rejected { state, .. } = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(state.errors().len(), 3);
}

#[test]
fn test_read_values_snapshot() {
    let form = controller(RecordingSurface::with_values("Al", "5551234", "hello"));
    let values = form.read_values();
    assert_eq!(values.get(NAME_FIELD), "Al");
    assert_eq!(values.get(PHONE_FIELD), "5551234");
    assert_eq!(values.get(MESSAGE_FIELD), "hello");
}
