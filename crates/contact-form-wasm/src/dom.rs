//! DOM host for the contact form.
//!
//! Resolves the page hooks named in [`PageConfig`] once, at mount time, and
//! wires `blur` / `submit` listeners to a shared [`FormController`]. Any hook
//! missing from the page degrades to a silent no-op.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use contact_form::{
    ColorConfig, FeedbackMessage, FormController, FormSurface, FormValidationEngine, PageConfig,
};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// An input or textarea holding a field's raw value
enum FieldControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldControl {
    fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .ok()
                .map(Self::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(input) => input.set_value(value),
            Self::TextArea(area) => area.set_value(value),
        }
    }
}

struct DomField {
    control: Option<FieldControl>,
    error_slot: Option<Element>,
}

/// [`FormSurface`] backed by live DOM elements
pub struct DomSurface {
    fields: HashMap<&'static str, DomField>,
    result: Option<HtmlElement>,
    colors: ColorConfig,
}

impl DomSurface {
    pub fn from_document(document: &Document, config: &PageConfig) -> Self {
        let fields = config
            .fields
            .iter()
            .map(|(name, hooks)| {
                let control = document
                    .get_element_by_id(&hooks.input_id)
                    .and_then(FieldControl::from_element);
                if control.is_none() {
                    warn!(field = name, id = %hooks.input_id, "field input not found");
                }

                let error_slot = document.get_element_by_id(&hooks.error_id);
                if error_slot.is_none() {
                    warn!(field = name, id = %hooks.error_id, "field error slot not found");
                }

                (
                    name,
                    DomField {
                        control,
                        error_slot,
                    },
                )
            })
            .collect();

        let result = document
            .get_element_by_id(&config.result_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if result.is_none() {
            warn!(id = %config.result_id, "feedback banner not found");
        }

        Self {
            fields,
            result,
            colors: config.colors.clone(),
        }
    }
}

impl FormSurface for DomSurface {
    fn read_value(&self, field: &str) -> String {
        self.fields
            .get(field)
            .and_then(|f| f.control.as_ref())
            .map(FieldControl::value)
            .unwrap_or_default()
    }

    fn write_value(&mut self, field: &str, value: &str) {
        if let Some(control) = self.fields.get(field).and_then(|f| f.control.as_ref()) {
            control.set_value(value);
        }
    }

    fn set_field_error(&mut self, field: &str, text: &str) {
        if let Some(slot) = self.fields.get(field).and_then(|f| f.error_slot.as_ref()) {
            slot.set_text_content(Some(text));
        }
    }

    fn set_feedback(&mut self, feedback: Option<&FeedbackMessage>) {
        let Some(result) = &self.result else {
            return;
        };

        let style = result.style();
        let styled = match feedback {
            Some(message) => {
                result.set_text_content(Some(&message.text));
                style.set_property("color", message.severity.color(&self.colors))
            }
            None => {
                result.set_text_content(Some(""));
                style.remove_property("color").map(|_| ())
            }
        };

        if let Err(err) = styled {
            warn!(?err, "failed to style feedback banner");
        }
    }
}

/// Wires the contact form found in `document`.
///
/// Returns `Ok(false)` without touching the page when the form is absent.
pub fn mount_form(document: &Document, config: &PageConfig) -> Result<bool, JsValue> {
    let Some(form) = document.get_element_by_id(&config.form_id) else {
        debug!(id = %config.form_id, "no contact form on this page");
        return Ok(false);
    };

    let surface = DomSurface::from_document(document, config);
    let controller = Rc::new(RefCell::new(FormController::new(
        FormValidationEngine::contact(),
        surface,
    )));

    for (field, hooks) in config.fields.iter() {
        let Some(input) = document.get_element_by_id(&hooks.input_id) else {
            continue;
        };

        let handle = Rc::clone(&controller);
        let on_blur = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            // A busy controller means a re-entrant event; drop it
            if let Ok(mut form) = handle.try_borrow_mut() {
                form.on_field_exit(field);
            }
        });
        input.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
        on_blur.forget();
    }

    let handle = Rc::clone(&controller);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Ok(mut form) = handle.try_borrow_mut() {
            form.on_submit();
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    debug!(id = %config.form_id, "contact form mounted");
    Ok(true)
}
