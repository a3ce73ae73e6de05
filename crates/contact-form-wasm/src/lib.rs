//! Contact Form WASM
//!
//! WebAssembly bindings for the contact form validation engine.
//! Exposes the same rules to JavaScript and mounts the DOM host on pages that
//! carry the contact form.

use contact_form::{rules, FieldValues, FormValidationEngine, PageConfig};
use wasm_bindgen::prelude::*;

pub mod dom;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the contact form on the current page
///
/// # Arguments
/// * `config` - Optional page hooks object; `undefined` uses the site defaults
///
/// # Returns
/// `true` when the form was found and wired, `false` on pages without it
///
/// # Example (JavaScript)
/// ```javascript
/// document.addEventListener('DOMContentLoaded', () => {
///     mount();
///     // or: mount({ formId: 'enquiry', fields: { phone: { inputId: 'tel', errorId: 'telErr' } } });
/// });
/// ```
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<bool, JsValue> {
    let config = page_config(config)?;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(false);
    };

    dom::mount_form(&document, &config)
}

/// Validate a single field value
///
/// Returns `{status: "valid"}` or `{status: "invalid", message}`, and
/// `undefined` for a field name the form does not have.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, value: &str) -> Result<JsValue, JsValue> {
    let outcome = FormValidationEngine::contact().validate_field(field, value);
    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}

/// Validate every field at once
///
/// # Example (JavaScript)
/// ```javascript
/// const state = validateAll({ name: 'Al', phone: '555-123-4567', message: 'Hello there' });
/// if (state.status === 'hasErrors') { ... }
/// ```
#[wasm_bindgen(js_name = validateAll)]
pub fn validate_all(values: JsValue) -> Result<JsValue, JsValue> {
    let values = field_values(values)?;
    let state = FormValidationEngine::contact().validate_all(&values);
    Ok(serde_wasm_bindgen::to_value(&state)?)
}

/// Decide a submit attempt without touching the page
#[wasm_bindgen(js_name = attemptSubmit)]
pub fn attempt_submit(values: JsValue) -> Result<JsValue, JsValue> {
    let values = field_values(values)?;
    let outcome = FormValidationEngine::contact().attempt_submit(&values);
    Ok(serde_wasm_bindgen::to_value(&outcome)?)
}

/// Phone number with whitespace and `-()+` removed
#[wasm_bindgen(js_name = stripPhone)]
pub fn strip_phone(raw: &str) -> String {
    rules::strip_phone(raw)
}

fn field_values(values: JsValue) -> Result<FieldValues, JsValue> {
    if values.is_undefined() || values.is_null() {
        return Ok(FieldValues::new());
    }

    serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse field values: {}", e)))
}

fn page_config(config: JsValue) -> Result<PageConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(PageConfig::default());
    }

    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse page config: {}", e)))
}
