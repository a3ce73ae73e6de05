//! Contact Form Validation
//!
//! Validation and feedback engine for the site's contact form. Pure Rust with no
//! UI dependency: the engine evaluates raw field values, and a host (the DOM
//! bindings in `contact-form-wasm`, or a test double) applies the result.
//!
//! ```rust
//! use contact_form::{FieldValues, FormValidationEngine, SubmitOutcome};
//!
//! let mut engine = FormValidationEngine::contact();
//! let values = FieldValues::from([
//!     ("name", "Al"),
//!     ("phone", "555-123-4567"),
//!     ("message", "Hello there, this works"),
//! ]);
//!
//! assert!(matches!(engine.attempt_submit(&values), SubmitOutcome::Accepted { .. }));
//! ```

pub mod config;
pub mod controller;
pub mod engine;
pub mod feedback;
pub mod outcome;
pub mod rules;
pub mod state;

pub use config::{ColorConfig, FieldHooks, FieldsConfig, PageConfig};
pub use controller::{FormController, FormSurface};
pub use engine::{FieldSpec, FieldValues, FormValidationEngine, Rule, SubmitOutcome};
pub use feedback::{FeedbackMessage, Severity};
pub use outcome::ValidationOutcome;
pub use state::{FieldError, FieldOutcome, FormState, OverallStatus, ValidationFailure};
