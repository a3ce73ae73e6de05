// File: src/config.rs
// Purpose: Page hooks configuration parsing from contact-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::engine::{MESSAGE_FIELD, NAME_FIELD, PHONE_FIELD};

/// Where the contact form lives in the page markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default = "default_form_id")]
    pub form_id: String,

    /// Element receiving the feedback banner text
    #[serde(default = "default_result_id")]
    pub result_id: String,

    #[serde(default)]
    pub fields: FieldsConfig,

    #[serde(default)]
    pub colors: ColorConfig,
}

/// Input element and error slot for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldHooks {
    pub input_id: String,
    pub error_id: String,
}

impl FieldHooks {
    pub fn new(input_id: &str, error_id: &str) -> Self {
        Self {
            input_id: input_id.to_string(),
            error_id: error_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsConfig {
    #[serde(default = "default_name_hooks")]
    pub name: FieldHooks,

    #[serde(default = "default_phone_hooks")]
    pub phone: FieldHooks,

    #[serde(default = "default_message_hooks")]
    pub message: FieldHooks,
}

impl FieldsConfig {
    /// Hooks for an engine field name
    pub fn hooks(&self, field: &str) -> Option<&FieldHooks> {
        match field {
            NAME_FIELD => Some(&self.name),
            PHONE_FIELD => Some(&self.phone),
            MESSAGE_FIELD => Some(&self.message),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldHooks)> {
        [
            (NAME_FIELD, &self.name),
            (PHONE_FIELD, &self.phone),
            (MESSAGE_FIELD, &self.message),
        ]
        .into_iter()
    }
}

/// Banner colours per severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_error_color")]
    pub error: String,

    #[serde(default = "default_success_color")]
    pub success: String,
}

// Default values
fn default_form_id() -> String {
    "contactForm".to_string()
}

fn default_result_id() -> String {
    "formResult".to_string()
}

fn default_name_hooks() -> FieldHooks {
    FieldHooks::new("fullName", "errName")
}

fn default_phone_hooks() -> FieldHooks {
    FieldHooks::new("phone", "errPhone")
}

fn default_message_hooks() -> FieldHooks {
    FieldHooks::new("messageField", "errMessage")
}

fn default_error_color() -> String {
    "#b91c1c".to_string()
}

fn default_success_color() -> String {
    "green".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            result_id: default_result_id(),
            fields: FieldsConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            name: default_name_hooks(),
            phone: default_phone_hooks(),
            message: default_message_hooks(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            error: default_error_color(),
            success: default_success_color(),
        }
    }
}

impl PageConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(?path, form_id = %config.form_id, "loaded page config");
        Ok(config)
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact-form.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}
