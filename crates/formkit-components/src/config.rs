//! Component Configuration

use serde::Deserialize;

/// Configuration shared by every renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Prefix of every generated class name (`govuk` → `govuk-radios`)
    pub class_prefix: String,

    /// Default visually-hidden text placed before error messages
    pub error_prefix: String,

    /// Attribute naming the behaviour module of an items container
    pub module_attribute: String,

    /// Module name marking radios with conditional panels
    pub radios_module: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_prefix: "govuk".to_string(),
            error_prefix: "Error:".to_string(),
            module_attribute: "data-module".to_string(),
            radios_module: "radios".to_string(),
        }
    }
}

impl Config {
    /// Prefixed class name for a block or element
    pub fn class(&self, block: &str) -> String {
        if self.class_prefix.is_empty() {
            block.to_string()
        } else {
            format!("{}-{}", self.class_prefix, block)
        }
    }

    /// Class toggled on hidden conditional panels
    pub fn hidden_panel_class(&self) -> String {
        self.class("radios__conditional--hidden")
    }
}
