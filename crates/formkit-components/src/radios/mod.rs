//! Radios
//!
//! A group of mutually exclusive choices with optional fieldset, hint,
//! error message, per-item hints, dividers and conditionally revealed
//! panels.
//!
//! Ids are derived from the group's id prefix (or its name):
//! - group hint: `{prefix}-hint`
//! - group error: `{prefix}-error`
//! - unlabelled item at position `i`: `{prefix}-{i + 1}`
//! - item hint: `{item id}-item-hint`
//! - conditional panel: `conditional-{item id}`

mod render;

pub use render::render;

use serde::Deserialize;

use crate::{Attributes, ConfigurationError, ErrorSpec, FieldsetSpec, HintSpec};

/// Full description of one radios group
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupSpec {
    /// Field name shared by every item without its own
    pub name: Option<String>,
    /// Defaults to `name`
    pub id_prefix: Option<String>,
    /// Render order
    pub items: Vec<ItemSpec>,
    pub fieldset: Option<FieldsetSpec>,
    pub hint: Option<HintSpec>,
    pub error_message: Option<ErrorSpec>,
    pub form_group: Option<FormGroupSpec>,
    /// Extra classes for the items container
    pub classes: String,
    /// Extra attributes for the items container
    pub attributes: Attributes,
}

impl GroupSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_item(mut self, item: impl Into<ItemSpec>) -> Self {
        self.items.push(item.into());
        self
    }

    /// `id_prefix`, falling back to `name`. Empty strings count as unset.
    pub fn resolved_id_prefix(&self) -> Result<&str, ConfigurationError> {
        self.id_prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.name.as_deref().filter(|n| !n.is_empty()))
            .ok_or(ConfigurationError::MissingIdentity)
    }

    pub fn choices(&self) -> impl Iterator<Item = &ChoiceSpec> {
        self.items.iter().filter_map(|item| match item {
            ItemSpec::Choice(choice) => Some(choice),
            ItemSpec::Divider { .. } => None,
        })
    }

    /// At least one choice has a non-empty conditional panel
    pub fn is_conditional(&self) -> bool {
        self.choices().any(|c| c.conditional_html().is_some())
    }
}

/// One entry of `GroupSpec::items`, told apart by shape
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    /// Non-interactive separator ("or")
    Divider {
        #[serde(rename = "divider")]
        text: String,
    },
    Choice(ChoiceSpec),
}

impl ItemSpec {
    pub fn divider(text: impl Into<String>) -> Self {
        ItemSpec::Divider { text: text.into() }
    }
}

impl From<ChoiceSpec> for ItemSpec {
    fn from(choice: ChoiceSpec) -> Self {
        ItemSpec::Choice(choice)
    }
}

/// A selectable radio item
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoiceSpec {
    pub id: Option<String>,
    /// Overrides `GroupSpec::name`
    pub name: Option<String>,
    pub value: String,
    pub text: Option<String>,
    pub html: Option<String>,
    pub label: Option<LabelOverrides>,
    /// Initial state only
    pub checked: bool,
    pub disabled: bool,
    pub hint: Option<HintSpec>,
    pub conditional: Option<ConditionalSpec>,
    /// Extra attributes for the input, applied last
    pub attributes: Attributes,
}

impl ChoiceSpec {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(HintSpec {
            text: Some(text.into()),
            ..Default::default()
        });
        self
    }

    pub fn with_conditional(mut self, html: impl Into<String>) -> Self {
        self.conditional = Some(ConditionalSpec { html: html.into() });
        self
    }

    /// Conditional markup, `None` when absent or empty
    pub fn conditional_html(&self) -> Option<&str> {
        self.conditional
            .as_ref()
            .map(|c| c.html.as_str())
            .filter(|html| !html.is_empty())
    }
}

/// Content revealed while the owning choice is selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConditionalSpec {
    /// Trusted markup, never escaped
    pub html: String,
}

/// Per-item label decoration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub classes: Option<String>,
    pub attributes: Attributes,
}

/// Outer form-group decoration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormGroupSpec {
    pub classes: Option<String>,
}
