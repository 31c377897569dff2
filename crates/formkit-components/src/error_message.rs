//! Error Message
//!
//! Inline validation message. A visually-hidden prefix ("Error:" by
//! default) is read out before the message by assistive technology.

use formkit_dom::Node;
use serde::Deserialize;

use crate::{Attributes, Config, Content};

/// Error message props
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorSpec {
    pub id: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    /// `None` uses `Config::error_prefix`; an empty string drops the prefix
    pub visually_hidden_text: Option<String>,
    pub classes: Option<String>,
    pub attributes: Attributes,
}

pub fn render(config: &Config, spec: &ErrorSpec) -> Node {
    let mut node = Node::new("span").with_class(&config.class("error-message"));
    node.id = spec.id.clone();
    if let Some(classes) = &spec.classes {
        node.classes.add(classes);
    }
    node.merge_attributes(&spec.attributes);

    let prefix = spec.visually_hidden_text.as_deref().unwrap_or(&config.error_prefix);
    if !prefix.is_empty() {
        node.push(
            Node::new("span")
                .with_class(&config.class("visually-hidden"))
                .with_text(prefix),
        );
    }
    if let Some(content) = Content::resolve(spec.text.as_deref(), spec.html.as_deref()) {
        node.push(content);
    }
    node
}
