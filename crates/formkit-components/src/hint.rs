//! Hint

use formkit_dom::Node;
use serde::Deserialize;

use crate::{Attributes, Config, Content};

/// Hint props
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HintSpec {
    pub id: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub classes: Option<String>,
    pub attributes: Attributes,
}

pub fn render(config: &Config, spec: &HintSpec) -> Node {
    let mut node = Node::new("span").with_class(&config.class("hint"));
    node.id = spec.id.clone();
    if let Some(classes) = &spec.classes {
        node.classes.add(classes);
    }
    node.merge_attributes(&spec.attributes);
    if let Some(content) = Content::resolve(spec.text.as_deref(), spec.html.as_deref()) {
        node.push(content);
    }
    node
}
