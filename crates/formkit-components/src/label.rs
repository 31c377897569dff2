//! Label

use formkit_dom::Node;
use serde::Deserialize;

use crate::{Attributes, Config, Content};

/// Label props
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelSpec {
    pub text: Option<String>,
    pub html: Option<String>,
    pub classes: Option<String>,
    /// Id of the labelled control
    #[serde(rename = "for")]
    pub for_id: Option<String>,
    pub attributes: Attributes,
}

/// Render a `label` bound to `for_id`
pub fn render(config: &Config, spec: &LabelSpec) -> Node {
    let mut node = Node::new("label").with_class(&config.class("label"));
    if let Some(classes) = &spec.classes {
        node.classes.add(classes);
    }
    node.merge_attributes(&spec.attributes);
    if let Some(for_id) = &spec.for_id {
        node.attributes.set("for", for_id);
    }
    if let Some(content) = Content::resolve(spec.text.as_deref(), spec.html.as_deref()) {
        node.push(content);
    }
    node
}
