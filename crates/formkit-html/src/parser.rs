//! HTML5 fragment parsing
//!
//! Runs html5ever's document parser over the fragment and converts the
//! children of `<body>` into semantic nodes.

use formkit_dom::{Child, DomError, DomTree, MarkupParser, Node, NodeId, OpaqueMarkup};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::HtmlError;

/// Parse a markup fragment into semantic children
pub fn parse_fragment(markup: &str) -> Result<Vec<Child>, HtmlError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut markup.as_bytes())?;

    let children = match find_element(&dom.document, "body") {
        Some(body) => convert_children(&body),
        None => Vec::new(),
    };

    tracing::debug!("Parsed fragment into {} top-level nodes", children.len());
    Ok(children)
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == tag {
            return Some(handle.clone());
        }
    }
    handle.children.borrow().iter().find_map(|child| find_element(child, tag))
}

fn convert_children(handle: &Handle) -> Vec<Child> {
    handle.children.borrow().iter().filter_map(convert_node).collect()
}

/// Convert an RcDom node; comments and whitespace-only text are dropped
fn convert_node(handle: &Handle) -> Option<Child> {
    match &handle.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if text.trim().is_empty() {
                None
            } else {
                Some(Child::Text(text))
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let mut node = Node::new(String::from(&*name.local));

            for attr in attrs.borrow().iter() {
                let value = attr.value.to_string();
                match &*attr.name.local {
                    "id" => node.id = Some(value),
                    "class" => node.classes.add(&value),
                    other => node.attributes.set(other, &value),
                }
            }

            node.children = convert_children(handle);
            Some(Child::Element(node))
        }
        _ => None,
    }
}

/// Mounts raw markup as real live nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5Markup;

impl MarkupParser for Html5Markup {
    fn mount_markup(
        &self,
        tree: &mut DomTree,
        parent: NodeId,
        markup: &str,
    ) -> Result<(), DomError> {
        let children = parse_fragment(markup).map_err(|e| DomError::Markup(e.to_string()))?;
        for child in &children {
            // Parsed output holds no raw markup of its own
            tree.mount_child(parent, child, &OpaqueMarkup)?;
        }
        Ok(())
    }
}
