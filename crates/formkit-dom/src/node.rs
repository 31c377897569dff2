//! Semantic Node
//!
//! Plain owned output of the component renderers. Turning a node into
//! markup or into a live tree is left to `serialize` and `DomTree`.

use crate::{AttributeMap, ClassList};

/// Node child
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(Node),
    /// Text, escaped when rendered
    Text(String),
    /// Pre-sanitized markup, emitted verbatim
    Html(String),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Element(node)
    }
}

/// Element node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: ClassList,
    pub attributes: AttributeMap,
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add whitespace-separated classes
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes.add(classes);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Add a boolean attribute
    pub fn with_flag(mut self, name: &str) -> Self {
        self.attributes.set_flag(name);
        self
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Child::Text(text.into()))
    }

    pub fn with_html(self, html: impl Into<String>) -> Self {
        self.with_child(Child::Html(html.into()))
    }

    pub fn push(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    /// Apply passthrough attributes in order. `id` replaces the node id,
    /// `class` adds to the class list, anything else is set or replaced.
    pub fn merge_attributes<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) {
        for (name, value) in pairs {
            match name.as_str() {
                "id" => self.id = Some(value.clone()),
                "class" => self.classes.add(value),
                _ => self.attributes.set(name, value),
            }
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.value(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Element children, skipping text and markup
    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(n) => Some(n),
            _ => None,
        })
    }

    /// Depth-first search including `self`
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|n| n.find_by_id(id))
    }

    /// All matching nodes in document order, including `self`
    pub fn find_all(&self, pred: impl Fn(&Node) -> bool) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(&pred, &mut out);
        out
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Node) -> bool, out: &mut Vec<&'a Node>) {
        if pred(self) {
            out.push(self);
        }
        for child in self.elements() {
            child.collect(pred, out);
        }
    }

    /// Concatenated text and raw markup of the subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Child::Element(n) => out.push_str(&n.text_content()),
                Child::Text(t) | Child::Html(t) => out.push_str(t),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::new("div")
            .with_id("outer")
            .with_child(Node::new("span").with_class("a").with_text("one"))
            .with_child(
                Node::new("div").with_child(
                    Node::new("span")
                        .with_id("deep")
                        .with_class("a")
                        .with_html("<b>two</b>"),
                ),
            )
    }

    #[test]
    fn test_find_by_id() {
        let node = sample();
        assert_eq!(node.find_by_id("outer").map(|n| n.tag.as_str()), Some("div"));
        assert_eq!(
            node.find_by_id("deep").map(|n| n.text_content()),
            Some("<b>two</b>".into())
        );
        assert!(node.find_by_id("nope").is_none());
    }

    #[test]
    fn test_find_all_document_order() {
        let node = sample();
        let spans = node.find_all(|n| n.has_class("a"));
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].id.as_deref(), Some("deep"));
    }

    #[test]
    fn test_text_content() {
        assert_eq!(sample().text_content(), "one<b>two</b>");
    }

    #[test]
    fn test_merge_attributes_routes_id_and_class() {
        let pairs = [
            ("data-x".to_string(), "1".to_string()),
            ("id".to_string(), "custom".to_string()),
            ("class".to_string(), "extra base".to_string()),
        ];
        let mut node = Node::new("input").with_id("x-1").with_class("base");
        node.merge_attributes(pairs.iter().map(|(n, v)| (n, v)));

        assert_eq!(node.id.as_deref(), Some("custom"));
        assert_eq!(node.classes.value(), "base extra");
        assert_eq!(node.attributes.len(), 1);
        assert!(!node.has_attr("id"));
        assert!(!node.has_attr("class"));
    }
}
