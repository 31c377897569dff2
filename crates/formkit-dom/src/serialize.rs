//! HTML serializer
//!
//! Renders a semantic node to markup. Text and attribute values are
//! escaped; `Child::Html` is written verbatim.

use crate::{Child, Node};

/// Elements written without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Render a node tree to an HTML string
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    out.push('<');
    out.push_str(&node.tag);

    if let Some(id) = &node.id {
        write_attr(out, "id", Some(id));
    }
    if !node.classes.is_empty() {
        write_attr(out, "class", Some(&node.classes.value()));
    }
    for attr in node.attributes.iter() {
        write_attr(out, &attr.name, attr.value.as_deref());
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&node.tag.as_str()) {
        return;
    }

    for child in &node.children {
        match child {
            Child::Element(n) => write_node(out, n),
            Child::Text(t) => out.push_str(&escape_text(t)),
            Child::Html(h) => out.push_str(h),
        }
    }

    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: Option<&str>) {
    out.push(' ');
    out.push_str(name);
    if let Some(value) = value {
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
}

/// Escape text content
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a double-quoted attribute value
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
