//! Text or markup content of a component

use formkit_dom::Child;

/// Resolved `text|html` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    /// Trusted markup, never escaped
    Html(String),
}

impl Content {
    /// Resolve a `text`/`html` pair. `html` wins when both are set; empty
    /// strings count as unset.
    pub fn resolve(text: Option<&str>, html: Option<&str>) -> Option<Self> {
        match (html.filter(|h| !h.is_empty()), text.filter(|t| !t.is_empty())) {
            (Some(html), _) => Some(Content::Html(html.to_string())),
            (None, Some(text)) => Some(Content::Text(text.to_string())),
            (None, None) => None,
        }
    }

    pub fn into_child(self) -> Child {
        match self {
            Content::Text(t) => Child::Text(t),
            Content::Html(h) => Child::Html(h),
        }
    }
}

impl From<Content> for Child {
    fn from(content: Content) -> Self {
        content.into_child()
    }
}
