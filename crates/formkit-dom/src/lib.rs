//! formkit DOM
//!
//! Semantic node model produced by the component renderers, plus the
//! arena-backed live tree that runtime behaviours attach to.

mod attributes;
mod classlist;
mod events;
mod node;
mod serialize;
mod tree;

pub use attributes::{Attr, AttributeMap};
pub use classlist::ClassList;
pub use events::{DomEvent, EventType, Listener, ListenerId};
pub use node::{Child, Node};
pub use serialize::{escape_attr, escape_text, to_html};
pub use tree::{DomTree, LiveData, LiveElement, LiveNode, MarkupParser, OpaqueMarkup};

/// Node identifier (index into the live tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Live tree error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    #[error("Node {0:?} cannot have children")]
    NotAContainer(NodeId),

    #[error("Markup could not be parsed: {0}")]
    Markup(String),
}
