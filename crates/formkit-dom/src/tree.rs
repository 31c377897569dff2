//! Live DOM Tree (arena-based allocation)
//!
//! A mounted, interactive instance of a semantic node tree. Arena slots
//! are never reused: detaching a subtree unlinks it from its parent and
//! drops the listeners registered inside it, but its ids stay valid.

use std::rc::Rc;

use crate::events::ListenerRegistry;
use crate::{
    AttributeMap, Child, ClassList, DomError, DomEvent, EventType, ListenerId, Node, NodeId,
};

/// Arena node
#[derive(Debug)]
pub struct LiveNode {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: LiveData,
}

/// Node-specific data
#[derive(Debug)]
pub enum LiveData {
    /// Document root
    Root,
    Element(LiveElement),
    Text(String),
    /// Markup kept verbatim by `OpaqueMarkup`
    Raw(String),
}

/// Element-specific data
#[derive(Debug, Clone, Default)]
pub struct LiveElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: ClassList,
    pub attributes: AttributeMap,
    /// Current checked state. Seeded from the `checked` attribute at
    /// mount time; the attribute itself is never rewritten.
    pub checked: bool,
}

impl LiveElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn from_node(node: &Node) -> Self {
        Self {
            tag: node.tag.clone(),
            id: node.id.clone(),
            classes: node.classes.clone(),
            attributes: node.attributes.clone(),
            checked: node.has_attr("checked"),
        }
    }

    pub fn is_radio(&self) -> bool {
        self.tag == "input" && self.attributes.value("type") == Some("radio")
    }

    pub fn is_disabled(&self) -> bool {
        self.attributes.contains("disabled")
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.value("name")
    }
}

/// Mounts raw markup children. Implementations decide how much of the
/// markup becomes real nodes.
pub trait MarkupParser {
    fn mount_markup(
        &self,
        tree: &mut DomTree,
        parent: NodeId,
        markup: &str,
    ) -> Result<(), DomError>;
}

/// Keeps markup as a single opaque `LiveData::Raw` node
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueMarkup;

impl MarkupParser for OpaqueMarkup {
    fn mount_markup(
        &self,
        tree: &mut DomTree,
        parent: NodeId,
        markup: &str,
    ) -> Result<(), DomError> {
        let id = tree.create_raw(markup);
        tree.append_child(parent, id)
    }
}

/// Arena-based live tree with an event listener registry
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<LiveNode>,
    listeners: ListenerRegistry,
}

impl DomTree {
    /// Create a tree holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![LiveNode {
                parent: None,
                children: Vec::new(),
                data: LiveData::Root,
            }],
            listeners: ListenerRegistry::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&LiveNode> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut LiveNode> {
        self.nodes.get_mut(id.index())
    }

    pub fn element(&self, id: NodeId) -> Option<&LiveElement> {
        match &self.get(id)?.data {
            LiveData::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut LiveElement> {
        match &mut self.get_mut(id)?.data {
            LiveData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Number of arena slots, root and detached nodes included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only the root node exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn push(&mut self, data: LiveData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(LiveNode {
            parent: None,
            children: Vec::new(),
            data,
        });
        id
    }

    pub fn create_element(&mut self, element: LiveElement) -> NodeId {
        self.push(LiveData::Element(element))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(LiveData::Text(text.to_string()))
    }

    pub fn create_raw(&mut self, markup: &str) -> NodeId {
        self.push(LiveData::Raw(markup.to_string()))
    }

    /// Append `child` to `parent`, moving it if already attached elsewhere
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        match self.get(parent).map(|n| &n.data) {
            Some(LiveData::Root | LiveData::Element(_)) => {}
            Some(_) => return Err(DomError::NotAContainer(parent)),
            None => return Err(DomError::UnknownNode(parent)),
        }
        let old_parent = self.get(child).ok_or(DomError::UnknownNode(child))?.parent;
        if let Some(old) = old_parent.and_then(|p| self.get_mut(p)) {
            old.children.retain(|&c| c != child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// `id` followed by its ancestors, nearest first
    pub fn event_path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node) = current {
            path.push(node);
            current = self.parent(node);
        }
        path
    }

    /// Descendants of `id` in document order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        out
    }

    /// Still reachable from the root
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.event_path(id).last() == Some(&NodeId::ROOT)
    }

    /// First connected element with the given id, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(NodeId::ROOT)
            .into_iter()
            .find(|&n| self.element(n).and_then(|e| e.id.as_deref()) == Some(id))
    }

    /// Elements under `scope` matching `pred`, in document order
    pub fn find_elements(&self, scope: NodeId, pred: impl Fn(&LiveElement) -> bool) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.element(n).is_some_and(&pred))
            .collect()
    }

    /// Mount a semantic node under `parent`, keeping raw markup opaque
    pub fn mount(&mut self, parent: NodeId, node: &Node) -> Result<NodeId, DomError> {
        self.mount_with(parent, node, &OpaqueMarkup)
    }

    /// Mount a semantic node under `parent`, handing raw markup to `markup`
    pub fn mount_with(
        &mut self,
        parent: NodeId,
        node: &Node,
        markup: &dyn MarkupParser,
    ) -> Result<NodeId, DomError> {
        let id = self.create_element(LiveElement::from_node(node));
        self.append_child(parent, id)?;
        for child in &node.children {
            self.mount_child(id, child, markup)?;
        }
        tracing::trace!("Mounted <{}> as {:?}", node.tag, id);
        Ok(id)
    }

    pub fn mount_child(
        &mut self,
        parent: NodeId,
        child: &Child,
        markup: &dyn MarkupParser,
    ) -> Result<(), DomError> {
        match child {
            Child::Element(node) => {
                self.mount_with(parent, node, markup)?;
            }
            Child::Text(text) => {
                let id = self.create_text(text);
                self.append_child(parent, id)?;
            }
            Child::Html(html) => markup.mount_markup(self, parent, html)?,
        }
        Ok(())
    }

    /// Unlink a subtree from its parent and drop the listeners registered
    /// inside it. Returns the number of listeners dropped.
    pub fn detach(&mut self, id: NodeId) -> Result<usize, DomError> {
        if id == NodeId::ROOT {
            return Err(DomError::NotAContainer(id));
        }
        let parent = self.get(id).ok_or(DomError::UnknownNode(id))?.parent;
        if let Some(p) = parent.and_then(|p| self.get_mut(p)) {
            p.children.retain(|&c| c != id);
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }

        let mut subtree = self.descendants(id);
        subtree.push(id);
        let dropped = self.listeners.remove_where(|target| subtree.contains(&target));
        tracing::debug!("Detached {:?}, dropped {} listeners", id, dropped);
        Ok(dropped)
    }

    /// Rebuild a semantic node from a live element. Reflects current
    /// classes and attributes; the live checked state is not written back.
    pub fn snapshot(&self, id: NodeId) -> Option<Node> {
        let element = self.element(id)?;
        let mut node = Node::new(element.tag.clone());
        node.id = element.id.clone();
        node.classes = element.classes.clone();
        node.attributes = element.attributes.clone();
        for &child in self.children(id) {
            match &self.get(child)?.data {
                LiveData::Element(_) => node.push(self.snapshot(child)?),
                LiveData::Text(t) => node.push(Child::Text(t.clone())),
                LiveData::Raw(r) => node.push(Child::Html(r.clone())),
                LiveData::Root => {}
            }
        }
        Some(node)
    }

    // === Events ===

    pub fn add_event_listener(
        &mut self,
        target: NodeId,
        event_type: EventType,
        callback: impl Fn(&mut DomTree, &DomEvent) + 'static,
    ) -> ListenerId {
        self.listeners.add(target, event_type, Rc::new(callback))
    }

    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Run listeners from the target up to the root. Returns how many ran.
    pub fn dispatch(&mut self, event: DomEvent) -> usize {
        let mut ran = 0;
        for node in self.event_path(event.target) {
            for callback in self.listeners.matching(node, event.event_type) {
                let current = DomEvent {
                    current_target: node,
                    ..event.clone()
                };
                callback(self, &current);
                ran += 1;
            }
        }
        ran
    }

    // === Form controls ===

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|e| e.checked)
    }

    /// Select a radio input the way a user would: check it, uncheck the
    /// radios sharing its name, fire `click`, then fire `change` if the
    /// checked state moved. Disabled and non-radio targets are ignored.
    pub fn select(&mut self, id: NodeId) -> bool {
        let name = match self.element(id) {
            Some(e) if e.is_radio() && !e.is_disabled() => e.name().map(str::to_owned),
            _ => return false,
        };
        let was_checked = self.is_checked(id);

        if let Some(name) = name {
            let mates = self.find_elements(NodeId::ROOT, |e| {
                e.is_radio() && e.name() == Some(name.as_str())
            });
            for mate in mates {
                if let Some(e) = self.element_mut(mate) {
                    e.checked = false;
                }
            }
        }
        if let Some(e) = self.element_mut(id) {
            e.checked = true;
        }

        self.dispatch(DomEvent::click(id));
        if !was_checked {
            self.dispatch(DomEvent::change(id));
        }
        true
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn radio(id: &str, name: &str) -> Node {
        Node::new("input")
            .with_id(id)
            .with_attr("type", "radio")
            .with_attr("name", name)
    }

    #[test]
    fn test_mount_preserves_order() {
        let node = Node::new("div")
            .with_id("group")
            .with_child(radio("a", "x"))
            .with_text("between")
            .with_child(radio("b", "x"));
        let mut tree = DomTree::new();
        let root = tree.mount(tree.root(), &node).unwrap();

        assert_eq!(tree.children(root).len(), 3);
        assert_eq!(tree.get_element_by_id("group"), Some(root));
        let ids: Vec<_> = tree
            .find_elements(root, LiveElement::is_radio)
            .into_iter()
            .filter_map(|n| tree.element(n).and_then(|e| e.id.clone()))
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_checked_seeded_from_attribute() {
        let node = Node::new("div").with_child(radio("a", "x").with_flag("checked"));
        let mut tree = DomTree::new();
        tree.mount(tree.root(), &node).unwrap();

        let a = tree.get_element_by_id("a").unwrap();
        assert!(tree.is_checked(a));
    }

    #[test]
    fn test_select_unchecks_name_mates() {
        let node = Node::new("div")
            .with_child(radio("a", "x").with_flag("checked"))
            .with_child(radio("b", "x"))
            .with_child(radio("c", "other").with_flag("checked"));
        let mut tree = DomTree::new();
        tree.mount(tree.root(), &node).unwrap();
        let a = tree.get_element_by_id("a").unwrap();
        let b = tree.get_element_by_id("b").unwrap();
        let c = tree.get_element_by_id("c").unwrap();

        assert!(tree.select(b));
        assert!(!tree.is_checked(a));
        assert!(tree.is_checked(b));
        assert!(tree.is_checked(c));
    }

    #[test]
    fn test_select_ignores_disabled() {
        let node = Node::new("div").with_child(radio("a", "x").with_flag("disabled"));
        let mut tree = DomTree::new();
        tree.mount(tree.root(), &node).unwrap();
        let a = tree.get_element_by_id("a").unwrap();

        assert!(!tree.select(a));
        assert!(!tree.is_checked(a));
    }

    #[test]
    fn test_change_bubbles_once_per_state_change() {
        let node = Node::new("div").with_id("group").with_child(radio("a", "x"));
        let mut tree = DomTree::new();
        let group = tree.mount(tree.root(), &node).unwrap();
        let a = tree.get_element_by_id("a").unwrap();

        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        tree.add_event_listener(group, EventType::Change, move |_, event| {
            assert_eq!(event.target, a);
            counter.set(counter.get() + 1);
        });

        tree.select(a);
        tree.select(a);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_detach_drops_listeners() {
        let node = Node::new("div").with_id("group").with_child(radio("a", "x"));
        let mut tree = DomTree::new();
        let group = tree.mount(tree.root(), &node).unwrap();
        let id = tree.add_event_listener(group, EventType::Change, |_, _| {});
        tree.add_event_listener(tree.root(), EventType::Change, |_, _| {});

        assert_eq!(tree.detach(group).unwrap(), 1);
        assert!(!tree.has_listener(id));
        assert_eq!(tree.listener_count(), 1);
        assert!(!tree.is_connected(group));
        assert!(tree.get_element_by_id("a").is_none());
    }

    #[test]
    fn test_snapshot_round_trips_markup() {
        let node = Node::new("div")
            .with_class("panel")
            .with_html("<p>raw</p>")
            .with_child(Node::new("span").with_text("t"));
        let mut tree = DomTree::new();
        let id = tree.mount(tree.root(), &node).unwrap();

        assert_eq!(tree.snapshot(id), Some(node));
    }
}
