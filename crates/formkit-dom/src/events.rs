//! DOM Events
//!
//! Selection events and the listener registry of a live tree.

use std::fmt;
use std::rc::Rc;

use crate::{DomTree, NodeId};

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    /// Checked state of a control changed
    Change,
}

/// Dispatched event. Both supported types bubble from `target` to the
/// tree root.
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: EventType,
    pub target: NodeId,
    pub current_target: NodeId,
}

impl DomEvent {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
        }
    }

    /// Create change event
    pub fn change(target: NodeId) -> Self {
        Self::new(EventType::Change, target)
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target)
    }
}

/// Registered listener handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Listener callback. Receives the tree mutably so it can update classes.
pub type Listener = Rc<dyn Fn(&mut DomTree, &DomEvent)>;

struct Registration {
    id: ListenerId,
    target: NodeId,
    event_type: EventType,
    callback: Listener,
}

/// Listeners by target and event type, in registration order
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<Registration>,
}

impl ListenerRegistry {
    pub(crate) fn add(
        &mut self,
        target: NodeId,
        event_type: EventType,
        callback: Listener,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Registration {
            id,
            target,
            event_type,
            callback,
        });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.id != id);
        self.entries.len() != before
    }

    /// Drop every listener whose target satisfies `pred`, returns count
    pub(crate) fn remove_where(&mut self, pred: impl Fn(NodeId) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|r| !pred(r.target));
        before - self.entries.len()
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|r| r.id == id)
    }

    /// Callbacks cloned out so they can run with the tree borrowed mutably
    pub(crate) fn matching(&self, target: NodeId, event_type: EventType) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|r| r.target == target && r.event_type == event_type)
            .map(|r| Rc::clone(&r.callback))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.entries.len())
            .finish()
    }
}
