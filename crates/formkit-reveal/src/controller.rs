//! Reveal Controller
//!
//! Each conditional panel is `Hidden` or `Shown`:
//! - `Hidden -> Shown` when its owning input is selected
//! - `Shown -> Hidden` when another input with the same name is selected
//!
//! The state is the panel's hidden class, mirrored by `aria-expanded` on
//! the owning input; the controller keeps nothing else. On attach each
//! `data-aria-controls` becomes `aria-controls`. Inputs whose
//! `data-aria-controls` matches no element are inert and left untouched.

use std::rc::Rc;

use formkit_components::Config;
use formkit_dom::{DomTree, EventType, ListenerId, NodeId};

use crate::is_marked;

/// Visibility of one conditional panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Shown,
}

impl PanelState {
    /// State after a selection event. `owner`: the selected input owns this
    /// panel. `same_group`: the selected input shares the owner's name.
    pub fn on_selection(self, owner: bool, same_group: bool) -> Self {
        match (owner, same_group) {
            (true, _) => PanelState::Shown,
            (false, true) => PanelState::Hidden,
            (false, false) => self,
        }
    }
}

/// Input and the panel it controls
#[derive(Debug, Clone)]
struct Binding {
    input: NodeId,
    panel: NodeId,
    name: Option<String>,
}

#[derive(Debug)]
struct Wiring {
    bindings: Vec<Binding>,
    hidden_class: String,
}

impl Wiring {
    fn state(&self, tree: &DomTree, panel: NodeId) -> PanelState {
        match tree.element(panel) {
            Some(e) if !e.classes.contains(&self.hidden_class) => PanelState::Shown,
            _ => PanelState::Hidden,
        }
    }

    fn apply(&self, tree: &mut DomTree, binding: &Binding, state: PanelState) {
        let shown = state == PanelState::Shown;
        if let Some(panel) = tree.element_mut(binding.panel) {
            panel.classes.toggle(&self.hidden_class, Some(!shown));
        }
        if let Some(input) = tree.element_mut(binding.input) {
            input.attributes.set("aria-expanded", if shown { "true" } else { "false" });
        }
    }

    /// Promote `data-aria-controls` to `aria-controls`
    fn wire(&self, tree: &mut DomTree) {
        for binding in &self.bindings {
            let Some(panel_id) = tree.element(binding.panel).and_then(|e| e.id.clone()) else {
                continue;
            };
            if let Some(input) = tree.element_mut(binding.input) {
                input.attributes.set("aria-controls", &panel_id);
                input.attributes.remove("data-aria-controls");
            }
        }
    }

    /// Align every panel with its input's current checked state
    fn sync(&self, tree: &mut DomTree) {
        for binding in &self.bindings {
            let state = if tree.is_checked(binding.input) {
                PanelState::Shown
            } else {
                PanelState::Hidden
            };
            self.apply(tree, binding, state);
        }
    }

    fn on_selection(&self, tree: &mut DomTree, selected: NodeId) {
        let selected_name = tree.element(selected).and_then(|e| e.name()).map(str::to_owned);
        for binding in &self.bindings {
            let owner = binding.input == selected;
            let same_group = selected_name.is_some() && binding.name == selected_name;
            let current = self.state(tree, binding.panel);
            let next = current.on_selection(owner, same_group);
            if next != current {
                tracing::trace!("Panel {:?}: {:?} -> {:?}", binding.panel, current, next);
                self.apply(tree, binding, next);
            }
        }
    }
}

/// Reveal behaviour attached to one live items container
#[derive(Debug)]
pub struct RevealController {
    root: NodeId,
    listener: ListenerId,
    wiring: Rc<Wiring>,
}

impl RevealController {
    /// Attach to an items container carrying the module marker. Returns
    /// `None` for unmarked containers. Inputs are wired and panels synced
    /// to the current checked state before the listener is registered.
    pub fn attach(tree: &mut DomTree, root: NodeId, config: &Config) -> Option<Self> {
        if !is_marked(tree, root, config) {
            return None;
        }

        let bindings: Vec<Binding> = tree
            .find_elements(root, |e| e.is_radio())
            .into_iter()
            .filter_map(|input| {
                let element = tree.element(input)?;
                let controls = element.attributes.value("data-aria-controls")?;
                let panel = tree.get_element_by_id(controls)?;
                Some(Binding {
                    input,
                    panel,
                    name: element.name().map(str::to_owned),
                })
            })
            .collect();

        let wiring = Rc::new(Wiring {
            bindings,
            hidden_class: config.hidden_panel_class(),
        });
        wiring.wire(tree);
        wiring.sync(tree);

        let handler = Rc::clone(&wiring);
        let listener = tree.add_event_listener(root, EventType::Change, move |tree, event| {
            if tree.element(event.target).is_some_and(|e| e.is_radio()) {
                handler.on_selection(tree, event.target);
            }
        });

        tracing::debug!(
            "Attached reveal controller to {:?} ({} panels)",
            root,
            wiring.bindings.len()
        );
        Some(Self { root, listener, wiring })
    }

    /// Deregister the listener. Detaching `root` from the tree has the
    /// same effect.
    pub fn detach(self, tree: &mut DomTree) -> bool {
        let removed = tree.remove_event_listener(self.listener);
        tracing::debug!("Detached reveal controller from {:?}", self.root);
        removed
    }

    pub fn is_attached(&self, tree: &DomTree) -> bool {
        tree.has_listener(self.listener)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of wired input/panel pairs
    pub fn panel_count(&self) -> usize {
        self.wiring.bindings.len()
    }

    /// Panel controlled by `input`
    pub fn panel_for(&self, input: NodeId) -> Option<NodeId> {
        self.wiring
            .bindings
            .iter()
            .find(|b| b.input == input)
            .map(|b| b.panel)
    }

    /// State of a wired panel
    pub fn panel_state(&self, tree: &DomTree, panel: NodeId) -> Option<PanelState> {
        self.wiring
            .bindings
            .iter()
            .any(|b| b.panel == panel)
            .then(|| self.wiring.state(tree, panel))
    }
}
