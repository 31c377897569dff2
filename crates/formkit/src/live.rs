//! Live Group
//!
//! A mounted radios group that owns its tree. User selections go through
//! [`LiveGroup::select`] so the reveal behaviour sees them.

use formkit_components::Config;
use formkit_dom::{to_html, DomTree, NodeId};
#[cfg(feature = "reveal")]
use formkit_reveal::RevealController;

use crate::FormkitError;

#[derive(Debug)]
pub struct LiveGroup {
    tree: DomTree,
    group: NodeId,
    hidden_class: String,
    #[cfg(feature = "reveal")]
    controllers: Vec<RevealController>,
}

impl LiveGroup {
    pub(crate) fn attach(
        #[cfg_attr(not(feature = "reveal"), allow(unused_mut))] mut tree: DomTree,
        group: NodeId,
        config: &Config,
    ) -> Self {
        #[cfg(feature = "reveal")]
        let controllers = formkit_reveal::attach_all(&mut tree, config);

        Self {
            tree,
            group,
            hidden_class: config.hidden_panel_class(),
            #[cfg(feature = "reveal")]
            controllers,
        }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Outermost node of the group
    pub fn group(&self) -> NodeId {
        self.group
    }

    /// Select the radio input with the given id. Returns `false` for
    /// disabled inputs and non-radio elements.
    pub fn select(&mut self, input_id: &str) -> Result<bool, FormkitError> {
        let input = self.lookup(input_id)?;
        Ok(self.tree.select(input))
    }

    /// Value of the checked input, if any
    pub fn checked_value(&self) -> Option<&str> {
        self.tree
            .find_elements(self.group, |e| e.is_radio() && e.checked)
            .first()
            .and_then(|&n| self.tree.element(n))
            .and_then(|e| e.attributes.value("value"))
    }

    /// Whether the conditional panel with the given id is shown
    pub fn is_panel_visible(&self, panel_id: &str) -> Result<bool, FormkitError> {
        let panel = self.lookup(panel_id)?;
        Ok(self
            .tree
            .element(panel)
            .is_some_and(|e| !e.classes.contains(&self.hidden_class)))
    }

    /// Current markup, reflecting panel visibility
    pub fn to_html(&self) -> String {
        self.tree.snapshot(self.group).map(|n| to_html(&n)).unwrap_or_default()
    }

    /// Detach every controller. Returns how many were attached.
    pub fn teardown(self) -> usize {
        #[cfg(feature = "reveal")]
        {
            let mut tree = self.tree;
            let count = self.controllers.len();
            for controller in self.controllers {
                controller.detach(&mut tree);
            }
            tracing::debug!("Tore down {} reveal controllers", count);
            count
        }
        #[cfg(not(feature = "reveal"))]
        {
            0
        }
    }

    fn lookup(&self, id: &str) -> Result<NodeId, FormkitError> {
        self.tree
            .get_element_by_id(id)
            .ok_or_else(|| FormkitError::UnknownElement(id.to_string()))
    }
}
