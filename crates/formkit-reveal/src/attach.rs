//! Behaviour attachment

use formkit_components::Config;
use formkit_dom::{DomTree, LiveElement, NodeId};

use crate::RevealController;

fn carries_marker(element: &LiveElement, config: &Config) -> bool {
    element.attributes.value(&config.module_attribute) == Some(config.radios_module.as_str())
}

/// `node` is an items container rendered with conditional panels
pub fn is_marked(tree: &DomTree, node: NodeId, config: &Config) -> bool {
    tree.element(node).is_some_and(|e| carries_marker(e, config))
}

/// Attach a controller to every marked container in the tree
pub fn attach_all(tree: &mut DomTree, config: &Config) -> Vec<RevealController> {
    let marked = tree.find_elements(tree.root(), |e| carries_marker(e, config));
    marked
        .into_iter()
        .filter_map(|root| RevealController::attach(tree, root, config))
        .collect()
}
