//! Reveal behaviour on mounted radios

use formkit_components::{radios, ChoiceSpec, Config, GroupSpec, ItemSpec};
use formkit_dom::{DomTree, NodeId};
use formkit_html::Html5Markup;
use formkit_reveal::{attach_all, is_marked, PanelState, RevealController};

fn contact_group(name: &str) -> GroupSpec {
    GroupSpec::named(name)
        .with_item(ChoiceSpec::new("email", "Email").with_conditional("<p>Email address</p>"))
        .with_item(ChoiceSpec::new("phone", "Phone").with_conditional("<p>Phone number</p>"))
        .with_item(ChoiceSpec::new("post", "Post"))
}

fn mount(spec: &GroupSpec) -> (DomTree, NodeId) {
    let config = Config::default();
    let node = radios::render(&config, spec).unwrap();
    let mut tree = DomTree::new();
    let root = tree.root();
    let group = tree.mount_with(root, &node, &Html5Markup).unwrap();
    (tree, group)
}

fn by_id(tree: &DomTree, id: &str) -> NodeId {
    tree.get_element_by_id(id).unwrap()
}

fn hidden(tree: &DomTree, id: &str) -> bool {
    tree.element(by_id(tree, id))
        .unwrap()
        .classes
        .contains("govuk-radios__conditional--hidden")
}

#[test]
fn test_attach_to_marked_container_only() {
    let (mut tree, group) = mount(&contact_group("contact"));
    let config = Config::default();

    assert!(!is_marked(&tree, group, &config));
    assert!(RevealController::attach(&mut tree, group, &config).is_none());

    let controllers = attach_all(&mut tree, &config);
    assert_eq!(controllers.len(), 1);
    assert_eq!(controllers[0].panel_count(), 2);
    assert!(controllers[0].is_attached(&tree));
}

#[test]
fn test_plain_group_gets_no_controller() {
    let spec = GroupSpec::named("plain")
        .with_item(ChoiceSpec::new("a", "A"))
        .with_item(ChoiceSpec::new("b", "B"));
    let (mut tree, _) = mount(&spec);
    assert!(attach_all(&mut tree, &Config::default()).is_empty());
}

#[test]
fn test_selecting_reveals_own_panel_and_hides_the_rest() {
    let (mut tree, _) = mount(&contact_group("contact"));
    let _controllers = attach_all(&mut tree, &Config::default());

    assert!(hidden(&tree, "conditional-contact-1"));
    assert!(hidden(&tree, "conditional-contact-2"));

    tree.select(by_id(&tree, "contact-1"));
    assert!(!hidden(&tree, "conditional-contact-1"));
    assert!(hidden(&tree, "conditional-contact-2"));

    tree.select(by_id(&tree, "contact-2"));
    assert!(hidden(&tree, "conditional-contact-1"));
    assert!(!hidden(&tree, "conditional-contact-2"));

    // A choice without a panel still closes the open one
    tree.select(by_id(&tree, "contact-3"));
    assert!(hidden(&tree, "conditional-contact-1"));
    assert!(hidden(&tree, "conditional-contact-2"));
}

#[test]
fn test_reselecting_keeps_panel_open() {
    let (mut tree, _) = mount(&contact_group("contact"));
    let _controllers = attach_all(&mut tree, &Config::default());

    let email = by_id(&tree, "contact-1");
    tree.select(email);
    tree.select(email);
    assert!(!hidden(&tree, "conditional-contact-1"));
}

#[test]
fn test_panel_state_queries() {
    let (mut tree, _) = mount(&contact_group("contact"));
    let controllers = attach_all(&mut tree, &Config::default());
    let controller = &controllers[0];

    let email = by_id(&tree, "contact-1");
    let panel = controller.panel_for(email).unwrap();
    assert_eq!(panel, by_id(&tree, "conditional-contact-1"));
    assert_eq!(controller.panel_state(&tree, panel), Some(PanelState::Hidden));

    tree.select(email);
    assert_eq!(controller.panel_state(&tree, panel), Some(PanelState::Shown));

    assert_eq!(controller.panel_for(by_id(&tree, "contact-3")), None);
    assert_eq!(controller.panel_state(&tree, email), None);
}

#[test]
fn test_initially_checked_panel_is_shown() {
    let mut spec = contact_group("contact");
    if let ItemSpec::Choice(choice) = &mut spec.items[1] {
        choice.checked = true;
    }
    let (mut tree, _) = mount(&spec);
    let _controllers = attach_all(&mut tree, &Config::default());

    assert!(hidden(&tree, "conditional-contact-1"));
    assert!(!hidden(&tree, "conditional-contact-2"));
}

#[test]
fn test_attach_syncs_panels_with_live_state() {
    let (mut tree, _) = mount(&contact_group("contact"));

    // Checked before behaviour was attached
    let phone = by_id(&tree, "contact-2");
    tree.element_mut(phone).unwrap().checked = true;

    let _controllers = attach_all(&mut tree, &Config::default());
    assert!(!hidden(&tree, "conditional-contact-2"));
}

#[test]
fn test_groups_are_independent() {
    let config = Config::default();
    let mut tree = DomTree::new();
    let root = tree.root();
    for name in ["first", "second"] {
        let node = radios::render(&config, &contact_group(name)).unwrap();
        tree.mount(root, &node).unwrap();
    }
    let controllers = attach_all(&mut tree, &config);
    assert_eq!(controllers.len(), 2);

    tree.select(by_id(&tree, "first-1"));
    tree.select(by_id(&tree, "second-2"));

    assert!(!hidden(&tree, "conditional-first-1"));
    assert!(hidden(&tree, "conditional-first-2"));
    assert!(hidden(&tree, "conditional-second-1"));
    assert!(!hidden(&tree, "conditional-second-2"));
}

#[test]
fn test_unmatched_wiring_is_inert() {
    let (mut tree, _) = mount(&contact_group("contact"));
    let phone_panel = by_id(&tree, "conditional-contact-2");
    tree.detach(phone_panel).unwrap();

    let controllers = attach_all(&mut tree, &Config::default());
    assert_eq!(controllers[0].panel_count(), 1);

    tree.select(by_id(&tree, "contact-2"));
    tree.select(by_id(&tree, "contact-1"));
    assert!(!hidden(&tree, "conditional-contact-1"));
}

#[test]
fn test_detached_controller_stops_reacting() {
    let (mut tree, _) = mount(&contact_group("contact"));
    let mut controllers = attach_all(&mut tree, &Config::default());
    let controller = controllers.remove(0);

    assert!(controller.detach(&mut tree));
    assert_eq!(tree.listener_count(), 0);

    tree.select(by_id(&tree, "contact-1"));
    assert!(hidden(&tree, "conditional-contact-1"));
}

#[test]
fn test_removing_group_drops_listener() {
    let (mut tree, group) = mount(&contact_group("contact"));
    let controllers = attach_all(&mut tree, &Config::default());

    assert_eq!(tree.detach(group).unwrap(), 1);
    assert!(!controllers[0].is_attached(&tree));
}

#[test]
fn test_disabled_choice_does_not_reveal() {
    let mut spec = contact_group("contact");
    if let ItemSpec::Choice(choice) = &mut spec.items[0] {
        choice.disabled = true;
    }
    let (mut tree, _) = mount(&spec);
    let _controllers = attach_all(&mut tree, &Config::default());

    assert!(!tree.select(by_id(&tree, "contact-1")));
    assert!(hidden(&tree, "conditional-contact-1"));
}

fn attr(tree: &DomTree, id: &str, name: &str) -> Option<String> {
    tree.element(by_id(tree, id))
        .unwrap()
        .attributes
        .value(name)
        .map(str::to_owned)
}

#[test]
fn test_attach_wires_aria_controls_and_expanded() {
    let (mut tree, _) = mount(&contact_group("contact"));
    let _controllers = attach_all(&mut tree, &Config::default());

    assert_eq!(attr(&tree, "contact-1", "aria-controls").as_deref(), Some("conditional-contact-1"));
    assert_eq!(attr(&tree, "contact-1", "data-aria-controls"), None);
    assert_eq!(attr(&tree, "contact-1", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(attr(&tree, "contact-3", "aria-expanded"), None);

    tree.select(by_id(&tree, "contact-1"));
    assert_eq!(attr(&tree, "contact-1", "aria-expanded").as_deref(), Some("true"));
    assert_eq!(attr(&tree, "contact-2", "aria-expanded").as_deref(), Some("false"));

    tree.select(by_id(&tree, "contact-2"));
    assert_eq!(attr(&tree, "contact-1", "aria-expanded").as_deref(), Some("false"));
    assert_eq!(attr(&tree, "contact-2", "aria-expanded").as_deref(), Some("true"));
}

#[test]
fn test_unmatched_input_keeps_data_attribute() {
    let (mut tree, _) = mount(&contact_group("contact"));
    let phone_panel = by_id(&tree, "conditional-contact-2");
    tree.detach(phone_panel).unwrap();
    let _controllers = attach_all(&mut tree, &Config::default());

    assert_eq!(
        attr(&tree, "contact-2", "data-aria-controls").as_deref(),
        Some("conditional-contact-2")
    );
    assert_eq!(attr(&tree, "contact-2", "aria-controls"), None);
    assert_eq!(attr(&tree, "contact-2", "aria-expanded"), None);
}

#[test]
fn test_panel_markup_is_parsed_into_nodes() {
    let (tree, _) = mount(&contact_group("contact"));
    let panel = by_id(&tree, "conditional-contact-1");
    let paragraph = tree.children(panel)[0];
    assert_eq!(tree.element(paragraph).unwrap().tag, "p");
}
