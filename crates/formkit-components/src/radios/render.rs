//! Radios composer

use formkit_dom::{Child, Node};

use super::{ChoiceSpec, GroupSpec, ItemSpec};
use crate::{
    error_message, fieldset, hint, label, Config, ConfigurationError, DescribedBy, ErrorSpec,
    HintSpec, LabelSpec,
};

/// Render a radios group.
///
/// With a fieldset the group's hint and error ids describe the fieldset
/// only; without one they are repeated on every input. Each input then
/// appends its own item hint id.
pub fn render(config: &Config, spec: &GroupSpec) -> Result<Node, ConfigurationError> {
    let id_prefix = spec.resolved_id_prefix()?;
    let is_conditional = spec.is_conditional();

    let mut described_by = DescribedBy::parse(
        spec.fieldset
            .as_ref()
            .and_then(|f| f.described_by.as_deref())
            .unwrap_or_default(),
    );
    let mut inner: Vec<Child> = Vec::new();

    if let Some(group_hint) = &spec.hint {
        let hint_id = format!("{id_prefix}-hint");
        described_by.push(&hint_id);
        let props = HintSpec {
            id: Some(hint_id),
            ..group_hint.clone()
        };
        inner.push(hint::render(config, &props).into());
    }

    if let Some(error) = &spec.error_message {
        let error_id = format!("{id_prefix}-error");
        described_by.push(&error_id);
        let props = ErrorSpec {
            id: Some(error_id),
            ..error.clone()
        };
        inner.push(error_message::render(config, &props).into());
    }

    let items = ItemContext {
        config,
        id_prefix,
        name: spec.name.as_deref().filter(|n| !n.is_empty()),
        chain: if spec.fieldset.is_some() {
            DescribedBy::new()
        } else {
            described_by.clone()
        },
    };

    let mut container = Node::new("div")
        .with_class(&config.class("radios"))
        .with_class(&spec.classes);
    if is_conditional {
        container.classes.add(&config.class("radios--conditional"));
    }
    container.merge_attributes(&spec.attributes);
    if is_conditional {
        container.attributes.set(&config.module_attribute, &config.radios_module);
    } else {
        container.attributes.remove(&config.module_attribute);
    }

    for (index, item) in spec.items.iter().enumerate() {
        match item {
            ItemSpec::Divider { text } => {
                container.push(
                    Node::new("div")
                        .with_class(&config.class("radios__divider"))
                        .with_text(text.clone()),
                );
            }
            ItemSpec::Choice(choice) => {
                let (item, panel) = items.choice(index, choice);
                container.push(item);
                if let Some(panel) = panel {
                    container.push(panel);
                }
            }
        }
    }
    inner.push(container.into());

    let content = match &spec.fieldset {
        Some(props) => vec![fieldset::render(config, props, &described_by.value(), inner).into()],
        None => inner,
    };

    let mut form_group = Node::new("div").with_class(&config.class("form-group"));
    if spec.error_message.is_some() {
        form_group.classes.add(&config.class("form-group--error"));
    }
    if let Some(classes) = spec.form_group.as_ref().and_then(|g| g.classes.as_deref()) {
        form_group.classes.add(classes);
    }
    form_group.children = content;

    tracing::debug!(
        "Rendered radios '{}': {} items, conditional={}",
        id_prefix,
        spec.items.len(),
        is_conditional
    );
    Ok(form_group)
}

/// Group-level values every choice is rendered against
struct ItemContext<'a> {
    config: &'a Config,
    id_prefix: &'a str,
    name: Option<&'a str>,
    /// Group chain inherited by each input; empty under a fieldset
    chain: DescribedBy,
}

impl ItemContext<'_> {
    /// Item wrapper, plus the sibling conditional panel if any
    fn choice(&self, index: usize, item: &ChoiceSpec) -> (Node, Option<Node>) {
        let config = self.config;
        let id = item
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("{}-{}", self.id_prefix, index + 1));
        let name = item.name.as_deref().filter(|n| !n.is_empty()).or(self.name);
        let conditional = item.conditional_html();
        let conditional_id = format!("conditional-{id}");
        let item_hint_id = format!("{id}-item-hint");

        let mut described_by = self.chain.clone();
        if item.hint.is_some() {
            described_by.push(&item_hint_id);
        }

        let mut input = Node::new("input")
            .with_id(id.clone())
            .with_class(&config.class("radios__input"));
        if let Some(name) = name {
            input.attributes.set("name", name);
        }
        input.attributes.set("type", "radio");
        input.attributes.set("value", &item.value);
        if item.checked {
            input.attributes.set_flag("checked");
        }
        if item.disabled {
            input.attributes.set_flag("disabled");
        }
        if conditional.is_some() {
            input.attributes.set("data-aria-controls", &conditional_id);
        }
        if let Some(value) = described_by.attr() {
            input.attributes.set("aria-describedby", &value);
        }
        input.merge_attributes(&item.attributes);

        let overrides = item.label.clone().unwrap_or_default();
        let mut label_classes = config.class("radios__label");
        if let Some(extra) = &overrides.classes {
            label_classes.push(' ');
            label_classes.push_str(extra);
        }
        let label = label::render(
            config,
            &LabelSpec {
                text: item.text.clone(),
                html: item.html.clone(),
                classes: Some(label_classes),
                for_id: Some(id.clone()),
                attributes: overrides.attributes,
            },
        );

        let mut wrapper = Node::new("div")
            .with_class(&config.class("radios__item"))
            .with_child(input)
            .with_child(label);

        if let Some(item_hint) = &item.hint {
            let mut classes = config.class("radios__hint");
            if let Some(extra) = &item_hint.classes {
                classes.push(' ');
                classes.push_str(extra);
            }
            let props = HintSpec {
                id: Some(item_hint_id),
                classes: Some(classes),
                ..item_hint.clone()
            };
            wrapper.push(hint::render(config, &props));
        }

        let panel = conditional.map(|html| {
            let mut panel = Node::new("div")
                .with_id(conditional_id)
                .with_class(&config.class("radios__conditional"));
            if !item.checked {
                panel.classes.add(&config.hidden_panel_class());
            }
            panel.with_html(html)
        });

        (wrapper, panel)
    }
}
