//! Fieldset
//!
//! Groups related controls under a legend. The wrapper carries the one
//! `aria-describedby` for the whole group.

use formkit_dom::{Child, Node};
use serde::Deserialize;

use crate::{Attributes, Config, Content};

/// Fieldset props
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldsetSpec {
    /// Ids placed ahead of any generated hint and error ids
    pub described_by: Option<String>,
    pub legend: Option<LegendSpec>,
    pub classes: Option<String>,
    pub role: Option<String>,
    pub attributes: Attributes,
}

/// Legend props
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendSpec {
    pub text: Option<String>,
    pub html: Option<String>,
    pub classes: Option<String>,
    /// Wrap the legend content in an `h1`
    pub is_page_heading: bool,
}

/// Wrap `children` in a fieldset. `described_by` is the already aggregated
/// chain; `FieldsetSpec::described_by` is not re-read here.
pub fn render(
    config: &Config,
    spec: &FieldsetSpec,
    described_by: &str,
    children: Vec<Child>,
) -> Node {
    let mut node = Node::new("fieldset").with_class(&config.class("fieldset"));
    if let Some(classes) = &spec.classes {
        node.classes.add(classes);
    }
    if let Some(role) = &spec.role {
        node.attributes.set("role", role);
    }
    let described_by = described_by.trim();
    if !described_by.is_empty() {
        node.attributes.set("aria-describedby", described_by);
    }
    node.merge_attributes(&spec.attributes);

    if let Some(legend) = &spec.legend {
        node.push(render_legend(config, legend));
    }
    node.children.extend(children);
    node
}

fn render_legend(config: &Config, spec: &LegendSpec) -> Node {
    let mut legend = Node::new("legend").with_class(&config.class("fieldset__legend"));
    if let Some(classes) = &spec.classes {
        legend.classes.add(classes);
    }

    let content = Content::resolve(spec.text.as_deref(), spec.html.as_deref());
    if spec.is_page_heading {
        let mut heading = Node::new("h1").with_class(&config.class("fieldset__heading"));
        if let Some(content) = content {
            heading.push(content);
        }
        legend.push(heading);
    } else if let Some(content) = content {
        legend.push(content);
    }
    legend
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_dom::to_html;

    #[test]
    fn test_fieldset_with_legend() {
        let spec = FieldsetSpec {
            legend: Some(LegendSpec {
                text: Some("Colour".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let node = render(
            &Config::default(),
            &spec,
            " fav-hint fav-error ",
            vec![Child::Text("x".into())],
        );
        assert_eq!(
            to_html(&node),
            r#"<fieldset class="govuk-fieldset" aria-describedby="fav-hint fav-error"><legend class="govuk-fieldset__legend">Colour</legend>x</fieldset>"#
        );
    }

    #[test]
    fn test_empty_described_by_omitted() {
        let node = render(&Config::default(), &FieldsetSpec::default(), "  ", Vec::new());
        assert!(!node.has_attr("aria-describedby"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_page_heading() {
        let spec = FieldsetSpec {
            legend: Some(LegendSpec {
                html: Some("Where do you <em>live</em>?".into()),
                classes: Some("govuk-fieldset__legend--l".into()),
                is_page_heading: true,
                ..Default::default()
            }),
            role: Some("group".into()),
            ..Default::default()
        };
        let node = render(&Config::default(), &spec, "", Vec::new());
        assert_eq!(
            to_html(&node),
            r#"<fieldset class="govuk-fieldset" role="group"><legend class="govuk-fieldset__legend govuk-fieldset__legend--l"><h1 class="govuk-fieldset__heading">Where do you <em>live</em>?</h1></legend></fieldset>"#
        );
    }
}
