//! Formkit - Main entry point

use formkit_components::{radios, Config, ConfigurationError, GroupSpec};
use formkit_dom::{to_html, DomError, DomTree, MarkupParser, Node, NodeId};

use crate::LiveGroup;

/// Form component renderer
#[derive(Debug, Clone)]
pub struct Formkit {
    config: Config,
}

impl Formkit {
    /// Create a renderer with the given configuration
    pub fn new(config: Config) -> Self {
        tracing::info!("formkit {} initialized", crate::VERSION);
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render a radios group to a semantic tree
    pub fn render_radios(&self, spec: &GroupSpec) -> Result<Node, FormkitError> {
        Ok(radios::render(&self.config, spec)?)
    }

    /// Render a radios group to HTML
    pub fn render_radios_html(&self, spec: &GroupSpec) -> Result<String, FormkitError> {
        self.render_radios(spec).map(|node| to_html(&node))
    }

    /// Render a radios group from JSON props (`idPrefix`, `items`, ...)
    pub fn render_radios_json(&self, props: &str) -> Result<String, FormkitError> {
        let spec: GroupSpec = serde_json::from_str(props)?;
        self.render_radios_html(&spec)
    }

    /// Mount a radios group under `parent`. Returns the group's node.
    ///
    /// Behaviour is not attached here; see [`Formkit::mount_standalone`].
    pub fn mount_radios(
        &self,
        tree: &mut DomTree,
        parent: NodeId,
        spec: &GroupSpec,
    ) -> Result<NodeId, FormkitError> {
        let node = self.render_radios(spec)?;
        Ok(tree.mount_with(parent, &node, markup_parser())?)
    }

    /// Mount a radios group into a fresh tree and attach its behaviour
    pub fn mount_standalone(&self, spec: &GroupSpec) -> Result<LiveGroup, FormkitError> {
        let mut tree = DomTree::new();
        let root = tree.root();
        let group = self.mount_radios(&mut tree, root, spec)?;
        Ok(LiveGroup::attach(tree, group, &self.config))
    }
}

impl Default for Formkit {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(feature = "html")]
fn markup_parser() -> &'static dyn MarkupParser {
    &formkit_html::Html5Markup
}

#[cfg(not(feature = "html"))]
fn markup_parser() -> &'static dyn MarkupParser {
    &formkit_dom::OpaqueMarkup
}

/// Formkit error
#[derive(Debug, thiserror::Error)]
pub enum FormkitError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("Invalid props: {0}")]
    Props(#[from] serde_json::Error),

    #[error("No element with id '{0}'")]
    UnknownElement(String),
}
