//! formkit
//!
//! Accessible form components: render a radios group to a semantic tree
//! or HTML, or mount it into a live tree with reveal behaviour attached.
//!
//! # Features
//! - `full` (default): `html` + `reveal`
//! - `html`: raw markup blocks are parsed into real nodes when mounted
//! - `reveal`: conditional panels follow the checked choice
//!
//! # Example
//! ```rust,ignore
//! use formkit::{ChoiceSpec, Config, Formkit, GroupSpec};
//!
//! let forms = Formkit::new(Config::default());
//! let spec = GroupSpec::named("contact")
//!     .with_item(ChoiceSpec::new("email", "Email").with_conditional("<p>Email address</p>"))
//!     .with_item(ChoiceSpec::new("phone", "Phone"));
//! let html = forms.render_radios_html(&spec)?;
//! ```

mod forms;
mod live;

pub use forms::{Formkit, FormkitError};
pub use live::LiveGroup;

pub use formkit_components::{
    ChoiceSpec, ConditionalSpec, Config, ConfigurationError, ErrorSpec, FieldsetSpec, FormGroupSpec,
    GroupSpec, HintSpec, ItemSpec, LabelOverrides, LegendSpec,
};
pub use formkit_dom::{DomTree, Node, NodeId};

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
