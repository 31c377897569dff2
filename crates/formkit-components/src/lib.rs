//! formkit Components
//!
//! Accessible form components rendered to `formkit_dom::Node` trees.
//!
//! Components:
//! - Label, Hint, ErrorMessage (leaf renderers)
//! - Fieldset
//! - Radios, with dividers, item hints and conditional panels

mod config;
mod content;
mod described_by;
pub mod error_message;
pub mod fieldset;
pub mod hint;
pub mod label;
pub mod radios;

pub use config::Config;
pub use content::Content;
pub use described_by::DescribedBy;
pub use error_message::ErrorSpec;
pub use fieldset::{FieldsetSpec, LegendSpec};
pub use hint::HintSpec;
pub use label::LabelSpec;
pub use radios::{ChoiceSpec, ConditionalSpec, FormGroupSpec, GroupSpec, ItemSpec, LabelOverrides};

/// Passthrough attributes, kept in caller order
pub type Attributes = indexmap::IndexMap<String, String>;

/// Component configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Radios need a name or an id prefix")]
    MissingIdentity,
}
