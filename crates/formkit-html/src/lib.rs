//! formkit HTML
//!
//! Parses the pre-sanitized markup carried by conditional panels and
//! other `html` props into semantic nodes, built on html5ever.

mod parser;

pub use parser::{parse_fragment, Html5Markup};

/// Markup parsing error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read markup: {0}")]
    Read(#[from] std::io::Error),
}
