//! formkit Reveal
//!
//! Runtime behaviour for mounted radios: shows the conditional panel of
//! the checked choice and hides the others.

mod attach;
mod controller;

pub use attach::{attach_all, is_marked};
pub use controller::{PanelState, RevealController};
