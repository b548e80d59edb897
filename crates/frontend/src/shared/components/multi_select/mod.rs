//! Multi-select dropdown with a draft/committed selection
//!
//! Choices are made on a draft while the dropdown is open; Apply commits the
//! draft, Cancel/Escape/click-outside throws it away.

pub mod component;
pub mod handle;
pub mod option;
pub mod shell;
pub mod state;

pub use component::*;
pub use handle::{MultiSelectHandle, OptionsListBody};
pub use option::{OptionKeys, SelectOption};
pub use state::{CheckState, Intent, Outcome, SelectionState};
