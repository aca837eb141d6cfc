//! # Navshell menu core
//!
//! The hierarchical navigation-menu state machine shared by every navshell
//! surface (sidebar rail, overlay drawer, top navbar):
//!
//! - [`MenuTree`]: validated, immutable forest of menu entries plus the JSON
//!   configuration it is loaded from.
//! - [`is_active`]: the exact-match active-route policy.
//! - [`ExpansionState`]: the accordion set for click-to-toggle disclosure.
//! - [`HoverDropdown`]: the delayed-close state machine for hover-triggered
//!   dropdowns and flyouts.
//!
//! The crate is presentation-free: it knows nothing about terminals, widgets,
//! or event sources. Surfaces own their state instances exclusively; nothing
//! here is shared or global.

mod active;
mod dropdown;
mod expansion;
mod tree;

pub use active::is_active;
pub use dropdown::{CLOSE_DELAY, HoverDropdown};
pub use expansion::ExpansionState;
pub use tree::{MenuConfig, MenuTree};
