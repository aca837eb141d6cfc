//! Top navbar with hover dropdowns.
//!
//! Horizontal bar across the top of the shell: brand, the top-level menu
//! entries (group entries open a hover dropdown panel beneath the bar) and
//! the sign-in/register shortcuts. In the narrow viewport class the bar
//! shrinks to a hamburger button that opens the overlay drawer.

mod navbar_component;
mod state;

pub use navbar_component::NavBarComponent;
pub use state::NavBarState;
