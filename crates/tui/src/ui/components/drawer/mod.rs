//! Narrow-viewport overlay drawer.
//!
//! Slide-in menu for narrow terminals: a scrim dims the rest of the frame, an
//! accordion list (the drawer's own expansion state, independent of the rail)
//! discloses groups, and selecting a leaf closes the drawer before the
//! navigation effect is applied.

mod drawer_component;
mod state;

pub use drawer_component::DrawerComponent;
pub use state::DrawerState;
