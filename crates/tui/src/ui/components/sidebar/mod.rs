//! Desktop sidebar rail.
//!
//! Wide-viewport navigation rail with two presentations over the same menu
//! tree: expanded, an accordion list driven by the rail's own
//! [`navshell_menu::ExpansionState`]; collapsed, icon-only rows where group
//! children stay reachable through a hover flyout per group node.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::SidebarState;
