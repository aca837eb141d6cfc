//! Navigation surfaces and the shared component plumbing.

pub(crate) mod component;
pub mod content;
pub mod drawer;
pub mod footer;
pub(crate) mod menu_list;
pub mod navbar;
pub mod sidebar;

pub use content::ContentComponent;
pub use drawer::{DrawerComponent, DrawerState};
pub use footer::FooterComponent;
pub use navbar::{NavBarComponent, NavBarState};
pub use sidebar::{SidebarComponent, SidebarState};
