//! Application state for the navigation shell.
//!
//! `App` is the central state container: it owns the shared context (menu
//! config and theme), the per-surface states, the focus ring and the current
//! route. Components read and mutate it; the runtime applies the `Effect`s
//! they return back onto it.

use std::sync::Arc;
use std::time::Instant;

use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::{DrawerState, NavBarState, SidebarState};
use crate::ui::layout;
use crate::ui::theme::Theme;
use navshell_menu::MenuConfig;
use navshell_types::{Effect, Msg};

/// Width class of the terminal, derived from columns on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Navbar with inline items plus the sidebar rail.
    Wide,
    /// Compact navbar with a hamburger; navigation happens in the drawer.
    Narrow,
}

/// Cross-cutting shared context owned by the App. Keeps runtime-wide objects
/// out of the per-surface states and reduces borrow complexity.
pub struct SharedCtx {
    /// Validated menu configuration, shared with event handlers.
    pub config: Arc<MenuConfig>,
    /// Active color theme.
    pub theme: Box<dyn Theme>,
}

impl std::fmt::Debug for SharedCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCtx")
            .field("config", &self.config)
            .field("theme", &self.theme.name())
            .finish()
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    /// Shared, cross-cutting context (menu config, theme).
    pub ctx: SharedCtx,
    /// Route the shell currently shows.
    pub current_path: String,
    /// Width class from the last resize.
    pub viewport: ViewportClass,
    /// Desktop rail state.
    pub sidebar: SidebarState,
    /// Top navbar state.
    pub navbar: NavBarState,
    /// Mobile drawer state.
    pub drawer: DrawerState,
    /// Focus ring, rebuilt before every render.
    pub focus: Focus,
    /// Set by `Effect::Quit`; the runtime exits on the next pass.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Arc<MenuConfig>, theme: Box<dyn Theme>, initial_path: String, width: u16) -> Self {
        let sidebar = SidebarState::new(config.tree());
        let navbar = NavBarState::new(config.tree());
        let drawer = DrawerState::new(config.tree());
        Self {
            ctx: SharedCtx { config, theme },
            current_path: initial_path,
            viewport: layout::classify(width),
            sidebar,
            navbar,
            drawer,
            focus: Focus::default(),
            should_quit: false,
        }
    }

    /// Handles a message; returns whether anything visible changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        match msg {
            Msg::Tick => {
                let now = Instant::now();
                let navbar_changed = self.navbar.tick(now);
                let sidebar_changed = self.sidebar.tick(now);
                navbar_changed || sidebar_changed
            }
            Msg::Resize(width, _) => self.set_viewport(layout::classify(*width)),
        }
    }

    /// Whether any hover close deadline is pending, which asks the runtime
    /// for fast ticks.
    pub fn needs_animation(&self) -> bool {
        self.navbar.has_pending_close() || self.sidebar.has_pending_close()
    }

    /// Switches the width class, tearing down the surfaces that no longer
    /// exist in the new class. Expansion state is kept so accordions come
    /// back as they were.
    fn set_viewport(&mut self, viewport: ViewportClass) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        match viewport {
            ViewportClass::Wide => {
                self.drawer.set_open(false);
            }
            ViewportClass::Narrow => {
                self.navbar.reset_dropdowns();
                self.sidebar.reset_flyouts();
            }
        }
        tracing::debug!(?viewport, "viewport class changed");
        true
    }

    /// Applies one effect onto the state.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Navigate(path) => {
                tracing::debug!(%path, "navigate");
                self.current_path = path;
            }
            Effect::ToggleRail => {
                let config = Arc::clone(&self.ctx.config);
                self.sidebar.toggle_collapsed(config.tree());
            }
            Effect::OpenDrawer => {
                self.drawer.set_open(true);
                let first = self.drawer.row_focus_flags.first().cloned();
                self.focus = FocusBuilder::rebuild_for(self, None);
                if let Some(flag) = first {
                    self.focus.focus(&flag);
                }
            }
            Effect::CloseDrawer => {
                self.drawer.set_open(false);
            }
            Effect::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Moves focus to the first item of the surface that makes sense for the
    /// current class. Called when nothing holds focus after a rebuild.
    pub fn restore_focus(&mut self) {
        let flag: Option<&FocusFlag> = if self.drawer.open {
            self.drawer.row_focus_flags.first()
        } else if self.viewport == ViewportClass::Wide {
            self.sidebar.row_focus_flags.first()
        } else {
            self.navbar.item_focus_flags.first()
        };
        if let Some(flag) = flag {
            self.focus.focus(flag);
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(&self.navbar);
        if self.viewport == ViewportClass::Wide {
            builder.widget(&self.sidebar);
        }
        if self.drawer.open {
            builder.widget(&self.drawer);
        }
    }

    fn focus(&self) -> FocusFlag {
        FocusFlag::default()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
