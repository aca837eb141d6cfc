//! State for the overlay drawer.

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::menu_list::{MenuRow, visible_rows};
use navshell_menu::{ExpansionState, MenuTree};

/// Drawer panel width in terminal columns.
pub(crate) const DRAWER_WIDTH: u16 = 30;

/// State for the overlay drawer. The expansion set is owned by this drawer
/// alone; it persists while the drawer is merely hidden (matching a drawer
/// that stays mounted) and never leaks into the rail's accordion.
#[derive(Debug)]
pub struct DrawerState {
    /// Whether the drawer is currently shown.
    pub open: bool,
    /// Accordion state owned exclusively by this drawer instance.
    pub expansion: ExpansionState,
    /// Focus flag for the drawer container.
    pub container_focus: FocusFlag,
    /// Focus flags, index-aligned with `rows`.
    pub row_focus_flags: Vec<FocusFlag>,
    /// Visible rows for the current expansion state.
    pub rows: Vec<MenuRow>,
    /// Rects of the rendered rows, aligned with `rows`.
    pub row_areas: Vec<Rect>,
    /// Rect of the close button.
    pub close_area: Rect,
    /// Last rendered drawer panel area (excluding the scrim).
    pub last_area: Rect,
}

impl DrawerState {
    /// Creates drawer state for the given tree, closed, nothing expanded.
    pub fn new(tree: &MenuTree) -> Self {
        let mut state = Self {
            open: false,
            expansion: ExpansionState::new(),
            container_focus: FocusFlag::named("drawer"),
            row_focus_flags: Vec::new(),
            rows: Vec::new(),
            row_areas: Vec::new(),
            close_area: Rect::default(),
            last_area: Rect::default(),
        };
        state.rebuild_rows(tree);
        state
    }

    /// Recomputes visible rows and focus flags after an expansion toggle.
    pub fn rebuild_rows(&mut self, tree: &MenuTree) {
        self.rows = visible_rows(tree, &self.expansion);
        self.row_focus_flags = (0..self.rows.len())
            .map(|i| FocusFlag::named(&format!("drawer.item.{i}")))
            .collect();
        self.row_areas = vec![Rect::default(); self.rows.len()];
    }

    /// Toggles a group's accordion expansion.
    pub fn toggle_group(&mut self, name: &str, tree: &MenuTree) {
        self.expansion.toggle(name);
        self.rebuild_rows(tree);
    }

    /// Shows or hides the drawer. Hiding clears the recorded hit-test areas
    /// so a stale rect can never swallow a click; the expansion set is kept.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.row_areas = vec![Rect::default(); self.rows.len()];
            self.close_area = Rect::default();
            self.last_area = Rect::default();
        }
    }

    /// The focused row and its index, if any row owns focus.
    pub fn focused_row(&self) -> Option<(MenuRow, usize)> {
        let idx = self.row_focus_flags.iter().position(|flag| flag.get())?;
        self.rows.get(idx).map(|row| (*row, idx))
    }

    /// Focus flag of the next/previous row, wrapping at the ends.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.row_focus_flags.len();
        if len == 0 {
            return None;
        }
        let current = self.row_focus_flags.iter().position(|flag| flag.get())?;
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.row_focus_flags.get(next).cloned()
    }
}

impl HasFocus for DrawerState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.row_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
