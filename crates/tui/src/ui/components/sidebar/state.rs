//! State for the sidebar rail.

use std::time::Instant;

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::menu_list::{MenuRow, visible_rows};
use navshell_menu::{ExpansionState, HoverDropdown, MenuTree};

/// Rail width in terminal columns when expanded.
pub(crate) const EXPANDED_WIDTH: u16 = 26;
/// Rail width when collapsed to icons.
pub(crate) const COLLAPSED_WIDTH: u16 = 6;

/// State for the desktop rail: collapse flag, the rail's own accordion
/// expansion set, one hover flyout per top-level group for the collapsed
/// presentation, focus flags per visible row, and the areas recorded during
/// the last render for mouse hit-testing.
#[derive(Debug)]
pub struct SidebarState {
    /// Collapsed to icon-only rows.
    pub collapsed: bool,
    /// Accordion state owned exclusively by this rail instance.
    pub expansion: ExpansionState,
    /// Hover flyouts, index-aligned with the top-level entries. Leaf entries
    /// keep a flyout that simply never opens.
    pub flyouts: Vec<HoverDropdown>,
    /// Focus flag for the rail container.
    pub container_focus: FocusFlag,
    /// Focus flags, index-aligned with `rows`.
    pub row_focus_flags: Vec<FocusFlag>,
    /// Visible rows for the current expansion/collapse state.
    pub rows: Vec<MenuRow>,
    /// Rects of the rendered rows, aligned with `rows`.
    pub row_areas: Vec<Rect>,
    /// Open flyout panel rects, aligned with the top-level entries.
    pub flyout_panel_areas: Vec<Rect>,
    /// Child-row rects inside open flyout panels, aligned with top-level
    /// entries.
    pub flyout_child_areas: Vec<Vec<Rect>>,
    /// Rect of the collapse/expand chevron button.
    pub toggle_area: Rect,
    /// Last rendered rail area.
    pub last_area: Rect,
}

impl SidebarState {
    /// Creates rail state for the given tree, expanded, nothing disclosed.
    pub fn new(tree: &MenuTree) -> Self {
        let top_len = tree.len();
        let mut state = Self {
            collapsed: false,
            expansion: ExpansionState::new(),
            flyouts: vec![HoverDropdown::new(); top_len],
            container_focus: FocusFlag::named("rail"),
            row_focus_flags: Vec::new(),
            rows: Vec::new(),
            row_areas: Vec::new(),
            flyout_panel_areas: vec![Rect::default(); top_len],
            flyout_child_areas: vec![Vec::new(); top_len],
            toggle_area: Rect::default(),
            last_area: Rect::default(),
        };
        state.rebuild_rows(tree);
        state
    }

    /// Current rail width for the shell layout.
    pub fn width(&self) -> u16 {
        if self.collapsed { COLLAPSED_WIDTH } else { EXPANDED_WIDTH }
    }

    /// Recomputes the visible rows and their focus flags. Called after every
    /// expansion toggle or collapse switch; selection-by-focus is clamped by
    /// recreating the flags, mirroring how the row list itself changed.
    pub fn rebuild_rows(&mut self, tree: &MenuTree) {
        self.rows = if self.collapsed {
            (0..tree.len())
                .map(|top_idx| MenuRow { top_idx, child_idx: None })
                .collect()
        } else {
            visible_rows(tree, &self.expansion)
        };
        self.row_focus_flags = (0..self.rows.len())
            .map(|i| FocusFlag::named(&format!("rail.item.{i}")))
            .collect();
        self.row_areas = vec![Rect::default(); self.rows.len()];
    }

    /// Flips between the expanded accordion and the collapsed icon rail.
    /// Teardown of whichever presentation is leaving: flyouts are reset so no
    /// pending close deadline survives the switch.
    pub fn toggle_collapsed(&mut self, tree: &MenuTree) {
        self.collapsed = !self.collapsed;
        self.reset_flyouts();
        self.rebuild_rows(tree);
    }

    /// Toggles a group's accordion expansion (expanded presentation).
    pub fn toggle_group(&mut self, name: &str, tree: &MenuTree) {
        self.expansion.toggle(name);
        self.rebuild_rows(tree);
    }

    /// Closes every flyout and cancels their pending deadlines.
    pub fn reset_flyouts(&mut self) {
        for flyout in &mut self.flyouts {
            flyout.reset();
        }
        for area in &mut self.flyout_panel_areas {
            *area = Rect::default();
        }
        for child_areas in &mut self.flyout_child_areas {
            child_areas.clear();
        }
    }

    /// Fires elapsed flyout close deadlines; returns whether anything closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for flyout in &mut self.flyouts {
            changed |= flyout.tick(now);
        }
        changed
    }

    /// Whether any flyout still has a close deadline pending.
    pub fn has_pending_close(&self) -> bool {
        self.flyouts.iter().any(HoverDropdown::has_pending_close)
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

impl HasFocus for SidebarState {
    /// Each visible row is a leaf under the rail container flag.
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

#[cfg(test)]
mod tests {
    use super::SidebarState;
    use navshell_menu::MenuTree;
    use navshell_types::MenuEntry;
    use std::time::Instant;

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuEntry::leaf("Home", "/", "⌂"),
            MenuEntry::group(
                "Products",
                "/products",
                "▤",
                vec![MenuEntry::leaf("All", "/products", "▤")],
            ),
        ])
        .expect("valid tree")
    }

    #[test]
    fn toggling_a_group_changes_the_visible_rows() {
        let tree = tree();
        let mut state = SidebarState::new(&tree);
        assert_eq!(state.rows.len(), 2);
        state.toggle_group("Products", &tree);
        assert_eq!(state.rows.len(), 3);
        state.toggle_group("Products", &tree);
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn collapsing_shows_only_top_level_rows_and_resets_flyouts() {
        let tree = tree();
        let mut state = SidebarState::new(&tree);
        state.toggle_group("Products", &tree);
        state.flyouts[1].pointer_entered();
        state.flyouts[1].pointer_left(Instant::now());

        state.toggle_collapsed(&tree);
        assert!(state.collapsed);
        assert_eq!(state.rows.len(), 2);
        assert!(!state.flyouts[1].is_open());
        assert!(!state.has_pending_close());

        // The accordion set itself is untouched; expanding again on return.
        state.toggle_collapsed(&tree);
        assert_eq!(state.rows.len(), 3);
    }

    #[test]
    fn rail_expansion_is_independent_of_other_instances() {
        let tree = tree();
        let mut a = SidebarState::new(&tree);
        let b = SidebarState::new(&tree);
        a.toggle_group("Products", &tree);
        assert!(a.expansion.is_expanded("Products"));
        assert!(!b.expansion.is_expanded("Products"));
    }

    #[test]
    fn cycle_focus_wraps_around() {
        let tree = tree();
        let state = SidebarState::new(&tree);
        state.row_focus_flags[1].set(true);
        let next = state.cycle_focus(true).expect("flag");
        // Flags are shared handles; setting the returned one must show up on
        // the first row's flag (wrap-around).
        next.set(true);
        assert!(state.row_focus_flags[0].get());
    }
}
