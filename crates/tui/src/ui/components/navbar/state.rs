//! State for the top navbar.

use std::time::Instant;

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};

use navshell_menu::{HoverDropdown, MenuTree};

/// State for the navbar: one hover dropdown per top-level entry (leaves keep
/// one that never opens), focus flags per item, and the trigger/panel areas
/// recorded during the last render for hover and outside-click hit-testing.
#[derive(Debug)]
pub struct NavBarState {
    /// Hover dropdowns, index-aligned with the top-level entries.
    pub dropdowns: Vec<HoverDropdown>,
    /// Focus flag for the navbar container.
    pub container_focus: FocusFlag,
    /// Focus flags, index-aligned with the top-level entries.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Trigger rects of the rendered items.
    pub item_areas: Vec<Rect>,
    /// Open dropdown panel rects; empty rect while closed.
    pub panel_areas: Vec<Rect>,
    /// Child-row rects inside open panels.
    pub child_areas: Vec<Vec<Rect>>,
    /// Rect of the brand label (navigates home).
    pub brand_area: Rect,
    /// Rect of the hamburger button (narrow class only).
    pub hamburger_area: Rect,
    /// Rect of the sign-in shortcut.
    pub login_area: Rect,
    /// Rect of the register shortcut.
    pub register_area: Rect,
    /// Last rendered navbar area.
    pub last_area: Rect,
}

impl NavBarState {
    /// Creates navbar state for the given tree; everything closed.
    pub fn new(tree: &MenuTree) -> Self {
        let top_len = tree.len();
        Self {
            dropdowns: vec![HoverDropdown::new(); top_len],
            container_focus: FocusFlag::named("nav"),
            item_focus_flags: (0..top_len)
                .map(|i| FocusFlag::named(&format!("nav.item.{i}")))
                .collect(),
            item_areas: vec![Rect::default(); top_len],
            panel_areas: vec![Rect::default(); top_len],
            child_areas: vec![Vec::new(); top_len],
            brand_area: Rect::default(),
            hamburger_area: Rect::default(),
            login_area: Rect::default(),
            register_area: Rect::default(),
            last_area: Rect::default(),
        }
    }

    /// Union hover region of an item: its trigger rect plus its dropdown
    /// panel while open. Trigger and panel form one hover region so the
    /// pointer can travel between them without the panel closing.
    pub fn region_contains(&self, idx: usize, position: Position) -> bool {
        let trigger = self.item_areas.get(idx).is_some_and(|a| a.contains(position));
        let panel = self.panel_areas.get(idx).is_some_and(|a| a.contains(position));
        trigger || panel
    }

    /// Fires elapsed dropdown close deadlines; returns whether anything
    /// closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for dropdown in &mut self.dropdowns {
            changed |= dropdown.tick(now);
        }
        changed
    }

    /// Whether any dropdown still has a close deadline pending.
    pub fn has_pending_close(&self) -> bool {
        self.dropdowns.iter().any(HoverDropdown::has_pending_close)
    }

    /// Teardown for viewport class switches: close every dropdown and cancel
    /// their deadlines so nothing fires against a surface that is gone.
    pub fn reset_dropdowns(&mut self) {
        for dropdown in &mut self.dropdowns {
            dropdown.reset();
        }
        for area in &mut self.panel_areas {
            *area = Rect::default();
        }
        for child_areas in &mut self.child_areas {
            child_areas.clear();
        }
    }

    /// The focused item index, if any item owns focus.
    pub fn focused_item(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(|flag| flag.get())
    }

    /// Focus flag of the next/previous item, wrapping at the ends.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let current = self.item_focus_flags.iter().position(|flag| flag.get())?;
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.item_focus_flags.get(next).cloned()
    }
}

impl HasFocus for NavBarState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
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
    use super::NavBarState;
    use navshell_menu::{CLOSE_DELAY, MenuTree};
    use navshell_types::MenuEntry;
    use ratatui::layout::{Position, Rect};
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
    fn region_spans_trigger_and_open_panel() {
        let mut state = NavBarState::new(&tree());
        state.item_areas[1] = Rect::new(10, 0, 8, 1);
        state.panel_areas[1] = Rect::new(10, 1, 20, 4);
        assert!(state.region_contains(1, Position::new(12, 0)));
        assert!(state.region_contains(1, Position::new(25, 3)));
        assert!(!state.region_contains(1, Position::new(40, 0)));
    }

    #[test]
    fn tick_reports_a_change_only_when_a_deadline_fires() {
        let mut state = NavBarState::new(&tree());
        let t0 = Instant::now();
        state.dropdowns[1].pointer_entered();
        assert!(!state.tick(t0));
        state.dropdowns[1].pointer_left(t0);
        assert!(state.has_pending_close());
        assert!(state.tick(t0 + CLOSE_DELAY));
        assert!(!state.dropdowns[1].is_open());
        assert!(!state.has_pending_close());
    }

    #[test]
    fn reset_closes_everything_and_cancels_deadlines() {
        let mut state = NavBarState::new(&tree());
        let t0 = Instant::now();
        state.dropdowns[1].pointer_entered();
        state.dropdowns[1].pointer_left(t0);
        state.panel_areas[1] = Rect::new(0, 1, 10, 4);
        state.reset_dropdowns();
        assert!(!state.dropdowns[1].is_open());
        assert!(!state.has_pending_close());
        assert_eq!(state.panel_areas[1], Rect::default());
        // The stale deadline must not fire later.
        assert!(!state.tick(t0 + CLOSE_DELAY * 10));
    }
}
