//! Shared accordion menu-list renderer.
//!
//! The rail and the drawer render the same row structure (group headers with
//! a disclosure chevron, indented children while expanded, active-route
//! highlight), so the row model and the row painter live here once and the
//! surfaces parameterize them instead of duplicating the renderer.

use rat_focus::FocusFlag;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::Theme;
use navshell_menu::{ExpansionState, MenuTree, is_active};
use navshell_types::MenuEntry;

/// One visible row of an accordion menu: a top-level entry or, while its
/// parent is expanded, a child entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuRow {
    pub top_idx: usize,
    pub child_idx: Option<usize>,
}

impl MenuRow {
    /// Resolves this row to its entry in the tree.
    pub fn entry<'t>(&self, tree: &'t MenuTree) -> &'t MenuEntry {
        let top = &tree.top_level()[self.top_idx];
        match self.child_idx {
            Some(child) => &tree.children_of(top)[child],
            None => top,
        }
    }
}

/// Computes the visible rows for an accordion surface: every top-level entry,
/// plus the children of each group currently expanded.
pub(crate) fn visible_rows(tree: &MenuTree, expansion: &ExpansionState) -> Vec<MenuRow> {
    let mut rows = Vec::with_capacity(tree.len());
    for (top_idx, entry) in tree.top_level().iter().enumerate() {
        rows.push(MenuRow { top_idx, child_idx: None });
        if entry.is_group() && expansion.is_expanded(&entry.name) {
            for child_idx in 0..tree.children_of(entry).len() {
                rows.push(MenuRow {
                    top_idx,
                    child_idx: Some(child_idx),
                });
            }
        }
    }
    rows
}

/// Per-row render options distinguishing the surfaces.
pub(crate) struct RowRenderOptions {
    /// Render the label text; `false` for the icon-only collapsed rail.
    pub show_labels: bool,
}

/// Paints the rows top to bottom inside `area`, one terminal line each, and
/// returns the rect of every painted row (aligned with `rows`) for mouse
/// hit-testing. Rows that do not fit get an empty rect.
pub(crate) fn render_rows(
    frame: &mut Frame,
    area: Rect,
    theme: &dyn Theme,
    tree: &MenuTree,
    rows: &[MenuRow],
    expansion: &ExpansionState,
    current_path: &str,
    focus_flags: &[FocusFlag],
    options: &RowRenderOptions,
) -> Vec<Rect> {
    let mut row_areas = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let y = area.y.saturating_add(idx as u16);
        if y >= area.bottom() || area.width == 0 {
            row_areas.push(Rect::default());
            continue;
        }
        let row_area = Rect::new(area.x, y, area.width, 1);
        let entry = row.entry(tree);
        let focused = focus_flags.get(idx).map(|flag| flag.get()).unwrap_or_default();
        let line = row_line(theme, entry, row, expansion, current_path, focused, options, area.width);
        frame.render_widget(Paragraph::new(line), row_area);
        row_areas.push(row_area);
    }
    row_areas
}

fn row_line<'a>(
    theme: &dyn Theme,
    entry: &'a MenuEntry,
    row: &MenuRow,
    expansion: &ExpansionState,
    current_path: &str,
    focused: bool,
    options: &RowRenderOptions,
    width: u16,
) -> Line<'a> {
    let active = is_active(current_path, &entry.path);
    let mut style = if active { theme.active_style() } else { theme.text_style() };
    if focused {
        style = style.patch(theme.border_style(true)).add_modifier(ratatui::style::Modifier::UNDERLINED);
    }
    if row.child_idx.is_some() && !active {
        style = theme.muted_style();
    }

    let indent = if row.child_idx.is_some() { "   " } else { " " };
    let mut text = format!("{indent}{} ", entry.icon);
    if options.show_labels {
        text.push_str(&entry.name);
        if entry.is_group() && row.child_idx.is_none() {
            let chevron = if expansion.is_expanded(&entry.name) { " ▾" } else { " ▸" };
            text.push_str(chevron);
        }
    }
    Line::from(Span::styled(truncate_to_width(&text, width as usize), style))
}

/// Truncates a string to the given display width, honoring wide glyphs.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{MenuRow, truncate_to_width, visible_rows};
    use navshell_menu::{ExpansionState, MenuTree};
    use navshell_types::MenuEntry;

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuEntry::leaf("Home", "/", "⌂"),
            MenuEntry::group(
                "Products",
                "/products",
                "▤",
                vec![
                    MenuEntry::leaf("All", "/products", "▤"),
                    MenuEntry::leaf("Popular", "/products/popular", "★"),
                ],
            ),
            MenuEntry::leaf("Contact", "/contact", "✆"),
        ])
        .expect("valid tree")
    }

    #[test]
    fn collapsed_groups_show_only_top_level_rows() {
        let tree = tree();
        let rows = visible_rows(&tree, &ExpansionState::new());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.child_idx.is_none()));
    }

    #[test]
    fn expanding_a_group_inserts_its_children_in_order() {
        let tree = tree();
        let mut expansion = ExpansionState::new();
        expansion.toggle("Products");
        let rows = visible_rows(&tree, &expansion);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], MenuRow { top_idx: 1, child_idx: None });
        assert_eq!(rows[2], MenuRow { top_idx: 1, child_idx: Some(0) });
        assert_eq!(rows[3], MenuRow { top_idx: 1, child_idx: Some(1) });
        assert_eq!(rows[4], MenuRow { top_idx: 2, child_idx: None });
    }

    #[test]
    fn rows_resolve_to_tree_entries() {
        let tree = tree();
        let mut expansion = ExpansionState::new();
        expansion.toggle("Products");
        let rows = visible_rows(&tree, &expansion);
        assert_eq!(rows[3].entry(&tree).name, "Popular");
    }

    #[test]
    fn truncation_keeps_display_width_within_bounds() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let truncated = truncate_to_width("a rather long label", 8);
        assert!(truncated.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(truncated.as_str()) <= 8);
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
