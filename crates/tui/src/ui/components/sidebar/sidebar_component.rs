//! Rendering and input handling for the sidebar rail.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::SidebarState;
use crate::app::App;
use crate::ui::components::component::{Component, hit_test};
use crate::ui::components::menu_list::{RowRenderOptions, render_rows, truncate_to_width};
use crate::ui::theme::{self, Theme};
use navshell_menu::is_active;
use navshell_types::Effect;

/// Desktop rail component. All state lives on [`SidebarState`] in the `App`;
/// the component only routes events and paints.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    /// Union hover region of a collapsed-rail group: its icon row plus its
    /// flyout panel while open. This mirrors the single hover region of the
    /// trigger-plus-panel pair.
    fn flyout_region_contains(state: &SidebarState, top_idx: usize, position: Position) -> bool {
        let row_hit = state
            .row_areas
            .get(top_idx)
            .is_some_and(|area| area.contains(position));
        let panel_hit = state
            .flyout_panel_areas
            .get(top_idx)
            .is_some_and(|area| area.contains(position));
        row_hit || panel_hit
    }

    fn activate_focused(&self, app: &mut App) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Some((row, _)) = app.sidebar.focused_row() else {
            return effects;
        };
        let config = Arc::clone(&app.ctx.config);
        let entry = row.entry(config.tree());
        if entry.is_group() && row.child_idx.is_none() {
            if app.sidebar.collapsed {
                let flyout = &mut app.sidebar.flyouts[row.top_idx];
                if flyout.is_open() {
                    flyout.outside_activation();
                } else {
                    flyout.pointer_entered();
                }
            } else {
                app.sidebar.toggle_group(&entry.name.clone(), config.tree());
            }
        } else if !entry.path.is_empty() {
            effects.push(Effect::Navigate(entry.path.clone()));
        }
        effects
    }

    fn handle_click(&self, app: &mut App, column: u16, row: u16) -> Vec<Effect> {
        let mut effects = Vec::new();
        let position = Position::new(column, row);
        let config = Arc::clone(&app.ctx.config);
        let tree = config.tree();

        // Every press outside an open flyout's icon row and panel region
        // dismisses that flyout, no matter what the press goes on to hit.
        for top_idx in 0..app.sidebar.flyouts.len() {
            if app.sidebar.flyouts[top_idx].is_open()
                && !Self::flyout_region_contains(&app.sidebar, top_idx, position)
            {
                app.sidebar.flyouts[top_idx].outside_activation();
            }
        }

        if app.sidebar.toggle_area.contains(position) {
            effects.push(Effect::ToggleRail);
            return effects;
        }

        // Child rows inside an open flyout close it synchronously, then
        // navigate.
        if app.sidebar.collapsed {
            for (top_idx, entry) in tree.top_level().iter().enumerate() {
                if !app.sidebar.flyouts[top_idx].is_open() {
                    continue;
                }
                if let Some(child_idx) = hit_test(&app.sidebar.flyout_child_areas[top_idx], column, row) {
                    app.sidebar.flyouts[top_idx].select_child();
                    let path = tree.children_of(entry)[child_idx].path.clone();
                    if !path.is_empty() {
                        effects.push(Effect::Navigate(path));
                    }
                    return effects;
                }
            }
        }

        if let Some(idx) = hit_test(&app.sidebar.row_areas, column, row) {
            if let Some(flag) = app.sidebar.row_focus_flags.get(idx) {
                app.focus.focus(flag);
            }
            let menu_row = app.sidebar.rows[idx];
            let entry = menu_row.entry(tree);
            if entry.is_group() && menu_row.child_idx.is_none() {
                if app.sidebar.collapsed {
                    app.sidebar.flyouts[menu_row.top_idx].pointer_entered();
                } else {
                    app.sidebar.toggle_group(&entry.name.clone(), tree);
                }
            } else if !entry.path.is_empty() {
                effects.push(Effect::Navigate(entry.path.clone()));
            }
            return effects;
        }

        effects
    }

    fn handle_hover(&self, app: &mut App, column: u16, row: u16) {
        if !app.sidebar.collapsed {
            return;
        }
        let now = Instant::now();
        let position = Position::new(column, row);
        let config = Arc::clone(&app.ctx.config);
        // While collapsed the row list is exactly the top-level entries, so
        // row index and top-level index coincide.
        for (top_idx, entry) in config.tree().top_level().iter().enumerate() {
            let inside = Self::flyout_region_contains(&app.sidebar, top_idx, position);
            let flyout = &mut app.sidebar.flyouts[top_idx];
            if inside && entry.is_group() {
                flyout.pointer_entered();
            } else if flyout.is_open() && !flyout.has_pending_close() {
                flyout.pointer_left(now);
            }
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.ctx.theme.as_ref();
        let collapsed = app.sidebar.collapsed;
        let line = if collapsed {
            Line::from(Span::styled("  ›", theme.accent_style()))
        } else {
            Line::from(vec![
                Span::styled(" Menu", theme.text_style()),
                Span::styled(
                    format!("{:>width$}", "‹ ", width = area.width.saturating_sub(5) as usize),
                    theme.accent_style(),
                ),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);
        app.sidebar.toggle_area = area;
    }

    fn render_flyouts(&self, frame: &mut Frame, app: &mut App) {
        let config = Arc::clone(&app.ctx.config);
        let tree = config.tree();
        let frame_area = frame.area();
        for (top_idx, entry) in tree.top_level().iter().enumerate() {
            if !app.sidebar.flyouts[top_idx].is_open() || !entry.is_group() {
                app.sidebar.flyout_panel_areas[top_idx] = Rect::default();
                app.sidebar.flyout_child_areas[top_idx].clear();
                continue;
            }
            let children = tree.children_of(entry);
            let width = children
                .iter()
                .map(|c| c.name.width() + c.icon.width() + 5)
                .max()
                .unwrap_or(10)
                .min(frame_area.width as usize) as u16;
            let height = (children.len() as u16).saturating_add(2);
            let anchor = app.sidebar.row_areas.get(top_idx).copied().unwrap_or_default();
            let x = app.sidebar.last_area.right().min(frame_area.right().saturating_sub(width));
            let y = anchor.y.min(frame_area.bottom().saturating_sub(height));
            let panel = Rect::new(x, y, width, height).intersection(frame_area);

            frame.render_widget(Clear, panel);
            let theme = app.ctx.theme.as_ref();
            let block = theme::block(theme, Some(entry.name.as_str()), false);
            let inner = block.inner(panel);
            frame.render_widget(block, panel);

            let mut child_areas = Vec::with_capacity(children.len());
            for (i, child) in children.iter().enumerate() {
                let y = inner.y.saturating_add(i as u16);
                if y >= inner.bottom() {
                    child_areas.push(Rect::default());
                    continue;
                }
                let row_area = Rect::new(inner.x, y, inner.width, 1);
                let style = if is_active(&app.current_path, &child.path) {
                    theme.active_style()
                } else {
                    theme.text_style()
                };
                let text = truncate_to_width(&format!(" {} {}", child.icon, child.name), inner.width as usize);
                frame.render_widget(Paragraph::new(Span::styled(text, style)), row_area);
                child_areas.push(row_area);
            }
            app.sidebar.flyout_panel_areas[top_idx] = panel;
            app.sidebar.flyout_child_areas[top_idx] = child_areas;
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => {
                if let Some(flag) = app.sidebar.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Up => {
                if let Some(flag) = app.sidebar.cycle_focus(false) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Enter => self.activate_focused(app),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Moved => {
                self.handle_hover(app, mouse.column, mouse.row);
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(app, mouse.column, mouse.row),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.sidebar.row_focus_flags.iter().any(|f| f.get());
        {
            let theme = app.ctx.theme.as_ref();
            let block = theme::block(theme, None, focused);
            frame.render_widget(block, area);
        }

        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let header = Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height));
        self.render_header(frame, header, app);

        let mut rows_area = inner;
        rows_area.y = rows_area.y.saturating_add(2);
        rows_area.height = rows_area.height.saturating_sub(2);

        let options = RowRenderOptions {
            show_labels: !app.sidebar.collapsed,
        };
        let row_areas = render_rows(
            frame,
            rows_area,
            app.ctx.theme.as_ref(),
            app.ctx.config.tree(),
            &app.sidebar.rows,
            &app.sidebar.expansion,
            &app.current_path,
            &app.sidebar.row_focus_flags,
            &options,
        );
        app.sidebar.row_areas = row_areas;

        // Brand footer only fits when the rail is expanded.
        if !app.sidebar.collapsed && inner.height > 3 {
            let theme = app.ctx.theme.as_ref();
            let footer = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
            let text = truncate_to_width(&format!(" © {}", app.ctx.config.brand), inner.width as usize);
            frame.render_widget(Paragraph::new(Span::styled(text, theme.muted_style())), footer);
        }

        app.sidebar.last_area = area;

        if app.sidebar.collapsed {
            self.render_flyouts(frame, app);
        } else {
            for top_idx in 0..app.sidebar.flyout_panel_areas.len() {
                app.sidebar.flyout_panel_areas[top_idx] = Rect::default();
                app.sidebar.flyout_child_areas[top_idx].clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SidebarComponent;
    use crate::app::App;
    use crate::ui::components::component::Component;
    use crate::ui::theme::SlateTheme;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use navshell_menu::MenuConfig;
    use navshell_types::Effect;
    use ratatui::layout::Rect;
    use std::sync::Arc;

    fn collapsed_app() -> App {
        let config = Arc::new(MenuConfig::embedded_default().clone());
        let mut app = App::new(config, Box::new(SlateTheme::default()), "/".to_string(), 120);
        let config = Arc::clone(&app.ctx.config);
        app.sidebar.toggle_collapsed(config.tree());
        app
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn pressing_the_rail_toggle_dismisses_an_open_flyout() {
        let mut component = SidebarComponent;
        let mut app = collapsed_app();
        app.sidebar.toggle_area = Rect::new(1, 4, 4, 1);
        app.sidebar.row_areas[1] = Rect::new(1, 7, 4, 1);
        app.sidebar.flyout_panel_areas[1] = Rect::new(6, 7, 20, 5);
        app.sidebar.flyouts[1].pointer_entered();
        assert!(app.sidebar.flyouts[1].is_open());

        let effects = component.handle_mouse_events(&mut app, press(2, 4));
        assert_eq!(effects, vec![Effect::ToggleRail]);
        assert!(!app.sidebar.flyouts[1].is_open());
    }

    #[test]
    fn pressing_another_icon_row_dismisses_an_open_flyout() {
        let mut component = SidebarComponent;
        let mut app = collapsed_app();
        app.sidebar.row_areas[0] = Rect::new(1, 6, 4, 1);
        app.sidebar.row_areas[1] = Rect::new(1, 7, 4, 1);
        app.sidebar.flyout_panel_areas[1] = Rect::new(6, 7, 20, 5);
        app.sidebar.flyouts[1].pointer_entered();

        // Row 0 is the Home leaf; its press navigates and the open Products
        // flyout closes in the same activation.
        let effects = component.handle_mouse_events(&mut app, press(2, 6));
        assert_eq!(effects, vec![Effect::Navigate("/".to_string())]);
        assert!(!app.sidebar.flyouts[1].is_open());
    }
}
