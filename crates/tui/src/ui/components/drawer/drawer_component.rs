//! Rendering and input handling for the overlay drawer.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use super::DrawerState;
use super::state::DRAWER_WIDTH;
use crate::app::App;
use crate::ui::components::component::{Component, hit_test};
use crate::ui::components::menu_list::{RowRenderOptions, render_rows, truncate_to_width};
use crate::ui::theme::{self, Theme};
use navshell_types::Effect;

/// Overlay drawer component. Only receives events while the drawer is open;
/// the shell routes everything to it first so the overlay traps input.
#[derive(Debug, Default)]
pub struct DrawerComponent;

impl DrawerComponent {
    fn activate_focused(&self, app: &mut App) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Some((row, _)) = app.drawer.focused_row() else {
            return effects;
        };
        let config = Arc::clone(&app.ctx.config);
        let entry = row.entry(config.tree());
        if entry.is_group() && row.child_idx.is_none() {
            app.drawer.toggle_group(&entry.name.clone(), config.tree());
        } else if !entry.path.is_empty() {
            // Close first so the drawer is gone when the route changes.
            effects.push(Effect::CloseDrawer);
            effects.push(Effect::Navigate(entry.path.clone()));
        }
        effects
    }

    fn handle_click(&self, app: &mut App, column: u16, row: u16) -> Vec<Effect> {
        let mut effects = Vec::new();
        let position = Position::new(column, row);

        if app.drawer.close_area.contains(position) {
            effects.push(Effect::CloseDrawer);
            return effects;
        }

        if let Some(idx) = hit_test(&app.drawer.row_areas, column, row) {
            if let Some(flag) = app.drawer.row_focus_flags.get(idx) {
                app.focus.focus(flag);
            }
            let config = Arc::clone(&app.ctx.config);
            let menu_row = app.drawer.rows[idx];
            let entry = menu_row.entry(config.tree());
            if entry.is_group() && menu_row.child_idx.is_none() {
                app.drawer.toggle_group(&entry.name.clone(), config.tree());
            } else if !entry.path.is_empty() {
                effects.push(Effect::CloseDrawer);
                effects.push(Effect::Navigate(entry.path.clone()));
            }
            return effects;
        }

        // Anywhere on the scrim dismisses the drawer.
        if !app.drawer.last_area.contains(position) {
            effects.push(Effect::CloseDrawer);
        }
        effects
    }
}

impl Component for DrawerComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => vec![Effect::CloseDrawer],
            KeyCode::Down => {
                if let Some(flag) = app.drawer.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Up => {
                if let Some(flag) = app.drawer.cycle_focus(false) {
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
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(app, mouse.column, mouse.row),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Scrim over everything beneath the drawer.
        {
            let theme = app.ctx.theme.as_ref();
            frame.render_widget(Block::default().style(theme.scrim_style()), area);
        }

        let panel = Rect::new(area.x, area.y, DRAWER_WIDTH.min(area.width), area.height);
        frame.render_widget(Clear, panel);
        let inner = {
            let theme = app.ctx.theme.as_ref();
            let block = theme::block(theme, None, true);
            let inner = block.inner(panel);
            frame.render_widget(block, panel);
            inner
        };

        // Header: title plus close button.
        if inner.height > 0 {
            let theme = app.ctx.theme.as_ref();
            let close_col = inner.right().saturating_sub(2);
            let header = Rect::new(inner.x, inner.y, inner.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(" Menu", theme.text_style()))),
                header,
            );
            let close = Rect::new(close_col, inner.y, 2.min(inner.width), 1);
            frame.render_widget(Paragraph::new(Span::styled("✕", theme.accent_style())), close);
            app.drawer.close_area = close;
        }

        let mut rows_area = inner;
        rows_area.y = rows_area.y.saturating_add(2);
        rows_area.height = rows_area.height.saturating_sub(2);

        let options = RowRenderOptions { show_labels: true };
        let row_areas = render_rows(
            frame,
            rows_area,
            app.ctx.theme.as_ref(),
            app.ctx.config.tree(),
            &app.drawer.rows,
            &app.drawer.expansion,
            &app.current_path,
            &app.drawer.row_focus_flags,
            &options,
        );
        app.drawer.row_areas = row_areas;

        if inner.height > 3 {
            let theme = app.ctx.theme.as_ref();
            let footer = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
            let text = truncate_to_width(&format!(" © {}", app.ctx.config.brand), inner.width as usize);
            frame.render_widget(Paragraph::new(Span::styled(text, theme.muted_style())), footer);
        }

        app.drawer.last_area = panel;
    }
}

#[cfg(test)]
mod tests {
    use super::DrawerComponent;
    use crate::app::App;
    use crate::ui::components::component::Component;
    use crate::ui::theme::SlateTheme;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use navshell_menu::MenuConfig;
    use navshell_types::Effect;
    use std::sync::Arc;

    fn narrow_app_with_open_drawer() -> App {
        let config = Arc::new(MenuConfig::embedded_default().clone());
        let mut app = App::new(config, Box::new(SlateTheme::default()), "/".to_string(), 80);
        app.drawer.set_open(true);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn selecting_a_leaf_closes_the_drawer_before_navigating() {
        let mut component = DrawerComponent;
        let mut app = narrow_app_with_open_drawer();
        // Row 0 is the Home leaf in the embedded menu.
        app.drawer.row_focus_flags[0].set(true);
        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![Effect::CloseDrawer, Effect::Navigate("/".to_string())]
        );
    }

    #[test]
    fn activating_a_group_toggles_its_accordion_without_effects() {
        let mut component = DrawerComponent;
        let mut app = narrow_app_with_open_drawer();
        // Row 1 is the Products group in the embedded menu.
        app.drawer.row_focus_flags[1].set(true);
        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.drawer.expansion.is_expanded("Products"));
    }

    #[test]
    fn esc_and_m_both_dismiss_the_drawer() {
        let mut component = DrawerComponent;
        let mut app = narrow_app_with_open_drawer();
        assert_eq!(
            component.handle_key_events(&mut app, key(KeyCode::Esc)),
            vec![Effect::CloseDrawer]
        );
        assert_eq!(
            component.handle_key_events(&mut app, key(KeyCode::Char('m'))),
            vec![Effect::CloseDrawer]
        );
    }
}
