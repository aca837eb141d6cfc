//! Rendering and input handling for the top navbar.

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ViewportClass};
use crate::ui::components::component::{Component, hit_test};
use crate::ui::components::menu_list::truncate_to_width;
use crate::ui::theme::{self, Theme};
use navshell_menu::is_active;
use navshell_types::Effect;

const LOGIN_LABEL: &str = "Sign in";
const REGISTER_LABEL: &str = "[ Register ]";

/// Top navbar component. Wide viewports get the brand, the top-level items
/// with hover dropdowns and the account shortcuts; narrow viewports get a
/// hamburger that opens the drawer. All state lives on `NavBarState` in the
/// `App`.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    fn activate_focused(&self, app: &mut App) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Some(idx) = app.navbar.focused_item() else {
            return effects;
        };
        let config = Arc::clone(&app.ctx.config);
        let Some(entry) = config.tree().top_level().get(idx) else {
            return effects;
        };
        if entry.is_group() {
            let dropdown = &mut app.navbar.dropdowns[idx];
            if dropdown.is_open() {
                dropdown.outside_activation();
            } else {
                dropdown.pointer_entered();
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

        // Every press outside an open dropdown's trigger and panel region
        // dismisses that dropdown, no matter what the press goes on to hit.
        for idx in 0..app.navbar.dropdowns.len() {
            if app.navbar.dropdowns[idx].is_open() && !app.navbar.region_contains(idx, position) {
                app.navbar.dropdowns[idx].outside_activation();
            }
        }

        if app.navbar.hamburger_area.contains(position) {
            effects.push(Effect::OpenDrawer);
            return effects;
        }
        if app.navbar.brand_area.contains(position) {
            effects.push(Effect::Navigate("/".to_string()));
            return effects;
        }
        if app.navbar.login_area.contains(position) {
            effects.push(Effect::Navigate("/login".to_string()));
            return effects;
        }
        if app.navbar.register_area.contains(position) {
            effects.push(Effect::Navigate("/register".to_string()));
            return effects;
        }

        // Child rows inside an open dropdown close it synchronously, then
        // navigate.
        for (idx, entry) in tree.top_level().iter().enumerate() {
            if !app.navbar.dropdowns[idx].is_open() {
                continue;
            }
            if let Some(child_idx) = hit_test(&app.navbar.child_areas[idx], column, row) {
                app.navbar.dropdowns[idx].select_child();
                let path = tree.children_of(entry)[child_idx].path.clone();
                if !path.is_empty() {
                    effects.push(Effect::Navigate(path));
                }
                return effects;
            }
        }

        if let Some(idx) = hit_test(&app.navbar.item_areas, column, row) {
            if let Some(flag) = app.navbar.item_focus_flags.get(idx) {
                app.focus.focus(flag);
            }
            let entry = &tree.top_level()[idx];
            if entry.is_group() {
                app.navbar.dropdowns[idx].pointer_entered();
            } else if !entry.path.is_empty() {
                effects.push(Effect::Navigate(entry.path.clone()));
            }
            return effects;
        }

        effects
    }

    fn handle_hover(&self, app: &mut App, column: u16, row: u16) {
        if app.viewport == ViewportClass::Narrow {
            return;
        }
        let now = Instant::now();
        let position = Position::new(column, row);
        let config = Arc::clone(&app.ctx.config);
        for (idx, entry) in config.tree().top_level().iter().enumerate() {
            let inside = app.navbar.region_contains(idx, position);
            let dropdown = &mut app.navbar.dropdowns[idx];
            if inside && entry.is_group() {
                dropdown.pointer_entered();
            } else if dropdown.is_open() && !dropdown.has_pending_close() {
                dropdown.pointer_left(now);
            }
        }
    }

    fn render_wide(&self, frame: &mut Frame, inner: Rect, app: &mut App) {
        let config = Arc::clone(&app.ctx.config);
        let tree = config.tree();
        let theme = app.ctx.theme.as_ref();

        let mut spans = Vec::new();
        let mut x = inner.x;

        let brand = format!(" {} ", config.brand);
        let brand_width = brand.width() as u16;
        spans.push(Span::styled(brand, theme.brand_style()));
        app.navbar.brand_area = Rect::new(x, inner.y, brand_width, 1);
        x = x.saturating_add(brand_width).saturating_add(2);
        spans.push(Span::raw("  "));

        app.navbar.hamburger_area = Rect::default();

        let mut item_areas = vec![Rect::default(); tree.len()];
        for (idx, entry) in tree.top_level().iter().enumerate() {
            let focused = app.navbar.item_focus_flags[idx].get();
            let label = if entry.is_group() {
                format!(" {} ▾ ", entry.name)
            } else {
                format!(" {} ", entry.name)
            };
            let width = label.width() as u16;
            let style = if is_active(&app.current_path, &entry.path) {
                theme.active_style()
            } else if focused || app.navbar.dropdowns[idx].is_open() {
                theme.accent_style()
            } else {
                theme.text_style()
            };
            if x.saturating_add(width) <= inner.right() {
                item_areas[idx] = Rect::new(x, inner.y, width, 1);
            }
            spans.push(Span::styled(label, style));
            x = x.saturating_add(width);
        }
        app.navbar.item_areas = item_areas;

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        // Account shortcuts hug the right edge.
        let login_width = LOGIN_LABEL.width() as u16;
        let register_width = REGISTER_LABEL.width() as u16;
        let shortcuts_width = login_width + 2 + register_width;
        if inner.width > shortcuts_width && inner.right() - shortcuts_width > x {
            let register_x = inner.right().saturating_sub(register_width + 1);
            let login_x = register_x.saturating_sub(login_width + 2);
            app.navbar.login_area = Rect::new(login_x, inner.y, login_width, 1);
            app.navbar.register_area = Rect::new(register_x, inner.y, register_width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(LOGIN_LABEL, theme.muted_style())),
                app.navbar.login_area,
            );
            frame.render_widget(
                Paragraph::new(Span::styled(REGISTER_LABEL, theme.accent_style())),
                app.navbar.register_area,
            );
        } else {
            app.navbar.login_area = Rect::default();
            app.navbar.register_area = Rect::default();
        }
    }

    fn render_narrow(&self, frame: &mut Frame, inner: Rect, app: &mut App) {
        let theme = app.ctx.theme.as_ref();
        let hamburger = " ≡ ";
        let hamburger_width = hamburger.width() as u16;
        app.navbar.hamburger_area = Rect::new(inner.x, inner.y, hamburger_width, 1);

        let brand = format!(" {}", app.ctx.config.brand);
        let brand_width = brand.width() as u16;
        app.navbar.brand_area = Rect::new(
            inner.x.saturating_add(hamburger_width),
            inner.y,
            brand_width.min(inner.width.saturating_sub(hamburger_width)),
            1,
        );

        let line = Line::from(vec![
            Span::styled(hamburger, theme.accent_style()),
            Span::styled(
                truncate_to_width(&brand, inner.width.saturating_sub(hamburger_width) as usize),
                theme.brand_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        app.navbar.item_areas = vec![Rect::default(); app.navbar.item_focus_flags.len()];
        app.navbar.login_area = Rect::default();
        app.navbar.register_area = Rect::default();
    }

    fn render_dropdowns(&self, frame: &mut Frame, app: &mut App) {
        let config = Arc::clone(&app.ctx.config);
        let tree = config.tree();
        let frame_area = frame.area();
        for (idx, entry) in tree.top_level().iter().enumerate() {
            if !app.navbar.dropdowns[idx].is_open() || !entry.is_group() {
                app.navbar.panel_areas[idx] = Rect::default();
                app.navbar.child_areas[idx].clear();
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
            let anchor = app.navbar.item_areas.get(idx).copied().unwrap_or_default();
            let x = anchor.x.min(frame_area.right().saturating_sub(width));
            let y = app
                .navbar
                .last_area
                .bottom()
                .min(frame_area.bottom().saturating_sub(height));
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
            app.navbar.panel_areas[idx] = panel;
            app.navbar.child_areas[idx] = child_areas;
        }
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Right => {
                if let Some(flag) = app.navbar.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
                Vec::new()
            }
            KeyCode::Left => {
                if let Some(flag) = app.navbar.cycle_focus(false) {
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
        let focused = app.navbar.item_focus_flags.iter().any(|f| f.get());
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
        app.navbar.last_area = area;

        match app.viewport {
            ViewportClass::Wide => {
                self.render_wide(frame, inner, app);
                self.render_dropdowns(frame, app);
            }
            ViewportClass::Narrow => {
                self.render_narrow(frame, inner, app);
                for idx in 0..app.navbar.panel_areas.len() {
                    app.navbar.panel_areas[idx] = Rect::default();
                    app.navbar.child_areas[idx].clear();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NavBarComponent;
    use crate::app::App;
    use crate::ui::components::component::Component;
    use crate::ui::theme::SlateTheme;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;
    use navshell_menu::MenuConfig;
    use navshell_types::Effect;
    use std::sync::Arc;

    fn wide_app() -> App {
        let config = Arc::new(MenuConfig::embedded_default().clone());
        App::new(config, Box::new(SlateTheme::default()), "/".to_string(), 120)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
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
    fn enter_on_a_leaf_item_navigates() {
        let mut component = NavBarComponent;
        let mut app = wide_app();
        // Item 0 is the Home leaf in the embedded menu.
        app.navbar.item_focus_flags[0].set(true);
        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Navigate("/".to_string())]);
    }

    #[test]
    fn enter_on_a_group_item_toggles_its_dropdown() {
        let mut component = NavBarComponent;
        let mut app = wide_app();
        // Item 1 is the Products group in the embedded menu.
        app.navbar.item_focus_flags[1].set(true);
        assert!(component.handle_key_events(&mut app, key(KeyCode::Enter)).is_empty());
        assert!(app.navbar.dropdowns[1].is_open());
        assert!(component.handle_key_events(&mut app, key(KeyCode::Enter)).is_empty());
        assert!(!app.navbar.dropdowns[1].is_open());
    }

    #[test]
    fn pressing_the_brand_dismisses_an_open_dropdown() {
        let mut component = NavBarComponent;
        let mut app = wide_app();
        app.navbar.brand_area = Rect::new(0, 0, 10, 1);
        app.navbar.item_areas[1] = Rect::new(12, 0, 12, 1);
        app.navbar.panel_areas[1] = Rect::new(12, 1, 20, 5);
        app.navbar.dropdowns[1].pointer_entered();
        assert!(app.navbar.dropdowns[1].is_open());

        let effects = component.handle_mouse_events(&mut app, press(2, 0));
        assert_eq!(effects, vec![Effect::Navigate("/".to_string())]);
        assert!(!app.navbar.dropdowns[1].is_open());
    }

    #[test]
    fn pressing_another_item_dismisses_an_open_dropdown() {
        let mut component = NavBarComponent;
        let mut app = wide_app();
        app.navbar.item_areas[0] = Rect::new(0, 0, 8, 1);
        app.navbar.item_areas[1] = Rect::new(12, 0, 12, 1);
        app.navbar.panel_areas[1] = Rect::new(12, 1, 20, 5);
        app.navbar.dropdowns[1].pointer_entered();

        // Item 0 is the Home leaf; its press navigates and the open
        // Products dropdown closes in the same activation.
        let effects = component.handle_mouse_events(&mut app, press(1, 0));
        assert_eq!(effects, vec![Effect::Navigate("/".to_string())]);
        assert!(!app.navbar.dropdowns[1].is_open());
    }
}
