//! Top-level view composing the shell surfaces.
//!
//! `ShellView` owns the components, splits the frame, routes input to the
//! right surface for the current width class and collects the effects they
//! return. The overlay drawer traps input while open.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, ViewportClass};
use crate::ui::components::component::Component;
use crate::ui::components::{
    ContentComponent, DrawerComponent, FooterComponent, NavBarComponent, SidebarComponent,
};
use crate::ui::layout;
use crate::ui::theme::Theme;
use navshell_types::{Effect, Msg};

#[derive(Debug, Default)]
pub struct ShellView {
    navbar: NavBarComponent,
    sidebar: SidebarComponent,
    drawer: DrawerComponent,
    content: ContentComponent,
    footer: FooterComponent,
}

impl ShellView {
    fn drawer_traps_input(app: &App) -> bool {
        app.drawer.open && app.viewport == ViewportClass::Narrow
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if Self::drawer_traps_input(app) {
            return self.drawer.handle_key_events(app, key);
        }
        match key.code {
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Char('b') => vec![Effect::ToggleRail],
            KeyCode::Char('m') if app.viewport == ViewportClass::Narrow => {
                vec![Effect::OpenDrawer]
            }
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            _ => {
                let mut effects = self.navbar.handle_key_events(app, key);
                if app.viewport == ViewportClass::Wide {
                    effects.extend(self.sidebar.handle_key_events(app, key));
                }
                effects
            }
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if Self::drawer_traps_input(app) {
            return self.drawer.handle_mouse_events(app, mouse);
        }
        let mut effects = self.navbar.handle_mouse_events(app, mouse);
        if app.viewport == ViewportClass::Wide {
            effects.extend(self.sidebar.handle_mouse_events(app, mouse));
        }
        effects.extend(self.footer.handle_mouse_events(app, mouse));
        effects
    }

    /// Routes a message; returns whether anything visible changed.
    pub fn handle_message(&mut self, app: &mut App, msg: &Msg) -> bool {
        app.update(msg)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        {
            let theme = app.ctx.theme.as_ref();
            frame.render_widget(
                Block::default().style(theme.panel_style().bg(theme.roles().background)),
                area,
            );
        }

        let shell = layout::split(area, app.viewport, app.sidebar.width());

        self.content.render(frame, shell.content, app);
        if app.viewport == ViewportClass::Wide {
            self.sidebar.render(frame, shell.sidebar, app);
        }
        if shell.footer.height > 0 {
            self.footer.render(frame, shell.footer, app);
        } else {
            self.footer.clear_link_areas();
        }
        // Navbar last among the chrome so its dropdown overlays paint above
        // the content.
        self.navbar.render(frame, shell.navbar, app);

        if Self::drawer_traps_input(app) {
            self.drawer.render(frame, area, app);
        }

        self.render_status_hint(frame, area, app);
    }

    fn render_status_hint(&self, frame: &mut Frame, area: Rect, app: &App) {
        if area.height < 2 {
            return;
        }
        let theme = app.ctx.theme.as_ref();
        let hint = match (app.viewport, app.drawer.open) {
            (ViewportClass::Narrow, true) => " Esc close · arrows move · Enter activate",
            (ViewportClass::Narrow, false) => " q quit · m menu · Tab focus",
            (ViewportClass::Wide, _) => " q quit · b rail · Tab focus",
        };
        let line = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        frame.render_widget(Paragraph::new(hint).style(theme.muted_style()), line);
    }
}

#[cfg(test)]
mod tests {
    use super::ShellView;
    use crate::app::{App, ViewportClass};
    use crate::ui::theme::SlateTheme;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use navshell_menu::MenuConfig;
    use navshell_types::Effect;
    use std::sync::Arc;

    fn app(width: u16) -> App {
        let config = Arc::new(MenuConfig::embedded_default().clone());
        App::new(config, Box::new(SlateTheme::default()), "/".to_string(), width)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_and_b_toggles_the_rail() {
        let mut view = ShellView::default();
        let mut app = app(120);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(
            view.handle_key_events(&mut app, key(KeyCode::Char('b'))),
            vec![Effect::ToggleRail]
        );
    }

    #[test]
    fn m_opens_the_drawer_only_in_the_narrow_class() {
        let mut view = ShellView::default();
        let mut narrow = app(80);
        assert_eq!(
            view.handle_key_events(&mut narrow, key(KeyCode::Char('m'))),
            vec![Effect::OpenDrawer]
        );
        let mut wide = app(120);
        assert!(view.handle_key_events(&mut wide, key(KeyCode::Char('m'))).is_empty());
    }

    #[test]
    fn open_drawer_traps_keys_and_esc_closes_it() {
        let mut view = ShellView::default();
        let mut app = app(80);
        app.apply_effect(Effect::OpenDrawer);
        assert_eq!(app.viewport, ViewportClass::Narrow);
        // 'q' must not quit while the drawer is trapping input.
        assert!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))).is_empty());
        assert_eq!(
            view.handle_key_events(&mut app, key(KeyCode::Esc)),
            vec![Effect::CloseDrawer]
        );
    }
}
