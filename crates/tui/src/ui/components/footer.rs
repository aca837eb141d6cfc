//! Footer strip with link columns and the copyright line.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::components::menu_list::truncate_to_width;
use crate::ui::theme::Theme;
use navshell_types::Effect;

/// Height the shell reserves for the footer when the terminal is tall enough.
pub const FOOTER_HEIGHT: u16 = 8;

/// Bottom footer. Renders the configured link columns side by side with the
/// copyright line underneath; clicking a link navigates to its path.
#[derive(Debug, Default)]
pub struct FooterComponent {
    link_areas: Vec<(Rect, String)>,
}

impl FooterComponent {
    /// Drops the recorded link rects. Called when the shell lays the footer
    /// out at zero height, so a click can't hit a previous taller frame.
    pub(crate) fn clear_link_areas(&mut self) {
        self.link_areas.clear();
    }
}

impl Component for FooterComponent {
    fn handle_mouse_events(&mut self, _app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        for (area, path) in &self.link_areas {
            if area.contains(position) && !path.is_empty() {
                return vec![Effect::Navigate(path.clone())];
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.link_areas.clear();
        let theme = app.ctx.theme.as_ref();
        let config = &app.ctx.config;

        frame.render_widget(Paragraph::new("").style(theme.panel_style()), area);
        if area.height == 0 {
            return;
        }

        let columns_area = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(3),
        );
        let count = config.footer.len().max(1);
        let constraints = vec![Constraint::Ratio(1, count as u32); count];
        let column_rects = Layout::horizontal(constraints).split(columns_area);

        for (column, rect) in config.footer.iter().zip(column_rects.iter()) {
            if rect.height == 0 {
                continue;
            }
            let title_area = Rect::new(rect.x, rect.y, rect.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    truncate_to_width(&column.title, rect.width as usize),
                    theme.accent_style(),
                )),
                title_area,
            );
            for (i, link) in column.links.iter().enumerate() {
                let y = rect.y.saturating_add(1 + i as u16);
                if y >= rect.bottom() {
                    break;
                }
                let link_area = Rect::new(rect.x, y, rect.width, 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        truncate_to_width(&link.label, rect.width as usize),
                        theme.muted_style(),
                    )),
                    link_area,
                );
                self.link_areas.push((link_area, link.path.clone()));
            }
        }

        let copyright = Rect::new(
            area.x.saturating_add(1),
            area.bottom().saturating_sub(1),
            area.width.saturating_sub(2),
            1,
        );
        let text = format!("© {}. {}", config.brand, config.tagline);
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate_to_width(&text, copyright.width as usize),
                theme.muted_style(),
            )),
            copyright,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::FooterComponent;
    use crate::app::App;
    use crate::ui::components::component::Component;
    use crate::ui::theme::SlateTheme;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use navshell_menu::MenuConfig;
    use navshell_types::Effect;
    use ratatui::layout::Rect;
    use std::sync::Arc;

    fn app() -> App {
        let config = Arc::new(MenuConfig::embedded_default().clone());
        App::new(config, Box::new(SlateTheme::default()), "/".to_string(), 120)
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
    fn dropping_the_footer_clears_its_click_targets() {
        let mut footer = FooterComponent::default();
        let mut app = app();
        footer
            .link_areas
            .push((Rect::new(2, 18, 10, 1), "/products/features".to_string()));
        assert_eq!(
            footer.handle_mouse_events(&mut app, press(2, 18)),
            vec![Effect::Navigate("/products/features".to_string())]
        );

        // Once the shell lays the footer out at zero height the old rects
        // must stop accepting clicks.
        footer.clear_link_areas();
        assert!(footer.handle_mouse_events(&mut app, press(2, 18)).is_empty());
    }
}
