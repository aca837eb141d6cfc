//! Main content pane showing the current route.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::{self, Theme};
use navshell_menu::is_active;

/// Placeholder content pane. Echoes the current route and the entry it
/// resolves to so navigation is visible without a real page behind it.
#[derive(Debug, Default)]
pub struct ContentComponent;

impl ContentComponent {
    fn resolve_title(app: &App) -> Option<String> {
        let tree = app.ctx.config.tree();
        for entry in tree.top_level() {
            if is_active(&app.current_path, &entry.path) {
                return Some(entry.name.clone());
            }
            for child in tree.children_of(entry) {
                if is_active(&app.current_path, &child.path) {
                    return Some(format!("{} / {}", entry.name, child.name));
                }
            }
        }
        None
    }
}

impl Component for ContentComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let title = Self::resolve_title(app);
        let theme = app.ctx.theme.as_ref();
        let block = theme::block(theme, Some("Content"), false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let heading = title.unwrap_or_else(|| "Not found".to_string());
        let lines = vec![
            Line::from(Span::styled(heading, theme.brand_style())),
            Line::from(Span::styled(app.current_path.clone(), theme.muted_style())),
            Line::default(),
            Line::from(Span::styled(
                "Use Tab to move between surfaces, arrows within one, Enter to activate.",
                theme.muted_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
