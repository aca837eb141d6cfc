//! Component abstraction for the shell surfaces.
//!
//! Each surface (navbar, rail, drawer, footer, content) is a self-contained
//! component: it handles the input routed to it, reads and mutates only its
//! own state slice on [`App`], and reports everything else as [`Effect`]s for
//! the shell to execute.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::App;
use navshell_types::{Effect, Msg};

/// A UI surface with its own state and behavior.
///
/// Handlers run synchronously on the event loop; none of them block. State
/// changes happen in the handlers and in `update`, never during `render`.
pub(crate) trait Component {
    /// Handle a key event routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event. Components receive every mouse event so they can
    /// implement outside-click dismissal against their tracked areas.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Process an application message (tick, resize).
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw the component into the given area. Side-effect free except for
    /// frame drawing and recording hit-test areas on the component's state.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);
}

/// Index of the first rect in `areas` containing the position, if any.
pub(crate) fn hit_test(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    areas
        .iter()
        .position(|area| area.contains(ratatui::layout::Position::new(column, row)))
}

#[cfg(test)]
mod tests {
    use super::hit_test;
    use ratatui::layout::Rect;

    #[test]
    fn hit_test_finds_the_containing_rect() {
        let areas = vec![Rect::new(0, 0, 10, 1), Rect::new(0, 1, 10, 1)];
        assert_eq!(hit_test(&areas, 3, 1), Some(1));
        assert_eq!(hit_test(&areas, 3, 0), Some(0));
        assert_eq!(hit_test(&areas, 11, 0), None);
    }

    #[test]
    fn hit_test_is_none_for_empty_rects() {
        assert_eq!(hit_test(&[Rect::default()], 0, 0), None);
    }
}
