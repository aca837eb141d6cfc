//! Shell layout arithmetic, kept free of widget code so it can be tested
//! against plain rects.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::ViewportClass;
use crate::ui::components::footer::FOOTER_HEIGHT;

/// Terminal width at which the shell switches between the wide class
/// (navbar plus rail) and the narrow class (navbar plus drawer).
pub const NARROW_BREAKPOINT: u16 = 100;

/// Navbar height including its border.
pub const NAVBAR_HEIGHT: u16 = 3;

/// Minimum terminal height before the footer is dropped to keep the content
/// pane usable.
const MIN_HEIGHT_WITH_FOOTER: u16 = 24;

/// Resolved rects for one frame of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub navbar: Rect,
    /// Zero-sized in the narrow class.
    pub sidebar: Rect,
    pub content: Rect,
    /// Zero-sized when the terminal is too short.
    pub footer: Rect,
}

/// Classifies a terminal width.
pub fn classify(width: u16) -> ViewportClass {
    if width < NARROW_BREAKPOINT {
        ViewportClass::Narrow
    } else {
        ViewportClass::Wide
    }
}

/// Splits the frame into the shell regions for the given class and rail
/// width. The drawer is an overlay and draws over the whole frame, so it has
/// no slot here.
pub fn split(area: Rect, viewport: ViewportClass, sidebar_width: u16) -> ShellLayout {
    let footer_height = if area.height >= MIN_HEIGHT_WITH_FOOTER {
        FOOTER_HEIGHT
    } else {
        0
    };
    let [navbar, body, footer] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    let (sidebar, content) = match viewport {
        ViewportClass::Wide => {
            let [sidebar, content] =
                Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)])
                    .areas(body);
            (sidebar, content)
        }
        ViewportClass::Narrow => (Rect::default(), body),
    };

    ShellLayout {
        navbar,
        sidebar,
        content,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::{NARROW_BREAKPOINT, NAVBAR_HEIGHT, classify, split};
    use crate::app::ViewportClass;
    use ratatui::layout::Rect;

    #[test]
    fn classifies_around_the_breakpoint() {
        assert_eq!(classify(NARROW_BREAKPOINT - 1), ViewportClass::Narrow);
        assert_eq!(classify(NARROW_BREAKPOINT), ViewportClass::Wide);
        assert_eq!(classify(200), ViewportClass::Wide);
    }

    #[test]
    fn wide_layout_reserves_the_rail() {
        let layout = split(Rect::new(0, 0, 120, 40), ViewportClass::Wide, 26);
        assert_eq!(layout.navbar.height, NAVBAR_HEIGHT);
        assert_eq!(layout.sidebar.width, 26);
        assert_eq!(layout.content.x, 26);
        assert!(layout.footer.height > 0);
        assert_eq!(layout.sidebar.height, layout.content.height);
    }

    #[test]
    fn narrow_layout_has_no_rail() {
        let layout = split(Rect::new(0, 0, 80, 40), ViewportClass::Narrow, 26);
        assert_eq!(layout.sidebar, Rect::default());
        assert_eq!(layout.content.width, 80);
    }

    #[test]
    fn short_terminals_drop_the_footer() {
        let layout = split(Rect::new(0, 0, 120, 20), ViewportClass::Wide, 26);
        assert_eq!(layout.footer.height, 0);
        assert_eq!(layout.content.bottom(), 20);
    }
}
