//! Theme styling for the navigation chrome.
//!
//! Semantic color roles plus style builders for the widgets the shell
//! renders. Prefer these helpers over hard-coding colors so the surfaces stay
//! visually consistent.

use std::env;
use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};
use tracing::debug;

/// Semantic color roles used across the shell surfaces.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,

    pub text: Color,
    pub text_muted: Color,

    pub accent: Color,
    /// Background/foreground pair for the entry matching the current route.
    pub active_bg: Color,
    pub active_fg: Color,

    pub focus: Color,
    /// Dimmed backdrop behind the overlay drawer.
    pub scrim: Color,
}

/// Theme trait exposing roles and the style builders the surfaces need.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn name(&self) -> &'static str;

    fn text_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }
    fn accent_style(&self) -> Style {
        Style::default().fg(self.roles().accent)
    }
    fn brand_style(&self) -> Style {
        Style::default().fg(self.roles().accent).add_modifier(Modifier::BOLD)
    }

    /// Style of the entry whose path equals the current route.
    fn active_style(&self) -> Style {
        Style::default()
            .fg(self.roles().active_fg)
            .bg(self.roles().active_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    fn panel_style(&self) -> Style {
        Style::default().bg(self.roles().surface).fg(self.roles().text)
    }

    fn scrim_style(&self) -> Style {
        Style::default().bg(self.roles().scrim)
    }
}

/// Default palette: muted slate with a blue accent.
#[derive(Debug)]
pub struct SlateTheme(ThemeRoles);

impl Default for SlateTheme {
    fn default() -> Self {
        Self(ThemeRoles {
            background: Color::Rgb(15, 18, 24),
            surface: Color::Rgb(24, 28, 37),
            border: Color::Rgb(58, 66, 82),
            text: Color::Rgb(214, 219, 228),
            text_muted: Color::Rgb(128, 138, 155),
            accent: Color::Rgb(96, 156, 245),
            active_bg: Color::Rgb(34, 48, 74),
            active_fg: Color::Rgb(148, 190, 250),
            focus: Color::Rgb(96, 156, 245),
            scrim: Color::Rgb(8, 10, 13),
        })
    }
}

impl Theme for SlateTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.0
    }

    fn name(&self) -> &'static str {
        "slate"
    }
}

/// High-contrast fallback for terminals without truecolor support.
#[derive(Debug)]
pub struct AnsiTheme(ThemeRoles);

impl Default for AnsiTheme {
    fn default() -> Self {
        Self(ThemeRoles {
            background: Color::Black,
            surface: Color::Black,
            border: Color::DarkGray,
            text: Color::White,
            text_muted: Color::Gray,
            accent: Color::Cyan,
            active_bg: Color::Blue,
            active_fg: Color::White,
            focus: Color::Cyan,
            scrim: Color::Black,
        })
    }
}

impl Theme for AnsiTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.0
    }

    fn name(&self) -> &'static str {
        "ansi"
    }
}

/// Selects a theme from `NAVSHELL_THEME` and terminal color capability.
pub fn load() -> Box<dyn Theme> {
    if let Ok(name) = env::var("NAVSHELL_THEME") {
        match name.trim().to_lowercase().as_str() {
            "ansi" => return Box::new(AnsiTheme::default()),
            "slate" | "" => return Box::new(SlateTheme::default()),
            other => debug!(theme = other, "unknown theme name, falling back to capability detection"),
        }
    }
    let colorterm = env::var("COLORTERM").unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        Box::new(SlateTheme::default())
    } else {
        Box::new(AnsiTheme::default())
    }
}

/// Standard bordered block with the theme's surfaces; focus color when the
/// surface owns focus.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(theme.panel_style());
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.muted_style().add_modifier(Modifier::BOLD)));
    }
    block
}
