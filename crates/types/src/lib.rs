//! Shared type definitions for the navshell navigation chrome.
//!
//! This crate holds the plain data types exchanged between the menu core,
//! the TUI renderers, and the CLI: the menu entry schema, the configuration
//! error taxonomy, and the message/effect enums that drive the shell.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single navigation entry in the menu forest.
///
/// `name` doubles as the display label and as the key used by
/// accordion expansion state, so it must be non-empty and unique within its
/// sibling list. An entry with a non-empty `children` list is a group node;
/// an entry with no children is a leaf that navigates to `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display label and expansion-state key; unique among siblings.
    pub name: String,
    /// Route path this entry navigates to. May be empty for group headers
    /// that only disclose children.
    #[serde(default)]
    pub path: String,
    /// Glyph rendered next to the label. Opaque to the menu core.
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Ordered child entries; empty for leaf nodes.
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

fn default_icon() -> String {
    "·".to_string()
}

impl MenuEntry {
    /// Creates a leaf entry with the given label, route path, and icon.
    pub fn leaf(name: impl Into<String>, path: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: icon.into(),
            children: Vec::new(),
        }
    }

    /// Creates a group entry that discloses the given children.
    pub fn group(
        name: impl Into<String>,
        path: impl Into<String>,
        icon: impl Into<String>,
        children: Vec<MenuEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: icon.into(),
            children,
        }
    }

    /// Whether this entry discloses children (group node) rather than
    /// navigating directly (leaf node).
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A single link in a footer column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(default)]
    pub path: String,
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// Defects in the static menu configuration.
///
/// These are programmer/configuration errors rejected eagerly at load time;
/// once a tree is constructed, no runtime fault can arise from it.
#[derive(Debug, Error)]
pub enum MenuConfigError {
    /// An entry has an empty name; expansion keys would be ambiguous.
    #[error("menu entry under '{parent}' has an empty name")]
    EmptyName {
        /// Display path of the parent entry, or "(top level)".
        parent: String,
    },
    /// Two siblings share a name; expansion state could not tell them apart.
    #[error("duplicate sibling name '{name}' under '{parent}'")]
    DuplicateName { name: String, parent: String },
    /// The configuration document could not be parsed.
    #[error("failed to parse menu configuration: {0}")]
    Parse(String),
}

/// Messages that update shell state.
///
/// These are system events routed through the component tree rather than raw
/// input events (which components receive directly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic tick used to fire pending dropdown close deadlines.
    Tick,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

/// Side effects emitted by components for the shell to execute.
///
/// Components never mutate global state directly; they report effects and the
/// shell applies them after the originating handler has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to a route path. The only way the current route changes.
    Navigate(String),
    /// Toggle the desktop rail between expanded and collapsed.
    ToggleRail,
    /// Open the narrow-viewport overlay drawer.
    OpenDrawer,
    /// Close the overlay drawer.
    CloseDrawer,
    /// Exit the application.
    Quit,
}
