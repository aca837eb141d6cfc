//! # Navigation shell TUI
//!
//! Terminal rendition of a hierarchical navigation chrome built on Ratatui:
//! a top navbar with hover dropdowns, a collapsible sidebar rail with
//! accordion groups and icon flyouts, an overlay drawer for narrow terminals
//! and a footer with link columns.
//!
//! ## Architecture
//!
//! Each surface is a component that handles events and renders itself from
//! state held on the central `App`. Components return `Effect`s; the
//! runtime applies them back onto the state and redraws when something
//! visibly changed.

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;

use navshell_menu::MenuConfig;

/// Runs the shell event loop until the user quits.
///
/// Takes the validated menu configuration and the route to show first.
/// Returns an error for terminal setup failures or event loop I/O errors;
/// the terminal is restored before this returns.
pub async fn run(config: Arc<MenuConfig>, initial_path: String) -> Result<()> {
    ui::runtime::run_app(config, initial_path).await
}
