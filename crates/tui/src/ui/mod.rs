//! UI rendering module for the navigation shell.
//!
//! Layout arithmetic, theme styling, the shell surfaces and the event loop
//! live here.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
