//! nexus-tui - Terminal UI for Nexus Builder
//!
//! Wraps the Engine from nexus-app with crossterm event polling, ratatui
//! rendering and the widgets for each view.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
