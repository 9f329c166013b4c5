//! Terminal output for the launcher.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled text to the real terminal
//! - [`MockUI`] capturing output for tests
//!
//! The launcher says very little: usage text on stdout, and on failure an
//! error line followed by hints on stderr. Once the child is running all
//! output belongs to the child.
//!
//! # Example
//!
//! ```
//! use ghostie::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("Python 3 is required but not found in PATH");
//! ui.hint("On macOS: brew install python3");
//!
//! assert!(ui.has_error("Python 3"));
//! assert!(ui.has_hint("brew"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, GhostieTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message on standard output.
    fn message(&mut self, msg: &str);

    /// Display an error message on standard error.
    fn error(&mut self, msg: &str);

    /// Display a follow-up hint on standard error.
    fn hint(&mut self, msg: &str);
}
