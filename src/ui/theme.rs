//! Visual theme and styling.

use console::Style;

/// Ghostie's visual theme.
#[derive(Debug, Clone)]
pub struct GhostieTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for contextual hints (magenta).
    pub hint: Style,
}

impl Default for GhostieTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostieTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            hint: Style::new().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("❌ {}", msg)))
    }

    /// Format a hint (indented, magenta).
    pub fn format_hint(&self, msg: &str) -> String {
        format!("   {}", self.hint.apply_to(msg))
    }
}

/// Check if colors should be enabled for standard error.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
