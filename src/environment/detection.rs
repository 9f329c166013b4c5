//! Built-in platform detection.
//!
//! Detects Termux by checking well-known environment variables, and
//! otherwise falls back to the compile-time target OS.

/// Operating environment the launcher runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Termux on Android.
    Termux,
    /// Debian, Ubuntu and other Linux distributions.
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    /// Every platform, in the order hints are listed by default.
    pub const ALL: [Platform; 4] = [
        Platform::Termux,
        Platform::Linux,
        Platform::MacOS,
        Platform::Windows,
    ];

    /// Detect the current platform.
    pub fn detect() -> Self {
        Self::detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        if is_termux(&env_fn) {
            return Platform::Termux;
        }

        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Human-readable label used in hints.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Termux => "Termux",
            Platform::Linux => "Ubuntu/Debian",
            Platform::MacOS => "macOS",
            Platform::Windows => "Windows",
        }
    }
}

fn is_termux<F>(env_fn: &F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if env_fn("TERMUX_VERSION").is_ok() {
        return true;
    }
    env_fn("PREFIX")
        .map(|prefix| prefix.contains("com.termux"))
        .unwrap_or(false)
}
