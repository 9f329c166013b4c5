//! Interpreter install hints.

use super::detection::Platform;

/// How to install the interpreter on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallHint {
    pub platform: Platform,
    pub command: &'static str,
}

impl InstallHint {
    /// One display line, e.g. `On macOS: brew install python3`.
    pub fn line(&self) -> String {
        format!("On {}: {}", self.platform.label(), self.command)
    }
}

fn install_command(platform: Platform) -> &'static str {
    match platform {
        Platform::Termux => "pkg install python",
        Platform::Linux => "apt install python3",
        Platform::MacOS => "brew install python3",
        Platform::Windows => "winget install Python.Python.3",
    }
}

/// Install hints for every platform, with `current` first.
pub fn install_hints(current: Platform) -> Vec<InstallHint> {
    std::iter::once(current)
        .chain(Platform::ALL.into_iter().filter(|p| *p != current))
        .map(|platform| InstallHint {
            platform,
            command: install_command(platform),
        })
        .collect()
}
