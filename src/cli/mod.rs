//! Command-line interface.
//!
//! [`run`] is the whole launcher: answer `--help`, otherwise resolve
//! settings, drive a [`Delegator`] session and report failures.

pub mod args;
pub mod help;

pub use args::{Invocation, HELP_FLAGS};
pub use help::USAGE;

use crate::config::{DelegatorConfig, Settings};
use crate::delegate::{Delegator, ProcessLauncher};
use crate::environment::{install_hints, Platform};
use crate::error::{GhostieError, Result};
use crate::ui::UserInterface;

/// Run the launcher and return its exit status.
///
/// `settings` is only called once help has been ruled out, so `--help`
/// works even when the install layout is broken.
pub fn run<L, S>(
    invocation: &Invocation,
    settings: S,
    launcher: &L,
    ui: &mut dyn UserInterface,
) -> i32
where
    L: ProcessLauncher + ?Sized,
    S: FnOnce() -> Result<Settings>,
{
    if invocation.wants_help() {
        ui.message(USAGE);
        return 0;
    }

    let settings = match settings() {
        Ok(settings) => settings,
        Err(err) => {
            report(&err, ui);
            return err.exit_code();
        }
    };

    let config = DelegatorConfig::new(&settings, invocation.args().to_vec());
    match Delegator::new(config, launcher).run() {
        Ok(code) => code,
        Err(err) => {
            report(&err, ui);
            err.exit_code()
        }
    }
}

/// Print a fatal error and what the user can do about it.
pub fn report(err: &GhostieError, ui: &mut dyn UserInterface) {
    tracing::debug!(error = ?err, "delegation failed");
    ui.error(&err.to_string());

    match err {
        GhostieError::TargetNotFound { .. } => {
            ui.hint("📍 Try reinstalling the package or check the installation.");
        }
        GhostieError::RuntimeUnavailable { .. } => {
            ui.hint("📦 Please install Python 3 to use ghostie");
            for hint in install_hints(Platform::detect()) {
                ui.hint(&hint.line());
            }
        }
        _ => {}
    }
}

/// Convert an exit status to the byte the OS reports.
///
/// Statuses outside `0..=255` only occur on Windows and map to 1.
pub fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
