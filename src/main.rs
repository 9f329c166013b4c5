//! Ghostie launcher entry point.

use std::process::ExitCode;

use ghostie::cli::{self, Invocation};
use ghostie::config::{Settings, LOG_ENV};
use ghostie::delegate::SystemLauncher;
use ghostie::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `GHOSTIE_LOG` environment variable (if set)
/// 2. Default is WARN
///
/// Logs go to stderr; stdout belongs to the delegated program.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("ghostie=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let invocation = Invocation::from_env();
    tracing::debug!("ghostie starting with args: {:?}", invocation.args());

    let mut ui = TerminalUI::new();
    let code = cli::run(&invocation, Settings::from_env, &SystemLauncher, &mut ui);

    ExitCode::from(cli::exit_byte(code))
}
