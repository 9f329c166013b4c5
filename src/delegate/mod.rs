//! Process delegation.
//!
//! A delegation session runs the target script under the interpreter and
//! relays the outcome:
//! - [`Delegator`] drives one session through its [`SessionState`]s
//! - [`ProcessLauncher`] is the capability the delegator needs from the OS,
//!   implemented for real by [`SystemLauncher`]
//! - [`signals`] forwards SIGINT/SIGTERM from the launcher to the child
//!
//! # Example
//!
//! ```no_run
//! use ghostie::config::{DelegatorConfig, Settings};
//! use ghostie::delegate::{Delegator, SystemLauncher};
//!
//! let settings = Settings::from_env().unwrap();
//! let config = DelegatorConfig::new(&settings, vec!["--tools".into()]);
//! let code = Delegator::new(config, &SystemLauncher).run().unwrap_or(1);
//! std::process::exit(code);
//! ```

pub mod delegator;
pub mod launcher;
pub mod signals;
pub mod state;

pub use delegator::Delegator;
pub use launcher::{ensure_executable, SystemLauncher};
pub use state::SessionState;

use std::ffi::{OsStr, OsString};
use std::io;

/// Operating-system capabilities a [`Delegator`] depends on.
///
/// Tests substitute a fake so the control flow runs without real processes.
pub trait ProcessLauncher {
    /// Check that `runtime` can be invoked (`<runtime> --version` exits 0).
    ///
    /// Never fails: a runtime that cannot be launched is simply unavailable.
    fn probe(&self, runtime: &OsStr) -> bool;

    /// Start `runtime` with `args`, standard streams inherited.
    fn spawn(&self, runtime: &OsStr, args: &[OsString]) -> io::Result<Box<dyn ChildHandle>>;
}

/// Handle for a running child process.
pub trait ChildHandle {
    /// OS process id.
    fn id(&self) -> u32;

    /// Block until the child exits.
    ///
    /// Returns the exit code, or `None` when the child ended without one
    /// (terminated by a signal).
    fn wait(&mut self) -> io::Result<Option<i32>>;
}
