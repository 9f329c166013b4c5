//! Command-line capture.
//!
//! The launcher does not parse its arguments: everything is handed to the
//! target program untouched. The only flags it reacts to are `--help` and
//! `-h`, wherever they appear.

use std::ffi::OsString;

/// Flags the launcher answers itself.
pub const HELP_FLAGS: [&str; 2] = ["--help", "-h"];

/// Arguments the launcher was invoked with, program name excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<OsString>,
}

impl Invocation {
    /// Capture the current process's arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os().skip(1))
    }

    /// Build an invocation from explicit arguments.
    pub fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments in original order.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Consume the invocation, returning its arguments.
    pub fn into_args(self) -> Vec<OsString> {
        self.args
    }

    /// Whether `--help` or `-h` appears anywhere.
    pub fn wants_help(&self) -> bool {
        self.args
            .iter()
            .any(|arg| HELP_FLAGS.iter().any(|flag| arg == flag))
    }
}
