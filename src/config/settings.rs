//! Settings resolved from the install layout and the environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the delegated script, relative to the package root.
pub const SCRIPT_NAME: &str = "ghostie";

/// Interpreter used when `GHOSTIE_PYTHON` is not set.
pub const DEFAULT_RUNTIME: &str = "python3";

/// Overrides the target script path.
pub const SCRIPT_ENV: &str = "GHOSTIE_SCRIPT";

/// Overrides the interpreter.
pub const RUNTIME_ENV: &str = "GHOSTIE_PYTHON";

/// Tracing filter for the launcher's own diagnostics.
pub const LOG_ENV: &str = "GHOSTIE_LOG";

/// Paths and programs the launcher works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Script handed to the interpreter as its first argument.
    pub script: PathBuf,

    /// Interpreter executable, looked up on PATH when not absolute.
    pub runtime: OsString,
}

impl Settings {
    /// Resolve settings from the running executable and process environment.
    pub fn from_env() -> Result<Self> {
        let exe = std::env::current_exe()?;
        // Package managers link the launcher into a shared bin directory;
        // the layout that matters is the one next to the real file.
        let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
        Ok(Self::from_env_with(&exe, |key: &str| std::env::var(key)))
    }

    /// Resolve settings with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_with<F>(exe: &Path, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let script = match non_empty(&env_fn, SCRIPT_ENV) {
            Some(path) => PathBuf::from(path),
            None => resolve_target_path(exe),
        };
        let runtime = non_empty(&env_fn, RUNTIME_ENV)
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_RUNTIME));

        Self { script, runtime }
    }

    /// Interpreter name for messages.
    pub fn runtime_name(&self) -> String {
        self.runtime.to_string_lossy().into_owned()
    }
}

fn non_empty<F>(env_fn: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    env_fn(key).ok().filter(|value| !value.trim().is_empty())
}

/// Compute the target script location for a launcher at `exe`.
///
/// The launcher lives in `<root>/bin/`; the script is `<root>/ghostie`.
pub fn resolve_target_path(exe: &Path) -> PathBuf {
    let bin_dir = exe.parent().unwrap_or(exe);
    let root = bin_dir.parent().unwrap_or(bin_dir);
    root.join(SCRIPT_NAME)
}

/// Everything a [`Delegator`](crate::delegate::Delegator) needs for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatorConfig {
    /// Resolved target script.
    pub script: PathBuf,

    /// Interpreter executable.
    pub runtime: OsString,

    /// Arguments forwarded after the script path, in original order.
    pub args: Vec<OsString>,
}

impl DelegatorConfig {
    /// Build a session config from resolved settings and forwarded arguments.
    pub fn new(settings: &Settings, args: Vec<OsString>) -> Self {
        Self {
            script: settings.script.clone(),
            runtime: settings.runtime.clone(),
            args,
        }
    }

    /// Interpreter name for messages.
    pub fn runtime_name(&self) -> String {
        self.runtime.to_string_lossy().into_owned()
    }

    /// Full argument vector handed to the interpreter: the script, then the
    /// forwarded arguments unchanged.
    pub fn launch_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.script.clone().into_os_string());
        args.extend(self.args.iter().cloned());
        args
    }
}
