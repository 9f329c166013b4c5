//! The delegation session driver.

use std::path::Path;

use crate::config::DelegatorConfig;
use crate::error::{GhostieError, Result};

use super::launcher::ensure_executable;
use super::{ProcessLauncher, SessionState};

/// Runs one delegation session.
///
/// The delegator owns its configuration and borrows a [`ProcessLauncher`];
/// it never reads process arguments or environment itself.
pub struct Delegator<'a, L: ProcessLauncher + ?Sized> {
    config: DelegatorConfig,
    launcher: &'a L,
    state: SessionState,
}

impl<'a, L: ProcessLauncher + ?Sized> Delegator<'a, L> {
    /// Create a new delegator in the `Idle` state.
    pub fn new(config: DelegatorConfig, launcher: &'a L) -> Self {
        Self {
            config,
            launcher,
            state: SessionState::Idle,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Session configuration.
    pub fn config(&self) -> &DelegatorConfig {
        &self.config
    }

    /// Run the session to completion.
    ///
    /// Returns the child's exit code (0 when it has none), or the error that
    /// ended the session before or during the launch. Either way the session
    /// finishes in `Exited`.
    pub fn run(&mut self) -> Result<i32> {
        if self.state != SessionState::Idle {
            return Err(anyhow::anyhow!("delegation session already {}", self.state).into());
        }

        let result = self.drive();
        let code = match &result {
            Ok(code) => *code,
            Err(err) => err.exit_code(),
        };
        self.transition(SessionState::Exited(code));
        result
    }

    fn drive(&mut self) -> Result<i32> {
        self.resolve_target()?;

        self.transition(SessionState::Probing);
        if !self.check_runtime_available() {
            return Err(GhostieError::RuntimeUnavailable {
                runtime: self.config.runtime_name(),
            });
        }

        self.transition(SessionState::Spawning);
        self.ensure_target_executable();
        self.delegate()
    }

    /// Confirm the target script exists.
    pub fn resolve_target(&self) -> Result<&Path> {
        let script = self.config.script.as_path();
        if !script.exists() {
            tracing::debug!(path = %script.display(), "target script missing");
            return Err(GhostieError::TargetNotFound {
                path: script.to_path_buf(),
            });
        }
        Ok(script)
    }

    /// Ask the launcher whether the interpreter can be invoked.
    pub fn check_runtime_available(&self) -> bool {
        let available = self.launcher.probe(&self.config.runtime);
        tracing::debug!(
            runtime = %self.config.runtime_name(),
            available,
            "runtime probe finished"
        );
        available
    }

    fn ensure_target_executable(&self) {
        if let Err(err) = ensure_executable(&self.config.script) {
            tracing::debug!(
                path = %self.config.script.display(),
                error = %err,
                "could not mark target executable"
            );
        }
    }

    fn delegate(&mut self) -> Result<i32> {
        let args = self.config.launch_args();
        let mut child = self
            .launcher
            .spawn(&self.config.runtime, &args)
            .map_err(|source| GhostieError::Spawn {
                runtime: self.config.runtime_name(),
                source,
            })?;

        self.transition(SessionState::Running);
        tracing::debug!(pid = child.id(), args = ?args, "target running");

        let code = child.wait()?;
        tracing::debug!(?code, "target exited");
        Ok(code.unwrap_or(0))
    }

    fn transition(&mut self, next: SessionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal session transition {} -> {}",
            self.state,
            next
        );
        tracing::trace!(from = %self.state, to = %next, "session transition");
        self.state = next;
    }
}
