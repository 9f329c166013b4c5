//! Delegation session lifecycle.

use std::fmt;

/// Where a delegation session is in its lifecycle.
///
/// ```text
/// Idle ──> Probing ──> Spawning ──> Running ──> Exited(code)
///   │         │           │
///   └─────────┴───────────┴──────────────────> Exited(1)
/// ```
///
/// `Idle` exits early when the target is missing, `Probing` when the
/// runtime is unavailable, `Spawning` when the launch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Probing,
    Spawning,
    Running,
    Exited(i32),
}

impl SessionState {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (*self, next),
            (Idle, Probing)
                | (Probing, Spawning)
                | (Spawning, Running)
                | (Idle | Probing | Spawning | Running, Exited(_))
        )
    }

    /// Whether the session has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Exited(_))
    }

    /// Exit status, once the session has finished.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            SessionState::Exited(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Probing => write!(f, "probing"),
            SessionState::Spawning => write!(f, "spawning"),
            SessionState::Running => write!(f, "running"),
            SessionState::Exited(code) => write!(f, "exited({})", code),
        }
    }
}
