//! Ghostie - launcher for the Ghost in the Shell personality loader.
//!
//! The `ghostie` binary is installation glue: it finds the `ghostie` script
//! shipped next to it, checks that Python 3 is installed, and runs the script
//! with every argument forwarded unchanged. The child's exit code becomes the
//! launcher's, and SIGINT/SIGTERM sent to the launcher are passed on.
//!
//! # Modules
//!
//! - [`cli`] - Argument capture, usage text, and the top-level flow
//! - [`config`] - Settings from the install layout and environment overrides
//! - [`delegate`] - The delegation session, process launching, signal relay
//! - [`environment`] - Platform detection and interpreter install hints
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use ghostie::cli::Invocation;
//!
//! let invocation = Invocation::new(["--remember", "-h"]);
//! assert!(invocation.wants_help());
//! ```

pub mod cli;
pub mod config;
pub mod delegate;
pub mod environment;
pub mod error;
pub mod ui;

pub use error::{GhostieError, Result};
