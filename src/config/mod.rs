//! Launcher configuration.
//!
//! Everything the launcher needs to know about its surroundings is resolved
//! once, up front, into plain values:
//! - [`Settings`] holds the target script path and the interpreter to use
//! - [`DelegatorConfig`] adds the forwarded arguments and is handed to the
//!   [`Delegator`](crate::delegate::Delegator)
//!
//! # Environment Overrides
//!
//! - `GHOSTIE_SCRIPT` replaces the script path derived from the install layout
//! - `GHOSTIE_PYTHON` replaces the `python3` interpreter
//! - `GHOSTIE_LOG` sets the tracing filter (read in `main`)
//!
//! # Example
//!
//! ```
//! use ghostie::config::{DelegatorConfig, Settings};
//! use std::path::Path;
//!
//! let settings = Settings::from_env_with(
//!     Path::new("/opt/ghostie/bin/ghostie"),
//!     |_| Err(std::env::VarError::NotPresent),
//! );
//! assert_eq!(settings.script, Path::new("/opt/ghostie/ghostie"));
//!
//! let config = DelegatorConfig::new(&settings, vec!["--tools".into()]);
//! assert_eq!(config.args.len(), 1);
//! ```

pub mod settings;

pub use settings::{
    resolve_target_path, DelegatorConfig, Settings, DEFAULT_RUNTIME, LOG_ENV, RUNTIME_ENV,
    SCRIPT_ENV, SCRIPT_NAME,
};
