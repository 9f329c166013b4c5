//! Operating environment detection and interpreter install hints.
//!
//! When the interpreter probe fails the launcher tells the user how to get
//! Python on their system. [`Platform::detect`] picks the environment the
//! launcher runs in so its hint is listed first; [`install_hints`] always
//! returns hints for every supported environment.

pub mod detection;
pub mod hints;

pub use detection::Platform;
pub use hints::{install_hints, InstallHint};
