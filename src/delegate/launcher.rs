//! Real process launching.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use super::{signals, ChildHandle, ProcessLauncher};

/// Launches processes with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn probe(&self, runtime: &OsStr) -> bool {
        let status = Command::new(runtime)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                tracing::debug!(runtime = ?runtime, ?status, "runtime probe exited");
                status.success()
            }
            Err(err) => {
                tracing::debug!(runtime = ?runtime, error = %err, "runtime probe failed to start");
                false
            }
        }
    }

    fn spawn(&self, runtime: &OsStr, args: &[OsString]) -> io::Result<Box<dyn ChildHandle>> {
        // Handlers go in before the spawn so a signal arriving while the
        // child starts is not fatal to the launcher.
        signals::install();

        let child = Command::new(runtime)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        signals::track(child.id());
        Ok(Box::new(SystemChild { child }))
    }
}

struct SystemChild {
    child: Child,
}

impl ChildHandle for SystemChild {
    fn id(&self) -> u32 {
        self.child.id()
    }

    fn wait(&mut self) -> io::Result<Option<i32>> {
        let status = self.child.wait();
        signals::untrack();
        Ok(status?.code())
    }
}

/// Give the target script `rwxr-xr-x` permissions.
///
/// The interpreter does not need the executable bit, so callers treat any
/// error as non-fatal.
#[cfg(unix)]
pub fn ensure_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    if permissions.mode() & 0o777 == 0o755 {
        return Ok(());
    }
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn ensure_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
