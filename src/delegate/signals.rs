//! Forwarding of interrupt and termination signals to the child.
//!
//! The launcher installs handlers for SIGINT and SIGTERM once per process.
//! While a child is tracked, a received signal is re-sent to it with
//! `kill(2)` and the launcher keeps waiting; the child decides what the
//! signal means. A signal that lands after the handlers are installed but
//! before the child's pid is known is held and sent as soon as the pid is
//! tracked. Once the child has been reaped, signals are dropped.
//!
//! On non-unix targets these functions are no-ops: console control events
//! already reach every process attached to the console.

#[cfg(unix)]
mod imp {
    use std::io;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    /// Signals relayed to the child.
    pub const FORWARDED: [libc::c_int; 2] = [libc::SIGINT, libc::SIGTERM];

    /// No child spawned yet; signals are held in `PENDING`.
    const NOT_STARTED: i32 = 0;
    /// Child reaped; signals are dropped.
    const REAPED: i32 = -1;

    static CHILD_PID: AtomicI32 = AtomicI32::new(NOT_STARTED);
    static PENDING: AtomicI32 = AtomicI32::new(0);
    static INSTALL: Once = Once::new();

    fn send(pid: i32, signal: libc::c_int) {
        // SAFETY: kill(2) is async-signal-safe and pid names our own child.
        unsafe {
            libc::kill(pid, signal);
        }
    }

    extern "C" fn forward(signal: libc::c_int) {
        match CHILD_PID.load(Ordering::SeqCst) {
            pid if pid > 0 => send(pid, signal),
            NOT_STARTED => PENDING.store(signal, Ordering::SeqCst),
            _ => {}
        }
    }

    fn install_one(signal: libc::c_int) -> io::Result<()> {
        // SAFETY: a zeroed sigaction is a valid starting value; the handler
        // only touches an atomic and calls kill(2).
        unsafe {
            let mut action: libc::sigaction = std::mem::zeroed();
            action.sa_sigaction = forward as extern "C" fn(libc::c_int) as libc::sighandler_t;
            action.sa_flags = libc::SA_RESTART;
            libc::sigemptyset(&mut action.sa_mask);
            if libc::sigaction(signal, &action, std::ptr::null_mut()) != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }

    /// Install the forwarding handlers. Later calls do nothing.
    pub fn install() {
        INSTALL.call_once(|| {
            for signal in FORWARDED {
                if let Err(err) = install_one(signal) {
                    tracing::warn!(signal, error = %err, "failed to install signal handler");
                }
            }
        });
    }

    /// Start forwarding to `pid`, first delivering any signal that arrived
    /// while the child was being spawned.
    pub fn track(pid: u32) {
        let Ok(pid) = i32::try_from(pid) else {
            return;
        };
        CHILD_PID.store(pid, Ordering::SeqCst);
        // A signal landing after the store goes straight to the child, one
        // landing before it is picked up here.
        let pending = PENDING.swap(0, Ordering::SeqCst);
        if pending > 0 {
            tracing::debug!(signal = pending, pid, "delivering held signal");
            send(pid, pending);
        }
    }

    /// Stop forwarding. Called once the child has been reaped so a recycled
    /// pid is never signalled.
    pub fn untrack() {
        CHILD_PID.store(REAPED, Ordering::SeqCst);
        PENDING.store(0, Ordering::SeqCst);
    }

    /// The pid signals are currently forwarded to.
    pub fn tracked() -> Option<u32> {
        match CHILD_PID.load(Ordering::SeqCst) {
            pid if pid > 0 => Some(pid as u32),
            _ => None,
        }
    }
}

#[cfg(not(unix))]
mod imp {
    pub fn install() {}

    pub fn track(_pid: u32) {}

    pub fn untrack() {}

    pub fn tracked() -> Option<u32> {
        None
    }
}

pub use imp::*;
