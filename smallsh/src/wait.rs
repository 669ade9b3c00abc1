//! Reaping background children and waiting for the foreground child.
//!
//! Both loops poll with `WNOHANG | WUNTRACED` rather than blocking, per the
//! design note in SPEC_FULL.md §5/§9: a non-blocking poll loop is
//! observationally equivalent to a blocking wait for this shell's purposes,
//! and keeps the foreground and background paths symmetric. Grounded on
//! `examples/original_source/smallsh.c`'s reap-on-every-prompt loop and its
//! exact `WNOHANG | WUNTRACED` flag choice; `WCONTINUED` is deliberately not
//! added, to stay faithful to that original rather than broadening scope.

use std::thread::sleep;
use std::time::Duration;

use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use crate::diagnostics::report;

const POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Reaps any background children that are ready, printing a status line for
/// each to stderr, per SPEC_FULL.md §4.6.
pub fn reap_background_children() {
    loop {
        let flags = WaitPidFlag::WNOHANG | WaitPidFlag::WUNTRACED;
        match waitpid(None, Some(flags)) {
            Ok(WaitStatus::Exited(pid, code)) => {
                eprintln!("Child process {pid} done. Exit status {code}.");
            }
            Ok(WaitStatus::Signaled(pid, signal, _)) => {
                eprintln!("Child process {pid} done. Signaled {}.", signal as i32);
            }
            Ok(WaitStatus::Stopped(pid, _)) => {
                eprintln!("Child process {pid} stopped. Continuing.");
                let _ = nix::sys::signal::kill(pid, Signal::SIGCONT);
            }
            Ok(WaitStatus::StillAlive) | Err(_) => break,
            Ok(_) => continue,
        }
    }
}

/// What happened to a foreground child, translated into the form the main
/// loop needs to update `$?`.
pub enum ForegroundOutcome {
    Exited(i32),
    Signaled(i32),
    Stopped,
}

/// Waits for `pid`, the foreground child, polling non-blockingly until it
/// exits, is killed by a signal, or stops.
///
/// A stopped foreground child is reported and resumed with `SIGCONT`, then
/// treated as backgrounded by the caller (SPEC_FULL.md §6).
pub fn wait_foreground(pid: Pid) -> ForegroundOutcome {
    loop {
        let flags = WaitPidFlag::WNOHANG | WaitPidFlag::WUNTRACED;
        match waitpid(pid, Some(flags)) {
            Ok(WaitStatus::Exited(_, code)) => return ForegroundOutcome::Exited(code),
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                return ForegroundOutcome::Signaled(signal as i32);
            }
            Ok(WaitStatus::Stopped(_, _)) => {
                eprintln!("Child process {pid} stopped. Continuing.");
                let _ = nix::sys::signal::kill(pid, Signal::SIGCONT);
                return ForegroundOutcome::Stopped;
            }
            Ok(WaitStatus::StillAlive) => sleep(POLL_INTERVAL),
            Err(nix::Error::EINTR) => continue,
            Err(e) => {
                report("wait", e);
                return ForegroundOutcome::Exited(1);
            }
            Ok(_) => continue,
        }
    }
}
