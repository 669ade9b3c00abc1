//! Signal discipline.
//!
//! An interactive shell ignores `SIGINT` and `SIGTSTP` so a stray Ctrl-C or
//! Ctrl-Z doesn't kill the shell itself (SPEC_FULL.md §7.2). A forked child
//! must restore the pre-shell dispositions before it execs, so that the
//! program it runs sees ordinary signal behavior, grounded on the
//! ignore-then-restore pattern in
//! `examples/original_source/smallsh.c`'s `main`/`parse` signal handling and
//! on `yash-env/src/real_system.rs`'s direct `nix::sys::signal` usage.

use nix::sys::signal::{self, SigAction, SigHandler, SaFlags, SigSet, Signal};

/// The pre-shell dispositions of `SIGINT` and `SIGTSTP`, saved so a forked
/// child can restore them before exec.
#[derive(Debug, Clone, Copy)]
pub struct SavedDispositions {
    sigint: SigAction,
    sigtstp: SigAction,
}

/// Installs `SIG_IGN` for `SIGINT` and `SIGTSTP`, returning what was there
/// before so a child can put it back.
///
/// # Safety note
/// `sigaction` is `unsafe` because installing a handler can interact badly
/// with code that isn't signal-safe; `SIG_IGN` itself has no such hazard.
pub fn ignore_interactive_signals() -> nix::Result<SavedDispositions> {
    let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
    let sigint = unsafe { signal::sigaction(Signal::SIGINT, &ignore)? };
    let sigtstp = unsafe { signal::sigaction(Signal::SIGTSTP, &ignore)? };
    Ok(SavedDispositions { sigint, sigtstp })
}

impl SavedDispositions {
    /// Restores the saved dispositions, intended to run in a forked child
    /// just before it execs.
    pub fn restore(&self) -> nix::Result<()> {
        unsafe {
            signal::sigaction(Signal::SIGINT, &self.sigint)?;
            signal::sigaction(Signal::SIGTSTP, &self.sigtstp)?;
        }
        Ok(())
    }
}
