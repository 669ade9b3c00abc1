//! Launching a parsed command: fork, apply redirections, reset signals, exec.
//!
//! Grounded on `examples/magicant-yash-rs/yash-env/src/real_system.rs`'s
//! `fork`/`execve` pattern (`ForkResult::Parent`/`ForkResult::Child`) and on
//! `examples/original_source/smallsh.c`'s `parse`/child-side exec handling,
//! including its convention of exiting the child with the raw errno on
//! failure instead of propagating an error to the parent.

use std::ffi::CString;
use std::os::fd::AsRawFd;

use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::{dup2, execvp, fork, ForkResult, Pid};

use smallsh_syntax::{Command, RedirectionKind};

use crate::diagnostics::report;
use crate::signal::SavedDispositions;

/// Forks and execs `cmd` in the child. Returns the child's pid to the
/// caller; the child never returns from this function.
pub fn spawn(cmd: &Command, saved: Option<&SavedDispositions>) -> nix::Result<Pid> {
    match unsafe { fork()? } {
        ForkResult::Parent { child } => Ok(child),
        ForkResult::Child => {
            if let Some(saved) = saved {
                if let Err(e) = saved.restore() {
                    report("restoring signal disposition", e);
                    std::process::exit(1);
                }
            }
            run_child(cmd)
        }
    }
}

/// Applies redirections, then execs `cmd.argv[0]` with the rest as
/// arguments. Never returns: either exec succeeds, or the child exits with
/// the errno that caused the failure, per SPEC_FULL.md §4.5.
fn run_child(cmd: &Command) -> ! {
    if let Err(e) = apply_redirections(cmd) {
        report("redirection", e);
        std::process::exit(e as i32);
    }

    if cmd.argv.is_empty() {
        std::process::exit(0);
    }

    let argv: Vec<CString> = match cmd.argv.iter().map(|w| to_cstring(w)).collect() {
        Ok(argv) => argv,
        Err(_) => {
            report("exec", "argument contains a NUL byte");
            std::process::exit(1);
        }
    };

    // `execvp` only ever returns to report a failure; success replaces this
    // process image entirely.
    if let Err(e) = execvp(&argv[0], &argv) {
        report(
            format!("exec of '{}' failed", String::from_utf8_lossy(&cmd.argv[0])),
            e,
        );
        std::process::exit(e as i32);
    }
    unreachable!("execvp only returns on error");
}

fn to_cstring(word: &[u8]) -> Result<CString, std::ffi::NulError> {
    CString::new(word.to_vec())
}

/// Applies a command's redirection list, or (for a background command with
/// none of its own) redirects stdin from `/dev/null`, per
/// SPEC_FULL.md §4.4/§6.
fn apply_redirections(cmd: &Command) -> nix::Result<()> {
    if cmd.background && !cmd.redirections.iter().any(|r| r.kind == RedirectionKind::In) {
        redirect_dev_null_stdin()?;
    }
    for redirection in &cmd.redirections {
        apply_one(redirection)?;
    }
    Ok(())
}

fn redirect_dev_null_stdin() -> nix::Result<()> {
    let fd = open("/dev/null", OFlag::O_RDONLY, Mode::empty())?;
    dup2(fd.as_raw_fd(), 0)?;
    Ok(())
}

fn apply_one(redirection: &smallsh_syntax::Redirection) -> nix::Result<()> {
    let path = CString::new(redirection.path.clone()).map_err(|_| nix::Error::EINVAL)?;
    let (flags, target_fd) = match redirection.kind {
        RedirectionKind::In => (OFlag::O_RDONLY, 0),
        RedirectionKind::OutTruncate => (OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC, 1),
        RedirectionKind::OutAppend => (OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_APPEND, 1),
    };
    let mode = Mode::from_bits_truncate(0o777);
    let fd = open(path.as_c_str(), flags, mode)?;
    dup2(fd.as_raw_fd(), target_fd)?;
    Ok(())
}
