//! Builtin command dispatch: `exit` and `cd`.
//!
//! Builtins are matched against `argv[0]` before redirection parsing or
//! forking (SPEC_FULL.md §4.3) and run in-process, grounded on
//! `examples/original_source/smallsh.c`'s `inBuiltIn`/builtin-handling block
//! and on the option-validation style of
//! `examples/magicant-yash-rs/yash-builtin/src/exit.rs` and `cd.rs` (argument
//! counting, one clear diagnostic per failure mode), simplified to this
//! shell's narrower two-builtin surface.

use std::env;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use crate::diagnostics::report_message;
use crate::shell::Shell;

/// What a builtin did: either it ran in-process and the main loop should
/// continue, or the shell should exit with the given status.
pub enum BuiltinOutcome {
    Handled,
    Exit(i32),
}

/// Checks whether `argv[0]` names a builtin, and if so, runs it.
pub fn dispatch(shell: &mut Shell, argv: &[Vec<u8>]) -> Option<BuiltinOutcome> {
    match argv.first().map(Vec::as_slice) {
        Some(b"exit") => Some(exit(shell, &argv[1..])),
        Some(b"cd") => Some(cd(shell, &argv[1..])),
        _ => None,
    }
}

fn exit(shell: &mut Shell, args: &[Vec<u8>]) -> BuiltinOutcome {
    match args {
        [] => BuiltinOutcome::Exit(shell.status()),
        [code] => match parse_exit_code(code) {
            Some(code) => BuiltinOutcome::Exit(code),
            None => {
                report_message(format!(
                    "exit: {}: numeric argument required",
                    String::from_utf8_lossy(code)
                ));
                shell.set_status(1);
                BuiltinOutcome::Handled
            }
        },
        _ => {
            report_message("exit: too many arguments");
            shell.set_status(1);
            BuiltinOutcome::Handled
        }
    }
}

/// Parses an `exit` argument into an exit code. An empty argument is
/// rejected rather than treated as zero (SPEC_FULL.md §9, resolving the
/// original's open question explicitly).
fn parse_exit_code(word: &[u8]) -> Option<i32> {
    if word.is_empty() {
        return None;
    }
    std::str::from_utf8(word).ok()?.parse().ok()
}

fn cd(shell: &mut Shell, args: &[Vec<u8>]) -> BuiltinOutcome {
    let target = match args {
        [] => env::var_os("HOME"),
        [path] => Some(OsStr::from_bytes(path).to_os_string()),
        _ => {
            report_message("cd: too many arguments");
            shell.set_status(1);
            return BuiltinOutcome::Handled;
        }
    };

    let Some(target) = target else {
        report_message("cd: HOME not set");
        shell.set_status(1);
        return BuiltinOutcome::Handled;
    };

    match env::set_current_dir(&target) {
        Ok(()) => BuiltinOutcome::Handled,
        Err(e) => {
            report_message(format!("cd: {}: {e}", target.to_string_lossy()));
            shell.set_status(1);
            BuiltinOutcome::Handled
        }
    }
}
