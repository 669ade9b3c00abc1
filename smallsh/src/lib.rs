//! A small interactive POSIX-like shell.
//!
//! The pure word-splitting/expansion/parsing logic lives in the
//! `smallsh-syntax` crate; this crate is the OS-facing half: reading input,
//! shell state, builtins, signal discipline, and process launch/reaping,
//! following the `yash-syntax`/`yash-env` split in
//! `examples/magicant-yash-rs` (SPEC_FULL.md §10.1).

pub mod builtin;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod process;
pub mod shell;
pub mod signal;
pub mod startup;
pub mod wait;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::os::unix::ffi::OsStrExt;

use smallsh_syntax::{expand_word, parse, split_words};

use diagnostics::{report, report_message};
use error::StartupError;
use input::InputEvent;
use shell::Shell;
use signal::SavedDispositions;
use startup::Source;
use wait::ForegroundOutcome;

/// Runs the shell to completion and returns the process exit status.
pub fn run(args: &[String]) -> i32 {
    let source = match startup::parse_args(args) {
        Ok(source) => source,
        Err(e) => {
            report_message(e);
            return 1;
        }
    };

    let mut reader: Box<dyn BufRead> = match &source {
        Source::Stdin => Box::new(BufReader::new(std::io::stdin())),
        Source::File(path) => match File::open(path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                report_message(StartupError::OpenInput {
                    path: path.clone(),
                    source: e,
                });
                return 1;
            }
        },
    };

    let mut shell = Shell::new(nix::unistd::getpid());
    let interactive = source.is_interactive();

    let saved_signals = if interactive {
        match signal::ignore_interactive_signals() {
            Ok(saved) => Some(saved),
            Err(e) => {
                report("installing signal handlers", e);
                return 1;
            }
        }
    } else {
        None
    };

    loop {
        wait::reap_background_children();

        if interactive {
            use std::io::Write as _;
            let prompt = std::env::var("PS1").unwrap_or_else(|_| "$".to_string());
            eprint!("{prompt}");
            let _ = std::io::stderr().flush();
        }

        match input::read_line(&mut reader) {
            InputEvent::Interrupted => {
                eprintln!();
                continue;
            }
            InputEvent::Eof => return shell.status(),
            InputEvent::Line(line) => {
                if let Some(code) = process_line(&mut shell, &line, saved_signals.as_ref()) {
                    return code;
                }
            }
        }
    }
}

/// Runs one input line through the full pipeline, returning `Some(code)` if
/// the shell should exit.
fn process_line(
    shell: &mut Shell,
    line: &str,
    saved_signals: Option<&SavedDispositions>,
) -> Option<i32> {
    let words = split_words(line.as_bytes());
    if words.is_empty() {
        return None;
    }

    let params = shell.as_special_params();
    let expanded: Vec<Vec<u8>> = words
        .into_iter()
        .map(|w| expand_word(&w, params, lookup_env))
        .collect();

    if let Some(outcome) = builtin::dispatch(shell, &expanded) {
        return match outcome {
            builtin::BuiltinOutcome::Exit(code) => Some(code),
            builtin::BuiltinOutcome::Handled => None,
        };
    }

    let command = match parse(expanded) {
        Ok(command) => command,
        Err(e) => {
            report_message(e);
            shell.set_status(1);
            return None;
        }
    };

    match process::spawn(&command, saved_signals) {
        Ok(pid) => {
            if command.background {
                shell.set_bgpid(pid);
            } else {
                match wait::wait_foreground(pid) {
                    ForegroundOutcome::Exited(code) => shell.set_status(code),
                    ForegroundOutcome::Signaled(signum) => shell.set_status(128 + signum),
                    ForegroundOutcome::Stopped => shell.set_bgpid(pid),
                }
            }
        }
        Err(e) => {
            report("fork", e);
            shell.set_status(1);
        }
    }

    None
}

fn lookup_env(name: &[u8]) -> Option<Vec<u8>> {
    std::env::var_os(OsStr::from_bytes(name)).map(|v| v.as_bytes().to_vec())
}
