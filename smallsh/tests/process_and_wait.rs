//! Integration tests exercising real fork/exec/wait against the system's
//! `/bin/true`, `/bin/false`, and `/bin/cat`, since the process-launch and
//! reaping logic is only meaningful against real child processes.

use smallsh::process;
use smallsh::wait::{self, ForegroundOutcome};
use smallsh_syntax::{Redirection, RedirectionKind};

fn cmd(argv: &[&str]) -> smallsh_syntax::Command {
    smallsh_syntax::Command {
        argv: argv.iter().map(|s| s.as_bytes().to_vec()).collect(),
        background: false,
        redirections: Vec::new(),
    }
}

#[test]
fn true_exits_zero() {
    let command = cmd(&["/bin/true"]);
    let pid = process::spawn(&command, None).expect("fork failed");
    match wait::wait_foreground(pid) {
        ForegroundOutcome::Exited(code) => assert_eq!(code, 0),
        _ => panic!("expected a clean exit"),
    }
}

#[test]
fn false_exits_nonzero() {
    let command = cmd(&["/bin/false"]);
    let pid = process::spawn(&command, None).expect("fork failed");
    match wait::wait_foreground(pid) {
        ForegroundOutcome::Exited(code) => assert_eq!(code, 1),
        _ => panic!("expected a nonzero exit"),
    }
}

#[test]
fn exec_failure_exits_with_errno() {
    let command = cmd(&["/no/such/executable/at/all"]);
    let pid = process::spawn(&command, None).expect("fork failed");
    match wait::wait_foreground(pid) {
        ForegroundOutcome::Exited(code) => assert_eq!(code, libc::ENOENT),
        _ => panic!("expected an exit carrying the exec errno"),
    }
}

#[test]
fn output_redirection_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");

    let mut command = cmd(&["/bin/echo", "hello"]);
    command.redirections.push(Redirection {
        kind: RedirectionKind::OutTruncate,
        path: out_path.to_str().unwrap().as_bytes().to_vec(),
    });

    let pid = process::spawn(&command, None).expect("fork failed");
    match wait::wait_foreground(pid) {
        ForegroundOutcome::Exited(code) => assert_eq!(code, 0),
        _ => panic!("expected a clean exit"),
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents, "hello\n");
}

#[test]
fn append_redirection_does_not_truncate_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");
    std::fs::write(&out_path, "first\n").unwrap();

    let mut command = cmd(&["/bin/echo", "second"]);
    command.redirections.push(Redirection {
        kind: RedirectionKind::OutAppend,
        path: out_path.to_str().unwrap().as_bytes().to_vec(),
    });

    let pid = process::spawn(&command, None).expect("fork failed");
    wait::wait_foreground(pid);

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents, "first\nsecond\n");
}

#[test]
fn input_redirection_feeds_stdin_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("in.txt");
    let out_path = dir.path().join("out.txt");
    std::fs::write(&in_path, "piped content\n").unwrap();

    let mut command = cmd(&["/bin/cat"]);
    command.redirections.push(Redirection {
        kind: RedirectionKind::In,
        path: in_path.to_str().unwrap().as_bytes().to_vec(),
    });
    command.redirections.push(Redirection {
        kind: RedirectionKind::OutTruncate,
        path: out_path.to_str().unwrap().as_bytes().to_vec(),
    });

    let pid = process::spawn(&command, None).expect("fork failed");
    wait::wait_foreground(pid);

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents, "piped content\n");
}

#[test]
fn reap_background_children_does_not_block_when_none_are_ready() {
    // With no background children registered, this must return promptly
    // rather than hang waiting for one.
    wait::reap_background_children();
}
