//! Centralized `smallsh: ...` diagnostic formatting.
//!
//! This codebase doesn't pull in a structured-logging crate for its
//! interactive front end (see SPEC_FULL.md §10.3); instead every call site
//! goes through one of these two helpers so diagnostics always take the same
//! shape rather than accumulating ad hoc `eprintln!` strings.

use std::fmt::Display;
use std::io::Write;

/// Writes `smallsh: <context>: <cause>` to stderr.
pub fn report(context: impl Display, cause: impl Display) {
    let _ = writeln!(std::io::stderr(), "smallsh: {context}: {cause}");
}

/// Writes `smallsh: <message>` to stderr, for diagnostics with no separate
/// underlying cause (e.g. "too many arguments").
pub fn report_message(message: impl Display) {
    let _ = writeln!(std::io::stderr(), "smallsh: {message}");
}
