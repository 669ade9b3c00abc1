//! A thin line-reading interface.
//!
//! Reading bytes from a terminal or file is explicitly out of scope for the
//! core pipeline (SPEC_FULL.md §1): the rest of the shell only needs "the
//! next logical line, or EOF, or 'try again'". This module is that narrow
//! interface, kept deliberately small.

use std::io::{self, BufRead};

/// One outcome of trying to read the next logical input line.
pub enum InputEvent {
    /// A complete line was read, with any trailing newline/CR stripped.
    Line(String),
    /// End of input.
    Eof,
    /// The read was interrupted by a signal; the caller should print a
    /// newline and reprompt (SPEC_FULL.md §5, §7.2).
    Interrupted,
}

/// Reads one line from `reader`.
///
/// Non-interrupt read errors are treated as EOF, per SPEC_FULL.md §7.2.
pub fn read_line(reader: &mut impl BufRead) -> InputEvent {
    let mut buf = String::new();
    match reader.read_line(&mut buf) {
        Ok(0) => InputEvent::Eof,
        Ok(_) => {
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            InputEvent::Line(buf)
        }
        Err(e) if e.kind() == io::ErrorKind::Interrupted => InputEvent::Interrupted,
        Err(_) => InputEvent::Eof,
    }
}
