//! Word splitting, parameter expansion, and command parsing for `smallsh`.
//!
//! This crate is the pure, allocation-only half of the shell: nothing in it
//! touches a file descriptor, a process ID, or the OS signal table. Given a
//! line of input it produces a [`parser::Command`] — an argument vector, a
//! background flag, and a list of redirections — ready for the `smallsh`
//! binary crate to actually execute.

pub mod expansion;
pub mod lexer;
pub mod parser;

pub use expansion::{expand_word, SpecialParams};
pub use lexer::split_words;
pub use parser::{parse, Command, ParseError, Redirection, RedirectionKind};
