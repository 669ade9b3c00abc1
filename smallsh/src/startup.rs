//! Command-line argument handling: which input the shell reads from.
//!
//! There is no config file (SPEC_FULL.md §10.4); the only configuration
//! surface is this one positional argument plus the environment variables
//! the spec already names.

use crate::error::StartupError;

/// Where the shell reads command lines from, and whether that makes it
/// interactive.
pub enum Source {
    /// Standard input: interactive, with prompting and signal masking.
    Stdin,
    /// A script file: non-interactive.
    File(String),
}

impl Source {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Source::Stdin)
    }
}

/// Parses process arguments (excluding argv[0]) into a [`Source`].
///
/// Two or more arguments is a startup error, per SPEC_FULL.md §6.
pub fn parse_args(args: &[String]) -> Result<Source, StartupError> {
    match args {
        [] => Ok(Source::Stdin),
        [path] => Ok(Source::File(path.clone())),
        _ => Err(StartupError::TooManyArguments),
    }
}
