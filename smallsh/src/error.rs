//! Typed errors for the parts of the shell that can fail for more than one
//! reason (see SPEC_FULL.md §10.2 for why these are enums, not bare strings).

use thiserror::Error;

/// Errors that abort the shell before the main loop ever runs.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("too many arguments")]
    TooManyArguments,
    #[error("{path}: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
