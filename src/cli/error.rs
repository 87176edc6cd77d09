//! CLI-level errors and their exit codes

use thiserror::Error;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// The first positional token matched no registry entry.
    #[error("unsupported command: {0}")]
    UnknownCommand(String),

    /// clap rejected the argument stream, at the top level or inside a
    /// command's declare phase. Carries clap's own rendering, usage included.
    #[error("{0}")]
    InvalidArgs(#[from] clap::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownCommand(_) | CliError::InvalidArgs(_) => crate::exitcode::USAGE,
        }
    }
}
