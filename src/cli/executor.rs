//! The three-phase command lifecycle: declare options, bind fields, run.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgMatches, Command};

use crate::cli::error::{CliError, CliResult};

/// Per-command handler. The entry point drives the phases in order;
/// there are no transitions backward and no retries.
pub trait Executor {
    /// Build the command's options schema and parse its argument slice
    /// (first element: the command name) against it. Parsed values are
    /// retained for [`bind`](Executor::bind).
    fn declare(&mut self, argv: &[OsString]) -> CliResult<DeclareOutcome>;

    /// Move parsed values into typed fields. Assumes a successful declare;
    /// calling it out of order is a programming error, not a user error.
    fn bind(&mut self);

    /// Execute the command body using bound fields only.
    fn run(&self);
}

/// What a successful declare phase decided.
#[derive(Debug)]
pub enum DeclareOutcome {
    /// Options parsed and validated; bind and run may proceed.
    Ready,
    /// Help was requested: rendered usage text, the body must not run.
    Help(String),
}

/// Result of parsing one argument slice against one schema.
#[derive(Debug)]
pub enum ParseOutcome {
    Matches(ArgMatches),
    Help(String),
}

/// Parse `argv` against `schema`. clap's help/version kinds become
/// [`ParseOutcome::Help`]; real parse failures become
/// [`CliError::InvalidArgs`].
pub fn parse_options(schema: Command, argv: &[OsString]) -> CliResult<ParseOutcome> {
    match schema.try_get_matches_from(argv) {
        Ok(matches) => Ok(ParseOutcome::Matches(matches)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ParseOutcome::Help(err.to_string()))
        }
        Err(err) => Err(CliError::from(err)),
    }
}
