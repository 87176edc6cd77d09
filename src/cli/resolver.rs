//! Top-level argument surface and subcommand resolution.
//!
//! Only the first positional token is interpreted here; everything after it
//! is handed to the matched command's declare phase unexamined, so
//! command-specific flags never fail at the top level.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::cli::error::{CliError, CliResult};
use crate::cli::registry::{self, CommandKind};

/// Command-line dispatch scaffold
#[derive(Parser, Debug)]
#[command(name = "rscmd")]
#[command(version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    // First token: candidate command name; the rest passes through raw.
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// What the entry point must do next.
#[derive(Debug)]
pub enum Resolution {
    /// No command token given: print the registry listing, exit 0.
    List,
    /// Top-level help or version: print the rendered text, exit 0.
    Render(String),
    /// A registered command and its raw argument slice.
    Dispatch { kind: CommandKind, argv: Vec<OsString> },
}

/// Resolution plus the top-level state the entry point consumes.
#[derive(Debug)]
pub struct Resolved {
    /// Occurrences of `-d` before the command token.
    pub verbosity: u8,
    pub action: Resolution,
}

/// Resolve the raw argument vector into a dispatch decision.
///
/// Never exits or prints: failure paths come back as [`CliError`] values and
/// the entry point decides how they map to streams and exit codes.
pub fn resolve<I, T>(args: I) -> CliResult<Resolved>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let top_level = Cli::command().after_help(registry::listing());
    let matches = match top_level.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Resolved {
                verbosity: 0,
                action: Resolution::Render(err.to_string()),
            });
        }
        Err(err) => return Err(CliError::from(err)),
    };
    let cli = Cli::from_arg_matches(&matches)?;

    let action = match cli.command {
        None => Resolution::List,
        Some(Commands::External(argv)) => {
            let name = argv[0].to_string_lossy().into_owned();
            match CommandKind::from_name(&name) {
                Some(kind) => Resolution::Dispatch { kind, argv },
                None => return Err(CliError::UnknownCommand(name)),
            }
        }
    };

    Ok(Resolved {
        verbosity: cli.debug,
        action,
    })
}
