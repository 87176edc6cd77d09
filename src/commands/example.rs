//! Placeholder command: echoes a string back to the console.

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, instrument};

use crate::cli::error::CliResult;
use crate::cli::executor::{parse_options, DeclareOutcome, Executor, ParseOutcome};

/// Registered name, matched case-sensitively by the registry.
pub const NAME: &str = "Example";

/// Echoes `--example` back to stdout. The remaining options exercise one of
/// each declared value shape: required integer, defaulted integer, and a
/// repeatable string list.
#[derive(Debug, Default)]
pub struct ExampleExecutor {
    matches: Option<ArgMatches>,
    example: String,
    required_int: u32,
    int_with_default: u32,
    multiples: Vec<String>,
}

impl ExampleExecutor {
    fn schema() -> Command {
        Command::new(NAME)
            .about("Valid options for *Example*")
            .arg(
                Arg::new("RequiredInt")
                    .long("RequiredInt")
                    .value_name("UINT")
                    .value_parser(value_parser!(u32))
                    .required(true)
                    .help("Example of RequiredInt"),
            )
            .arg(
                Arg::new("RequiredIntWithDefault")
                    .long("RequiredIntWithDefault")
                    .value_name("UINT")
                    .value_parser(value_parser!(u32))
                    .default_value("1")
                    .help("Example of RequiredIntWithDefault"),
            )
            .arg(
                Arg::new("Multiple")
                    .long("Multiple")
                    .value_name("STRING")
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .required(true)
                    .help("Example of Multiple inputs"),
            )
            .arg(
                Arg::new("example")
                    .long("example")
                    .value_name("STRING")
                    .required(true)
                    .help("Example description"),
            )
    }
}

impl Executor for ExampleExecutor {
    #[instrument(skip_all)]
    fn declare(&mut self, argv: &[OsString]) -> CliResult<DeclareOutcome> {
        debug!(?argv, "declaring options");
        match parse_options(Self::schema(), argv)? {
            ParseOutcome::Matches(matches) => {
                self.matches = Some(matches);
                Ok(DeclareOutcome::Ready)
            }
            ParseOutcome::Help(text) => Ok(DeclareOutcome::Help(text)),
        }
    }

    fn bind(&mut self) {
        let matches = self.matches.take().expect("declare runs before bind");
        self.example = matches
            .get_one::<String>("example")
            .cloned()
            .expect("required option");
        self.required_int = *matches
            .get_one::<u32>("RequiredInt")
            .expect("required option");
        self.int_with_default = *matches
            .get_one::<u32>("RequiredIntWithDefault")
            .expect("defaulted option");
        self.multiples = matches
            .get_many::<String>("Multiple")
            .expect("required option")
            .cloned()
            .collect();
        debug!(
            example = %self.example,
            required_int = self.required_int,
            int_with_default = self.int_with_default,
            multiples = ?self.multiples,
            "options bound"
        );
    }

    fn run(&self) {
        println!("[INFO] {}", self.example);
    }
}
