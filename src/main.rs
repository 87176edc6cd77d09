use std::ffi::OsString;
use std::process;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use rscmd::cli::error::CliError;
use rscmd::cli::executor::DeclareOutcome;
use rscmd::cli::output;
use rscmd::cli::registry::{self, CommandKind};
use rscmd::cli::resolver::{resolve, Resolution};
use rscmd::exitcode;

fn main() {
    let resolved = match resolve(std::env::args_os()) {
        Ok(resolved) => resolved,
        Err(error) => {
            report(&error);
            output::info(&registry::listing());
            process::exit(error.exit_code());
        }
    };

    setup_logging(resolved.verbosity);

    let code = match resolved.action {
        Resolution::List => {
            output::info(&registry::listing());
            exitcode::OK
        }
        Resolution::Render(text) => {
            output::info(&text);
            exitcode::OK
        }
        Resolution::Dispatch { kind, argv } => dispatch(kind, &argv),
    };
    process::exit(code);
}

/// Drive the three-phase lifecycle for one resolved command.
fn dispatch(kind: CommandKind, argv: &[OsString]) -> i32 {
    tracing::debug!(command = kind.name(), "dispatching");
    let mut executor = kind.instantiate();
    match executor.declare(argv) {
        Ok(DeclareOutcome::Ready) => {
            executor.bind();
            executor.run();
            exitcode::OK
        }
        Ok(DeclareOutcome::Help(text)) => {
            output::info(&text);
            exitcode::OK
        }
        Err(error) => {
            report(&error);
            error.exit_code()
        }
    }
}

fn report(error: &CliError) {
    match error {
        // clap renders its own message, usage line included
        CliError::InvalidArgs(parse_error) => eprintln!("{parse_error}"),
        other => output::error(other),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("max verbosity is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output goes to stderr so stdout stays clean for command output
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use rscmd::util::testing;
    use tracing::info;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        rscmd::cli::resolver::Cli::command().debug_assert();
        info!("Debug mode: info");
    }
}
