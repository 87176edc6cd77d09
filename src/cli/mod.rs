//! CLI layer: argument parsing, command registry, and the executor lifecycle

pub mod error;
pub mod executor;
pub mod output;
pub mod registry;
pub mod resolver;

pub use error::{CliError, CliResult};
pub use executor::{DeclareOutcome, Executor};
pub use registry::CommandKind;
pub use resolver::{resolve, Resolution, Resolved};
