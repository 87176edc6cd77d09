//! Static command registry: one variant per subcommand, fixed at build time.

use crate::cli::executor::Executor;
use crate::commands::example::{self, ExampleExecutor};

/// Every registered subcommand. Adding a variant here (plus its `ALL` entry)
/// is the whole registration step for a new command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Example,
}

impl CommandKind {
    /// All registered commands, in listing order.
    pub const ALL: [CommandKind; 1] = [CommandKind::Example];

    /// Registered name. Names are unique and matched case-sensitively.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Example => example::NAME,
        }
    }

    /// Exact lookup; `None` for anything not registered.
    pub fn from_name(name: &str) -> Option<CommandKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Construct a fresh executor for this command.
    pub fn instantiate(self) -> Box<dyn Executor> {
        match self {
            CommandKind::Example => Box::<ExampleExecutor>::default(),
        }
    }
}

/// All registered names, space-joined, shown on help and failure paths.
pub fn listing() -> String {
    let names: Vec<&str> = CommandKind::ALL.iter().map(|kind| kind.name()).collect();
    format!("Supported commands:  {}", names.join("  "))
}
