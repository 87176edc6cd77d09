//! Command-line dispatch scaffold: a static registry of subcommands, each
//! driven through a declare/bind/run lifecycle by the entry point.

pub mod cli;
pub mod commands;
pub mod exitcode;
pub mod util;
