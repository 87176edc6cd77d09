//! Concrete command executors, one module per registered command.

pub mod example;
