// ABOUTME: Library half of the nodejoin CLI
// ABOUTME: Command handlers, configuration loading and logging setup

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{run, Cli, Commands, TokenCommands};
pub use config::{Config, ConfigError};
pub use error::{CliError, CliResult};

#[cfg(test)]
mod tests;
