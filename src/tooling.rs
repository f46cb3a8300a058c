//! Tooling
//!
//! Command-line interface and report formatting for the navigation tree.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
