//! Integration tests for the navigation tree

mod cli_parse;
mod config_loading;
mod scenarios;
mod show_command;
mod support;
