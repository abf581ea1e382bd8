//! CLI module
//!
//! Command-line interface over the SDK.
//!
//! # Commands
//!
//! - `service-account` - list, show, create, update, delete
//! - `api-key` - list, show, create, delete

mod commands;
mod runner;

pub use commands::{ApiKeyCommands, Cli, Commands, ServiceAccountCommands};
pub use runner::Runner;
