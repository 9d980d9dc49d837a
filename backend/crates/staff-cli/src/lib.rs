//! staff-cli library
//!
//! Exposes the command runner so the binary and the tests share one code path.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use runner::run;
