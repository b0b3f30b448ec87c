//! nice_utils_cli - command line front end for the nice-utils helpers.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use commands::{execute, Report};
pub use error::{CliError, Result};
