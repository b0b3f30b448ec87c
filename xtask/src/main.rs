//! Repository automation for nice-utils, run as `cargo xtask <command>`.
//!
//! The `xtask` alias lives in `.cargo/config.toml`.

use clap::Parser;

mod lint;
mod prelude;

#[derive(Debug, Parser)]
#[command(name = "xtask", version, about = "Checks for the nice-utils workspace")]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Task,
}

/// Flags shared by every task.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Global {
    /// Print only failures
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    /// Stream cargo output while each step runs
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Debug, clap::Subcommand)]
enum Task {
    /// Format, check every feature combination, clippy and test the workspace
    Lint(lint::LintCommand),
}

impl Cli {
    async fn run(self) -> lint::error::Result<()> {
        match self.command {
            Task::Lint(command) => lint::run(command, self.global).await,
        }
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    match Cli::parse().run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            prelude::aeprintln!("{} {error}", prelude::p_r("error:"));
            std::process::ExitCode::FAILURE
        }
    }
}
