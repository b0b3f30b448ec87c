//! nice-utils CLI entry point.

use clap::Parser;
use nice_utils_cli::cli::{Cli, OutputFormat};
use nice_utils_cli::output::format_output;
use nice_utils_cli::{execute, Report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nice_utils=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let report = execute(&cli, std::io::stdin().lock()).await?;

    let navigation = matches!(report, Report::Navigated { .. });
    if navigation && cli.quiet && cli.format == OutputFormat::Pretty {
        return Ok(());
    }
    println!("{}", format_output(&report, cli.format));

    Ok(())
}
