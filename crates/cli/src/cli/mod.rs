//! CLI command definitions.

pub mod text;
pub mod url;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Path lookups, type checks and URL/text helpers from the command line.
#[derive(Debug, Parser)]
#[command(name = "nice-utils")]
#[command(about = "Path lookups, type checks and URL/text helpers", long_about = None)]
pub struct Cli {
    /// Address that stands in for the current location.
    #[arg(long, env = "NICE_UTILS_LOCATION", default_value = "http://localhost/")]
    pub location: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a dotted path such as `a.b[0][c]` in a JSON document.
    Get {
        /// Path expression.
        path: String,
        /// JSON file to read; stdin when omitted.
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Tell explicit nulls apart from missing values.
        #[arg(long)]
        detailed: bool,
    },
    /// Run every type predicate against a value.
    Check {
        /// JSON text; anything unparseable is checked as a plain string.
        value: String,
    },
    /// Query and rewrite addresses.
    Url(url::UrlCommand),
    /// String and HTML helpers.
    Text(text::TextCommand),
    /// Format a byte count, e.g. `976.56 KB`.
    Bytes {
        bytes: u64,
    },
    /// Integer percentage of `current` over `total`.
    Percent {
        #[arg(allow_negative_numbers = true)]
        current: String,
        #[arg(allow_negative_numbers = true)]
        total: String,
    },
    /// 32-bit string hash.
    QuickHash {
        input: String,
    },
    /// Time-seeded random number.
    Random,
    /// Report touch and iOS detection for a user agent.
    Env {
        /// User agent string.
        #[arg(long, env = "NICE_UTILS_USER_AGENT", default_value = "")]
        user_agent: String,
        /// Host exposes touch events.
        #[arg(long)]
        touch_events: bool,
        /// Maximum simultaneous touch points.
        #[arg(long, default_value_t = 0)]
        max_touch_points: u32,
    },
    /// Check that local image files load.
    Image {
        /// Paths or `file://` sources.
        #[arg(required = true)]
        sources: Vec<String>,
    },
}
