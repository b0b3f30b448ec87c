//! URL CLI commands.

use clap::{Parser, Subcommand};

/// URL commands.
#[derive(Debug, Parser)]
pub struct UrlCommand {
    /// Explicit address; defaults to the current location.
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub action: UrlAction,
}

/// Available URL actions.
#[derive(Debug, Subcommand)]
pub enum UrlAction {
    /// List every query parameter.
    Params,
    /// Get one query parameter.
    Param {
        name: String,
    },
    /// Show the fragment without its `#`.
    Hash,
    /// Parse `key=value` pairs in the fragment.
    ParseHash {
        /// Only print this key.
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the address without its fragment.
    StripHash,
    /// Print the path of the current location.
    Path,
    /// Point the current location at a new fragment, or clear it.
    ChangeHash {
        /// New fragment; omit to clear.
        fragment: Option<String>,
        /// Behave like a host without the history API.
        #[arg(long)]
        no_push_state: bool,
    },
    /// Percent-encode a value for a query string.
    Encode {
        value: String,
    },
    /// Decode a percent-encoded value.
    Decode {
        value: String,
    },
}
