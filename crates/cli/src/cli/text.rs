//! Text CLI commands.

use clap::{Parser, Subcommand};

/// Text commands.
#[derive(Debug, Parser)]
pub struct TextCommand {
    #[command(subcommand)]
    pub action: TextAction,
}

/// Available text actions.
#[derive(Debug, Subcommand)]
pub enum TextAction {
    /// Cut to a number of characters, appending `...`.
    Truncate {
        input: String,
        #[arg(long, short, default_value_t = 100)]
        length: usize,
    },
    /// Replace every case-insensitive occurrence of a literal.
    ReplaceAll {
        input: String,
        find: String,
        replace: String,
    },
    /// Apply several `FIND=REPLACE` pairs in one pass.
    ReplaceBulk {
        input: String,
        #[arg(long = "pair", short, value_parser = parse_pair, required = true)]
        pairs: Vec<(String, String)>,
    },
    /// Strip repeated leading and trailing occurrences, then whitespace.
    Rtrim {
        input: String,
        #[arg(long, short, default_value = "")]
        search: String,
    },
    /// Remove HTML tags except the allowed ones.
    StripTags {
        input: String,
        /// Tags to keep, e.g. `<b><i>`.
        #[arg(long, short, default_value = "")]
        allowed: String,
    },
    /// Escape HTML special characters.
    Escape {
        input: String,
    },
    /// Decode HTML entities produced by `escape`.
    Unescape {
        input: String,
    },
    /// Keep only digits.
    OnlyNumbers {
        input: String,
        /// Keep decimal points too.
        #[arg(long)]
        decimal: bool,
    },
}

/// Parse a `FIND=REPLACE` pair.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (find, replace) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIND=REPLACE, got '{s}'"))?;
    Ok((find.to_string(), replace.to_string()))
}
