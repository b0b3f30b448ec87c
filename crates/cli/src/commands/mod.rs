//! Command execution.
//!
//! Each command turns its arguments into a [`Report`]; rendering is left to
//! [`crate::output`].

pub mod text;
pub mod url;
pub mod value;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use nice_utils_core::{format, random};
use nice_utils_host::{
    is_image_loaded, is_ios, is_touch_device, FsImageLoader, ImageLoad, StaticEnvironment,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub use value::{Resolution, ResolutionStatus, TypeReport};

/// The outcome of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// A single value; strings print bare in pretty mode, null as `(none)`.
    Value(Value),
    Resolution(Resolution),
    Checks(TypeReport),
    Params(BTreeMap<String, String>),
    Images(Vec<ImageLoad>),
    Environment(EnvironmentReport),
    /// The location after a navigation.
    Navigated { href: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvironmentReport {
    pub touch_device: bool,
    pub ios: bool,
}

/// Runs the parsed command line, reading `stdin` only when `get` has no input file.
pub async fn execute<R: Read>(cli: &Cli, stdin: R) -> Result<Report> {
    tracing::debug!(command = ?cli.command, "Executing command");

    match &cli.command {
        Commands::Get {
            path,
            input,
            detailed,
        } => {
            let document = read_document(input.as_deref(), stdin)?;
            if *detailed {
                value::get_detailed(&document, path).map(Report::Resolution)
            } else {
                value::get(&document, path).map(Report::Value)
            }
        }
        Commands::Check { value } => Ok(Report::Checks(TypeReport::from_input(value))),
        Commands::Url(command) => url::execute(command, &cli.location),
        Commands::Text(command) => Ok(Report::Value(Value::String(text::execute(
            &command.action,
        )))),
        Commands::Bytes { bytes } => Ok(Report::Value(Value::String(format::nice_bytes(*bytes)))),
        Commands::Percent { current, total } => Ok(Report::Value(json!(
            format::percentage_str(current, total)
        ))),
        Commands::QuickHash { input } => Ok(Report::Value(json!(random::quick_hash(input)))),
        Commands::Random => Ok(Report::Value(json!(random::random_number()))),
        Commands::Env {
            user_agent,
            touch_events,
            max_touch_points,
        } => {
            let mut env =
                StaticEnvironment::new(user_agent.as_str()).with_max_touch_points(*max_touch_points);
            if *touch_events {
                env = env.with_touch_events();
            }
            Ok(Report::Environment(EnvironmentReport {
                touch_device: is_touch_device(&env),
                ios: is_ios(&env),
            }))
        }
        Commands::Image { sources } => {
            let loader = FsImageLoader;
            let mut loads = Vec::with_capacity(sources.len());
            for src in sources {
                loads.push(is_image_loaded(&loader, src).await);
            }
            Ok(Report::Images(loads))
        }
    }
}

fn read_document<R: Read>(input: Option<&Path>, mut stdin: R) -> Result<Value> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            stdin.read_to_string(&mut raw)?;
            raw
        }
    };
    Ok(serde_json::from_str(&raw)?)
}
