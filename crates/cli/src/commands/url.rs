use nice_utils_core::url as pure;
use nice_utils_host::{change_url_hash, Location, StaticLocation, StaticViewport, Urls};
use serde_json::Value;

use super::Report;
use crate::cli::url::{UrlAction, UrlCommand};
use crate::error::Result;

/// Runs a URL action with `location` standing in for the current address.
pub fn execute(command: &UrlCommand, location: &str) -> Result<Report> {
    let location = StaticLocation::new(location)?;
    let location = match &command.action {
        UrlAction::ChangeHash {
            no_push_state: true,
            ..
        } => location.without_push_state(),
        _ => location,
    };
    let urls = Urls::new(&location, command.url.as_deref());

    let report = match &command.action {
        UrlAction::Params => Report::Params(urls.params()),
        UrlAction::Param { name } => optional(urls.param(name)),
        UrlAction::Hash => optional(urls.hash()),
        UrlAction::ParseHash { name: Some(name) } => optional(urls.hash_param(name)),
        UrlAction::ParseHash { name: None } => Report::Params(urls.parse_hash().unwrap_or_default()),
        UrlAction::StripHash => optional(urls.url_without_hash()),
        UrlAction::Path => Report::Value(Value::String(urls.url_path())),
        UrlAction::ChangeHash { fragment, .. } => {
            change_url_hash(&location, &StaticViewport::default(), fragment.as_deref())?;
            Report::Navigated {
                href: location.href(),
            }
        }
        UrlAction::Encode { value } => Report::Value(Value::String(pure::url_encode(value))),
        UrlAction::Decode { value } => Report::Value(Value::String(pure::url_decode(value)?)),
    };
    Ok(report)
}

fn optional(value: Option<String>) -> Report {
    Report::Value(value.map(Value::String).unwrap_or(Value::Null))
}
