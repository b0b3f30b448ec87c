//! Pretty output formatting.

use std::collections::BTreeMap;

use nice_utils_host::{ImageLoad, ImageStatus};
use serde_json::Value;

use crate::commands::{EnvironmentReport, Report, Resolution, ResolutionStatus, TypeReport};

/// Format any report for display.
pub fn format_report(report: &Report) -> String {
    match report {
        Report::Value(value) => format_value(value),
        Report::Resolution(resolution) => format_resolution(resolution),
        Report::Checks(checks) => format_checks(checks),
        Report::Params(params) => format_params(params),
        Report::Images(loads) => format_images(loads),
        Report::Environment(env) => format_environment(env),
        Report::Navigated { href } => format!("Location: {href}"),
    }
}

/// Strings print bare; null prints as `(none)`.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "(none)".to_string(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

pub fn format_resolution(resolution: &Resolution) -> String {
    let status = match resolution.status {
        ResolutionStatus::Found => "found",
        ResolutionStatus::Null => "null",
        ResolutionStatus::Missing => "missing",
    };
    let mut output = format!("{}: {}", resolution.path, status);
    if let Some(value) = &resolution.value {
        output.push_str(&format!("\n{}", format_value(value)));
    }
    output
}

pub fn format_checks(checks: &TypeReport) -> String {
    let mut output = String::from("CHECKS\n");
    output.push_str(&"-".repeat(40));
    for (name, result) in checks.entries() {
        let answer = if result { "yes" } else { "no" };
        output.push_str(&format!("\n  {name:<18} {answer}"));
    }
    output
}

pub fn format_params(params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return "No parameters found.".to_string();
    }
    let mut output = format!("PARAMETERS ({})\n", params.len());
    output.push_str(&"-".repeat(40));
    for (key, value) in params {
        output.push_str(&format!("\n  {key} = {value}"));
    }
    output
}

pub fn format_images(loads: &[ImageLoad]) -> String {
    loads
        .iter()
        .map(|load| {
            let status = match load.status {
                ImageStatus::Loaded => "ok",
                ImageStatus::Failed => "error",
            };
            format!("{status:<5} {}", load.src)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_environment(env: &EnvironmentReport) -> String {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    format!(
        "Touch device: {}\niOS: {}",
        yes_no(env.touch_device),
        yes_no(env.ios)
    )
}
