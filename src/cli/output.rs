use crate::app::config::Config;
use crate::file::generator::{GeneratedFile, Verification};
use crate::util::paths;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct GeneratedReport<'a> {
    filename: &'a str,
    path: PathBuf,
    generated_at: String,
}

#[derive(Debug, Serialize)]
struct VerificationReport {
    path: PathBuf,
    filename_timestamp: String,
    content_timestamp: String,
    timestamps_match: bool,
    canonical: bool,
    valid: bool,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Format a generation result for display (human or JSON)
pub fn format_generated(generated: &GeneratedFile, json: bool) -> String {
    if json {
        let report = GeneratedReport {
            filename: &generated.filename,
            path: paths::resolve_relative_to_cwd(&generated.path),
            generated_at: generated.timestamp.to_string(),
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    } else {
        format!("Created file: {}", generated.filename)
    }
}

/// Format a verification result for display (human or JSON)
pub fn format_verification(verification: &Verification, json: bool) -> String {
    if json {
        let report = VerificationReport {
            path: verification.path.clone(),
            filename_timestamp: verification.filename_timestamp.to_string(),
            content_timestamp: verification.content_timestamp.to_string(),
            timestamps_match: verification.timestamps_match(),
            canonical: verification.canonical,
            valid: verification.is_valid(),
        };
        return serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());
    }

    let mut output = String::new();
    output.push_str(&format!("File: {}\n", verification.path.display()));
    output.push_str(&format!("Filename timestamp: {}\n", verification.filename_timestamp));
    output.push_str(&format!("Content timestamp: {}\n", verification.content_timestamp));
    output.push_str(&format!("Timestamps match: {}\n", yes_no(verification.timestamps_match())));
    output.push_str(&format!("Canonical content: {}", yes_no(verification.canonical)));
    output
}

/// Format configuration as TOML or JSON
pub fn format_config(config: &Config, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}
