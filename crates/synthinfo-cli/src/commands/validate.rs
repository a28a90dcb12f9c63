//! Validate command implementation
//!
//! Checks `name=value` arguments against a definition's rules.

use anyhow::{anyhow, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use synthinfo_core::Registry;

use super::assignments::parse_assignments;

/// Validation outcome for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidateOutput {
    pub key: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validates `assignments` for `key` against `registry`.
///
/// With `skip_validation` the definition's validation switch is turned off
/// first, so the check always passes.
pub fn check(
    registry: &Registry,
    key: &str,
    assignments: &[String],
    skip_validation: bool,
) -> Result<ValidateOutput> {
    let def = registry
        .get(key)
        .ok_or_else(|| anyhow!("unknown synth or FX: {}", key))?;
    let args = parse_assignments(assignments)?;

    if skip_validation {
        def.set_should_validate(false);
    }

    let output = match def.validate(args) {
        Ok(()) => ValidateOutput {
            key: key.to_string(),
            valid: true,
            arg: None,
            error: None,
        },
        Err(e) => ValidateOutput {
            key: key.to_string(),
            valid: false,
            arg: e.arg().map(str::to_string),
            error: Some(e.to_string()),
        },
    };
    Ok(output)
}

/// Run the validate command
///
/// # Arguments
/// * `key` - Registry key, e.g. `beep` or `fx_echo`
/// * `assignments` - Arguments as `name=value` tokens
/// * `json` - Whether to output machine-readable JSON
/// * `no_validate` - Disable validation for this definition first
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(key: &str, assignments: &[String], json: bool, no_validate: bool) -> Result<ExitCode> {
    let output = check(Registry::global(), key, assignments, no_validate)?;
    let code = if output.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(code);
    }

    match &output.error {
        None => println!(
            "{} arguments for {} are valid",
            "SUCCESS".green().bold(),
            key
        ),
        Some(message) => println!("{} {}", "FAILED".red().bold(), message),
    }
    Ok(code)
}
