//! Trigger command implementation
//!
//! Prints the message that would start a synth or effect on the engine.

use anyhow::{bail, Result};
use colored::Colorize;
use std::process::ExitCode;
use synthinfo_core::{prepare_trigger, Registry, TriggerMessage};

use super::assignments::parse_assignments;

/// Prepares the trigger for `key` with `assignments` at `tempo_factor`.
pub fn prepare(
    registry: &Registry,
    key: &str,
    assignments: &[String],
    tempo_factor: f64,
) -> Result<TriggerMessage> {
    if !tempo_factor.is_finite() || tempo_factor <= 0.0 {
        bail!(
            "tempo factor must be a positive number, got {}",
            tempo_factor
        );
    }
    let args = parse_assignments(assignments)?;
    Ok(prepare_trigger(registry, key, args, tempo_factor)?)
}

/// Run the trigger command
///
/// # Arguments
/// * `key` - Registry key, e.g. `beep` or `fx_echo`
/// * `assignments` - Arguments as `name=value` tokens
/// * `tempo_factor` - Multiplier for tempo-scaled arguments (60 / bpm)
/// * `json` - Whether to output machine-readable JSON
pub fn run(key: &str, assignments: &[String], tempo_factor: f64, json: bool) -> Result<ExitCode> {
    let message = prepare(Registry::global(), key, assignments, tempo_factor)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&message)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Engine:".cyan().bold(), message.engine_name);
    for (arg, value) in message.args.iter() {
        println!("  {} {}", format!("{}:", arg).bold(), value);
    }
    println!("{} {}", "Kill delay:".dimmed(), message.kill_delay);

    Ok(ExitCode::SUCCESS)
}
