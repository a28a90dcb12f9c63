//! Info command implementation
//!
//! Shows one definition's engine name, kill delay, tempo-scaled arguments and
//! per-argument metadata.

use anyhow::{anyhow, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use synthinfo_core::{ArgInfo, ArgMap, DefinitionKind, OrderedMap, Registry};

/// Definition details for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoOutput {
    pub key: String,
    pub name: String,
    pub kind: DefinitionKind,
    pub engine_name: String,
    pub doc: String,
    /// Kill delay with no arguments supplied.
    pub kill_delay: f64,
    pub bpm_scale_args: Vec<String>,
    pub args: OrderedMap<ArgInfo>,
}

/// Collects the details of the definition registered under `key`.
pub fn describe(registry: &Registry, key: &str) -> Result<InfoOutput> {
    let def = registry
        .get(key)
        .ok_or_else(|| anyhow!("unknown synth or FX: {}", key))?;

    Ok(InfoOutput {
        key: key.to_string(),
        name: def.name().to_string(),
        kind: def.kind(),
        engine_name: def.engine_name(),
        doc: def.doc().to_string(),
        kill_delay: def.kill_delay(&ArgMap::new()),
        bpm_scale_args: def.bpm_scale_args().to_vec(),
        args: def.arg_info(),
    })
}

/// Run the info command
///
/// # Arguments
/// * `key` - Registry key, e.g. `beep` or `fx_echo`
/// * `json` - Whether to output machine-readable JSON
pub fn run(key: &str, json: bool) -> Result<ExitCode> {
    let info = describe(Registry::global(), key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} ({})", info.name.cyan().bold(), info.key, info.kind);
    println!("{} {}", "Engine:".dimmed(), info.engine_name);
    println!("{} {}", "Kill delay:".dimmed(), info.kill_delay);
    if !info.bpm_scale_args.is_empty() {
        println!(
            "{} {}",
            "Tempo scaled:".dimmed(),
            info.bpm_scale_args.join(", ")
        );
    }
    if !info.doc.is_empty() {
        println!("\n{}", info.doc);
    }

    println!();
    for (arg, entry) in info.args.iter() {
        let modulatable = if entry.modulatable {
            "modulatable".green()
        } else {
            "fixed".yellow()
        };
        println!("  {} = {} [{}]", arg.bold(), entry.default, modulatable);
        if !entry.doc.is_empty() {
            println!("      {}", entry.doc);
        }
        for constraint in &entry.constraints {
            println!("      {} {}", "-".dimmed(), constraint);
        }
    }

    Ok(ExitCode::SUCCESS)
}
