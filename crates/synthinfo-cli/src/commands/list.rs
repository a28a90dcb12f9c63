//! List command implementation
//!
//! Prints every registered key, optionally filtered by definition kind.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use synthinfo_core::{DefinitionKind, Registry};

/// One registry entry for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub key: String,
    pub name: String,
    pub kind: DefinitionKind,
    pub engine_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,
}

/// Collects the registry entries matching `kind`, in registration order.
pub fn entries(registry: &Registry, kind: Option<DefinitionKind>) -> Vec<ListEntry> {
    registry
        .entries()
        .iter()
        .filter(|entry| kind.map_or(true, |k| entry.definition().kind() == k))
        .map(|entry| {
            let def = entry.definition();
            ListEntry {
                key: entry.key().to_string(),
                name: def.name().to_string(),
                kind: def.kind(),
                engine_name: def.engine_name(),
                alias_of: entry.is_alias().then(|| def.key().to_string()),
            }
        })
        .collect()
}

/// Run the list command
///
/// # Arguments
/// * `kind` - Optional kind filter (synth, studio, fx)
/// * `json` - Whether to output machine-readable JSON
pub fn run(kind: Option<&str>, json: bool) -> Result<ExitCode> {
    let kind = kind
        .map(|k| k.parse::<DefinitionKind>())
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let listed = entries(Registry::global(), kind);

    if json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(ExitCode::SUCCESS);
    }

    for entry in &listed {
        match &entry.alias_of {
            Some(target) => println!(
                "  {} {} {}",
                entry.key.green(),
                entry.name,
                format!("(alias of {})", target).dimmed()
            ),
            None => println!(
                "  {} {} {}",
                entry.key.green(),
                entry.name,
                format!("({})", entry.engine_name).dimmed()
            ),
        }
    }
    println!(
        "\n{} {} definition(s)",
        "Listed".cyan().bold(),
        listed.len()
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_filter_by_kind() {
        let registry = Registry::builtin().unwrap();
        let studio = entries(&registry, Some(DefinitionKind::Studio));
        let keys: Vec<_> = studio.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "mono_player",
                "stereo_player",
                "basic_mono_player",
                "basic_stereo_player",
                "basic_mixer",
            ]
        );
    }

    #[test]
    fn test_entries_mark_aliases() {
        let registry = Registry::builtin().unwrap();
        let fx = entries(&registry, Some(DefinitionKind::Fx));
        let replace = fx.iter().find(|e| e.key == "fx_replace_reverb").unwrap();
        assert_eq!(replace.alias_of.as_deref(), Some("fx_reverb"));
        assert_eq!(replace.engine_name, "sonic-pi-fx_reverb");
        let reverb = fx.iter().find(|e| e.key == "fx_reverb").unwrap();
        assert!(reverb.alias_of.is_none());
    }

    #[test]
    fn test_entries_unfiltered_covers_registry() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(entries(&registry, None).len(), registry.len());
    }

    #[test]
    fn test_run_rejects_unknown_kind() {
        let err = run(Some("drum"), true).unwrap_err();
        assert_eq!(err.to_string(), "unknown definition kind: drum");
    }
}
