//! Samples command implementation
//!
//! Lists the bundled sample groups, or the samples in one group.

use anyhow::{anyhow, Result};
use colored::Colorize;
use std::process::ExitCode;
use synthinfo_core::{Registry, SampleGroup};

/// Selects every group, or the single group keyed by `category`.
pub fn select<'a>(registry: &'a Registry, category: Option<&str>) -> Result<Vec<&'a SampleGroup>> {
    match category {
        Some(key) => {
            let group = registry.sample_group(key).ok_or_else(|| {
                let known: Vec<_> = registry
                    .grouped_samples()
                    .iter()
                    .map(|g| g.key.as_str())
                    .collect();
                anyhow!(
                    "unknown sample group: {} (expected one of {})",
                    key,
                    known.join(", ")
                )
            })?;
            Ok(vec![group])
        }
        None => Ok(registry.grouped_samples().iter().collect()),
    }
}

/// Run the samples command
///
/// # Arguments
/// * `category` - Optional group key, e.g. `drum`
/// * `json` - Whether to output machine-readable JSON
pub fn run(category: Option<&str>, json: bool) -> Result<ExitCode> {
    let groups = select(Registry::global(), category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(ExitCode::SUCCESS);
    }

    for group in &groups {
        println!(
            "{} {} {}",
            group.desc.cyan().bold(),
            format!("({})", group.key).dimmed(),
            group.samples.len()
        );
        if category.is_some() {
            for sample in &group.samples {
                println!("  :{}", sample);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_groups() {
        let registry = Registry::builtin().unwrap();
        let groups = select(&registry, None).unwrap();
        assert_eq!(groups.len(), registry.grouped_samples().len());
    }

    #[test]
    fn test_select_one_group() {
        let registry = Registry::builtin().unwrap();
        let groups = select(&registry, Some("drum")).unwrap();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].contains("drum_heavy_kick"));
    }

    #[test]
    fn test_select_unknown_group_lists_known_keys() {
        let registry = Registry::builtin().unwrap();
        let err = select(&registry, Some("kazoo")).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("unknown sample group: kazoo"));
        assert!(message.contains("drum"));
    }
}
