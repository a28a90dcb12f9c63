//! Parsing `name=value` argument tokens from the command line.

use anyhow::{bail, Result};
use synthinfo_core::{ArgMap, ArgValue};

/// Builds an argument map from `name=value` tokens.
///
/// Values go through [`ArgValue::parse`]; later tokens for the same name win.
pub(crate) fn parse_assignments(tokens: &[String]) -> Result<ArgMap> {
    let mut args = ArgMap::new();
    for token in tokens {
        let Some((name, value)) = token.split_once('=') else {
            bail!("invalid argument '{}': expected name=value", token);
        };
        let name = name.trim().trim_start_matches(':');
        if name.is_empty() {
            bail!("invalid argument '{}': missing name", token);
        }
        args.insert(name, ArgValue::parse(value));
    }
    Ok(args)
}
