//! Preparing the message that starts a synth or effect on the audio engine.

use serde::Serialize;

use crate::args::{ArgMap, Args};
use crate::error::ValidationError;
use crate::registry::Registry;

/// Everything the transport needs to start a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerMessage {
    /// Prefixed engine synth name, e.g. `sonic-pi-beep`.
    pub engine_name: String,
    /// Final argument map after defaults and tempo scaling.
    pub args: ArgMap,
    /// Seconds the engine must wait after release before freeing the node.
    pub kill_delay: f64,
}

/// Resolves, validates and finalizes a trigger for `key`.
///
/// Omitted arguments whose default is a generator are filled in by forcing
/// the generator. Every tempo-scaled argument present is multiplied by
/// `tempo_factor`. Constant defaults are left to the engine.
pub fn prepare_trigger(
    registry: &Registry,
    key: &str,
    args: impl Into<Args>,
    tempo_factor: f64,
) -> Result<TriggerMessage, ValidationError> {
    let def = registry
        .get(key)
        .ok_or_else(|| ValidationError::UnknownDefinition(key.to_string()))?;

    let supplied = args.into().normalize()?;
    def.validate(&supplied)?;

    let mut args = supplied;
    for (arg, default) in def.arg_defaults().iter() {
        if default.is_generator() && !args.contains_key(arg) {
            args.insert(arg, default.resolve());
        }
    }

    if tempo_factor != 1.0 {
        for arg in def.bpm_scale_args() {
            if let Some(value) = args.get(arg) {
                let scaled = value.scaled(tempo_factor);
                args.insert(arg.as_str(), scaled);
            }
        }
    }

    let kill_delay = def.kill_delay(&args);
    log::trace!(
        "prepared {} with {} argument(s)",
        def.engine_name(),
        args.len()
    );

    Ok(TriggerMessage {
        engine_name: def.engine_name(),
        args,
        kill_delay,
    })
}
