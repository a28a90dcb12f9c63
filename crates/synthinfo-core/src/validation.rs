//! Argument validation against a definition's rules.

use crate::args::Args;
use crate::definition::InstrumentDefinition;
use crate::error::ValidationError;

/// Validates `args` against `def`.
///
/// Supplied keys are checked in supplied order and each key's rules in
/// declared order. The first failing rule is reported. Keys the definition
/// knows nothing about have no rules and pass. Nothing is checked when the
/// definition's validation switch is off.
pub fn validate_args(
    def: &InstrumentDefinition,
    args: impl Into<Args>,
) -> Result<(), ValidationError> {
    if !def.should_validate() {
        log::trace!("validation disabled for {}, skipping", def.key());
        return Ok(());
    }

    let args = args.into().normalize()?;
    log::trace!("validating {} argument(s) for {}", args.len(), def.key());

    for (arg, value) in args.iter() {
        for rule in def.rules_for(arg) {
            if !rule.check(&args) {
                return Err(ValidationError::InvalidValue {
                    arg: arg.to_string(),
                    value: value.clone(),
                    message: rule.message().to_string(),
                });
            }
        }
    }

    Ok(())
}
