//! Error types for catalog construction and argument validation.

use thiserror::Error;

use crate::value::ArgValue;

/// A supplied argument list was rejected.
///
/// Messages are shown to the end user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// An argument violated one of its declared rules.
    #[error("Value of argument :{arg} {message}, got {value}.")]
    InvalidValue {
        /// Argument name without the leading colon.
        arg: String,
        /// The offending value as supplied.
        value: ArgValue,
        /// The failing rule's phrase, e.g. "must be zero or greater".
        message: String,
    },

    /// A flat key/value argument list had an odd number of elements.
    #[error("argument list must contain key/value pairs, got {0} element(s)")]
    UnpairedArgs(usize),

    /// A flat argument list used a non-symbol in key position.
    #[error("argument names must be symbols, got {0}")]
    InvalidArgName(ArgValue),

    /// No synth or FX is registered under the requested key.
    #[error("unknown synth or FX: {0}")]
    UnknownDefinition(String),
}

impl ValidationError {
    /// Returns the offending argument name for rule failures.
    pub fn arg(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidValue { arg, .. } => Some(arg),
            _ => None,
        }
    }
}

/// An authoring defect in a definition or in the registry layout.
///
/// These never originate from user input; the built-in catalog treats them as
/// fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// A required field was never set on the builder.
    #[error("definition '{key}' is missing required field '{field}'")]
    MissingField {
        /// Key of the incomplete definition.
        key: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A registry or engine key does not match the key format.
    #[error("invalid definition key '{0}': must match [a-z][a-z0-9_]*")]
    InvalidKey(String),

    /// The same key was registered twice.
    #[error("duplicate registry key '{0}'")]
    DuplicateKey(String),

    /// An alias points at a key that is not registered.
    #[error("alias '{alias}' refers to unknown key '{target}'")]
    UnknownAliasTarget {
        /// The alias being registered.
        alias: String,
        /// The missing target key.
        target: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = ValidationError::InvalidValue {
            arg: "note".into(),
            value: ArgValue::Int(-5),
            message: "must be zero or greater".into(),
        };
        assert_eq!(
            err.to_string(),
            "Value of argument :note must be zero or greater, got -5."
        );
        assert_eq!(err.arg(), Some("note"));
    }

    #[test]
    fn test_definition_error_display() {
        let err = DefinitionError::MissingField {
            key: "fx_echo".into(),
            field: "name",
        };
        assert_eq!(
            err.to_string(),
            "definition 'fx_echo' is missing required field 'name'"
        );
    }
}
