//! Argument value type.

use serde::{Deserialize, Serialize};

/// A single argument value as supplied by the interpreter.
///
/// Values are either numbers or symbols. Integers and floats compare equal when
/// they hold the same numeric value, so `0` and `0.0` satisfy the same rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Whole number (MIDI notes, enumerated wave types, bit depths).
    Int(i64),
    /// Fractional number (times, levels, ratios).
    Float(f64),
    /// Symbolic value such as a note name (`:C4`) or sample name.
    Symbol(String),
}

impl ArgValue {
    /// Returns the numeric value, or `None` for symbols.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArgValue::Int(i) => Some(*i as f64),
            ArgValue::Float(f) => Some(*f),
            ArgValue::Symbol(_) => None,
        }
    }

    /// Returns the symbol name (without the leading colon), or `None` for numbers.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            ArgValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Equality that treats `Int` and `Float` as the same numeric domain.
    pub fn loosely_eq(&self, other: &ArgValue) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.as_symbol() == other.as_symbol(),
            _ => false,
        }
    }

    /// Multiplies a numeric value by `factor`. Symbols are returned unchanged.
    pub fn scaled(&self, factor: f64) -> ArgValue {
        match self.as_f64() {
            Some(v) => ArgValue::Float(v * factor),
            None => self.clone(),
        }
    }

    /// Parses a command-line token: integers, then floats, otherwise a symbol.
    ///
    /// A leading `:` on symbols is optional and stripped.
    pub fn parse(token: &str) -> ArgValue {
        let token = token.trim();
        if let Ok(i) = token.parse::<i64>() {
            return ArgValue::Int(i);
        }
        if let Ok(f) = token.parse::<f64>() {
            return ArgValue::Float(f);
        }
        ArgValue::Symbol(token.trim_start_matches(':').to_string())
    }
}

/// Formats a number the way the interpreter prints it: whole values without a
/// fractional part.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl std::fmt::Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgValue::Int(i) => write!(f, "{}", i),
            ArgValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            ArgValue::Float(v) => write!(f, "{}", v),
            ArgValue::Symbol(s) => write!(f, ":{}", s),
        }
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        ArgValue::Int(v as i64)
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        ArgValue::Int(v)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        ArgValue::Float(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Symbol(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        ArgValue::Symbol(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_interpreter_inspect() {
        assert_eq!(ArgValue::Int(52).to_string(), "52");
        assert_eq!(ArgValue::Int(-5).to_string(), "-5");
        assert_eq!(ArgValue::Float(0.0).to_string(), "0.0");
        assert_eq!(ArgValue::Float(0.25).to_string(), "0.25");
        assert_eq!(ArgValue::Symbol("C4".into()).to_string(), ":C4");
    }

    #[test]
    fn test_loose_numeric_equality() {
        assert!(ArgValue::Int(0).loosely_eq(&ArgValue::Float(0.0)));
        assert!(!ArgValue::Int(1).loosely_eq(&ArgValue::Float(0.5)));
        assert!(ArgValue::Symbol("a".into()).loosely_eq(&ArgValue::Symbol("a".into())));
        assert!(!ArgValue::Int(0).loosely_eq(&ArgValue::Symbol("0".into())));
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(ArgValue::parse("52"), ArgValue::Int(52));
        assert_eq!(ArgValue::parse("-0.5"), ArgValue::Float(-0.5));
        assert_eq!(ArgValue::parse(":Eb4"), ArgValue::Symbol("Eb4".into()));
        assert_eq!(ArgValue::parse("saw"), ArgValue::Symbol("saw".into()));
    }

    #[test]
    fn test_json_is_untagged() {
        let v: Vec<ArgValue> = serde_json::from_str(r#"[52, 0.5, "C4"]"#).unwrap();
        assert_eq!(
            v,
            vec![
                ArgValue::Int(52),
                ArgValue::Float(0.5),
                ArgValue::Symbol("C4".into())
            ]
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(130.0), "130");
        assert_eq!(format_number(0.5), "0.5");
    }
}
