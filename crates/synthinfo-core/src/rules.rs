//! Validation rule constructors.
//!
//! Every rule pairs a predicate with the phrase shown when it fails. Predicates
//! see the whole argument map so a rule can relate several arguments, although
//! the built-in constructors only inspect their target argument.
//!
//! A numeric rule fails when its target argument is absent or is a symbol; no
//! coercion is attempted.

use std::fmt;
use std::sync::Arc;

use crate::args::ArgMap;
use crate::value::{format_number, ArgValue};

/// Shared predicate over a full argument map.
pub type Predicate = Arc<dyn Fn(&ArgMap) -> bool + Send + Sync>;

/// A validation rule: predicate plus failure phrase.
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Creates a rule from an arbitrary predicate.
    pub fn new(
        message: impl Into<String>,
        predicate: impl Fn(&ArgMap) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// The failure phrase, e.g. "must be zero or greater".
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluates the rule against the full argument map.
    pub fn check(&self, args: &ArgMap) -> bool {
        (self.predicate)(args)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

fn numeric(arg: &str, msg: String, test: impl Fn(f64) -> bool + Send + Sync + 'static) -> Rule {
    let arg = arg.to_string();
    Rule::new(msg, move |args: &ArgMap| {
        args.number(&arg).is_some_and(&test)
    })
}

/// `arg >= 0`.
pub fn non_negative(arg: &str) -> Rule {
    numeric(arg, "must be zero or greater".into(), |v| v >= 0.0)
}

/// `arg > 0`.
pub fn positive(arg: &str) -> Rule {
    numeric(arg, "must be greater than zero".into(), |v| v > 0.0)
}

/// `min <= arg <= max`.
pub fn between_inclusive(arg: &str, min: f64, max: f64) -> Rule {
    numeric(
        arg,
        format!(
            "must be a value between {} and {} inclusively",
            format_number(min),
            format_number(max)
        ),
        move |v| v >= min && v <= max,
    )
}

/// `min < arg < max`.
pub fn between_exclusive(arg: &str, min: f64, max: f64) -> Rule {
    numeric(
        arg,
        format!(
            "must be a value between {} and {} exclusively",
            format_number(min),
            format_number(max)
        ),
        move |v| v > min && v < max,
    )
}

/// `arg < max`.
pub fn less_than(arg: &str, max: f64) -> Rule {
    numeric(
        arg,
        format!("must be a value less than {}", format_number(max)),
        move |v| v < max,
    )
}

/// `arg` equals one of `options` (numbers compare across int/float).
pub fn one_of<I, T>(arg: &str, options: I) -> Rule
where
    I: IntoIterator<Item = T>,
    T: Into<ArgValue>,
{
    let options: Vec<ArgValue> = options.into_iter().map(Into::into).collect();
    let listed = options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let arg = arg.to_string();
    Rule::new(
        format!("must be one of the following values: [{}]", listed),
        move |args: &ArgMap| {
            args.get(&arg)
                .is_some_and(|v| options.iter().any(|o| o.loosely_eq(v)))
        },
    )
}

/// A rule with a hand-written predicate, for cross-field or sentinel checks.
pub fn custom(
    message: impl Into<String>,
    predicate: impl Fn(&ArgMap) -> bool + Send + Sync + 'static,
) -> Rule {
    Rule::new(message, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg_map;

    #[test]
    fn test_non_negative() {
        let rule = non_negative("amp");
        assert!(rule.check(&arg_map! { "amp" => 0 }));
        assert!(rule.check(&arg_map! { "amp" => 0.7 }));
        assert!(!rule.check(&arg_map! { "amp" => -0.1 }));
        assert_eq!(rule.message(), "must be zero or greater");
    }

    #[test]
    fn test_positive_rejects_zero() {
        let rule = positive("phase");
        assert!(!rule.check(&arg_map! { "phase" => 0 }));
        assert!(rule.check(&arg_map! { "phase" => 0.25 }));
        assert_eq!(rule.message(), "must be greater than zero");
    }

    #[test]
    fn test_between_inclusive_accepts_bounds() {
        let rule = between_inclusive("x", 0.0, 1.0);
        assert!(rule.check(&arg_map! { "x" => 0 }));
        assert!(rule.check(&arg_map! { "x" => 1 }));
        assert!(rule.check(&arg_map! { "x" => 0.5 }));
        assert!(!rule.check(&arg_map! { "x" => 1.01 }));
        assert_eq!(
            rule.message(),
            "must be a value between 0 and 1 inclusively"
        );
    }

    #[test]
    fn test_between_exclusive_rejects_bounds() {
        let rule = between_exclusive("x", 0.0, 1.0);
        assert!(!rule.check(&arg_map! { "x" => 0 }));
        assert!(!rule.check(&arg_map! { "x" => 1 }));
        assert!(rule.check(&arg_map! { "x" => 0.5 }));
        assert_eq!(
            rule.message(),
            "must be a value between 0 and 1 exclusively"
        );
    }

    #[test]
    fn test_between_formats_negative_bounds() {
        let rule = between_inclusive("pan", -1.0, 1.0);
        assert_eq!(
            rule.message(),
            "must be a value between -1 and 1 inclusively"
        );
    }

    #[test]
    fn test_less_than() {
        let rule = less_than("cutoff", 130.0);
        assert!(rule.check(&arg_map! { "cutoff" => 129.9 }));
        assert!(!rule.check(&arg_map! { "cutoff" => 130 }));
        assert_eq!(rule.message(), "must be a value less than 130");
    }

    #[test]
    fn test_one_of() {
        let rule = one_of("wave", [0, 1]);
        assert!(rule.check(&arg_map! { "wave" => 0 }));
        assert!(rule.check(&arg_map! { "wave" => 1.0 }));
        assert!(!rule.check(&arg_map! { "wave" => 2 }));
        assert_eq!(
            rule.message(),
            "must be one of the following values: [0, 1]"
        );
    }

    #[test]
    fn test_missing_or_symbolic_target_fails() {
        let rule = non_negative("note");
        assert!(!rule.check(&arg_map! { "amp" => 1 }));
        assert!(!rule.check(&arg_map! { "note" => "C4" }));
    }

    #[test]
    fn test_custom_sees_whole_map() {
        let rule = custom("must not exceed finish", |args: &ArgMap| {
            match (args.number("start"), args.number("finish")) {
                (Some(s), Some(f)) => s <= f,
                _ => true,
            }
        });
        assert!(rule.check(&arg_map! { "start" => 0.2, "finish" => 0.8 }));
        assert!(!rule.check(&arg_map! { "start" => 0.9, "finish" => 0.1 }));
    }

    #[test]
    fn test_constructors_are_deterministic() {
        let a = between_inclusive("mix", 0.0, 1.0);
        let b = between_inclusive("mix", 0.0, 1.0);
        let args = arg_map! { "mix" => 0.3 };
        assert_eq!(a.message(), b.message());
        assert_eq!(a.check(&args), b.check(&args));
    }
}
