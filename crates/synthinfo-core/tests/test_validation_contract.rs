//! Validation behaviour across the built-in catalog.

use pretty_assertions::assert_eq;
use synthinfo_core::rules::{between_exclusive, between_inclusive};
use synthinfo_core::{arg_map, ArgValue, InstrumentDefinition, ParamSpec, Registry, ValidationError};

#[test]
fn test_negative_note_rejected() {
    let registry = Registry::builtin().unwrap();
    let err = registry
        .validate("dull_bell", arg_map! { "note" => -5 })
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("note"));
    assert!(message.contains("-5"));
    let default_note = arg_map! { "note" => 52 };
    assert!(registry.validate("dull_bell", default_note).is_ok());
}

#[test]
fn test_repeated_validation_is_stable() {
    let registry = Registry::builtin().unwrap();
    let bad = arg_map! { "amp" => 0.5, "pan" => 2 };
    let good = arg_map! { "amp" => 0.5, "pan" => -1 };
    let first = registry.validate("saw", &bad);
    let second = registry.validate("saw", &bad);
    assert_eq!(first, second);
    assert_eq!(registry.validate("saw", &good), Ok(()));
    assert_eq!(registry.validate("saw", &good), Ok(()));
}

#[test]
fn test_inclusive_and_exclusive_bounds() {
    let inclusive = between_inclusive("x", 0.0, 1.0);
    let exclusive = between_exclusive("x", 0.0, 1.0);
    for edge in [0, 1] {
        let args = arg_map! { "x" => edge };
        assert!(inclusive.check(&args));
        assert!(!exclusive.check(&args));
    }
}

#[test]
fn test_mod_width_bounds_are_exclusive() {
    let registry = Registry::builtin().unwrap();
    let centred = arg_map! { "mod_width" => 0.5 };
    assert!(registry.validate("mod_saw", centred).is_ok());
    let err = registry
        .validate("mod_saw", arg_map! { "mod_width" => 1 })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value of argument :mod_width must be a value between 0 and 1 exclusively, got 1."
    );
}

#[test]
fn test_cutoff_checks_both_rules_in_order() {
    let registry = Registry::builtin().unwrap();
    let low = registry
        .validate("dsaw", arg_map! { "cutoff" => -1 })
        .unwrap_err();
    assert_eq!(
        low,
        ValidationError::InvalidValue {
            arg: "cutoff".into(),
            value: ArgValue::Int(-1),
            message: "must be zero or greater".into(),
        }
    );
    let high = registry
        .validate("dsaw", arg_map! { "cutoff" => 130 })
        .unwrap_err();
    assert_eq!(
        high.to_string(),
        "Value of argument :cutoff must be a value less than 130, got 130."
    );
}

#[test]
fn test_flat_and_map_forms_agree() {
    let registry = Registry::builtin().unwrap();
    let flat = vec![
        ArgValue::from("amp"),
        ArgValue::from(-1),
        ArgValue::from("mix"),
        ArgValue::from(0.5),
    ];
    let map = arg_map! { "amp" => -1, "mix" => 0.5 };
    assert_eq!(
        registry.validate("fx_reverb", flat),
        registry.validate("fx_reverb", map)
    );
}

#[test]
fn test_flat_form_rejects_malformed_lists() {
    let registry = Registry::builtin().unwrap();
    assert_eq!(
        registry.validate("beep", vec![ArgValue::from("amp")]),
        Err(ValidationError::UnpairedArgs(1))
    );
    assert_eq!(
        registry.validate("beep", vec![ArgValue::from(1), ArgValue::from(2)]),
        Err(ValidationError::InvalidArgName(ArgValue::Int(1)))
    );
}

#[test]
fn test_unknown_arguments_pass_through() {
    let registry = Registry::builtin().unwrap();
    assert!(registry
        .validate("beep", arg_map! { "not_an_arg" => -42 })
        .is_ok());
}

#[test]
fn test_no_type_checking_for_rule_free_args() {
    let registry = Registry::builtin().unwrap();
    assert!(registry
        .validate("fm", arg_map! { "divisor" => "lots" })
        .is_ok());
}

/// An override replaces the baseline entry wholesale, rules included. This
/// mirrors long-standing catalog behaviour and may not be what every author
/// intends: an effect that documents `cutoff` without restating its rules
/// loses the baseline range check.
#[test]
fn test_override_replaces_baseline_entry_wholesale() {
    let open = InstrumentDefinition::fx("fx_open_lpf")
        .name("Open Low Pass Filter")
        .synth_name("fx_open_lpf")
        .arg("cutoff", 100)
        .param(
            "cutoff",
            ParamSpec::new("Cutoff with no limits.").modulatable(),
        )
        .build()
        .unwrap();
    assert!(open.validate(arg_map! { "cutoff" => 500 }).is_ok());
    assert!(open.validate(arg_map! { "cutoff" => -20 }).is_ok());
    assert!(open.rules_for("cutoff").is_empty());

    let registry = Registry::builtin().unwrap();
    assert!(registry
        .validate("fx_lpf", arg_map! { "cutoff" => 500 })
        .is_err());
}
