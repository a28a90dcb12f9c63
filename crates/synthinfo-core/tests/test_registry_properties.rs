//! Catalog-wide registry and definition integration tests.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use synthinfo_core::{arg_map, ArgDefault, DefinitionKind, Registry};

#[test]
fn test_arg_info_defaults_match_declared_defaults() {
    let registry = Registry::builtin().unwrap();
    for (key, def) in registry.iter() {
        let info = def.arg_info();
        let declared: Vec<_> = def.args().collect();
        let documented: Vec<_> = info.keys().collect();
        assert_eq!(declared, documented, "argument order differs for {}", key);
        for (arg, entry) in info.iter() {
            assert_eq!(
                Some(&entry.default),
                def.arg_default(arg),
                "default mismatch for {}.{}",
                key,
                arg
            );
        }
    }
}

#[test]
fn test_every_key_resolves_to_matching_engine_name() {
    let registry = Registry::builtin().unwrap();
    for entry in registry.entries() {
        let def = entry.definition();
        assert!(def.engine_name().starts_with("sonic-pi-"));
        if !entry.is_alias() {
            assert_eq!(entry.key(), def.synth_name());
        }
    }
}

#[test]
fn test_replace_aliases_share_instance() {
    let registry = Registry::builtin().unwrap();
    let echo = registry.get("fx_echo").unwrap();
    let replace = registry.get("fx_replace_echo").unwrap();
    assert!(Arc::ptr_eq(echo, replace));
}

#[test]
fn test_validation_toggle_visible_through_alias() {
    // A private registry so the toggle cannot leak into other tests.
    let registry = Registry::builtin().unwrap();
    let echo = registry.get("fx_echo").unwrap();
    let replace = registry.get("fx_replace_echo").unwrap();

    replace.set_should_validate(false);
    assert!(!echo.should_validate());
    let bad_decay = arg_map! { "decay" => -3 };
    assert!(registry.validate("fx_echo", &bad_decay).is_ok());

    echo.set_should_validate(true);
    assert!(replace.should_validate());
    assert!(registry.validate("fx_replace_echo", &bad_decay).is_err());
}

#[test]
fn test_echo_kill_delay() {
    let registry = Registry::builtin().unwrap();
    let echo = registry.get("fx_echo").unwrap();
    assert_eq!(echo.kill_delay(&arg_map! { "decay" => 12 }), 12.0);
    assert_eq!(echo.kill_delay(&arg_map! {}), 8.0);
}

#[test]
fn test_non_echo_kill_delay_is_one_second() {
    let registry = Registry::builtin().unwrap();
    for key in ["beep", "fx_reverb", "mono_player"] {
        let def = registry.get(key).unwrap();
        assert_eq!(def.kill_delay(&arg_map! { "decay" => 12 }), 1.0, "{}", key);
    }
}

#[test]
fn test_echo_tempo_scaled_keys() {
    let registry = Registry::builtin().unwrap();
    let echo = registry.get("fx_echo").unwrap();
    for key in ["phase", "phase_slide", "decay", "decay_slide", "amp_slide"] {
        assert!(echo.is_bpm_scaled(key), "{} should scale with tempo", key);
    }
    for key in ["amp", "mix", "max_phase"] {
        assert!(
            !echo.is_bpm_scaled(key),
            "{} should not scale with tempo",
            key
        );
    }
}

#[test]
fn test_tempo_keys_are_memoized() {
    let registry = Registry::builtin().unwrap();
    let def = registry.get("dsaw").unwrap();
    let first = def.bpm_scale_args().to_vec();
    let second = def.bpm_scale_args().to_vec();
    assert_eq!(first, second);
    assert!(first.contains(&"detune_slide".to_string()));
}

#[test]
fn test_concurrent_lookups_agree() {
    // A fresh registry so every thread races on the uninitialised tempo memo.
    let registry = Registry::builtin().unwrap();
    let bad_cutoff = arg_map! { "cutoff" => -1 };
    let good_cutoff = arg_map! { "cutoff" => 90 };

    let results: Vec<_> = thread::scope(|scope| {
        let mut workers = Vec::new();
        for _ in 0..8 {
            workers.push(scope.spawn(|| {
                let def = registry.get("dsaw").unwrap();
                (
                    def.bpm_scale_args().to_vec(),
                    registry.validate("dsaw", &bad_cutoff),
                    registry.validate("dsaw", &good_cutoff),
                    Registry::global() as *const Registry as usize,
                )
            }));
        }
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let first = &results[0];
    assert!(first.0.contains(&"detune_slide".to_string()));
    assert!(first.1.is_err());
    assert_eq!(first.2, Ok(()));
    assert_eq!(first.3, Registry::global() as *const Registry as usize);
    for result in &results[1..] {
        assert_eq!(result, first);
    }
}

#[test]
fn test_generated_defaults_are_opaque() {
    let registry = Registry::builtin().unwrap();
    let pulse = registry.get("pulse").unwrap();
    let info = pulse.arg_info();
    let cutoff = info.get("cutoff").unwrap();
    assert!(cutoff.default.is_generator());
    assert_eq!(cutoff.default.to_string(), "rrand(95, 105)");
    assert_eq!(
        info.get("pulse_width").unwrap().default,
        ArgDefault::from(0.5)
    );
}

#[test]
fn test_definitions_by_kind_skip_aliases() {
    let registry = Registry::builtin().unwrap();
    let fx: Vec<_> = registry
        .definitions(DefinitionKind::Fx)
        .map(|d| d.key().to_string())
        .collect();
    assert_eq!(fx.len(), 17);
    assert!(fx.iter().all(|k| !k.starts_with("fx_replace_")));
}

#[test]
fn test_arg_info_serializes_in_declared_order() {
    let registry = Registry::builtin().unwrap();
    let level = registry.get("fx_level").unwrap();
    let json = serde_json::to_value(level.arg_info()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "amp": {
                "doc": level.arg_doc("amp").unwrap(),
                "default": 1,
                "constraints": ["must be zero or greater"],
                "modulatable": true
            },
            "amp_slide": {
                "doc": level.arg_doc("amp_slide").unwrap(),
                "default": 0,
                "constraints": ["must be zero or greater"],
                "modulatable": true
            }
        })
    );
}
