//! Internal sample players and the mixer.

use crate::args::ArgMap;
use crate::definition::{DefinitionBuilder, InstrumentDefinition};
use crate::params::ParamSpec;
use crate::rules;

fn studio(key: &str, name: &str) -> DefinitionBuilder {
    InstrumentDefinition::studio(key).name(name).synth_name(key)
}

fn amp_pan(builder: DefinitionBuilder) -> DefinitionBuilder {
    builder
        .arg("amp", 1)
        .arg("amp_slide", 0)
        .arg("pan", 0)
        .arg("pan_slide", 0)
}

/// The enveloped sample player. The stereo player shares its arguments.
pub(crate) fn mono_player() -> DefinitionBuilder {
    amp_pan(studio("mono_player", "Mono Sample Player"))
        .arg("attack", 0)
        .arg("sustain", -1)
        .arg("release", 0)
        .arg("rate", 1)
        .arg("start", 0)
        .arg("finish", 1)
        .doc("")
        .param(
            "attack",
            ParamSpec::new("").rule(rules::non_negative("attack")),
        )
        // Sustain and release rules each check their own argument.
        .param(
            "sustain",
            ParamSpec::new("").rule(rules::custom(
                "must either be a positive value or -1",
                sustain_in_range,
            )),
        )
        .param(
            "release",
            ParamSpec::new("").rule(rules::non_negative("release")),
        )
        .param("rate", ParamSpec::new(""))
        .param(
            "start",
            ParamSpec::new("")
                .rule(rules::non_negative("start"))
                .rule(rules::between_inclusive("start", 0.0, 1.0)),
        )
        .param(
            "finish",
            ParamSpec::new("")
                .rule(rules::non_negative("finish"))
                .rule(rules::between_inclusive("finish", 0.0, 1.0)),
        )
}

/// Sustain is non-negative or the `-1` "hold until release" sentinel.
fn sustain_in_range(args: &ArgMap) -> bool {
    match args.number("sustain") {
        Some(v) => v == -1.0 || v >= 0.0,
        None => false,
    }
}

/// The player whose arguments sample documentation shows.
pub(crate) fn stereo_player() -> DefinitionBuilder {
    mono_player()
        .key("stereo_player")
        .name("Stereo Sample Player")
        .synth_name("stereo_player")
}

/// Builders for every studio definition, in registration order.
pub fn builders() -> Vec<DefinitionBuilder> {
    let basic_mono_player = amp_pan(studio(
        "basic_mono_player",
        "Basic Mono Sample Player (no env)",
    ))
    .arg("rate", 1)
    .arg("rate_slide", 0)
    .doc("");
    let basic_stereo_player = basic_mono_player
        .clone()
        .key("basic_stereo_player")
        .name("Basic Stereo Sample Player (no env)")
        .synth_name("basic_stereo_player");

    let basic_mixer = studio("basic_mixer", "Basic Mixer")
        .arg("amp", 1)
        .arg("amp_slide", 0.2);

    vec![
        mono_player(),
        stereo_player(),
        basic_mono_player,
        basic_stereo_player,
        basic_mixer,
    ]
}
