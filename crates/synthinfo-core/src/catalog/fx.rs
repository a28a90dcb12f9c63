//! Audio effects.

use super::amp_mix;
use crate::definition::{DefinitionBuilder, InstrumentDefinition, KillDelay};
use crate::params::ParamSpec;
use crate::rules;

/// Registry keys of replacement aliases start with this.
pub const REPLACE_PREFIX: &str = "fx_replace_";

/// Length of the `fx_` prefix stripped from user-facing FX names.
pub const FX_PREFIX_LEN: usize = 3;

/// An effect builder plus whether it also answers to `fx_replace_<name>`.
#[derive(Debug, Clone)]
pub struct FxEntry {
    pub builder: DefinitionBuilder,
    pub replaceable: bool,
}

/// The replacement alias key for an effect key, e.g. `fx_replace_echo`.
pub fn replace_alias(key: &str) -> String {
    format!("{}{}", REPLACE_PREFIX, user_facing_name(key))
}

/// The user-facing name of an effect key, e.g. `echo` for `fx_echo`.
pub fn user_facing_name(key: &str) -> &str {
    key.get(FX_PREFIX_LEN..).unwrap_or(key)
}

fn fx(key: &str, name: &str) -> DefinitionBuilder {
    InstrumentDefinition::fx(key).name(name).synth_name(key)
}

fn phase(doc: &str) -> ParamSpec {
    ParamSpec::new(doc)
        .rule(rules::positive("phase"))
        .modulatable()
        .bpm_scaled()
}

fn phase_slide() -> ParamSpec {
    ParamSpec::new("Slide time in seconds between phase values")
        .rule(rules::non_negative("phase_slide"))
        .modulatable()
        .bpm_scaled()
}

fn resonant(builder: DefinitionBuilder) -> DefinitionBuilder {
    builder
        .arg("cutoff", 100)
        .arg("cutoff_slide", 0)
        .arg("res", 0.5)
        .arg("res_slide", 0)
}

/// Effect builders in registration order.
pub fn entries() -> Vec<FxEntry> {
    let bitcrusher = amp_mix(fx("fx_bitcrusher", "Bitcrusher"), 1)
        .arg("sample_rate", 10000)
        .arg("sample_rate_slide", 0)
        .arg("bits", 8)
        .arg("bits_slide", 0)
        .param(
            "sample_rate",
            ParamSpec::new("The sample rate the audio will be resampled at.")
                .rule(rules::positive("sample_rate"))
                .modulatable(),
        )
        .param(
            "bits",
            ParamSpec::new("The bit depth of the resampled audio.")
                .rule(rules::positive("bits"))
                .modulatable(),
        );

    let reverb = amp_mix(fx("fx_reverb", "Reverb"), 0.4)
        .arg("room", 0.6)
        .arg("room_slide", 0)
        .arg("damp", 0.5)
        .arg("damp_slide", 0);

    let level = fx("fx_level", "Level Amplifier")
        .arg("amp", 1)
        .arg("amp_slide", 0);

    let echo = amp_mix(fx("fx_echo", "Echo"), 1)
        .arg("phase", 0.25)
        .arg("phase_slide", 0)
        .arg("decay", 8)
        .arg("decay_slide", 0)
        .arg("max_phase", 2)
        .arg("amp", 1)
        .arg("amp_slide", 0)
        .param(
            "max_phase",
            ParamSpec::new("The maximum phase duration in seconds.")
                .rule(rules::positive("max_phase")),
        )
        .param("phase", phase("The time between echoes in seconds."))
        .param("phase_slide", phase_slide())
        .param(
            "decay",
            ParamSpec::new("The time it takes for the echoes to fade away in seconds.")
                .rule(rules::positive("decay"))
                .modulatable()
                .bpm_scaled(),
        )
        .param(
            "decay_slide",
            ParamSpec::new("Slide time in seconds between decay times")
                .rule(rules::non_negative("decay_slide"))
                .modulatable()
                .bpm_scaled(),
        )
        .kill_delay(KillDelay::FromArg("decay".into()));

    let slicer = amp_mix(fx("fx_slicer", "Slicer"), 1)
        .arg("phase", 0.25)
        .arg("phase_slide", 0)
        .arg("width", 0.5)
        .arg("width_slide", 0)
        .arg("phase_offset", 0)
        .arg("amp", 1)
        .arg("amp_slide", 0.05)
        .param(
            "phase",
            phase("The phase duration (in seconds) of the slices"),
        )
        .param("phase_slide", phase_slide())
        .param(
            "width",
            ParamSpec::new("The width of the slices - 0 - 1.")
                .rule(rules::between_exclusive("width", 0.0, 1.0))
                .modulatable(),
        )
        .param(
            "width_slide",
            ParamSpec::new("Slide time in seconds between width values")
                .rule(rules::non_negative("width_slide"))
                .modulatable()
                .bpm_scaled(),
        )
        .param(
            "phase_offset",
            ParamSpec::new("Initial phase offset.")
                .rule(rules::between_inclusive("phase_offset", 0.0, 1.0)),
        )
        .param(
            "amp_slide",
            ParamSpec::new("The slide lag time for amplitude changes.")
                .rule(rules::non_negative("amp_slide"))
                .modulatable()
                .bpm_scaled(),
        )
        .param(
            "amp",
            ParamSpec::new("The amplitude of the resulting effect.")
                .rule(rules::non_negative("amp"))
                .modulatable(),
        );

    let ixi_techno = amp_mix(fx("fx_ixi_techno", "Techno from IXI Lang"), 1)
        .arg("phase", 4)
        .arg("phase_slide", 0)
        .arg("cutoff_min", 60)
        .arg("cutoff_min_slide", 0)
        .arg("cutoff_max", 120)
        .arg("cutoff_max_slide", 0)
        .arg("res", 0.2)
        .arg("res_slide", 0)
        .param(
            "phase",
            phase("The phase duration (in seconds) for filter modulation cycles"),
        );

    let compressor = amp_mix(fx("fx_compressor", "Compressor"), 1)
        .arg("pre_amp", 1)
        .arg("pre_amp_slide", 0)
        .arg("threshold", 0.2)
        .arg("threshold_slide", 0)
        .arg("clamp_time", 0.01)
        .arg("clamp_time_slide", 0)
        .arg("slope_above", 0.5)
        .arg("slope_above_slide", 0)
        .arg("slope_below", 1)
        .arg("slope_below_slide", 0)
        .arg("relax_time", 0.01)
        .arg("relax_time_slide", 0)
        .param(
            "pre_amp",
            ParamSpec::new("Amplication applied to the signal before it is compressed.")
                .rule(rules::non_negative("pre_amp"))
                .modulatable(),
        )
        .param(
            "pre_amp_slide",
            ParamSpec::new("Slide time in seconds between pre_amp values")
                .rule(rules::non_negative("pre_amp_slide"))
                .modulatable()
                .bpm_scaled(),
        );

    let rlpf = resonant(amp_mix(fx("fx_rlpf", "Resonant Low Pass Filter"), 1));
    let norm_rlpf = rlpf
        .clone()
        .key("fx_norm_rlpf")
        .name("Normalised Resonant Low Pass Filter")
        .synth_name("fx_norm_rlpf");
    let rhpf = resonant(amp_mix(fx("fx_rhpf", "Resonant High Pass Filter"), 1));
    let norm_rhpf = rlpf
        .clone()
        .key("fx_norm_rhpf")
        .name("Normalised Resonant High Pass Filter")
        .synth_name("fx_norm_rhpf");

    let hpf = amp_mix(fx("fx_hpf", "High Pass Filter"), 1)
        .arg("cutoff", 100)
        .arg("cutoff_slide", 0);
    // Shares the resonant filter's arguments, res included.
    let norm_hpf = rlpf
        .clone()
        .key("fx_norm_hpf")
        .name("Normalised High Pass Filter")
        .synth_name("fx_norm_hpf");

    let lpf = amp_mix(fx("fx_lpf", "Low Pass Filter"), 1)
        .arg("cutoff", 100)
        .arg("cutoff_slide", 0);
    let norm_lpf = lpf
        .clone()
        .key("fx_norm_lpf")
        .name("Normalised Low Pass Filter")
        .synth_name("fx_norm_lpf");

    let normaliser = amp_mix(fx("fx_normaliser", "Normaliser"), 1);

    let distortion = amp_mix(fx("fx_distortion", "Distortion"), 1)
        .arg("distort", 0.5)
        .arg("distort_slide", 0);

    let entry = |builder: DefinitionBuilder| FxEntry {
        builder,
        replaceable: true,
    };

    vec![
        FxEntry {
            builder: bitcrusher,
            replaceable: false,
        },
        entry(reverb),
        entry(level),
        entry(echo),
        entry(slicer),
        entry(ixi_techno),
        entry(compressor),
        entry(rlpf),
        entry(norm_rlpf),
        entry(rhpf),
        entry(norm_rhpf),
        entry(hpf),
        entry(norm_hpf),
        entry(lpf),
        entry(norm_lpf),
        entry(normaliser),
        entry(distortion),
    ]
}
