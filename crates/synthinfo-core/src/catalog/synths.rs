//! Playable synths.

use super::{cutoff, modulation, voice};
use crate::definition::{DefinitionBuilder, InstrumentDefinition};
use crate::params::{rrand, slide_doc, ParamSpec};
use crate::rules;

fn synth(key: &str, name: &str) -> DefinitionBuilder {
    InstrumentDefinition::synth(key).name(name).synth_name(key)
}

/// The modulation family's voice, sharing one envelope.
fn mod_voice(key: &str, name: &str) -> DefinitionBuilder {
    modulation(voice(synth(key, name), 0.01, 2))
}

/// A modulation voice with the cutoff pair ahead of the modulation args.
fn filtered_mod_voice(key: &str, name: &str) -> DefinitionBuilder {
    modulation(cutoff(voice(synth(key, name), 0.01, 2), 100))
}

/// Builders for every playable synth, in registration order.
pub fn builders() -> Vec<DefinitionBuilder> {
    let dull_bell = voice(synth("dull_bell", "Dull Bell"), 0.01, 1)
        .doc("A simple dull dischordant bell sound.");
    let pretty_bell = dull_bell
        .clone()
        .key("pretty_bell")
        .name("Pretty Bell")
        .synth_name("pretty_bell")
        .doc("A simple pretty bell sound.");

    let beep = voice(synth("beep", "Sine Wave"), 0.0, 0.3).doc("A simple pure sine wave.");
    let saw = beep
        .clone()
        .key("saw")
        .name("Saw Wave")
        .synth_name("saw")
        .doc("A simple saw wave with a low pass filter.");
    let saw_s = beep
        .clone()
        .key("saw_s")
        .name("Saw Wave Simple")
        .synth_name("saw_s")
        .doc("A simple saw wave");

    let pulse_voice = voice(synth("pulse", "Pulse Wave"), 0.01, 0.3);
    let pulse = cutoff(pulse_voice, rrand(95.0, 105.0))
        .arg("pulse_width", 0.5)
        .arg("pulse_width_slide", 0)
        .doc("A simple pulse wave with a low pass filter.");
    let pulse_s = voice(synth("pulse_s", "Pulse Wave Simple"), 0.01, 0.3)
        .arg("pulse_width", 0.5)
        .arg("pulse_width_slide", 0)
        .doc("A simple pulse wave.");
    let tri = pulse
        .clone()
        .key("tri")
        .name("Triangle Wave")
        .synth_name("tri")
        .doc("A simple triangle wave with a low pass filter.");
    let tri_s = beep
        .clone()
        .key("tri_s")
        .name("Triangle Wave Simple")
        .synth_name("tri_s")
        .doc("A simple triangle wave.");

    let dsaw = cutoff(voice(synth("dsaw", "Detuned Saw wave"), 0.1, 0.3), 100)
        .arg("detune", 0.1)
        .arg("detune_slide", 0)
        .doc("A pair of detuned saw waves with a low pass filter.");
    let dsaw_s = voice(synth("dsaw_s", "Detuned Saw Wave Simple"), 0.1, 0.3)
        .arg("detune", 0.1)
        .arg("detune_slide", 0)
        .doc("A pair of detuned saw waves.");

    let fm = voice(synth("fm", "Basic FM synthesis"), 1, 1)
        .arg("divisor", 2)
        .arg("divisor_slide", 0)
        .arg("depth", 1)
        .arg("depth_slide", 0)
        .doc("A sine wave with a fundamental frequency which is modulated at audio rate by another sine wave with a specific modulation division and depth.")
        .param(
            "divisor",
            ParamSpec::new("Modifies the frequency of the modulator oscillator relative to the carrier. Don't worry too much about what this means - just try different numbers out!")
                .modulatable(),
        )
        .param(
            "divisor_slide",
            ParamSpec::new(slide_doc("divisor"))
                .rule(rules::non_negative("divisor_slide"))
                .modulatable()
                .bpm_scaled(),
        )
        .param(
            "depth",
            ParamSpec::new("Modifies the depth of the carrier wave used to modify fundamental frequency. Don't worry too much about what this means - just try different numbers out!")
                .modulatable(),
        )
        .param(
            "depth_slide",
            ParamSpec::new(slide_doc("depth"))
                .rule(rules::non_negative("depth_slide"))
                .modulatable()
                .bpm_scaled(),
        );
    let mod_fm = fm
        .clone()
        .key("mod_fm")
        .name("Basic FM synthesis with frequency modulation")
        .synth_name("mod_fm")
        .arg("mod_phase", 1)
        .arg("mod_range", 5)
        .arg("mod_width", 0.5);

    let mod_saw = filtered_mod_voice("mod_saw", "Modulated Saw Wave")
        .arg("mod_phase_offset", 0.5)
        .doc("A saw wave which modulates between two separate notes.");
    let mod_saw_s = mod_voice("mod_saw_s", "Simple Modulated Saw Wave")
        .arg("mod_phase_offset", 0.5)
        .doc("");

    let mod_dsaw = filtered_mod_voice("mod_dsaw", "Modulated Detuned Saw Waves")
        .arg("mod_phase_offset", 0.5)
        .arg("detune", 0.1)
        .arg("detune_slide", 0)
        .doc("");
    let mod_dsaw_s = mod_voice("mod_dsaw_s", "Modulated Detuned Saw Waves Simple")
        .arg("mod_phase_offset", 0.5)
        .arg("detune", 0.1)
        .arg("detune_slide", 0)
        .doc("");

    let mod_sine = filtered_mod_voice("mod_sine", "Modulated Sine Wave")
        .arg("mod_phase_offset", 0.5)
        .doc("");
    let mod_sine_s = mod_voice("mod_sine_s", "Simple Modulated Sine Wave")
        .arg("mod_phase_offset", 0.5)
        .doc("");

    let mod_tri = filtered_mod_voice("mod_tri", "Modulated Triangle Wave")
        .arg("mod_phase_offset", 0.5)
        .doc("");
    let mod_tri_s = mod_voice("mod_tri_s", "Simple Modulated Triangle Wave")
        .arg("mod_phase_offset", 0.5)
        .doc("");

    let mod_pulse = filtered_mod_voice("mod_pulse", "Modulated Pulse")
        .arg("pulse_width", 0.5)
        .arg("pulse_width_slide", 0)
        .doc("");
    let mod_pulse_s = mod_voice("mod_pulse_s", "Simple Modulated Pulse")
        .arg("pulse_width", 0.5)
        .arg("pulse_width_slide", 0)
        .doc("");

    let tb303 = cutoff(voice(synth("tb303", "TB-303 Emulation"), 0.01, 2), 80)
        .arg("cutoff_min", 30)
        .arg("res", 0.1)
        .arg("res_slide", 0)
        .arg("wave", 0)
        .arg("pulse_width", 0.5)
        .arg("pulse_width_slide", 0)
        .doc("")
        .param(
            "cutoff",
            ParamSpec::new("")
                .rule(rules::non_negative("cutoff"))
                .rule(rules::less_than("cutoff", 130.0))
                .modulatable(),
        )
        // The lower cutoff bound is checked against its own value.
        .param(
            "cutoff_min",
            ParamSpec::new("")
                .rule(rules::non_negative("cutoff_min"))
                .rule(rules::less_than("cutoff_min", 130.0))
                .modulatable(),
        )
        .param(
            "wave",
            ParamSpec::new("Wave type - 0 saw, 1 pulse")
                .rule(rules::one_of("wave", [0, 1]))
                .modulatable(),
        )
        .param(
            "pulse_width",
            ParamSpec::new("Only valid if wave is type pulse.")
                .rule(rules::non_negative("pulse_width"))
                .modulatable(),
        )
        .param(
            "pulse_width_slide",
            ParamSpec::new("Time in seconds for pulse width to change. Only valid if wave is type pulse.")
                .rule(rules::non_negative("pulse_width_slide"))
                .modulatable()
                .bpm_scaled(),
        );

    let supersaw = cutoff(voice(synth("supersaw", "Supersaw"), 0.01, 2), 130)
        .arg("res", 0.3)
        .arg("res_slide", 0)
        .doc("");
    let supersaw_s = voice(synth("supersaw_s", "Supersaw Simple"), 0.01, 2).doc("");

    let prophet = cutoff(voice(synth("prophet", "The Prophet"), 0.01, 2), 110)
        .arg("res", 0.3)
        .arg("res_slide", 0)
        .doc("Dark and swirly, this synth uses Pulse Width Modulation (PWM) to create a timbre which continually moves around. This effect is created using the pulse ugen which produces a variable width square wave. We then control the width of the pulses using a variety of LFOs - sin-osc and lf-tri in this case. We use a number of these LFO modulated pulse ugens with varying LFO type and rate (and phase in some cases to provide the LFO with a different starting point. We then mix all these pulses together to create a thick sound and then feed it through a resonant low pass filter (rlpf). For extra bass, one of the pulses is an octave lower (half the frequency) and its LFO has a little bit of randomisation thrown into its frequency component for that extra bit of variety.");

    let zawa = cutoff(voice(synth("zawa", "Zawa"), 0.1, 1), 100)
        .arg("phase", 1)
        .arg("phase_slide", 0)
        .arg("depth", 1.5)
        .arg("depth_slide", 0)
        .doc("Write me");

    vec![
        dull_bell,
        pretty_bell,
        beep,
        saw,
        saw_s,
        pulse,
        pulse_s,
        tri,
        tri_s,
        dsaw,
        dsaw_s,
        fm,
        mod_fm,
        mod_saw,
        mod_saw_s,
        mod_dsaw,
        mod_dsaw_s,
        mod_sine,
        mod_sine_s,
        mod_tri,
        mod_tri_s,
        mod_pulse,
        mod_pulse_s,
        tb303,
        supersaw,
        supersaw_s,
        prophet,
        zawa,
    ]
}
