//! The built-in catalog: every synth, studio player, effect and sample group
//! shipped with the platform.
//!
//! Each submodule returns builders in registration order; the registry builds
//! and registers them.

pub mod fx;
pub mod samples;
pub mod studio;
pub mod synths;

use crate::definition::DefinitionBuilder;
use crate::params::ArgDefault;

pub use samples::SampleGroup;

/// Note, amplitude and pan arguments with their slides.
pub(crate) fn note_amp_pan(builder: DefinitionBuilder) -> DefinitionBuilder {
    builder
        .arg("note", 52)
        .arg("note_slide", 0)
        .arg("amp", 1)
        .arg("amp_slide", 0)
        .arg("pan", 0)
        .arg("pan_slide", 0)
}

/// The ADSR envelope block. Decay and sustain default to zero, levels to one.
pub(crate) fn envelope(
    builder: DefinitionBuilder,
    attack: impl Into<ArgDefault>,
    release: impl Into<ArgDefault>,
) -> DefinitionBuilder {
    builder
        .arg("attack", attack)
        .arg("decay", 0)
        .arg("sustain", 0)
        .arg("release", release)
        .arg("attack_level", 1)
        .arg("sustain_level", 1)
}

/// A playable voice: note/amp/pan followed by the envelope.
pub(crate) fn voice(
    builder: DefinitionBuilder,
    attack: impl Into<ArgDefault>,
    release: impl Into<ArgDefault>,
) -> DefinitionBuilder {
    envelope(note_amp_pan(builder), attack, release)
}

/// Filter cutoff and its slide.
pub(crate) fn cutoff(
    builder: DefinitionBuilder,
    default: impl Into<ArgDefault>,
) -> DefinitionBuilder {
    builder.arg("cutoff", default).arg("cutoff_slide", 0)
}

/// The note modulation family with slides.
pub(crate) fn modulation(builder: DefinitionBuilder) -> DefinitionBuilder {
    builder
        .arg("mod_phase", 1)
        .arg("mod_phase_slide", 0)
        .arg("mod_range", 5)
        .arg("mod_range_slide", 0)
        .arg("mod_width", 0.5)
        .arg("mod_width_slide", 0)
}

/// FX amplitude and wet/dry mix.
pub(crate) fn amp_mix(builder: DefinitionBuilder, mix: impl Into<ArgDefault>) -> DefinitionBuilder {
    builder
        .arg("amp", 1)
        .arg("amp_slide", 0)
        .arg("mix", mix)
        .arg("mix_slide", 0)
}
