//! Built-in sample groups.

use serde::{Deserialize, Serialize};

/// A named group of bundled samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleGroup {
    /// Category key, e.g. `drum`.
    pub key: String,
    /// Human-readable description.
    pub desc: String,
    /// File-name prefix shared by the group's samples.
    pub prefix: String,
    /// Sample names in catalog order.
    pub samples: Vec<String>,
}

impl SampleGroup {
    fn new(key: &str, desc: &str, prefix: &str, samples: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            desc: desc.to_string(),
            prefix: prefix.to_string(),
            samples: samples.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns true if `sample` belongs to this group.
    pub fn contains(&self, sample: &str) -> bool {
        self.samples.iter().any(|s| s == sample)
    }
}

/// Every sample group, in catalog order.
pub fn grouped_samples() -> Vec<SampleGroup> {
    vec![
        SampleGroup::new(
            "drum",
            "Drum Sounds",
            "drum_",
            &[
                "drum_heavy_kick",
                "drum_tom_mid_soft",
                "drum_tom_mid_hard",
                "drum_tom_lo_soft",
                "drum_tom_lo_hard",
                "drum_tom_hi_soft",
                "drum_tom_hi_hard",
                "drum_splash_soft",
                "drum_splash_hard",
                "drum_snare_soft",
                "drum_snare_hard",
                "drum_cymbal_soft",
                "drum_cymbal_hard",
                "drum_cymbal_open",
                "drum_cymbal_closed",
                "drum_cymbal_pedal",
                "drum_bass_soft",
                "drum_bass_hard",
            ],
        ),
        SampleGroup::new(
            "elec",
            "Electric Sounds",
            "elec_",
            &[
                "elec_triangle",
                "elec_snare",
                "elec_lo_snare",
                "elec_hi_snare",
                "elec_mid_snare",
                "elec_cymbal",
                "elec_soft_kick",
                "elec_filt_snare",
                "elec_fuzz_tom",
                "elec_chime",
                "elec_bong",
                "elec_twang",
                "elec_wood",
                "elec_pop",
                "elec_beep",
                "elec_blip",
                "elec_blip2",
                "elec_ping",
                "elec_bell",
                "elec_flip",
                "elec_tick",
                "elec_hollow_kick",
                "elec_twip",
                "elec_plip",
                "elec_blup",
            ],
        ),
        SampleGroup::new(
            "guit",
            "Sounds featuring guitars",
            "guit_",
            &["guit_harmonics", "guit_e_fifths", "guit_e_slide"],
        ),
        SampleGroup::new("misc", "Miscellaneous Sounds", "misc_", &["misc_burp"]),
        SampleGroup::new("perc", "Percussive Sounds", "perc_", &["perc_bell"]),
        SampleGroup::new(
            "ambi",
            "Ambient Sounds",
            "ambi_",
            &[
                "ambi_soft_buzz",
                "ambi_swoosh",
                "ambi_drone",
                "ambi_glass_hum",
                "ambi_glass_rub",
                "ambi_haunted_hum",
                "ambi_piano",
                "ambi_lunar_land",
                "ambi_dark_woosh",
                "ambi_choir",
            ],
        ),
        SampleGroup::new(
            "bass",
            "Bass Sounds",
            "bass_",
            &[
                "bass_hit_c",
                "bass_hard_c",
                "bass_thick_c",
                "bass_drop_c",
                "bass_woodsy_c",
                "bass_voxy_c",
                "bass_voxy_hit_c",
                "bass_dnb_f",
            ],
        ),
        SampleGroup::new(
            "loop",
            "Sounds for Looping",
            "loop_",
            &[
                "loop_industrial",
                "loop_compus",
                "loop_amen",
                "loop_amen_full",
            ],
        ),
    ]
}
