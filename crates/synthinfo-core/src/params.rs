//! Parameter metadata and the baseline parameter table shared by every
//! definition.

use std::fmt;
use std::sync::{Arc, OnceLock};

use rand::Rng;

use crate::args::OrderedMap;
use crate::rules::{self, Rule};
use crate::value::{format_number, ArgValue};

/// Metadata for one parameter: doc, rules and behaviour flags.
#[derive(Debug, Clone, Default)]
pub struct ParamSpec {
    /// Human-readable description.
    pub doc: String,
    /// Rules evaluated in declared order.
    pub rules: Vec<Rule>,
    /// Whether the value may change on a running voice.
    pub modulatable: bool,
    /// Whether the value is a time that scales with tempo.
    pub bpm_scale: bool,
}

impl ParamSpec {
    /// Creates an entry with the given doc and no rules or flags.
    pub fn new(doc: impl Into<String>) -> Self {
        Self {
            doc: doc.into(),
            ..Self::default()
        }
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Marks the parameter as modulatable.
    pub fn modulatable(mut self) -> Self {
        self.modulatable = true;
        self
    }

    /// Marks the parameter as tempo-scaled.
    pub fn bpm_scaled(mut self) -> Self {
        self.bpm_scale = true;
        self
    }

    /// The failure phrases of this entry's rules, in order.
    pub fn constraints(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.message().to_string()).collect()
    }
}

/// Parameter metadata keyed by argument name.
pub type ParamTable = OrderedMap<ParamSpec>;

/// A zero-argument generator producing a fresh default on every trigger.
#[derive(Clone)]
pub struct DefaultGenerator {
    label: String,
    generate: Arc<dyn Fn() -> ArgValue + Send + Sync>,
}

impl DefaultGenerator {
    /// Creates a generator. `label` is what documentation shows in place of a value.
    pub fn new(
        label: impl Into<String>,
        generate: impl Fn() -> ArgValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            generate: Arc::new(generate),
        }
    }

    /// The generator's display label, e.g. `rrand(95, 105)`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Forces the generator.
    pub fn generate(&self) -> ArgValue {
        (self.generate)()
    }
}

impl fmt::Debug for DefaultGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultGenerator")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Uniform random float in `[min, max)`.
pub fn rrand(min: f64, max: f64) -> DefaultGenerator {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    DefaultGenerator::new(
        format!("rrand({}, {})", format_number(min), format_number(max)),
        move || {
            let r: f64 = rand::thread_rng().gen();
            ArgValue::Float(lo + r * (hi - lo))
        },
    )
}

/// A declared default: a constant, or a generator forced at trigger time.
#[derive(Debug, Clone)]
pub enum ArgDefault {
    Constant(ArgValue),
    Generator(DefaultGenerator),
}

impl ArgDefault {
    /// Returns true for generator defaults.
    pub fn is_generator(&self) -> bool {
        matches!(self, ArgDefault::Generator(_))
    }

    /// The constant value, if this is not a generator.
    pub fn constant(&self) -> Option<&ArgValue> {
        match self {
            ArgDefault::Constant(v) => Some(v),
            ArgDefault::Generator(_) => None,
        }
    }

    /// Produces a concrete value, forcing generators.
    pub fn resolve(&self) -> ArgValue {
        match self {
            ArgDefault::Constant(v) => v.clone(),
            ArgDefault::Generator(g) => g.generate(),
        }
    }
}

/// Constants compare by value, generators by label.
impl PartialEq for ArgDefault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ArgDefault::Constant(a), ArgDefault::Constant(b)) => a == b,
            (ArgDefault::Generator(a), ArgDefault::Generator(b)) => a.label == b.label,
            _ => false,
        }
    }
}

impl fmt::Display for ArgDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgDefault::Constant(v) => write!(f, "{}", v),
            ArgDefault::Generator(g) => write!(f, "{}", g.label),
        }
    }
}

impl serde::Serialize for ArgDefault {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArgDefault::Constant(v) => serde::Serialize::serialize(v, serializer),
            ArgDefault::Generator(g) => serializer.serialize_str(&g.label),
        }
    }
}

impl From<ArgValue> for ArgDefault {
    fn from(v: ArgValue) -> Self {
        ArgDefault::Constant(v)
    }
}

impl From<i32> for ArgDefault {
    fn from(v: i32) -> Self {
        ArgDefault::Constant(ArgValue::from(v))
    }
}

impl From<f64> for ArgDefault {
    fn from(v: f64) -> Self {
        ArgDefault::Constant(ArgValue::from(v))
    }
}

impl From<DefaultGenerator> for ArgDefault {
    fn from(g: DefaultGenerator) -> Self {
        ArgDefault::Generator(g)
    }
}

/// Doc text for a `<name>_slide` parameter.
pub fn slide_doc(name: &str) -> String {
    format!(
        "Amount of time (in seconds) for the {k} value to change. A long {k}_slide value means that the {k} takes a long time to slide from the previous value to the new value. A {k}_slide of 0 means that the {k} instantly changes to the new value.",
        k = name
    )
}

static BASELINE: OnceLock<ParamTable> = OnceLock::new();

/// The shared baseline parameter table.
///
/// Definitions start from a clone of this table and overlay their own entries.
pub fn baseline() -> &'static ParamTable {
    BASELINE.get_or_init(build_baseline)
}

fn build_baseline() -> ParamTable {
    let mut t = ParamTable::new();

    t.insert(
        "mix",
        ParamSpec::new("The amount (percentage) of FX present in the resulting sound represented as a value between 0 and 1. For example, a mix of 0 means that only the original sound is heard, a mix of 1 means that only the FX is heard (typically the default) and a mix of 0.5 means that half the original and half of the FX is heard.")
            .rule(rules::between_inclusive("mix", 0.0, 1.0))
            .modulatable(),
    );
    t.insert(
        "mix_slide",
        ParamSpec::new("Amount of time (in seconds) for the mix value to change. A long slide value means that the mix takes a long time to slide from the previous value to the new value. A slide of 0 means that the mix instantly changes to the new value.")
            .rule(rules::between_inclusive("mix_slide", 0.0, 1.0))
            .modulatable(),
    );
    t.insert(
        "note",
        ParamSpec::new("Note to play. Either a MIDI number or a symbol representing a note. For example: 30, 52, :C, :C2, :Eb4, or :Ds3")
            .rule(rules::non_negative("note"))
            .modulatable(),
    );
    t.insert(
        "note_slide",
        ParamSpec::new("Amount of time (in seconds) for the note to change. A long slide value means that the note takes a long time to slide from the previous note to the new note. A slide of 0 means that the note instantly changes to the new note.")
            .rule(rules::non_negative("note_slide"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "amp",
        ParamSpec::new("The amplitude of the sound. Typically a value between 0 and 1. Higher amplitudes may be used, but won't make the sound louder, it will just reduce the quality of all the sounds currently being played (due to compression.)")
            .rule(rules::non_negative("amp"))
            .modulatable(),
    );
    t.insert(
        "amp_slide",
        ParamSpec::new("Amount of time (in seconds) for the amplitude (amp) to change. A long slide value means that the amp takes a long time to slide from the previous amplitude to the new amplitude. A slide of 0 means that the amplitude instantly changes to the new amplitude.")
            .rule(rules::non_negative("amp_slide"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "pan",
        ParamSpec::new("Position of sound in stereo. With headphones on, this means how much of the sound is in the left ear, and how much is in the right ear. With a value of -1, the sound is completely in the left ear, a value of 0 puts the sound equally in both ears and a value of 1 puts the sound in the right ear. Values in between -1 and 1 move the sound accordingly.")
            .rule(rules::between_inclusive("pan", -1.0, 1.0))
            .modulatable(),
    );
    t.insert(
        "pan_slide",
        ParamSpec::new("Amount of time (in seconds) for the pan to change. A long slide value means that the pan takes a long time to slide from the previous pan position to the new pan position. A slide of 0 means that the pan instantly changes to the new pan position.")
            .rule(rules::non_negative("pan_slide"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "attack",
        ParamSpec::new("Amount of time (in seconds) for sound to reach full amplitude (attack_level). A short attack (i.e. 0.01) makes the initial part of the sound very percussive like a sharp tap. A longer attack (i.e 1) fades the sound in gently. Full length of sound is attack + sustain + release.")
            .rule(rules::non_negative("attack"))
            .bpm_scaled(),
    );
    t.insert(
        "decay",
        ParamSpec::new("Amount of time (in seconds) for the sound to move from full amplitude (attack_level) to the sustain amplitude (sustain_level).")
            .rule(rules::non_negative("decay"))
            .bpm_scaled(),
    );
    t.insert(
        "sustain",
        ParamSpec::new("Amount of time (in seconds) for sound to remain at full amplitude. Longer sustain values result in longer sounds. Full length of sound is attack + sustain + release.")
            .rule(rules::non_negative("sustain"))
            .bpm_scaled(),
    );
    t.insert(
        "release",
        ParamSpec::new("Amount of time (in seconds) for sound to move from full amplitude to silent. A short release (i.e. 0.01) makes the final part of the sound very percussive (potentially resulting in a click). A longer release (i.e 1) fades the sound out gently. Full length of sound is attack + sustain + release.")
            .rule(rules::non_negative("release"))
            .bpm_scaled(),
    );
    t.insert(
        "attack_level",
        ParamSpec::new("Amplitude level reached after attack phase and immediately before decay phase")
            .rule(rules::non_negative("attack_level")),
    );
    t.insert(
        "sustain_level",
        ParamSpec::new("Amplitude level reached after decay phase and immediately before release phase.")
            .rule(rules::non_negative("sustain_level")),
    );
    t.insert(
        "cutoff",
        ParamSpec::new("MIDI note representing the highest frequencies allowed to be present in the sound. A low value like 30 makes the sound round and dull, a high value like 100 makes the sound buzzy and crispy.")
            .rule(rules::non_negative("cutoff"))
            .rule(rules::less_than("cutoff", 130.0))
            .modulatable(),
    );
    t.insert(
        "cutoff_slide",
        ParamSpec::new("Amount of time (in seconds) for the cutoff value to change. A long cutoff_slide value means that the cutoff takes a long time to slide from the previous value to the new value. A cutoff_slide of 0 means that the cutoff instantly changes to the new value.")
            .rule(rules::non_negative("cutoff_slide"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "detune",
        ParamSpec::new("Distance (in MIDI notes) between components of sound. Affects thickness, sense of tuning and harmony. Tiny values such as 0.1 create a thick sound. Larger values such as 0.5 make the tuning sound strange. Even bigger values such as 5 create chord-like sounds.")
            .modulatable(),
    );
    t.insert(
        "detune_slide",
        ParamSpec::new(slide_doc("detune"))
            .rule(rules::non_negative("detune_slide"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "mod_phase",
        ParamSpec::new("Phase duration in seconds of oscillations between the two notes. Time it takes to switch between the notes.")
            .rule(rules::positive("mod_phase"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "mod_phase_offset",
        ParamSpec::new("Initial modulation phase offset (a value between 0 and 1).")
            .rule(rules::between_inclusive("mod_phase_offset", 0.0, 1.0)),
    );
    t.insert(
        "mod_phase_slide",
        ParamSpec::new(slide_doc("mod_phase"))
            .rule(rules::non_negative("mod_phase_slide"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "mod_range",
        ParamSpec::new("The size of gap between modulation notes. A gap of 12 is one octave.")
            .rule(rules::non_negative("mod_range"))
            .modulatable(),
    );
    t.insert(
        "mod_range_slide",
        ParamSpec::new(slide_doc("mod_range"))
            .rule(rules::non_negative("mod_range_slide"))
            .modulatable()
            .bpm_scaled(),
    );
    t.insert(
        "mod_width",
        ParamSpec::new("The phase width of the modulation. Represents how even the gap between modulations is.")
            .rule(rules::between_exclusive("mod_width", 0.0, 1.0))
            .modulatable(),
    );
    t.insert(
        "mod_width_slide",
        ParamSpec::new(slide_doc("mod_width"))
            .rule(rules::non_negative("mod_width_slide"))
            .modulatable()
            .bpm_scaled(),
    );

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_has_common_parameters() {
        let table = baseline();
        for key in "mix note amp pan attack release cutoff detune mod_width".split_whitespace() {
            assert!(table.contains_key(key), "baseline missing {}", key);
        }
        assert_eq!(table.len(), 25);
    }

    #[test]
    fn test_baseline_cutoff_has_two_rules() {
        let cutoff = baseline().get("cutoff").unwrap();
        assert_eq!(
            cutoff.constraints(),
            vec!["must be zero or greater", "must be a value less than 130"]
        );
        assert!(cutoff.modulatable);
        assert!(!cutoff.bpm_scale);
    }

    #[test]
    fn test_envelope_times_are_tempo_scaled_but_not_modulatable() {
        for key in ["attack", "decay", "sustain", "release"] {
            let spec = baseline().get(key).unwrap();
            assert!(spec.bpm_scale, "{} should scale with tempo", key);
            assert!(!spec.modulatable, "{} should not be modulatable", key);
        }
    }

    #[test]
    fn test_rrand_stays_in_range_and_is_labelled() {
        let g = rrand(95.0, 105.0);
        assert_eq!(g.label(), "rrand(95, 105)");
        for _ in 0..100 {
            let v = g.generate().as_f64().unwrap();
            assert!((95.0..105.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_generator_default_renders_label() {
        let d = ArgDefault::from(rrand(95.0, 105.0));
        assert!(d.is_generator());
        assert_eq!(d.constant(), None);
        assert_eq!(d.to_string(), "rrand(95, 105)");
        assert_eq!(d, ArgDefault::from(rrand(95.0, 105.0)));
    }

    #[test]
    fn test_constant_default_display() {
        assert_eq!(ArgDefault::from(52).to_string(), "52");
        assert_eq!(ArgDefault::from(0.01).to_string(), "0.01");
        assert_eq!(ArgDefault::from(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_slide_doc_mentions_parameter() {
        let doc = slide_doc("detune");
        assert!(doc.contains("detune_slide"));
    }
}
