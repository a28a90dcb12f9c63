//! Synth, studio and FX definitions.
//!
//! A definition is a flat record: identity, the argument defaults that double
//! as the argument allow-list, and the merged parameter metadata. Definitions
//! are composed with [`DefinitionBuilder`], which starts from the shared
//! baseline table and overlays definition-specific entries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::args::{ArgMap, Args, OrderedMap};
use crate::error::{DefinitionError, ValidationError};
use crate::params::{self, ArgDefault, ParamSpec, ParamTable};
use crate::rules::Rule;
use crate::validation;

/// Prefix shared by every engine-side synth name.
pub const ENGINE_PREFIX: &str = "sonic-pi-";

/// Doc used when a definition provides none.
pub const DEFAULT_DOC: &str = "Please write documentation!";

/// Kill delay in seconds unless a definition says otherwise.
pub const DEFAULT_KILL_DELAY: f64 = 1.0;

/// Key format for registry keys and engine synth names.
fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("invalid regex pattern"))
}

/// Returns true if `key` is a valid definition key.
pub fn is_valid_key(key: &str) -> bool {
    key_regex().is_match(key)
}

/// What a definition is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    /// A playable synth.
    Synth,
    /// An internal sample player or mixer.
    Studio,
    /// An audio effect.
    Fx,
}

impl DefinitionKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKind::Synth => "synth",
            DefinitionKind::Studio => "studio",
            DefinitionKind::Fx => "fx",
        }
    }

    /// Returns all kinds.
    pub fn all() -> &'static [DefinitionKind] {
        &[
            DefinitionKind::Synth,
            DefinitionKind::Studio,
            DefinitionKind::Fx,
        ]
    }
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DefinitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "synth" => Ok(DefinitionKind::Synth),
            "studio" => Ok(DefinitionKind::Studio),
            "fx" => Ok(DefinitionKind::Fx),
            _ => Err(format!("unknown definition kind: {}", s)),
        }
    }
}

/// How long the engine waits after release before freeing a node.
#[derive(Debug, Clone, PartialEq)]
pub enum KillDelay {
    /// A constant number of seconds.
    Fixed(f64),
    /// The value of the named argument, falling back to its declared default.
    FromArg(String),
}

impl Default for KillDelay {
    fn default() -> Self {
        KillDelay::Fixed(DEFAULT_KILL_DELAY)
    }
}

/// Documentation view of one argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgInfo {
    /// Parameter doc, empty when undocumented.
    pub doc: String,
    /// Declared default.
    pub default: ArgDefault,
    /// Failure phrases of the parameter's rules, in order.
    pub constraints: Vec<String>,
    /// Whether the value may change while playing.
    pub modulatable: bool,
}

/// A synth, studio or FX definition.
#[derive(Debug)]
pub struct InstrumentDefinition {
    key: String,
    kind: DefinitionKind,
    name: String,
    synth_name: String,
    doc: String,
    arg_defaults: OrderedMap<ArgDefault>,
    info: ParamTable,
    kill_delay: KillDelay,
    should_validate: AtomicBool,
    bpm_scale_args: OnceLock<Vec<String>>,
}

impl InstrumentDefinition {
    /// Creates a builder for a playable synth.
    pub fn synth(key: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder::new(DefinitionKind::Synth, key)
    }

    /// Creates a builder for a studio definition.
    pub fn studio(key: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder::new(DefinitionKind::Studio, key)
    }

    /// Creates a builder for an FX definition.
    pub fn fx(key: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder::new(DefinitionKind::Fx, key)
    }

    /// Canonical registry key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    /// Display name, e.g. "Dull Bell".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Engine synth name without the engine prefix.
    pub fn synth_name(&self) -> &str {
        &self.synth_name
    }

    /// Full engine-facing identifier, e.g. `sonic-pi-dull_bell`.
    pub fn engine_name(&self) -> String {
        format!("{}{}", ENGINE_PREFIX, self.synth_name)
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Declared defaults in declaration order.
    pub fn arg_defaults(&self) -> &OrderedMap<ArgDefault> {
        &self.arg_defaults
    }

    /// The argument allow-list.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.arg_defaults.keys()
    }

    /// Merged parameter metadata, including entries that are not arguments.
    pub fn info(&self) -> &ParamTable {
        &self.info
    }

    /// Returns true if `arg` is one of the declared arguments.
    pub fn is_valid_arg(&self, arg: &str) -> bool {
        self.arg_defaults.contains_key(arg)
    }

    /// Declared default for `arg`.
    pub fn arg_default(&self, arg: &str) -> Option<&ArgDefault> {
        self.arg_defaults.get(arg)
    }

    /// Doc for a declared argument, if it has metadata.
    pub fn arg_doc(&self, arg: &str) -> Option<&str> {
        if !self.is_valid_arg(arg) {
            return None;
        }
        self.info.get(arg).map(|spec| spec.doc.as_str())
    }

    /// Rules that apply to `arg`. Unknown arguments have none.
    pub fn rules_for(&self, arg: &str) -> &[Rule] {
        self.info
            .get(arg)
            .map(|spec| spec.rules.as_slice())
            .unwrap_or(&[])
    }

    /// Documentation view: one entry per declared argument, in declared order.
    pub fn arg_info(&self) -> OrderedMap<ArgInfo> {
        self.arg_defaults
            .iter()
            .map(|(arg, default)| {
                let info = match self.info.get(arg) {
                    Some(spec) => ArgInfo {
                        doc: spec.doc.clone(),
                        default: default.clone(),
                        constraints: spec.constraints(),
                        modulatable: spec.modulatable,
                    },
                    None => ArgInfo {
                        doc: String::new(),
                        default: default.clone(),
                        constraints: Vec::new(),
                        modulatable: false,
                    },
                };
                (arg, info)
            })
            .collect()
    }

    /// Seconds to wait after release before the engine frees this node.
    pub fn kill_delay(&self, args: &ArgMap) -> f64 {
        match &self.kill_delay {
            KillDelay::Fixed(secs) => *secs,
            KillDelay::FromArg(arg) => args
                .number(arg)
                .or_else(|| {
                    self.arg_default(arg)
                        .and_then(ArgDefault::constant)
                        .and_then(|v| v.as_f64())
                })
                .unwrap_or(DEFAULT_KILL_DELAY),
        }
    }

    /// Metadata keys whose values scale with tempo, in metadata order.
    pub fn bpm_scale_args(&self) -> &[String] {
        self.bpm_scale_args.get_or_init(|| {
            self.info
                .iter()
                .filter(|(_, spec)| spec.bpm_scale)
                .map(|(k, _)| k.to_string())
                .collect()
        })
    }

    /// Returns true if `arg` scales with tempo.
    pub fn is_bpm_scaled(&self, arg: &str) -> bool {
        self.bpm_scale_args().iter().any(|k| k == arg)
    }

    pub fn should_validate(&self) -> bool {
        self.should_validate.load(Ordering::Relaxed)
    }

    /// Turns validation on or off for this definition and every alias of it.
    pub fn set_should_validate(&self, enabled: bool) {
        self.should_validate.store(enabled, Ordering::Relaxed);
    }

    /// Validates caller arguments against this definition's rules.
    pub fn validate(&self, args: impl Into<Args>) -> Result<(), ValidationError> {
        validation::validate_args(self, args)
    }
}

/// Builder for [`InstrumentDefinition`].
///
/// Builders are plain data, so a derived definition is made by cloning a
/// parent builder and changing what differs.
#[derive(Debug, Clone)]
pub struct DefinitionBuilder {
    key: String,
    kind: DefinitionKind,
    name: Option<String>,
    synth_name: Option<String>,
    doc: String,
    arg_defaults: OrderedMap<ArgDefault>,
    specific: ParamTable,
    kill_delay: KillDelay,
}

impl DefinitionBuilder {
    /// Creates an empty builder.
    pub fn new(kind: DefinitionKind, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            name: None,
            synth_name: None,
            doc: DEFAULT_DOC.to_string(),
            arg_defaults: OrderedMap::new(),
            specific: ParamTable::new(),
            kill_delay: KillDelay::default(),
        }
    }

    /// Changes the registry key. The engine synth name is kept.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the engine synth name (without prefix).
    pub fn synth_name(mut self, synth_name: impl Into<String>) -> Self {
        self.synth_name = Some(synth_name.into());
        self
    }

    /// Sets the doc.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Declares an argument and its default. Redeclaring keeps the position.
    pub fn arg(mut self, arg: impl Into<String>, default: impl Into<ArgDefault>) -> Self {
        self.arg_defaults.insert(arg, default.into());
        self
    }

    /// Adds or replaces a definition-specific metadata entry.
    ///
    /// The entry replaces the baseline entry for the same key wholesale.
    pub fn param(mut self, arg: impl Into<String>, spec: ParamSpec) -> Self {
        self.specific.insert(arg, spec);
        self
    }

    /// Sets the kill delay policy.
    pub fn kill_delay(mut self, kill_delay: KillDelay) -> Self {
        self.kill_delay = kill_delay;
        self
    }

    /// Validates required fields and composes the final definition.
    pub fn build(self) -> Result<InstrumentDefinition, DefinitionError> {
        if !is_valid_key(&self.key) {
            return Err(DefinitionError::InvalidKey(self.key));
        }
        let missing = |field: &'static str| DefinitionError::MissingField {
            key: self.key.clone(),
            field,
        };
        let name = self.name.ok_or_else(|| missing("name"))?;
        let synth_name = self.synth_name.ok_or_else(|| missing("synth_name"))?;
        if !is_valid_key(&synth_name) {
            return Err(DefinitionError::InvalidKey(synth_name));
        }

        let mut info = params::baseline().clone();
        info.overlay(self.specific);

        Ok(InstrumentDefinition {
            key: self.key,
            kind: self.kind,
            name,
            synth_name,
            doc: self.doc,
            arg_defaults: self.arg_defaults,
            info,
            kill_delay: self.kill_delay,
            should_validate: AtomicBool::new(true),
            bpm_scale_args: OnceLock::new(),
        })
    }
}
