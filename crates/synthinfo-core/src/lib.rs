//! Synth and FX Definition Library
//!
//! This crate is the catalog of every synth, studio player and audio effect
//! the live-coding platform can trigger. For each definition it records the
//! engine identifier, the argument defaults and per-argument metadata, and it
//! uses that metadata to validate caller arguments and to render help docs.
//!
//! # Overview
//!
//! - **Rules**: predicate plus failure phrase, evaluated against the whole argument map
//! - **Parameters**: a shared baseline table that definitions overlay with their own entries
//! - **Definitions**: flat records built with [`DefinitionBuilder`]
//! - **Registry**: every definition by key, with `fx_replace_*` aliases and sample groups
//!
//! # Example
//!
//! ```
//! use synthinfo_core::{arg_map, Registry};
//!
//! let registry = Registry::global();
//!
//! // Look up a definition and inspect its arguments
//! let beep = registry.get("beep").unwrap();
//! assert_eq!(beep.engine_name(), "sonic-pi-beep");
//! assert!(beep.is_valid_arg("note"));
//!
//! // Validate arguments before triggering
//! assert!(registry.validate("beep", arg_map! { "note" => 52, "amp" => 0.5 }).is_ok());
//!
//! let err = registry.validate("beep", arg_map! { "note" => -5 }).unwrap_err();
//! assert_eq!(err.to_string(), "Value of argument :note must be zero or greater, got -5.");
//! ```
//!
//! # Modules
//!
//! - [`value`]: argument values
//! - [`args`]: ordered maps and argument normalization
//! - [`rules`]: validation rule constructors
//! - [`params`]: parameter metadata and the baseline table
//! - [`definition`]: definitions and their builder
//! - [`catalog`]: the built-in synths, effects and samples
//! - [`registry`]: key lookup, aliases and sample groups
//! - [`validation`]: argument validation
//! - [`trigger`]: trigger message preparation
//! - [`docs`]: HTML and Markdown documentation

pub mod args;
pub mod catalog;
pub mod definition;
pub mod docs;
pub mod error;
pub mod params;
pub mod registry;
pub mod rules;
pub mod trigger;
pub mod validation;
pub mod value;

// Re-export commonly used types at the crate root
pub use args::{ArgMap, Args, OrderedMap};
pub use catalog::SampleGroup;
pub use definition::{
    ArgInfo, DefinitionBuilder, DefinitionKind, InstrumentDefinition, KillDelay, ENGINE_PREFIX,
};
pub use docs::{
    render_fx_docs, render_sample_docs, render_synth_docs, DocRenderer, HtmlDoc, RenderOptions,
    RenderedDocs,
};
pub use error::{DefinitionError, ValidationError};
pub use params::{ArgDefault, DefaultGenerator, ParamSpec, ParamTable};
pub use registry::{Registry, RegistryEntry};
pub use rules::Rule;
pub use trigger::{prepare_trigger, TriggerMessage};
pub use validation::validate_args;
pub use value::ArgValue;
