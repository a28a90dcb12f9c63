//! synthinfo CLI library.
//!
//! Command implementations for inspecting the synth and FX catalog,
//! validating arguments and rendering documentation.

pub mod commands;
