//! CLI command implementations

pub mod docs;
pub mod info;
pub mod list;
pub mod samples;
pub mod trigger;
pub mod validate;

mod assignments;
