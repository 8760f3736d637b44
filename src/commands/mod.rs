//! Command implementations
//!
//! Each subcommand has a `run` function taking its parsed arguments.

pub mod completions;
pub mod doctor;
pub mod install;
pub mod version;
