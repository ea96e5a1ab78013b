//! Command-line interface
//!
//! Zero flags are required: the defaults reproduce the repository layout
//! the cleaned data ships in, so `t100-extracts` run from the repository
//! root rebuilds all four extracts. Flags and an optional YAML config
//! override individual paths.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
