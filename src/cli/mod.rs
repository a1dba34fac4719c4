//! CLI module for studyplan - command-line flags.

pub mod args;

pub use args::{Cli, OutputFormat};
