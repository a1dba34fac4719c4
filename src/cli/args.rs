//! CLI argument definitions using clap.
//!
//! With no flags the program runs the interactive questionnaire and prints
//! the plan as text.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// studyplan - split your study hours across topics by difficulty and priority
#[derive(Parser, Debug)]
#[command(name = "studyplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output (prints topic weights before the plan)
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for the finished plan
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored headings
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
