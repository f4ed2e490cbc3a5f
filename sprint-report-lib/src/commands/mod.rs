//! Command-line interface and orchestration for sprint-report
//!
//! The tool has a single command: summarize one sprint export. The `run` function
//! parses the command line with clap and hands the arguments to
//! [`analyze_sprint`], which
//!
//! 1. sets up logging and loads the optional configuration file
//! 2. runs the sprint pipeline over the export
//! 3. writes the console report to the host's output
//!
//! With no arguments at all, `sprint_data.csv` in the current directory is analyzed
//! with the default configuration.

mod analyze;
mod common;
mod host;
mod run;

pub use analyze::{AnalyzeArgs, DEFAULT_SPRINT_FILE, analyze_sprint};
pub use common::LogLevel;
pub use host::Host;
pub use run::run;
