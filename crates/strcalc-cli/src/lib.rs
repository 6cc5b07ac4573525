//! Command-line harness for the string calculator
//!
//! The `strcalc` binary either replays the demo sequence across all five
//! versions or runs a single version on one input.

pub mod cli;
pub mod escape;
pub mod logging;
pub mod report;

pub use cli::{Cli, Command, Operation, OutputFormat};
pub use report::{DEMO_INPUTS, ErrorReport, Report, run, run_demo};
