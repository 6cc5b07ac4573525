//! Command-line arguments
//!
//! Flags fall back to `STRCALC_*` environment variables; the log filter comes
//! from `RUST_LOG`.

use clap::{Parser, Subcommand, ValueEnum};

/// String calculator command-line harness
#[derive(Parser, Debug)]
#[command(name = "strcalc")]
#[command(about = "Sum delimited integers with the five string calculator versions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    #[arg(env = "STRCALC_FORMAT", global = true)]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, env = "STRCALC_JSON_LOGS", global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every version on a fixed set of inputs
    Demo,
    /// Run one version on one input
    Add {
        /// Calculator version to run
        #[arg(short, long, value_enum, default_value_t = Operation::V5)]
        op: Operation,

        /// Input string; omit it to pass no value at all
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,

        /// Take INPUT literally instead of expanding `\n`, `\t` and `\\`
        #[arg(long)]
        raw: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Summation version selectable from the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    V1,
    V2,
    V3,
    V4,
    V5,
}

impl Operation {
    /// Name of the calculator method this selects
    pub fn method_name(self) -> &'static str {
        match self {
            Operation::V1 => "add_v1",
            Operation::V2 => "add_v2",
            Operation::V3 => "add_v3",
            Operation::V4 => "add_v4",
            Operation::V5 => "add_v5",
        }
    }
}
