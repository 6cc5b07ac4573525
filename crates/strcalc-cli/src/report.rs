//! Running calculator operations and rendering their outcome
//!
//! A [`Report`] captures one call: which version ran, on what input, what it
//! returned and the call count afterwards. Reports render either as a single
//! text line or as JSON.

use crate::cli::{Operation, OutputFormat};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::to_string_pretty;
use strcalc_core::{CalculatorError, ErrorKind, StringCalculator};
use tracing::info;

/// Inputs run by `strcalc demo`, one per version
pub const DEMO_INPUTS: [(Operation, &str); 5] = [
    (Operation::V1, "1,2"),
    (Operation::V2, "1,2,3"),
    (Operation::V3, "1\n2,3"),
    (Operation::V4, "//;\n1;2;3"),
    (Operation::V5, "//;\n1;2;-3"),
];

/// Outcome of one summation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub operation: Operation,
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
    pub called_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CalculatorError> for ErrorReport {
    fn from(err: &CalculatorError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl Report {
    /// Whether the call returned a sum
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Render as one line of text or as pretty JSON
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let name = self.operation.method_name();
        match format {
            OutputFormat::Json => to_string_pretty(self).context("serialize report"),
            OutputFormat::Text => Ok(match (&self.sum, &self.error) {
                (Some(sum), _) => format!("{name}: {sum}"),
                (None, Some(error)) => format!("Error: {}", error.message),
                (None, None) => format!("{name}: no result"),
            }),
        }
    }
}

/// Run one version against `input` and capture the outcome
pub fn run(calc: &mut StringCalculator, operation: Operation, input: Option<&str>) -> Report {
    let result = match operation {
        Operation::V1 => calc.add_v1(input),
        Operation::V2 => calc.add_v2(input),
        Operation::V3 => calc.add_v3(input),
        Operation::V4 => calc.add_v4(input),
        Operation::V5 => calc.add_v5(input),
    };

    let (sum, error) = match &result {
        Ok(sum) => (Some(*sum), None),
        Err(err) => (None, Some(ErrorReport::from(err))),
    };

    Report {
        operation,
        input: input.map(str::to_string),
        sum,
        error,
        called_count: calc.called_count(),
    }
}

/// Run every demo input on one calculator, in order
pub fn run_demo(calc: &mut StringCalculator) -> Vec<Report> {
    info!(steps = DEMO_INPUTS.len(), "Running demo sequence");
    DEMO_INPUTS
        .iter()
        .map(|(operation, input)| run(calc, *operation, Some(*input)))
        .collect()
}
