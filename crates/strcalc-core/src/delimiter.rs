//! Delimiter handling
//!
//! Splits raw input into tokens. Versions 1-3 split on fixed characters;
//! versions 4 and 5 accept a `//<delimiter>\n<numbers>` declaration that
//! replaces the default `;` separator.

use crate::error::{CalculatorError, CalculatorResult};

/// Prefix that opens a custom delimiter declaration
pub const DECLARATION_PREFIX: &str = "//";

/// Separator used by versions 4 and 5 when nothing is declared
pub const DEFAULT_DELIMITER: &str = ";";

/// Numbers segment of an input together with the delimiter that separates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedInput<'a> {
    pub delimiter: &'a str,
    pub numbers: &'a str,
    /// Whether the delimiter came from a `//` declaration
    pub declared: bool,
}

impl<'a> DelimitedInput<'a> {
    /// Parse an optional `//<delimiter>\n` header off the front of `input`.
    ///
    /// Without a header the whole input is the numbers segment and the
    /// delimiter is [`DEFAULT_DELIMITER`]. A header with no newline, or with
    /// nothing after the newline, is [`CalculatorError::InvalidFormat`]. An
    /// empty declared delimiter falls back to the default.
    pub fn parse(input: &'a str) -> CalculatorResult<Self> {
        let Some(rest) = input.strip_prefix(DECLARATION_PREFIX) else {
            return Ok(Self {
                delimiter: DEFAULT_DELIMITER,
                numbers: input,
                declared: false,
            });
        };

        match rest.split_once('\n') {
            Some((_, "")) | None => Err(CalculatorError::InvalidFormat),
            Some((delimiter, numbers)) => {
                let delimiter = if delimiter.is_empty() {
                    DEFAULT_DELIMITER
                } else {
                    delimiter
                };
                Ok(Self {
                    delimiter,
                    numbers,
                    declared: true,
                })
            }
        }
    }

    /// Split the numbers segment on the delimiter, taken literally
    pub fn tokens(&self) -> Vec<&'a str> {
        drop_trailing_empty(self.numbers.split(self.delimiter).collect())
    }
}

/// Split on a single literal separator
pub fn split_on(input: &str, separator: char) -> Vec<&str> {
    drop_trailing_empty(input.split(separator).collect())
}

/// Split where any of `separators` occurs; each occurrence is its own boundary
pub fn split_on_any<'a>(input: &'a str, separators: &[char]) -> Vec<&'a str> {
    drop_trailing_empty(input.split(separators).collect())
}

// Trailing empty tokens are not tokens: "1,2," has two.
fn drop_trailing_empty(mut tokens: Vec<&str>) -> Vec<&str> {
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}
