use crate::delimiter::{DelimitedInput, split_on, split_on_any};
use crate::error::CalculatorResult;
use crate::validate::{
    MAX_V1_TOKENS, ensure_max_tokens, parse_tokens, sum_non_negative, sum_tokens, trim_blank,
};
use tracing::{debug, instrument, warn};

/// String calculator with five side-by-side summation versions.
///
/// Each `add_v*` method is a successive requirement increment and keeps its
/// own behavior; none of them delegates to a later version. Every call bumps
/// the call counter before any validation happens.
#[derive(Debug, Default)]
pub struct StringCalculator {
    called_count: usize,
}

impl StringCalculator {
    /// Create a calculator whose call counter starts at zero
    pub fn new() -> Self {
        Self { called_count: 0 }
    }

    /// Number of summation calls made on this instance, failed ones included
    pub fn called_count(&self) -> usize {
        self.called_count
    }

    /// Sum zero, one or two comma-separated numbers
    #[instrument(skip(self))]
    pub fn add_v1(&mut self, numbers: Option<&str>) -> CalculatorResult<i64> {
        let Some(numbers) = self.begin(numbers) else {
            return Ok(0);
        };

        let tokens = split_on(numbers, ',');
        debug!(token_count = tokens.len(), delimiter = ",", "Split input");

        let result = ensure_max_tokens(&tokens, MAX_V1_TOKENS)
            .and_then(|()| sum_tokens(&tokens));
        log_outcome(result)
    }

    /// Sum any number of comma-separated numbers
    #[instrument(skip(self))]
    pub fn add_v2(&mut self, numbers: Option<&str>) -> CalculatorResult<i64> {
        let Some(numbers) = self.begin(numbers) else {
            return Ok(0);
        };

        let tokens = split_on(numbers, ',');
        debug!(token_count = tokens.len(), delimiter = ",", "Split input");

        log_outcome(sum_tokens(&tokens))
    }

    /// Sum numbers separated by commas or newlines
    #[instrument(skip(self))]
    pub fn add_v3(&mut self, numbers: Option<&str>) -> CalculatorResult<i64> {
        let Some(numbers) = self.begin(numbers) else {
            return Ok(0);
        };

        let tokens = split_on_any(numbers, &[',', '\n']);
        debug!(
            token_count = tokens.len(),
            delimiter = ",|\\n",
            "Split input"
        );

        log_outcome(sum_tokens(&tokens))
    }

    /// Sum numbers separated by `;` or by a delimiter declared as
    /// `//<delimiter>\n<numbers>`
    #[instrument(skip(self))]
    pub fn add_v4(&mut self, numbers: Option<&str>) -> CalculatorResult<i64> {
        let Some(numbers) = self.begin(numbers) else {
            return Ok(0);
        };

        let result = DelimitedInput::parse(numbers).and_then(|input| {
            let tokens = input.tokens();
            debug!(
                token_count = tokens.len(),
                delimiter = input.delimiter,
                declared = input.declared,
                "Split input"
            );
            sum_tokens(&tokens)
        });
        log_outcome(result)
    }

    /// Like [`add_v4`](Self::add_v4), but negative numbers are rejected and
    /// all of them are reported in the error.
    ///
    /// Every token is parsed before negatives are looked at, so an input
    /// with both a bad token and a negative fails as
    /// [`InvalidNumber`](crate::CalculatorError::InvalidNumber).
    #[instrument(skip(self))]
    pub fn add_v5(&mut self, numbers: Option<&str>) -> CalculatorResult<i64> {
        let Some(numbers) = self.begin(numbers) else {
            return Ok(0);
        };

        let result = DelimitedInput::parse(numbers).and_then(|input| {
            let tokens = input.tokens();
            debug!(
                token_count = tokens.len(),
                delimiter = input.delimiter,
                declared = input.declared,
                "Split input"
            );
            let values = parse_tokens(&tokens)?;
            sum_non_negative(&values)
        });
        log_outcome(result)
    }

    // Counts the call, then yields the input only if there is something to parse.
    fn begin<'a>(&mut self, numbers: Option<&'a str>) -> Option<&'a str> {
        self.called_count += 1;
        match numbers {
            Some(numbers) if !trim_blank(numbers).is_empty() => Some(numbers),
            _ => {
                debug!(called_count = self.called_count, "Empty input, sum is 0");
                None
            }
        }
    }
}

fn log_outcome(result: CalculatorResult<i64>) -> CalculatorResult<i64> {
    match &result {
        Ok(sum) => debug!(sum = *sum, "Summed input"),
        Err(err) => warn!(kind = %err.kind(), error = %err, "Rejected input"),
    }
    result
}
