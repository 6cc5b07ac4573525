//! Token validation and summation shared by every calculator version.

use crate::error::{CalculatorError, CalculatorResult};

/// Largest token count accepted by `add_v1`
pub const MAX_V1_TOKENS: usize = 2;

/// Strip leading and trailing ASCII control characters and spaces.
///
/// Every char up to and including `' '` counts as blank, so `"\u{1}7\u{1f}"`
/// trims to `"7"`. Unicode spaces such as `'\u{a0}'` are kept.
pub fn trim_blank(input: &str) -> &str {
    input.trim_matches(|c: char| c <= ' ')
}

/// Trim a token and parse it as a base-10 `i32`
pub fn parse_token(token: &str) -> CalculatorResult<i32> {
    trim_blank(token)
        .parse::<i32>()
        .map_err(|_| CalculatorError::InvalidNumber)
}

/// Parse every token, failing on the first one that is not an integer
pub fn parse_tokens(tokens: &[&str]) -> CalculatorResult<Vec<i32>> {
    tokens.iter().map(|token| parse_token(token)).collect()
}

/// The shared sum-and-validate primitive
pub fn sum_tokens(tokens: &[&str]) -> CalculatorResult<i64> {
    let mut sum = 0i64;
    for token in tokens {
        sum += i64::from(parse_token(token)?);
    }
    Ok(sum)
}

/// Reject token lists longer than `max`
pub fn ensure_max_tokens(tokens: &[&str], max: usize) -> CalculatorResult<()> {
    if tokens.len() > max {
        Err(CalculatorError::TooManyNumbers)
    } else {
        Ok(())
    }
}

/// Sum parsed values, rejecting the lot if any are negative
pub fn sum_non_negative(values: &[i32]) -> CalculatorResult<i64> {
    let negatives: Vec<i32> = values.iter().copied().filter(|v| *v < 0).collect();
    if !negatives.is_empty() {
        return Err(CalculatorError::NegativesPresent { negatives });
    }
    Ok(values.iter().map(|v| i64::from(*v)).sum())
}
