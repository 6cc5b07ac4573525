//! String calculator core.
//!
//! This crate provides [`StringCalculator`], which sums integers written as a
//! delimited string. Five summation versions live side by side, each adding
//! one parsing rule to the previous one:
//!
//! | Method | Delimiters | Extra rule |
//! |---|---|---|
//! | `add_v1` | `,` | at most two numbers |
//! | `add_v2` | `,` | |
//! | `add_v3` | `,` or `\n` | |
//! | `add_v4` | `;` or `//<delimiter>\n` declaration | |
//! | `add_v5` | `;` or `//<delimiter>\n` declaration | negatives rejected |
//!
//! ```
//! use strcalc_core::{ErrorKind, StringCalculator};
//!
//! let mut calculator = StringCalculator::new();
//! assert_eq!(calculator.add_v4(Some("//#\n4#5#6")), Ok(15));
//!
//! let err = calculator.add_v5(Some("1;-2;-3;4")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NegativesPresent);
//! assert_eq!(err.to_string(), "Negatives not allowed: [-2, -3]");
//!
//! assert_eq!(calculator.called_count(), 2);
//! ```

pub mod calculator;
pub mod delimiter;
pub mod error;
pub mod validate;

pub use calculator::StringCalculator;
pub use delimiter::{DEFAULT_DELIMITER, DelimitedInput};
pub use error::{CalculatorError, CalculatorResult, ErrorKind};
