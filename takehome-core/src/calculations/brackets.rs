//! Progressive bracket evaluation.
//!
//! A schedule is an ascending list of [`TaxBracket`]s where each bracket
//! starts where the previous one ends and only the last is unbounded. Tax
//! is accumulated slice by slice: the part of income that falls inside a
//! bracket is taxed at that bracket's rate.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::TaxBracket;
//! use takehome_core::calculations::evaluate_brackets;
//!
//! let brackets = [
//!     TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(10000))),
//!     TaxBracket::new(dec!(0.20), dec!(10000), None),
//! ];
//!
//! assert_eq!(evaluate_brackets(dec!(15000), &brackets), dec!(2000));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxBracket;

/// Structural problems in a bracket schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("schedule has no brackets")]
    Empty,

    #[error("first bracket starts at {0}, expected 0")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket {index} rate {rate} is outside 0..=1")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("bracket {index} is empty or inverted")]
    EmptyBracket { index: usize },

    #[error("bracket {index} does not start where the previous bracket ends")]
    Gap { index: usize },

    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd { index: usize },

    #[error("last bracket has an upper bound")]
    BoundedTop,
}

/// Tax owed on `income` under `brackets`.
///
/// Income at or below zero owes nothing. When income lands exactly on a
/// bracket's upper bound that bracket is taxed in full and evaluation stops.
pub fn evaluate_brackets(
    income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        if income <= bracket.min_income {
            break;
        }

        let upper = bracket
            .max_income
            .map_or(income, |max_income| income.min(max_income));
        tax += (upper - bracket.min_income) * bracket.rate;

        if bracket
            .max_income
            .is_none_or(|max_income| income <= max_income)
        {
            break;
        }
    }

    tax
}

/// Highest marginal rate in a schedule.
pub fn top_rate(brackets: &[TaxBracket]) -> Decimal {
    brackets
        .iter()
        .map(|bracket| bracket.rate)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// Checks that a schedule is ascending, contiguous, starts at zero and ends
/// with a single unbounded bracket.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), BracketTableError> {
    let first = brackets.first().ok_or(BracketTableError::Empty)?;
    if first.min_income != Decimal::ZERO {
        return Err(BracketTableError::FirstBracketNotAtZero(first.min_income));
    }

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(BracketTableError::InvalidRate {
                index,
                rate: bracket.rate,
            });
        }

        match bracket.max_income {
            Some(max_income) if max_income <= bracket.min_income => {
                return Err(BracketTableError::EmptyBracket { index });
            }
            Some(_) if index == last_index => return Err(BracketTableError::BoundedTop),
            None if index != last_index => {
                return Err(BracketTableError::UnboundedBeforeEnd { index });
            }
            _ => {}
        }

        if index > 0 && brackets[index - 1].max_income != Some(bracket.min_income) {
            return Err(BracketTableError::Gap { index });
        }
    }

    Ok(())
}
