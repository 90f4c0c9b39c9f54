//! Take-home pay calculations.
//!
//! The building blocks are pure functions over [`crate::tables::TaxTables`]:
//! bracket evaluation, federal and state income tax, FICA and the 401(k)
//! contribution. [`TakeHomeCalculator`] combines them into one
//! [`crate::TaxCalculationResult`], and [`compare_cities`] runs it for
//! several cities at once.

pub mod brackets;
pub mod common;
pub mod comparison;
mod error;
pub mod fica;
pub mod income_tax;
pub mod retirement;
pub mod take_home;

pub use brackets::{BracketTableError, evaluate_brackets, top_rate, validate_brackets};
pub use comparison::{AFFORDABLE_RENT_SHARE, CityComparison, MAX_CITIES, compare_cities};
pub use error::CalculationError;
pub use fica::{FicaTaxes, fica};
pub use income_tax::{federal_tax, state_tax};
pub use retirement::contribution;
pub use take_home::{MAX_SALARY, TakeHomeCalculator, calculate_take_home, validate_salary};
