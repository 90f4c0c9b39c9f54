//! Take-home pay engine: US federal and state income tax, FICA and 401(k)
//! deferrals for the 2025 tax year.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::{FilingStatus, TakeHomeInput, calculate_take_home};
//!
//! let input = TakeHomeInput::new(dec!(100000), FilingStatus::Single, "TX");
//! let result = calculate_take_home(&input).unwrap();
//!
//! assert_eq!(result.monthly_net_income, dec!(6286));
//! ```

pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{
    CalculationError, CityComparison, TakeHomeCalculator, calculate_take_home, compare_cities,
    validate_salary,
};
pub use models::*;
pub use tables::{TAX_YEAR_2025, TaxTables};
