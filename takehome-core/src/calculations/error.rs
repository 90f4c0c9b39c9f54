use rust_decimal::Decimal;
use thiserror::Error;

/// Input contract violations. A calculation either succeeds with a complete
/// result or fails with one of these; it never returns a partial record.
///
/// An unknown state code is not an error: it is taxed as a state without
/// income tax.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("salary must be positive, got {0}")]
    NonPositiveSalary(Decimal),

    #[error("salary {salary} exceeds the maximum of {max}")]
    SalaryTooLarge { salary: Decimal, max: Decimal },

    #[error("employee contribution must be between 0 and 100 percent, got {0}")]
    InvalidEmployeePercent(Decimal),

    #[error("unknown filing status '{0}'")]
    UnknownFilingStatus(String),

    #[error("unknown employer match type '{0}'")]
    UnknownMatchType(String),

    #[error("custom employer match needs both a match percent and a cap")]
    IncompleteCustomMatch,

    #[error(
        "custom employer match of {match_percent}% up to {cap_percent}% of salary is out of range"
    )]
    InvalidCustomMatch {
        match_percent: Decimal,
        cap_percent: Decimal,
    },

    #[error("unknown city '{0}'")]
    UnknownCity(String),

    #[error("city '{0}' is listed more than once")]
    DuplicateCity(String),

    #[error("between 1 and {max} cities can be compared, got {count}")]
    CityCount { count: usize, max: usize },
}
