use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// One slice of a progressive schedule: income in `[min_income, max_income)`
/// is taxed at `rate`. The top bracket has no `max_income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub min_income: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub max_income: Option<Decimal>,
}

impl TaxBracket {
    pub const fn new(
        rate: Decimal,
        min_income: Decimal,
        max_income: Option<Decimal>,
    ) -> Self {
        Self {
            rate,
            min_income,
            max_income,
        }
    }
}

/// A value kept once per filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByFilingStatus<T> {
    pub single: T,
    pub married_joint: T,
    pub married_separate: T,
    pub head_of_household: T,
}

impl<T> ByFilingStatus<T> {
    pub fn get(
        &self,
        status: FilingStatus,
    ) -> &T {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedJoint => &self.married_joint,
            FilingStatus::MarriedSeparate => &self.married_separate,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }
}
