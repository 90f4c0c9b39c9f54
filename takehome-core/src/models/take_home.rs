use rust_decimal::Decimal;
use serde::Serialize;

use super::{FilingStatus, RetirementContribution, RetirementPlan};

/// Everything the take-home calculation depends on. Also serves as the
/// key for caching results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TakeHomeInput {
    pub salary: Decimal,
    pub filing_status: FilingStatus,
    pub state_code: String,
    pub retirement: Option<RetirementPlan>,
}

impl TakeHomeInput {
    pub fn new(
        salary: Decimal,
        filing_status: FilingStatus,
        state_code: impl Into<String>,
    ) -> Self {
        Self {
            salary,
            filing_status,
            state_code: state_code.into(),
            retirement: None,
        }
    }

    pub fn with_retirement(
        mut self,
        plan: RetirementPlan,
    ) -> Self {
        self.retirement = Some(plan);
        self
    }
}

/// Full take-home breakdown. Dollar amounts are whole dollars; the
/// effective rate is an unrounded fraction of gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub gross_income: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirement_contribution: Option<RetirementContribution>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxable_income: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub federal_tax: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub state_tax: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub social_security_tax: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub medicare_tax: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub fica_total: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_tax: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub net_income: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub net_income_after_contribution: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub effective_tax_rate: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_net_income: Decimal,
}
