//! Federal and state income tax on taxable wages.

use rust_decimal::Decimal;
use tracing::warn;

use super::brackets::evaluate_brackets;
use crate::models::{FilingStatus, StateTaxRegime};
use crate::tables::TaxTables;

/// Federal income tax on `taxable_income` using the schedule for `status`.
pub fn federal_tax(
    tables: &TaxTables,
    taxable_income: Decimal,
    status: FilingStatus,
) -> Decimal {
    evaluate_brackets(taxable_income, tables.federal_schedule(status))
}

/// State income tax on `taxable_income` for `state_code`.
///
/// A code missing from the tables owes nothing; a warning is logged so a
/// typo does not go unnoticed.
pub fn state_tax(
    tables: &TaxTables,
    taxable_income: Decimal,
    state_code: &str,
) -> Decimal {
    let Some(state) = tables.state(state_code) else {
        warn!(state_code, "unknown state code, assuming no state income tax");
        return Decimal::ZERO;
    };

    match state.regime {
        StateTaxRegime::NoIncomeTax => Decimal::ZERO,
        StateTaxRegime::Flat(rate) => taxable_income.max(Decimal::ZERO) * rate,
        StateTaxRegime::Progressive(brackets) => evaluate_brackets(taxable_income, brackets),
    }
}
