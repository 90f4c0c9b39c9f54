use rust_decimal::Decimal;
use serde::Serialize;

use super::TaxBracket;

/// How a state taxes wage income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StateTaxRegime {
    NoIncomeTax,
    Flat(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal),
    Progressive(&'static [TaxBracket]),
}

/// Reference entry for one state (or DC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateTaxInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub regime: StateTaxRegime,
}
