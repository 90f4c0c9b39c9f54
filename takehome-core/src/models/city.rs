use rust_decimal::Decimal;
use serde::Serialize;

/// A comparable city with its average one-bedroom monthly rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub state: &'static str,
    pub state_code: &'static str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub avg_rent: Decimal,
}

impl City {
    /// `"New York, NY"`
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.state_code)
    }
}
