//! Side-by-side take-home comparison across cities, including what is left
//! of monthly pay after the city's average rent.

use std::collections::HashSet;

use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::CalculationError;
use super::take_home::TakeHomeCalculator;
use crate::models::{City, FilingStatus, RetirementPlan, TakeHomeInput, TaxCalculationResult};
use crate::tables::cities::city_by_id;

/// Most cities a single comparison accepts.
pub const MAX_CITIES: usize = 3;

/// Rent at or below this share of monthly take-home is considered affordable.
pub const AFFORDABLE_RENT_SHARE: Decimal = dec!(0.30);

/// One column of a city comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityComparison {
    pub city: &'static City,
    pub result: TaxCalculationResult,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_rent: Decimal,
    /// Monthly net after contribution minus rent. Negative when rent
    /// exceeds take-home.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_after_rent: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rent_share: Decimal,
    pub rent_affordable: bool,
}

impl CityComparison {
    fn new(
        city: &'static City,
        result: TaxCalculationResult,
    ) -> Self {
        let monthly_net = result.monthly_net_income;
        let monthly_rent = city.avg_rent;
        let rent_share = if monthly_net.is_zero() {
            Decimal::ZERO
        } else {
            monthly_rent / monthly_net
        };

        Self {
            city,
            monthly_rent,
            monthly_after_rent: monthly_net - monthly_rent,
            rent_share,
            rent_affordable: rent_share <= AFFORDABLE_RENT_SHARE,
            result,
        }
    }
}

/// Evaluates the same salary, filing status and retirement plan in each
/// city, taxed under that city's state.
///
/// Results come back in the order of `city_ids`. Each city is evaluated
/// independently on the rayon pool.
///
/// # Errors
///
/// * [`CalculationError::CityCount`] for zero or more than [`MAX_CITIES`] ids.
/// * [`CalculationError::DuplicateCity`] when an id repeats.
/// * [`CalculationError::UnknownCity`] for an id not in the city table.
/// * Any error from [`TakeHomeCalculator::calculate`].
pub fn compare_cities(
    calculator: &TakeHomeCalculator<'_>,
    salary: Decimal,
    filing_status: FilingStatus,
    retirement: Option<RetirementPlan>,
    city_ids: &[&str],
) -> Result<Vec<CityComparison>, CalculationError> {
    let cities = resolve_cities(city_ids)?;

    cities
        .par_iter()
        .map(|&city| {
            let mut input = TakeHomeInput::new(salary, filing_status, city.state_code);
            input.retirement = retirement;
            let result = calculator.calculate(&input)?;
            Ok(CityComparison::new(city, result))
        })
        .collect()
}

fn resolve_cities(city_ids: &[&str]) -> Result<Vec<&'static City>, CalculationError> {
    if city_ids.is_empty() || city_ids.len() > MAX_CITIES {
        return Err(CalculationError::CityCount {
            count: city_ids.len(),
            max: MAX_CITIES,
        });
    }

    let mut seen = HashSet::with_capacity(city_ids.len());
    city_ids
        .iter()
        .map(|&id| {
            let city =
                city_by_id(id).ok_or_else(|| CalculationError::UnknownCity(id.to_string()))?;
            if !seen.insert(city.id) {
                return Err(CalculationError::DuplicateCity(city.id.to_string()));
            }
            Ok(city)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{EmployerMatch, MatchPreset};

    fn compare(city_ids: &[&str]) -> Result<Vec<CityComparison>, CalculationError> {
        compare_cities(
            &TakeHomeCalculator::default(),
            dec!(100000),
            FilingStatus::Single,
            None,
            city_ids,
        )
    }

    // =========================================================================
    // rent residual tests
    // =========================================================================

    #[test]
    fn results_follow_requested_order() {
        let columns = compare(&["nyc", "austin", "la"]).unwrap();
        let ids: Vec<_> = columns.iter().map(|c| c.city.id).collect();

        assert_eq!(ids, vec!["nyc", "austin", "la"]);
    }

    #[test]
    fn each_city_is_taxed_under_its_state() {
        let columns = compare(&["austin", "nyc"]).unwrap();

        assert_eq!(columns[0].result.state_tax, Decimal::ZERO);
        assert_eq!(columns[0].result.monthly_net_income, dec!(6286));
        assert_eq!(columns[1].result.monthly_net_income, dec!(5834));
    }

    #[test]
    fn affordable_rent_in_austin() {
        let austin = &compare(&["austin"]).unwrap()[0];

        assert_eq!(austin.monthly_rent, dec!(1700));
        assert_eq!(austin.monthly_after_rent, dec!(4586));
        assert_eq!(austin.rent_share, dec!(1700) / dec!(6286));
        assert!(austin.rent_affordable);
    }

    #[test]
    fn unaffordable_rent_in_new_york() {
        let nyc = &compare(&["nyc"]).unwrap()[0];

        assert_eq!(nyc.monthly_after_rent, dec!(2334));
        assert!(!nyc.rent_affordable);
    }

    #[test]
    fn rent_can_exceed_take_home() {
        let columns = compare_cities(
            &TakeHomeCalculator::default(),
            dec!(30000),
            FilingStatus::Single,
            None,
            &["nyc"],
        )
        .unwrap();

        assert_eq!(columns[0].result.monthly_net_income, dec!(1905));
        assert_eq!(columns[0].monthly_after_rent, dec!(-1595));
        assert!(!columns[0].rent_affordable);
    }

    #[test]
    fn retirement_plan_applies_to_every_city() {
        let plan = RetirementPlan::new(dec!(10), EmployerMatch::Preset(MatchPreset::FullUpToFour));
        let columns = compare_cities(
            &TakeHomeCalculator::default(),
            dec!(100000),
            FilingStatus::Single,
            Some(plan),
            &["austin", "miami"],
        )
        .unwrap();

        for column in &columns {
            let contribution = column.result.retirement_contribution.as_ref().unwrap();
            assert_eq!(contribution.total_contribution, dec!(14000));
            assert_eq!(column.result.monthly_net_income, dec!(5636));
        }
    }

    // =========================================================================
    // input validation tests
    // =========================================================================

    #[test]
    fn rejects_empty_city_list() {
        assert_eq!(
            compare(&[]),
            Err(CalculationError::CityCount { count: 0, max: 3 })
        );
    }

    #[test]
    fn rejects_more_than_three_cities() {
        assert_eq!(
            compare(&["nyc", "austin", "la", "sf"]),
            Err(CalculationError::CityCount { count: 4, max: 3 })
        );
    }

    #[test]
    fn rejects_duplicate_city() {
        assert_eq!(
            compare(&["nyc", "austin", "nyc"]),
            Err(CalculationError::DuplicateCity("nyc".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_city() {
        assert_eq!(
            compare(&["nyc", "atlantis"]),
            Err(CalculationError::UnknownCity("atlantis".to_string()))
        );
    }
}
