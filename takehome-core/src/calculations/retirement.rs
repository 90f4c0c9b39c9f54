//! 401(k) employee deferral and employer match.

use rust_decimal::Decimal;

use super::CalculationError;
use super::common::percent_to_fraction;
use crate::models::{EmployerMatch, RetirementContribution, RetirementPlan};

/// Computes the employee deferral and employer match for `salary`.
///
/// The employee amount is capped at `annual_limit`. Preset matches apply
/// their rate to the part of the deferral that fits under the salary cap;
/// custom matches apply their rate to the whole deferral and then cap the
/// match itself. Amounts are returned unrounded.
///
/// # Errors
///
/// * [`CalculationError::InvalidEmployeePercent`] when the employee
///   percentage is outside 0 to 100.
/// * [`CalculationError::InvalidCustomMatch`] for out-of-range custom
///   match values, or when the match overflows.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::{EmployerMatch, MatchPreset, RetirementPlan};
/// use takehome_core::calculations::contribution;
///
/// let plan = RetirementPlan::new(dec!(10), EmployerMatch::Preset(MatchPreset::FullUpToFour));
/// let result = contribution(dec!(100000), &plan, dec!(23500)).unwrap();
///
/// assert_eq!(result.employee_amount, dec!(10000));
/// assert_eq!(result.employer_match_amount, dec!(4000));
/// assert_eq!(result.total_contribution, dec!(14000));
/// ```
pub fn contribution(
    salary: Decimal,
    plan: &RetirementPlan,
    annual_limit: Decimal,
) -> Result<RetirementContribution, CalculationError> {
    validate_employee_percent(plan.employee_percent)?;
    plan.employer_match.validate()?;

    let employee_amount = (salary * percent_to_fraction(plan.employee_percent)).min(annual_limit);
    let employer_match_amount = employer_match(salary, employee_amount, &plan.employer_match)?;

    let (employer_match_percent, employer_match_cap) = match plan.employer_match {
        EmployerMatch::Custom {
            match_percent,
            cap_percent,
        } => (Some(match_percent), Some(cap_percent)),
        _ => (None, None),
    };

    Ok(RetirementContribution {
        employee_percent: plan.employee_percent,
        employee_amount,
        employer_match_type: plan.employer_match.match_type(),
        employer_match_percent,
        employer_match_cap,
        employer_match_amount,
        total_contribution: employee_amount + employer_match_amount,
    })
}

pub(crate) fn validate_employee_percent(percent: Decimal) -> Result<(), CalculationError> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(CalculationError::InvalidEmployeePercent(percent));
    }
    Ok(())
}

fn employer_match(
    salary: Decimal,
    employee_amount: Decimal,
    rule: &EmployerMatch,
) -> Result<Decimal, CalculationError> {
    match *rule {
        EmployerMatch::NoMatch => Ok(Decimal::ZERO),
        EmployerMatch::Preset(preset) => {
            let matched_contribution = employee_amount.min(salary * preset.cap_rate());
            Ok(matched_contribution * preset.match_rate())
        }
        EmployerMatch::Custom {
            match_percent,
            cap_percent,
        } => {
            let overflow = || CalculationError::InvalidCustomMatch {
                match_percent,
                cap_percent,
            };
            let max_match = salary
                .checked_mul(percent_to_fraction(cap_percent))
                .ok_or_else(overflow)?;
            let matched = employee_amount
                .checked_mul(percent_to_fraction(match_percent))
                .ok_or_else(overflow)?;
            Ok(matched.min(max_match))
        }
    }
}
