//! Take-home pay: income tax, FICA and 401(k) deferral combined into one
//! result record.
//!
//! # Calculation Order
//!
//! | Step | Figure |
//! |------|--------|
//! | 1    | 401(k) deferral and match (only when the employee percent is above 0) |
//! | 2    | Taxable income = salary - employee deferral |
//! | 3    | Federal and state income tax on taxable income |
//! | 4    | FICA on gross salary |
//! | 5    | Total tax = federal + state + FICA |
//! | 6    | Net income = salary - total tax |
//! | 7    | Net after contribution = net income - employee deferral |
//! | 8    | Effective rate = total tax / salary |
//! | 9    | Monthly net = net after contribution / 12 |
//!
//! Every dollar figure is rounded to whole dollars once, from its unrounded
//! value, when the result is assembled.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome_core::{FilingStatus, TakeHomeInput};
//! use takehome_core::calculations::TakeHomeCalculator;
//!
//! let calculator = TakeHomeCalculator::default();
//! let input = TakeHomeInput::new(dec!(100000), FilingStatus::Single, "TX");
//! let result = calculator.calculate(&input).unwrap();
//!
//! assert_eq!(result.federal_tax, dec!(16914));
//! assert_eq!(result.fica_total, dec!(7650));
//! assert_eq!(result.net_income, dec!(75436));
//! assert_eq!(result.effective_tax_rate, dec!(0.24564));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::CalculationError;
use super::common::round_to_whole_dollars;
use super::fica::fica;
use super::income_tax::{federal_tax, state_tax};
use super::retirement::{contribution, validate_employee_percent};
use crate::models::{TakeHomeInput, TaxCalculationResult};
use crate::tables::{TAX_YEAR_2025, TaxTables};

/// Largest salary accepted from user input.
pub const MAX_SALARY: Decimal = dec!(100000000);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Checks a user-entered salary before it reaches the calculator.
///
/// # Errors
///
/// * [`CalculationError::NonPositiveSalary`] for zero or negative salaries.
/// * [`CalculationError::SalaryTooLarge`] above [`MAX_SALARY`].
pub fn validate_salary(salary: Decimal) -> Result<Decimal, CalculationError> {
    if salary <= Decimal::ZERO {
        return Err(CalculationError::NonPositiveSalary(salary));
    }
    if salary > MAX_SALARY {
        return Err(CalculationError::SalaryTooLarge {
            salary,
            max: MAX_SALARY,
        });
    }
    Ok(salary)
}

/// Calculator for take-home pay over one set of [`TaxTables`].
///
/// The calculator holds no mutable state; one instance can be shared
/// across threads and reused for any number of calculations.
#[derive(Debug, Clone, Copy)]
pub struct TakeHomeCalculator<'a> {
    tables: &'a TaxTables,
}

impl<'a> TakeHomeCalculator<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a TaxTables {
        self.tables
    }

    /// Computes the full take-home breakdown for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if:
    /// - the salary is zero or negative
    /// - the retirement plan has an employee percent outside 0 to 100
    /// - a custom employer match is out of range
    pub fn calculate(
        &self,
        input: &TakeHomeInput,
    ) -> Result<TaxCalculationResult, CalculationError> {
        let salary = input.salary;
        if salary <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveSalary(salary));
        }

        let retirement = match &input.retirement {
            Some(plan) if plan.employee_percent > Decimal::ZERO => Some(contribution(
                salary,
                plan,
                self.tables.contribution_limit,
            )?),
            Some(plan) => {
                validate_employee_percent(plan.employee_percent)?;
                None
            }
            None => None,
        };
        let employee_deferral = retirement
            .as_ref()
            .map_or(Decimal::ZERO, |c| c.employee_amount);

        let taxable_income = salary - employee_deferral;
        let federal = federal_tax(self.tables, taxable_income, input.filing_status);
        let state = state_tax(self.tables, taxable_income, &input.state_code);
        let payroll = fica(&self.tables.fica, salary, input.filing_status);

        let total_tax = federal + state + payroll.total;
        let net_income = salary - total_tax;
        let net_income_after_contribution = net_income - employee_deferral;
        let effective_tax_rate = (total_tax / salary).normalize();

        debug!(
            %salary,
            filing_status = input.filing_status.as_str(),
            state_code = %input.state_code,
            %taxable_income,
            %federal,
            %state,
            fica = %payroll.total,
            %total_tax,
            "calculated take-home pay"
        );

        Ok(TaxCalculationResult {
            gross_income: salary,
            retirement_contribution: retirement.map(|c| c.rounded()),
            taxable_income: round_to_whole_dollars(taxable_income),
            federal_tax: round_to_whole_dollars(federal),
            state_tax: round_to_whole_dollars(state),
            social_security_tax: round_to_whole_dollars(payroll.social_security),
            medicare_tax: round_to_whole_dollars(payroll.medicare),
            fica_total: round_to_whole_dollars(payroll.total),
            total_tax: round_to_whole_dollars(total_tax),
            net_income: round_to_whole_dollars(net_income),
            net_income_after_contribution: round_to_whole_dollars(net_income_after_contribution),
            effective_tax_rate,
            monthly_net_income: round_to_whole_dollars(
                net_income_after_contribution / MONTHS_PER_YEAR,
            ),
        })
    }
}

impl Default for TakeHomeCalculator<'static> {
    fn default() -> Self {
        Self::new(&TAX_YEAR_2025)
    }
}

/// Convenience wrapper using the 2025 tables.
///
/// # Errors
///
/// See [`TakeHomeCalculator::calculate`].
pub fn calculate_take_home(
    input: &TakeHomeInput,
) -> Result<TaxCalculationResult, CalculationError> {
    TakeHomeCalculator::default().calculate(input)
}
