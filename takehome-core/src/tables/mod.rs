//! Reference tables: federal schedules, state regimes, payroll tax
//! constants, 401(k) limits and the comparable cities.
//!
//! Everything here is immutable `const`/`static` data. [`TAX_YEAR_2025`]
//! bundles the pieces the calculators need so tests can substitute their
//! own [`TaxTables`].

pub mod cities;
pub mod federal;
pub mod states;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::calculations::{BracketTableError, validate_brackets};
use crate::models::{ByFilingStatus, FilingStatus, StateTaxInfo, StateTaxRegime, TaxBracket};

/// Errors found while checking a [`TaxTables`] for consistency.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTableError {
    #[error("{schedule} schedule is malformed: {source}")]
    Schedule {
        schedule: String,
        #[source]
        source: BracketTableError,
    },

    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    #[error("{name} must be positive, got {value}")]
    NonPositiveAmount { name: &'static str, value: Decimal },
}

/// Social Security and Medicare parameters for employee wages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FicaConfig {
    /// Employee share of Social Security tax.
    pub social_security_rate: Decimal,

    /// Wages above this amount are exempt from Social Security tax.
    pub social_security_wage_base: Decimal,

    /// Employee share of Medicare tax, applied to all wages.
    pub medicare_rate: Decimal,

    /// Additional Medicare tax applied only to wages above the threshold.
    pub additional_medicare_rate: Decimal,

    pub additional_medicare_thresholds: ByFilingStatus<Decimal>,
}

/// Every table the take-home calculation reads for one tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxTables {
    pub tax_year: i32,
    pub federal: ByFilingStatus<&'static [TaxBracket]>,
    pub states: &'static [StateTaxInfo],
    pub fica: FicaConfig,
    /// Annual employee elective deferral limit for a 401(k).
    pub contribution_limit: Decimal,
}

pub static TAX_YEAR_2025: TaxTables = TaxTables {
    tax_year: 2025,
    federal: federal::SCHEDULES,
    states: states::STATE_TAXES,
    fica: FicaConfig {
        social_security_rate: dec!(0.062),
        social_security_wage_base: dec!(176100),
        medicare_rate: dec!(0.0145),
        additional_medicare_rate: dec!(0.009),
        additional_medicare_thresholds: ByFilingStatus {
            single: dec!(200000),
            married_joint: dec!(250000),
            married_separate: dec!(125000),
            head_of_household: dec!(200000),
        },
    },
    contribution_limit: dec!(23500),
};

impl TaxTables {
    pub fn federal_schedule(
        &self,
        status: FilingStatus,
    ) -> &'static [TaxBracket] {
        self.federal.get(status)
    }

    /// Looks up a state by code, ignoring ASCII case and surrounding
    /// whitespace.
    pub fn state(
        &self,
        code: &str,
    ) -> Option<&'static StateTaxInfo> {
        let code = code.trim();
        self.states
            .iter()
            .find(|state| state.code.eq_ignore_ascii_case(code))
    }

    /// Checks every schedule and constant for consistency.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaxTableError`] found.
    pub fn validate(&self) -> Result<(), TaxTableError> {
        for status in FilingStatus::ALL {
            validate_brackets(self.federal_schedule(status)).map_err(|source| {
                TaxTableError::Schedule {
                    schedule: format!("federal {}", status.as_str()),
                    source,
                }
            })?;
        }

        for state in self.states {
            match state.regime {
                StateTaxRegime::NoIncomeTax => {}
                StateTaxRegime::Flat(rate) => check_rate("state flat rate", rate)?,
                StateTaxRegime::Progressive(brackets) => {
                    validate_brackets(brackets).map_err(|source| TaxTableError::Schedule {
                        schedule: format!("state {}", state.code),
                        source,
                    })?;
                }
            }
        }

        check_rate("social security rate", self.fica.social_security_rate)?;
        check_rate("medicare rate", self.fica.medicare_rate)?;
        check_rate(
            "additional medicare rate",
            self.fica.additional_medicare_rate,
        )?;
        check_positive(
            "social security wage base",
            self.fica.social_security_wage_base,
        )?;
        check_positive("401(k) contribution limit", self.contribution_limit)?;

        Ok(())
    }
}

impl Default for TaxTables {
    fn default() -> Self {
        TAX_YEAR_2025
    }
}

fn check_rate(
    name: &'static str,
    value: Decimal,
) -> Result<(), TaxTableError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(TaxTableError::InvalidRate { name, value });
    }
    Ok(())
}

fn check_positive(
    name: &'static str,
    value: Decimal,
) -> Result<(), TaxTableError> {
    if value <= Decimal::ZERO {
        return Err(TaxTableError::NonPositiveAmount { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tax_year_2025_tables_are_consistent() {
        assert_eq!(TAX_YEAR_2025.validate(), Ok(()));
    }

    #[test]
    fn state_lookup_ignores_case() {
        let state = TAX_YEAR_2025.state("ny").expect("New York should be present");

        assert_eq!(state.code, "NY");
    }

    #[test]
    fn unknown_state_is_absent() {
        assert!(TAX_YEAR_2025.state("ZZ").is_none());
    }

    #[test]
    fn validate_reports_bad_fica_rate() {
        let mut tables = TAX_YEAR_2025;
        tables.fica.medicare_rate = dec!(1.45);

        assert_eq!(
            tables.validate(),
            Err(TaxTableError::InvalidRate {
                name: "medicare rate",
                value: dec!(1.45),
            })
        );
    }

    #[test]
    fn validate_reports_malformed_federal_schedule() {
        const BROKEN: &[TaxBracket] = &[TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(1000)))];
        let mut tables = TAX_YEAR_2025;
        tables.federal.married_separate = BROKEN;

        assert_eq!(
            tables.validate(),
            Err(TaxTableError::Schedule {
                schedule: "federal married_separate".to_string(),
                source: BracketTableError::BoundedTop,
            })
        );
    }
}
