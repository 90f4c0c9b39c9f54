//! Employee FICA (Social Security and Medicare) withholding.
//!
//! FICA is charged on gross wages. Traditional 401(k) deferrals reduce
//! income subject to federal and state income tax but do not reduce FICA
//! wages, so callers must pass gross salary here.

use rust_decimal::Decimal;

use crate::models::FilingStatus;
use crate::tables::FicaConfig;

/// Unrounded FICA amounts for one year of wages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FicaTaxes {
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub total: Decimal,
}

/// Computes Social Security and Medicare tax on `gross_income`.
///
/// Social Security stops at the wage base. Medicare applies to every
/// dollar, plus the additional rate on wages above the filing-status
/// threshold.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::FilingStatus;
/// use takehome_core::calculations::fica;
/// use takehome_core::tables::TAX_YEAR_2025;
///
/// let taxes = fica(&TAX_YEAR_2025.fica, dec!(250000), FilingStatus::Single);
///
/// assert_eq!(taxes.social_security, dec!(10918.20));
/// assert_eq!(taxes.medicare, dec!(4075));
/// ```
pub fn fica(
    config: &FicaConfig,
    gross_income: Decimal,
    status: FilingStatus,
) -> FicaTaxes {
    let social_security =
        gross_income.min(config.social_security_wage_base) * config.social_security_rate;

    let mut medicare = gross_income * config.medicare_rate;
    let threshold = *config.additional_medicare_thresholds.get(status);
    if gross_income > threshold {
        medicare += (gross_income - threshold) * config.additional_medicare_rate;
    }

    FicaTaxes {
        social_security,
        medicare,
        total: social_security + medicare,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::tables::TAX_YEAR_2025;

    fn config() -> FicaConfig {
        TAX_YEAR_2025.fica
    }

    #[test]
    fn below_wage_base_and_threshold() {
        let taxes = fica(&config(), dec!(100000), FilingStatus::Single);

        assert_eq!(taxes.social_security, dec!(6200));
        assert_eq!(taxes.medicare, dec!(1450));
        assert_eq!(taxes.total, dec!(7650));
    }

    #[test]
    fn social_security_is_capped_at_wage_base() {
        let at_million = fica(&config(), dec!(1000000), FilingStatus::Single);
        let at_two_million = fica(&config(), dec!(2000000), FilingStatus::Single);

        assert_eq!(at_million.social_security, dec!(10918.20));
        assert_eq!(at_two_million.social_security, dec!(10918.20));
    }

    #[test]
    fn additional_medicare_applies_only_to_excess() {
        let taxes = fica(&config(), dec!(250000), FilingStatus::Single);

        // 3,625 + 50,000 * 0.009
        assert_eq!(taxes.medicare, dec!(4075));
    }

    #[test]
    fn additional_medicare_not_applied_at_threshold() {
        let taxes = fica(&config(), dec!(200000), FilingStatus::Single);

        assert_eq!(taxes.medicare, dec!(2900));
    }

    #[test]
    fn threshold_depends_on_filing_status() {
        let joint = fica(&config(), dec!(250000), FilingStatus::MarriedJoint);
        let separate = fica(&config(), dec!(250000), FilingStatus::MarriedSeparate);

        assert_eq!(joint.medicare, dec!(3625));
        // 3,625 + 125,000 * 0.009
        assert_eq!(separate.medicare, dec!(4750));
    }

    #[test]
    fn total_is_sum_of_parts() {
        let taxes = fica(&config(), dec!(333333.33), FilingStatus::HeadOfHousehold);

        assert_eq!(taxes.total, taxes.social_security + taxes.medicare);
    }
}
