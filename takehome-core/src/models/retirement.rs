use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;
use crate::calculations::common::round_to_whole_dollars;

/// Common employer 401(k) match formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPreset {
    /// 50% of contributions up to 6% of salary.
    #[serde(rename = "50_6")]
    HalfUpToSix,
    /// 100% of contributions up to 3% of salary.
    #[serde(rename = "100_3")]
    FullUpToThree,
    /// 100% of contributions up to 4% of salary.
    #[serde(rename = "100_4")]
    FullUpToFour,
    /// 100% of contributions up to 5% of salary.
    #[serde(rename = "100_5")]
    FullUpToFive,
}

impl MatchPreset {
    pub const ALL: [MatchPreset; 4] = [
        Self::HalfUpToSix,
        Self::FullUpToThree,
        Self::FullUpToFour,
        Self::FullUpToFive,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::HalfUpToSix => "50_6",
            Self::FullUpToThree => "100_3",
            Self::FullUpToFour => "100_4",
            Self::FullUpToFive => "100_5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HalfUpToSix => "50% up to 6%",
            Self::FullUpToThree => "100% up to 3%",
            Self::FullUpToFour => "100% up to 4%",
            Self::FullUpToFive => "100% up to 5%",
        }
    }

    /// Fraction of the (capped) employee contribution the employer adds.
    pub fn match_rate(&self) -> Decimal {
        match self {
            Self::HalfUpToSix => dec!(0.5),
            Self::FullUpToThree | Self::FullUpToFour | Self::FullUpToFive => dec!(1.0),
        }
    }

    /// Fraction of salary above which employee contributions are not matched.
    pub fn cap_rate(&self) -> Decimal {
        match self {
            Self::HalfUpToSix => dec!(0.06),
            Self::FullUpToThree => dec!(0.03),
            Self::FullUpToFour => dec!(0.04),
            Self::FullUpToFive => dec!(0.05),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.id() == id.trim())
    }
}

/// Largest custom match rate accepted, as a whole percentage (10x the
/// employee's contribution).
pub const MAX_CUSTOM_MATCH_PERCENT: Decimal = dec!(1000);

/// Employer match rule attached to a retirement plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmployerMatch {
    #[default]
    NoMatch,
    Preset(MatchPreset),
    /// Both values are whole percentages (`50` means 50%).
    Custom {
        match_percent: Decimal,
        cap_percent: Decimal,
    },
}

impl EmployerMatch {
    /// Builds a match rule from its wire tag (`none`, a preset id, or `custom`).
    ///
    /// # Errors
    ///
    /// * [`CalculationError::UnknownMatchType`] for an unrecognised tag.
    /// * [`CalculationError::IncompleteCustomMatch`] when `custom` is missing
    ///   either percentage.
    /// * [`CalculationError::InvalidCustomMatch`] for out-of-range values.
    pub fn parse(
        match_type: &str,
        custom_match_percent: Option<Decimal>,
        custom_match_cap: Option<Decimal>,
    ) -> Result<Self, CalculationError> {
        let tag = match_type.trim();
        let employer_match = if tag.is_empty() || tag.eq_ignore_ascii_case("none") {
            Self::NoMatch
        } else if tag.eq_ignore_ascii_case("custom") {
            match (custom_match_percent, custom_match_cap) {
                (Some(match_percent), Some(cap_percent)) => Self::Custom {
                    match_percent,
                    cap_percent,
                },
                _ => return Err(CalculationError::IncompleteCustomMatch),
            }
        } else {
            MatchPreset::from_id(tag)
                .map(Self::Preset)
                .ok_or_else(|| CalculationError::UnknownMatchType(match_type.to_string()))?
        };

        employer_match.validate()?;
        Ok(employer_match)
    }

    pub fn match_type(&self) -> &'static str {
        match self {
            Self::NoMatch => "none",
            Self::Preset(preset) => preset.id(),
            Self::Custom { .. } => "custom",
        }
    }

    /// Custom percentages must be non-negative, the match rate cannot
    /// exceed [`MAX_CUSTOM_MATCH_PERCENT`] and the cap cannot exceed the
    /// whole salary.
    pub fn validate(&self) -> Result<(), CalculationError> {
        if let Self::Custom {
            match_percent,
            cap_percent,
        } = *self
        {
            if match_percent < Decimal::ZERO
                || match_percent > MAX_CUSTOM_MATCH_PERCENT
                || cap_percent < Decimal::ZERO
                || cap_percent > Decimal::ONE_HUNDRED
            {
                return Err(CalculationError::InvalidCustomMatch {
                    match_percent,
                    cap_percent,
                });
            }
        }
        Ok(())
    }
}

/// Employee deferral choice plus the employer's match rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RetirementPlan {
    /// Whole percentage of salary, 0 to 100.
    pub employee_percent: Decimal,
    pub employer_match: EmployerMatch,
}

impl RetirementPlan {
    pub fn new(
        employee_percent: Decimal,
        employer_match: EmployerMatch,
    ) -> Self {
        Self {
            employee_percent,
            employer_match,
        }
    }
}

/// Derived 401(k) figures for one salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementContribution {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub employee_percent: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub employee_amount: Decimal,
    pub employer_match_type: &'static str,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub employer_match_percent: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub employer_match_cap: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub employer_match_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_contribution: Decimal,
}

impl RetirementContribution {
    /// Copy with every dollar amount rounded to whole dollars. The total is
    /// rounded from the unrounded parts.
    pub fn rounded(&self) -> Self {
        Self {
            employee_amount: round_to_whole_dollars(self.employee_amount),
            employer_match_amount: round_to_whole_dollars(self.employer_match_amount),
            total_contribution: round_to_whole_dollars(self.total_contribution),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_none_and_empty_tag_mean_no_match() {
        assert_eq!(EmployerMatch::parse("none", None, None), Ok(EmployerMatch::NoMatch));
        assert_eq!(EmployerMatch::parse("", None, None), Ok(EmployerMatch::NoMatch));
    }

    #[test]
    fn parse_maps_every_preset_id() {
        for preset in MatchPreset::ALL {
            assert_eq!(
                EmployerMatch::parse(preset.id(), None, None),
                Ok(EmployerMatch::Preset(preset))
            );
        }
    }

    #[test]
    fn parse_custom_requires_both_values() {
        assert_eq!(
            EmployerMatch::parse("custom", Some(dec!(50)), None),
            Err(CalculationError::IncompleteCustomMatch)
        );
        assert_eq!(
            EmployerMatch::parse("custom", Some(dec!(50)), Some(dec!(6))),
            Ok(EmployerMatch::Custom {
                match_percent: dec!(50),
                cap_percent: dec!(6),
            })
        );
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        assert_eq!(
            EmployerMatch::parse("200_10", None, None),
            Err(CalculationError::UnknownMatchType("200_10".to_string()))
        );
    }

    #[test]
    fn parse_rejects_cap_above_salary() {
        let result = EmployerMatch::parse("custom", Some(dec!(100)), Some(dec!(120)));

        assert_eq!(
            result,
            Err(CalculationError::InvalidCustomMatch {
                match_percent: dec!(100),
                cap_percent: dec!(120),
            })
        );
    }

    #[test]
    fn validate_rejects_match_rate_above_maximum() {
        let rule = EmployerMatch::Custom {
            match_percent: dec!(1000000000000000000000000000),
            cap_percent: dec!(5),
        };

        assert_eq!(
            rule.validate(),
            Err(CalculationError::InvalidCustomMatch {
                match_percent: dec!(1000000000000000000000000000),
                cap_percent: dec!(5),
            })
        );
        assert_eq!(
            EmployerMatch::parse("custom", Some(MAX_CUSTOM_MATCH_PERCENT), Some(dec!(5))),
            Ok(EmployerMatch::Custom {
                match_percent: MAX_CUSTOM_MATCH_PERCENT,
                cap_percent: dec!(5),
            })
        );
    }

    #[test]
    fn rounded_rounds_total_from_unrounded_parts() {
        let contribution = RetirementContribution {
            employee_percent: dec!(3),
            employee_amount: dec!(1500.40),
            employer_match_type: "none",
            employer_match_percent: None,
            employer_match_cap: None,
            employer_match_amount: dec!(750.40),
            total_contribution: dec!(2250.80),
        };

        let rounded = contribution.rounded();

        assert_eq!(rounded.employee_amount, dec!(1500));
        assert_eq!(rounded.employer_match_amount, dec!(750));
        assert_eq!(rounded.total_contribution, dec!(2251));
    }
}
