use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    #[serde(alias = "married")]
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedJoint,
        Self::MarriedSeparate,
        Self::HeadOfHousehold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedJoint => "married_joint",
            Self::MarriedSeparate => "married_separate",
            Self::HeadOfHousehold => "head_of_household",
        }
    }

    /// Short IRS-style code (`S`, `MFJ`, `MFS`, `HOH`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedJoint => "MFJ",
            Self::MarriedSeparate => "MFS",
            Self::HeadOfHousehold => "HOH",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedJoint => "Married Filing Jointly",
            Self::MarriedSeparate => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    /// Accepts the snake_case names, `married` as an alias for joint filing,
    /// and the short codes. Matching ignores ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                s.eq_ignore_ascii_case(status.as_str()) || s.eq_ignore_ascii_case(status.code())
            })
            .or_else(|| {
                s.eq_ignore_ascii_case("married")
                    .then_some(Self::MarriedJoint)
            })
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilingStatus {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalculationError::UnknownFilingStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_names_codes_and_alias() {
        let cases = [
            ("single", FilingStatus::Single),
            ("S", FilingStatus::Single),
            ("married_joint", FilingStatus::MarriedJoint),
            ("married", FilingStatus::MarriedJoint),
            ("MFJ", FilingStatus::MarriedJoint),
            ("married_separate", FilingStatus::MarriedSeparate),
            ("mfs", FilingStatus::MarriedSeparate),
            ("head_of_household", FilingStatus::HeadOfHousehold),
            (" HOH ", FilingStatus::HeadOfHousehold),
        ];

        for (input, expected) in cases {
            assert_eq!(FilingStatus::parse(input), Some(expected), "input '{input}'");
        }
    }

    #[test]
    fn from_str_rejects_unknown_status() {
        let result = "widowed".parse::<FilingStatus>();

        assert_eq!(
            result,
            Err(CalculationError::UnknownFilingStatus("widowed".to_string()))
        );
    }

    #[test]
    fn serde_uses_snake_case_and_accepts_married_alias() {
        let json = serde_json::to_string(&FilingStatus::HeadOfHousehold).unwrap();
        assert_eq!(json, "\"head_of_household\"");

        let status: FilingStatus = serde_json::from_str("\"married\"").unwrap();
        assert_eq!(status, FilingStatus::MarriedJoint);
    }
}
