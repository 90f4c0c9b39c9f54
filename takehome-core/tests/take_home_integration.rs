//! End-to-end take-home scenarios against the 2025 tables.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use takehome_core::calculations::MAX_SALARY;
use takehome_core::tables::states::STATE_TAXES;
use takehome_core::{
    CalculationError, EmployerMatch, FilingStatus, MatchPreset, RetirementPlan, TAX_YEAR_2025,
    TakeHomeCalculator, TakeHomeInput, calculate_take_home, validate_salary,
};

fn calculator() -> TakeHomeCalculator<'static> {
    TakeHomeCalculator::new(&TAX_YEAR_2025)
}

#[test]
fn bundled_tables_are_consistent() {
    assert_eq!(TAX_YEAR_2025.validate(), Ok(()));
}

#[test]
fn high_earner_pays_capped_social_security_and_additional_medicare() {
    let input = TakeHomeInput::new(dec!(250000), FilingStatus::Single, "TX");
    let result = calculate_take_home(&input).unwrap();

    assert_eq!(result.federal_tax, dec!(57063));
    assert_eq!(result.social_security_tax, dec!(10918));
    assert_eq!(result.medicare_tax, dec!(4075));
    assert_eq!(result.fica_total, dec!(14993));
    assert_eq!(result.total_tax, dec!(72056));
    assert_eq!(result.net_income, dec!(177944));
    assert_eq!(result.monthly_net_income, dec!(14829));
}

#[test]
fn married_joint_millionaire_in_california_hits_contribution_limit() {
    let plan = RetirementPlan::new(dec!(10), EmployerMatch::Preset(MatchPreset::HalfUpToSix));
    let input =
        TakeHomeInput::new(dec!(1000000), FilingStatus::MarriedJoint, "CA").with_retirement(plan);
    let result = calculator().calculate(&input).unwrap();
    let contribution = result.retirement_contribution.as_ref().unwrap();

    assert_eq!(contribution.employee_amount, dec!(23500));
    assert_eq!(contribution.employer_match_amount, dec!(11750));
    assert_eq!(contribution.total_contribution, dec!(35250));
    assert_eq!(result.taxable_income, dec!(976500));
    assert_eq!(result.federal_tax, dec!(285368));
    assert_eq!(result.state_tax, dec!(102099));
    assert_eq!(result.medicare_tax, dec!(21250));
    assert_eq!(result.total_tax, dec!(419634));
    assert_eq!(result.net_income_after_contribution, dec!(556866));
    assert_eq!(result.effective_tax_rate, dec!(0.41963436));
}

#[test]
fn head_of_household_flat_state_with_custom_match() {
    let plan = RetirementPlan::new(
        dec!(6),
        EmployerMatch::Custom {
            match_percent: dec!(50),
            cap_percent: dec!(4),
        },
    );
    let input =
        TakeHomeInput::new(dec!(75000), FilingStatus::HeadOfHousehold, "IL").with_retirement(plan);
    let result = calculator().calculate(&input).unwrap();

    assert_eq!(result.taxable_income, dec!(70500));
    assert_eq!(result.federal_tax, dec!(8685));
    assert_eq!(result.state_tax, dec!(3490));
    // 1,087.50 rounds away from zero.
    assert_eq!(result.medicare_tax, dec!(1088));
    assert_eq!(result.total_tax, dec!(17912));
    assert_eq!(result.monthly_net_income, dec!(4382));
}

#[test]
fn married_separate_progressive_state() {
    let input = TakeHomeInput::new(dec!(150000), FilingStatus::MarriedSeparate, "OR");
    let result = calculator().calculate(&input).unwrap();

    assert_eq!(result.federal_tax, dec!(28847));
    assert_eq!(result.state_tax, dec!(13112));
    assert_eq!(result.total_tax, dec!(53659));
    assert_eq!(result.net_income, dec!(96342));
}

#[test]
fn every_state_produces_a_result() {
    let calculator = calculator();

    for state in STATE_TAXES {
        let input = TakeHomeInput::new(dec!(85000), FilingStatus::Single, state.code);
        let result = calculator.calculate(&input).unwrap();

        assert!(result.state_tax >= Decimal::ZERO, "{}", state.code);
        assert!(result.net_income < result.gross_income, "{}", state.code);
    }
}

#[test]
fn unknown_state_matches_no_income_tax_state() {
    let unknown = calculate_take_home(&TakeHomeInput::new(
        dec!(100000),
        FilingStatus::Single,
        "ZZ",
    ))
    .unwrap();
    let texas = calculate_take_home(&TakeHomeInput::new(
        dec!(100000),
        FilingStatus::Single,
        "TX",
    ))
    .unwrap();

    assert_eq!(unknown, texas);
}

#[test]
fn repeated_calculations_are_identical() {
    let input = TakeHomeInput::new(dec!(123456.78), FilingStatus::MarriedJoint, "NY");
    let calculator = calculator();

    assert_eq!(calculator.calculate(&input), calculator.calculate(&input));
}

#[test]
fn salary_validation_at_the_boundary() {
    assert_eq!(validate_salary(MAX_SALARY), Ok(MAX_SALARY));
    assert_eq!(
        validate_salary(dec!(0)),
        Err(CalculationError::NonPositiveSalary(dec!(0)))
    );
}

#[test]
fn result_serializes_amounts_as_json_numbers() {
    let input = TakeHomeInput::new(dec!(100000), FilingStatus::Single, "TX");
    let result = calculate_take_home(&input).unwrap();
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.starts_with(r#"{"grossIncome":100000,"taxableIncome":100000,"#));
    assert!(json.contains(r#""effectiveTaxRate":0.24564"#));
    assert!(json.contains(r#""monthlyNetIncome":6286"#));
    assert!(!json.contains("retirementContribution"));
}

#[test]
fn contribution_serializes_amounts_as_json_numbers() {
    let plan = RetirementPlan::new(dec!(10), EmployerMatch::Preset(MatchPreset::FullUpToFour));
    let input = TakeHomeInput::new(dec!(100000), FilingStatus::Single, "TX").with_retirement(plan);
    let result = calculate_take_home(&input).unwrap();
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.contains(
        r#""retirementContribution":{"employeePercent":10,"employeeAmount":10000,"employerMatchType":"100_4","employerMatchAmount":4000,"totalContribution":14000}"#
    ));
}
