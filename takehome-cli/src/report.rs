//! Plain-text renderings of calculation results for the terminal.

use std::fmt;

use takehome_core::calculations::CityComparison;
use takehome_core::models::{RetirementContribution, StateTaxInfo, StateTaxRegime};
use takehome_core::tables::states::state_name;
use takehome_core::{City, TakeHomeInput, TaxCalculationResult};

use crate::format::{format_currency, format_percentage};

/// One take-home breakdown with the input it was computed from.
pub struct ResultReport<'a> {
    pub input: &'a TakeHomeInput,
    pub result: &'a TaxCalculationResult,
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.result;
        writeln!(
            f,
            "{} / {} ({})",
            format_currency(r.gross_income, false),
            self.input.filing_status,
            state_name(&self.input.state_code)
        )?;
        writeln!(f, "Taxable income:     {:>14}", format_currency(r.taxable_income, false))?;
        writeln!(f, "Federal tax:        {:>14}", format_currency(r.federal_tax, false))?;
        writeln!(f, "State tax:          {:>14}", format_currency(r.state_tax, false))?;
        writeln!(f, "Social Security:    {:>14}", format_currency(r.social_security_tax, false))?;
        writeln!(f, "Medicare:           {:>14}", format_currency(r.medicare_tax, false))?;
        writeln!(f, "Total tax:          {:>14}", format_currency(r.total_tax, false))?;
        writeln!(f, "Effective rate:     {:>14}", format_percentage(r.effective_tax_rate, 1))?;
        writeln!(f, "Net income:         {:>14}", format_currency(r.net_income, false))?;
        if let Some(contribution) = &r.retirement_contribution {
            write_contribution(f, contribution)?;
            writeln!(
                f,
                "Net after 401(k):   {:>14}",
                format_currency(r.net_income_after_contribution, false)
            )?;
        }
        write!(
            f,
            "Monthly take-home:  {:>14}",
            format_currency(r.monthly_net_income, false)
        )
    }
}

fn write_contribution(
    f: &mut fmt::Formatter<'_>,
    contribution: &RetirementContribution,
) -> fmt::Result {
    writeln!(
        f,
        "401(k) employee:    {:>14}  ({}%)",
        format_currency(contribution.employee_amount, false),
        contribution.employee_percent.normalize()
    )?;
    writeln!(
        f,
        "401(k) match:       {:>14}  ({})",
        format_currency(contribution.employer_match_amount, false),
        contribution.employer_match_type
    )?;
    writeln!(
        f,
        "401(k) total:       {:>14}",
        format_currency(contribution.total_contribution, false)
    )
}

/// City comparison laid out as one column per city.
pub struct ComparisonReport<'a>(pub &'a [CityComparison]);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        const WIDTH: usize = 22;

        let row = |f: &mut fmt::Formatter<'_>,
                   label: &str,
                   cell: &dyn Fn(&CityComparison) -> String|
         -> fmt::Result {
            write!(f, "{label:<20}")?;
            for column in self.0 {
                write!(f, "{:>WIDTH$}", cell(column))?;
            }
            writeln!(f)
        };

        row(f, "", &|c| c.city.display_name())?;
        row(f, "Federal tax", &|c| format_currency(c.result.federal_tax, false))?;
        row(f, "State tax", &|c| format_currency(c.result.state_tax, false))?;
        row(f, "FICA", &|c| format_currency(c.result.fica_total, false))?;
        row(f, "Total tax", &|c| format_currency(c.result.total_tax, false))?;
        row(f, "Effective rate", &|c| {
            format_percentage(c.result.effective_tax_rate, 1)
        })?;
        row(f, "Monthly take-home", &|c| {
            format_currency(c.result.monthly_net_income, false)
        })?;
        row(f, "Avg. rent (1BR)", &|c| format_currency(c.monthly_rent, false))?;
        row(f, "After rent", &|c| format_currency(c.monthly_after_rent, false))?;
        row(f, "Rent share", &|c| {
            let marker = if c.rent_affordable { "" } else { " !" };
            format!("{}{marker}", format_percentage(c.rent_share, 1))
        })
    }
}

/// The state tax table, one state per line.
pub struct StatesReport<'a>(pub &'a [StateTaxInfo]);

impl fmt::Display for StatesReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for state in self.0 {
            let regime = match state.regime {
                StateTaxRegime::NoIncomeTax => "no income tax".to_string(),
                StateTaxRegime::Flat(rate) => format!("flat {}", format_percentage(rate, 2)),
                StateTaxRegime::Progressive(brackets) => {
                    format!("progressive, {} brackets", brackets.len())
                }
            };
            writeln!(f, "{}  {:<22} {regime}", state.code, state.name)?;
        }
        Ok(())
    }
}

/// The comparable cities with their average rents.
pub struct CitiesReport<'a>(pub &'a [City]);

impl fmt::Display for CitiesReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for city in self.0 {
            writeln!(
                f,
                "{:<14} {:<22} {:>8} / month",
                city.id,
                city.display_name(),
                format_currency(city.avg_rent, false)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use takehome_core::tables::TAX_YEAR_2025;
    use takehome_core::tables::cities::CITIES;
    use takehome_core::{FilingStatus, TakeHomeCalculator, calculate_take_home, compare_cities};

    use super::*;

    #[test]
    fn result_report_shows_key_figures() {
        let input = TakeHomeInput::new(dec!(100000), FilingStatus::Single, "TX");
        let result = calculate_take_home(&input).unwrap();
        let text = ResultReport {
            input: &input,
            result: &result,
        }
        .to_string();

        assert!(text.starts_with("$100,000 / Single (Texas)"));
        assert!(text.contains("Federal tax:"));
        assert!(text.contains("$16,914"));
        assert!(text.contains("24.6%"));
        assert!(text.ends_with("$6,286"));
        assert!(!text.contains("401(k)"));
    }

    #[test]
    fn comparison_report_has_one_column_per_city() {
        let columns = compare_cities(
            &TakeHomeCalculator::default(),
            dec!(100000),
            FilingStatus::Single,
            None,
            &["austin", "nyc"],
        )
        .unwrap();
        let text = ComparisonReport(&columns).to_string();
        let header = text.lines().next().unwrap();

        assert!(header.contains("Austin, TX"));
        assert!(header.contains("New York, NY"));
        assert!(text.contains("$4,586"));
        assert!(text.contains(" !"));
    }

    #[test]
    fn states_report_lists_every_state() {
        let text = StatesReport(TAX_YEAR_2025.states).to_string();

        assert_eq!(text.lines().count(), 51);
        assert!(text.contains("IL  Illinois"));
        assert!(text.contains("flat 4.95%"));
    }

    #[test]
    fn cities_report_lists_every_city() {
        let text = CitiesReport(CITIES).to_string();

        assert_eq!(text.lines().count(), CITIES.len());
        assert!(text.contains("New York, NY"));
    }
}
