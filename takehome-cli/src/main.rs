use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use takehome_cli::app::{App, BatchOutcome};
use takehome_cli::config::{AppConfig, DEFAULT_CONFIG_FILE};
use takehome_cli::logging::LogSettings;
use takehome_cli::report::{CitiesReport, ComparisonReport, ResultReport, StatesReport};
use takehome_cli::utils::parse_decimal;
use takehome_cli::{csv_loader, logging};
use takehome_core::tables::TAX_YEAR_2025;
use takehome_core::tables::cities::CITIES;
use takehome_core::{
    CalculationError, EmployerMatch, FilingStatus, RetirementPlan, TakeHomeInput,
    TaxCalculationResult,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Take-home pay calculator for US salaries (2025 tax year).
///
/// Computes federal and state income tax, Social Security, Medicare and
/// 401(k) deferrals, and compares monthly take-home after rent across cities.
#[derive(Debug, Parser)]
#[command(name = "takehome", version)]
struct Cli {
    /// Configuration file. Missing files fall back to built-in defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print results as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter, e.g. `debug` or `takehome_core=trace`. Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file. Overrides the config file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Take-home breakdown for one salary.
    Calculate {
        #[command(flatten)]
        household: Household,

        /// Two-letter state code. Defaults to the configured state.
        #[arg(long)]
        state: Option<String>,

        #[command(flatten)]
        retirement: RetirementArgs,
    },

    /// Compare monthly take-home after rent across up to three cities.
    Compare {
        #[command(flatten)]
        household: Household,

        /// City id (see `takehome cities`). Repeat for each city.
        #[arg(long = "city", required = true)]
        cities: Vec<String>,

        #[command(flatten)]
        retirement: RetirementArgs,
    },

    /// Evaluate every row of a CSV file.
    Batch {
        /// CSV with `salary,filing_status,state_code` and optional 401(k) columns.
        file: PathBuf,
    },

    /// List state income tax regimes.
    States,

    /// List comparable cities and their average rents.
    Cities,
}

#[derive(Debug, Args)]
struct Household {
    /// Annual gross salary, e.g. `85000` or `$85,000`.
    #[arg(long, value_parser = parse_decimal)]
    salary: Decimal,

    /// single, married_joint, married_separate, head_of_household (or S, MFJ, MFS, HOH).
    #[arg(long)]
    status: Option<FilingStatus>,
}

#[derive(Debug, Args)]
struct RetirementArgs {
    /// 401(k) employee contribution as a percent of salary.
    #[arg(long = "contribution", value_parser = parse_decimal)]
    employee_percent: Option<Decimal>,

    /// Employer match: none, 50_6, 100_3, 100_4, 100_5 or custom.
    #[arg(long = "match", default_value = "none")]
    match_type: String,

    /// Custom match rate in percent (with `--match custom`).
    #[arg(long, value_parser = parse_decimal)]
    custom_match_percent: Option<Decimal>,

    /// Custom match cap in percent of salary (with `--match custom`).
    #[arg(long, value_parser = parse_decimal)]
    custom_match_cap: Option<Decimal>,
}

impl RetirementArgs {
    /// Parses `--match` even without `--contribution`, as the CSV loader does.
    fn plan(&self) -> Result<Option<RetirementPlan>, CalculationError> {
        let employer_match = EmployerMatch::parse(
            &self.match_type,
            self.custom_match_percent,
            self.custom_match_cap,
        )?;
        Ok(self
            .employee_percent
            .map(|employee_percent| RetirementPlan::new(employee_percent, employer_match)))
    }
}

// ─── JSON records ────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchRecord<'a> {
    row: usize,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    salary: Decimal,
    filing_status: FilingStatus,
    state_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a TaxCalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a BatchOutcome> for BatchRecord<'a> {
    fn from(outcome: &'a BatchOutcome) -> Self {
        Self {
            row: outcome.row,
            salary: outcome.input.salary,
            filing_status: outcome.input.filing_status,
            state_code: &outcome.input.state_code,
            result: outcome.result.as_ref().ok(),
            error: outcome.result.as_ref().err().map(ToString::to_string),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ─── logging ─────────────────────────────────────────────────────────────────

fn init_logging(
    cli: &Cli,
    config: &AppConfig,
) -> anyhow::Result<()> {
    logging::init_logging(&LogSettings {
        explicit_level: cli.log_level.as_deref(),
        configured_level: &config.logging.level,
        console: !cli.quiet,
        file: cli.log_file.as_deref().or(config.logging.file.as_deref()),
    })
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    init_logging(&cli, &config)?;
    debug!(config = %cli.config.display(), "configuration loaded");

    let mut app = App::new(config);

    match &cli.command {
        Command::Calculate {
            household,
            state,
            retirement,
        } => {
            let mut input = TakeHomeInput::new(
                household.salary,
                app.filing_status(household.status),
                app.state_code(state.as_deref()),
            );
            input.retirement = retirement.plan()?;

            let result = app.calculate(&input)?;
            if cli.json {
                print_json(&result)?;
            } else {
                println!(
                    "{}",
                    ResultReport {
                        input: &input,
                        result: &result,
                    }
                );
            }
        }

        Command::Compare {
            household,
            cities,
            retirement,
        } => {
            let city_ids: Vec<&str> = cities.iter().map(String::as_str).collect();
            let columns = app.compare(
                household.salary,
                app.filing_status(household.status),
                retirement.plan()?,
                &city_ids,
            )?;
            if cli.json {
                print_json(&columns)?;
            } else {
                print!("{}", ComparisonReport(&columns));
            }
        }

        Command::Batch { file } => {
            let inputs = csv_loader::load_from_file(file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            let outcomes = app.run_batch(inputs);

            if cli.json {
                let records: Vec<BatchRecord> = outcomes.iter().map(BatchRecord::from).collect();
                print_json(&records)?;
            } else {
                for outcome in &outcomes {
                    match &outcome.result {
                        Ok(result) => println!(
                            "Row {}: {}\n",
                            outcome.row,
                            ResultReport {
                                input: &outcome.input,
                                result,
                            }
                        ),
                        Err(e) => {
                            warn!(row = outcome.row, error = %e, "row failed");
                            println!("Row {}: error: {e}\n", outcome.row);
                        }
                    }
                }
            }
        }

        Command::States => {
            if cli.json {
                print_json(TAX_YEAR_2025.states)?;
            } else {
                print!("{}", StatesReport(TAX_YEAR_2025.states));
            }
        }

        Command::Cities => {
            if cli.json {
                print_json(CITIES)?;
            } else {
                print!("{}", CitiesReport(CITIES));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use takehome_core::MatchPreset;

    use super::*;

    fn retirement_args(args: &[&str]) -> RetirementArgs {
        let argv = ["takehome", "calculate", "--salary", "100000"]
            .iter()
            .chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Calculate { retirement, .. } => retirement,
            other => panic!("expected calculate, got {other:?}"),
        }
    }

    #[test]
    fn plan_without_contribution_is_none() {
        assert_eq!(retirement_args(&[]).plan(), Ok(None));
        assert_eq!(retirement_args(&["--match", "100_4"]).plan(), Ok(None));
    }

    #[test]
    fn plan_rejects_unknown_match_without_contribution() {
        assert_eq!(
            retirement_args(&["--match", "bogus"]).plan(),
            Err(CalculationError::UnknownMatchType("bogus".to_string()))
        );
    }

    #[test]
    fn plan_with_contribution_and_preset() {
        let plan = retirement_args(&["--contribution", "10", "--match", "100_4"])
            .plan()
            .unwrap();

        assert_eq!(
            plan,
            Some(RetirementPlan::new(
                dec!(10),
                EmployerMatch::Preset(MatchPreset::FullUpToFour)
            ))
        );
    }
}
