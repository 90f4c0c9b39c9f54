//! Application layer: wires configuration, the result cache and the
//! calculator together for the command-line front end.

use chrono::Utc;
use rust_decimal::Decimal;
use takehome_core::calculations::CityComparison;
use takehome_core::{
    CalculationError, FilingStatus, RetirementPlan, TakeHomeCalculator, TakeHomeInput,
    TaxCalculationResult, compare_cities, validate_salary,
};
use tracing::{debug, info};

use crate::cache::ResultCache;
use crate::config::AppConfig;

/// Outcome of one batch row. Rows fail independently.
#[derive(Debug)]
pub struct BatchOutcome {
    /// 1-based, matching the CSV loader's row numbers.
    pub row: usize,
    pub input: TakeHomeInput,
    pub result: Result<TaxCalculationResult, CalculationError>,
}

pub struct App {
    config: AppConfig,
    calculator: TakeHomeCalculator<'static>,
    cache: ResultCache,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let cache = ResultCache::from_config(&config.cache);
        Self {
            config,
            calculator: TakeHomeCalculator::default(),
            cache,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Filing status from the command line, or the configured default.
    pub fn filing_status(
        &self,
        requested: Option<FilingStatus>,
    ) -> FilingStatus {
        requested.unwrap_or(self.config.defaults.filing_status)
    }

    /// State code from the command line, or the configured default.
    pub fn state_code(
        &self,
        requested: Option<&str>,
    ) -> String {
        requested
            .unwrap_or(&self.config.defaults.state_code)
            .trim()
            .to_uppercase()
    }

    /// Validates the salary and returns a cached result when one is fresh.
    pub fn calculate(
        &mut self,
        input: &TakeHomeInput,
    ) -> Result<TaxCalculationResult, CalculationError> {
        validate_salary(input.salary)?;

        let now = Utc::now();
        if let Some(result) = self.cache.get(input, now) {
            debug!(salary = %input.salary, state_code = %input.state_code, "cache hit");
            return Ok(result);
        }

        let result = self.calculator.calculate(input)?;
        self.cache.insert(input.clone(), result.clone(), now);
        Ok(result)
    }

    pub fn compare(
        &self,
        salary: Decimal,
        filing_status: FilingStatus,
        retirement: Option<RetirementPlan>,
        city_ids: &[&str],
    ) -> Result<Vec<CityComparison>, CalculationError> {
        let salary = validate_salary(salary)?;
        compare_cities(&self.calculator, salary, filing_status, retirement, city_ids)
    }

    /// Evaluates each loaded row, reusing cached results for repeated rows.
    pub fn run_batch(
        &mut self,
        inputs: Vec<TakeHomeInput>,
    ) -> Vec<BatchOutcome> {
        let outcomes: Vec<BatchOutcome> = inputs
            .into_iter()
            .enumerate()
            .map(|(idx, input)| {
                let result = self.calculate(&input);
                BatchOutcome {
                    row: idx + 1,
                    input,
                    result,
                }
            })
            .collect();

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(rows = outcomes.len(), failed, "batch complete");
        outcomes
    }

    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }
}
