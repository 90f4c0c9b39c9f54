//! Integration tests that run the loader and the batch pipeline against an
//! on-disk fixture file.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use takehome_cli::app::App;
use takehome_cli::config::AppConfig;
use takehome_cli::csv_loader::{self, CsvLoadError};
use takehome_core::{EmployerMatch, FilingStatus, MatchPreset};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_requests.csv")
}

#[test]
fn load_fixture_file_succeeds() {
    let inputs = csv_loader::load_from_file(&fixture_path()).expect("fixture should load");

    assert_eq!(inputs.len(), 3);
}

#[test]
fn fixture_rows_map_to_inputs() {
    let inputs = csv_loader::load_from_file(&fixture_path()).unwrap();

    assert_eq!(inputs[0].salary, dec!(100000));
    assert_eq!(inputs[0].retirement, None);

    let plan = inputs[1].retirement.expect("second row has a plan");
    assert_eq!(plan.employee_percent, dec!(10));
    assert_eq!(
        plan.employer_match,
        EmployerMatch::Preset(MatchPreset::FullUpToFour)
    );

    assert_eq!(inputs[2].filing_status, FilingStatus::HeadOfHousehold);
    assert_eq!(inputs[2].state_code, "IL");
}

#[test]
fn batch_over_fixture_produces_monthly_take_home() {
    let inputs = csv_loader::load_from_file(&fixture_path()).unwrap();
    let mut app = App::new(AppConfig::default());

    let monthly: Vec<_> = app
        .run_batch(inputs)
        .into_iter()
        .map(|outcome| outcome.result.unwrap().monthly_net_income)
        .collect();

    assert_eq!(monthly, vec![dec!(6286), dec!(5636), dec!(4382)]);
}

#[test]
fn load_nonexistent_file_returns_io_error() {
    let result = csv_loader::load_from_file(Path::new("/this/path/does/not/exist.csv"));

    assert!(matches!(result, Err(CsvLoadError::Io { .. })));
}
