//! End-to-end tests: fixture files through the loaders, the engines and the
//! report.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use proforma_core::calculations::StatementLine;
use proforma_core::models::{Department, ExpenseLine, ForecastMethod, TimelineError, Year};
use proforma_data::{InputsLoaderError, Project, ProjectError, ReportOptions, render_table};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn harbor_inn() -> Project {
    Project::from_files(
        &fixture("property.toml"),
        &fixture("actuals.csv"),
        &fixture("inputs.csv"),
    )
    .expect("fixtures should load")
}

fn value(
    project: &Project,
    line: StatementLine,
    year: Year,
) -> Decimal {
    project
        .statement()
        .expect("statement should build")
        .column(year)
        .and_then(|column| column.value(line))
        .unwrap_or_else(|| panic!("no {:?} in {}", line, year))
}

// ============================================================================
// demand and revenue
// ============================================================================

#[test]
fn test_forecast_rooms_from_occupancy() {
    let project = harbor_inn();

    assert_eq!(value(&project, StatementLine::AvailableRooms, 2025), dec!(36500));
    assert_eq!(value(&project, StatementLine::OccupiedRooms, 2025), dec!(25550));
}

#[test]
fn test_adr_compounds_from_last_historical_year() {
    let project = harbor_inn();

    // 4,758,000 / 23,790 occupied rooms in 2024
    assert_eq!(value(&project, StatementLine::Adr, 2024), dec!(200));
    assert_eq!(value(&project, StatementLine::Adr, 2025), dec!(206));
    assert_eq!(value(&project, StatementLine::Adr, 2026), dec!(212.18));
    assert_eq!(
        value(&project, StatementLine::Revenue(Department::Rooms), 2025),
        dec!(5263300)
    );
}

#[test]
fn test_food_and_beverage_revenue_per_occupied_room() {
    let project = harbor_inn();

    assert_eq!(
        value(&project, StatementLine::Revenue(Department::FoodAndBeverage), 2025),
        dec!(766500)
    );
    assert_eq!(value(&project, StatementLine::TotalRevenue, 2025), dec!(6029800));
}

// ============================================================================
// expenses
// ============================================================================

#[test]
fn test_rooms_expense_per_occupied_room() {
    let project = harbor_inn();

    assert_eq!(
        value(&project, StatementLine::Expense(ExpenseLine::Rooms), 2025),
        dec!(1149750)
    );
}

#[test]
fn test_departmental_expense_uses_its_own_revenue() {
    let project = harbor_inn();

    assert_eq!(
        value(&project, StatementLine::Expense(ExpenseLine::FoodAndBeverage), 2025),
        dec!(306600)
    );
}

#[test]
fn test_undistributed_expense_uses_total_revenue() {
    let project = harbor_inn();

    assert_eq!(
        value(&project, StatementLine::Expense(ExpenseLine::AdminGeneral), 2025),
        dec!(482384)
    );
}

#[test]
fn test_historical_read_back_leaves_actual_untouched() {
    let mut project = harbor_inn();
    project
        .store
        .set_method(ExpenseLine::Rooms, ForecastMethod::PercentOfRevenue);

    let statement = project.statement().unwrap();
    let entry = statement
        .column(2023)
        .and_then(|column| column.get(StatementLine::Expense(ExpenseLine::Rooms)))
        .expect("rooms expense in 2023");

    assert_eq!(entry.value, dec!(1000000));
    let driver = entry.driver.expect("expense lines carry a driver");
    assert_eq!(driver.method, ForecastMethod::PercentOfRevenue);
    assert_eq!(driver.value, dec!(20));
}

#[test]
fn test_method_switch_keeps_every_series() {
    let mut project = harbor_inn();
    let rooms = StatementLine::Expense(ExpenseLine::Rooms);

    project
        .store
        .set_method(ExpenseLine::Rooms, ForecastMethod::ManualInput);
    assert_eq!(value(&project, rooms, 2025), dec!(1200000));

    project
        .store
        .set_method(ExpenseLine::Rooms, ForecastMethod::PerOccupiedRoom);
    assert_eq!(value(&project, rooms, 2025), dec!(1149750));
}

// ============================================================================
// profitability
// ============================================================================

#[test]
fn test_profitability_rollup_for_forecast_year() {
    let project = harbor_inn();

    assert_eq!(value(&project, StatementLine::TotalExpense, 2025), dec!(2058734));
    assert_eq!(
        value(&project, StatementLine::GrossOperatingProfit, 2025),
        dec!(4091066)
    );
    assert_eq!(value(&project, StatementLine::Ebitda, 2025), dec!(3971066));
    assert_eq!(
        value(&project, StatementLine::ReserveForReplacement, 2025),
        dec!(241192)
    );
    assert_eq!(
        value(&project, StatementLine::NetOperatingIncome, 2025),
        dec!(3729874)
    );
}

#[test]
fn test_no_reserve_in_historical_years() {
    let project = harbor_inn();

    assert_eq!(
        value(&project, StatementLine::ReserveForReplacement, 2024),
        Decimal::ZERO
    );
}

#[test]
fn test_horizon_total_skips_ytd_year_by_default() {
    let project = harbor_inn();
    let statement = project.statement().unwrap();
    let insurance = StatementLine::Expense(ExpenseLine::Insurance);

    assert_eq!(statement.horizon_total(insurance, false), Some(dec!(249000)));
    assert_eq!(statement.horizon_total(insurance, true), Some(dec!(369000)));
}

// ============================================================================
// report
// ============================================================================

#[test]
fn test_report_renders_fixture_project() {
    let project = harbor_inn();
    let statement = project.statement().unwrap();

    let text = render_table(
        &project.config.property_name,
        &statement,
        ReportOptions {
            include_ytd: false,
            show_drivers: true,
        },
    );

    assert!(text.starts_with("Harbor Inn\n"));
    assert!(text.contains("2023 A"));
    assert!(text.contains("2025 YTD"));
    assert!(text.contains("2027 F"));
    assert!(text.contains("1,149,750.00"));
    assert!(text.contains("% of revenue"));
}

// ============================================================================
// error handling
// ============================================================================

#[test]
fn test_input_for_historical_year_is_rejected() {
    let config = std::fs::read_to_string(fixture("property.toml")).unwrap();
    let actuals = std::fs::read_to_string(fixture("actuals.csv")).unwrap();
    let inputs = "line,method,year,value\noccupancy,,2025,70\noccupancy,,2024,70\n";

    let err = Project::from_strs(&config, &actuals, inputs)
        .err()
        .expect("should reject");

    let ProjectError::Inputs(InputsLoaderError::Timeline { row, source }) = err else {
        panic!("Expected Timeline error, got: {:?}", err);
    };
    assert_eq!(row, 2);
    assert!(
        matches!(source, TimelineError::NotForecastYear(2024)),
        "got: {:?}",
        source
    );
}

#[test]
fn test_missing_file_is_reported() {
    let err = Project::from_files(
        &fixture("property.toml"),
        &fixture("no_such_file.csv"),
        &fixture("inputs.csv"),
    )
    .err()
    .expect("should fail");

    assert!(matches!(err, ProjectError::Actuals(_)), "got: {:?}", err);
}
