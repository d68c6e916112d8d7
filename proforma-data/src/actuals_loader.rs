//! CSV loader for historical actuals.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter.
//! Whitespace around values is ignored.
//!
//! | Column  | Type    | Notes |
//! |---------|---------|-------|
//! | `line`  | string  | `occupancy`, `revenue.<department>` or `expense.<line>` |
//! | `year`  | integer | Must be a historical year of the timeline |
//! | `value` | decimal | Occupancy as a percent (`72.5`), everything else in dollars |
//!
//! ```csv
//! line,year,value
//! occupancy,2024,72.5
//! revenue.rooms,2024,5310000
//! expense.rooms,2024,1327500
//! ```
//!
//! A line/year pair given twice keeps the later value. Lines left out read as
//! zero.

use std::path::Path;

use proforma_core::actuals::HistoricalActuals;
use proforma_core::models::{ActualLine, Timeline, Year};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct CsvRow {
    line: String,
    year: Year,
    value: Decimal,
}

/// Errors that can occur while loading historical actuals.
#[derive(Debug, thiserror::Error)]
pub enum ActualsLoaderError {
    #[error("could not read actuals file: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, a missing column, or a value that is not a number.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised line '{line}' on row {row}")]
    UnknownLine { line: String, row: usize },

    #[error("year {year} on row {row} is not a historical year")]
    NotHistoricalYear { year: Year, row: usize },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
    timeline: &Timeline,
) -> Result<(ActualLine, Year, Decimal), ActualsLoaderError> {
    let line = ActualLine::parse(&row.line).ok_or_else(|| ActualsLoaderError::UnknownLine {
        line: row.line,
        row: row_number,
    })?;

    if !timeline.is_historical(row.year) {
        return Err(ActualsLoaderError::NotHistoricalYear {
            year: row.year,
            row: row_number,
        });
    }

    Ok((line, row.year, row.value))
}

/// Parses actuals CSV text for `timeline`.
///
/// # Errors
///
/// * [`ActualsLoaderError::Parse`] if the CSV is malformed.
/// * [`ActualsLoaderError::UnknownLine`] for a line key that names nothing.
/// * [`ActualsLoaderError::NotHistoricalYear`] for a year outside the
///   historical block.
pub fn load_from_str(
    input: &str,
    timeline: &Timeline,
) -> Result<HistoricalActuals, ActualsLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let actuals = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1, timeline))
        .collect::<Result<HistoricalActuals, _>>()?;

    info!(values = actuals.len(), "historical actuals loaded");
    Ok(actuals)
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    timeline: &Timeline,
) -> Result<HistoricalActuals, ActualsLoaderError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents, timeline)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proforma_core::actuals::ActualsProvider;
    use proforma_core::models::{Department, ExpenseLine};
    use rust_decimal_macros::dec;

    use super::*;

    fn timeline() -> Timeline {
        Timeline::new(vec![2023, 2024], vec![2025, 2026], None).unwrap()
    }

    const SAMPLE_CSV: &str = "\
line,year,value
occupancy,2024,72.5
revenue.rooms,2024,5310000
revenue.food_beverage,2024,1250000.50
expense.rooms,2024,1327500
expense.insurance,2023,88000
";

    // -----------------------------------------------------------------------
    // happy path
    // -----------------------------------------------------------------------

    #[test]
    fn test_load_parses_every_row() {
        let actuals = load_from_str(SAMPLE_CSV, &timeline()).expect("should parse");

        assert_eq!(actuals.len(), 5);
        assert_eq!(actuals.actual(ActualLine::Occupancy, 2024), Some(dec!(72.5)));
        assert_eq!(
            actuals.actual(ActualLine::Revenue(Department::FoodAndBeverage), 2024),
            Some(dec!(1250000.50))
        );
        assert_eq!(
            actuals.actual(ActualLine::Expense(ExpenseLine::Insurance), 2023),
            Some(dec!(88000))
        );
    }

    #[test]
    fn test_load_tolerates_whitespace_and_column_order() {
        let csv = "value , line , year\n 61.0 ,  occupancy , 2023\n";

        let actuals = load_from_str(csv, &timeline()).expect("should parse");

        assert_eq!(actuals.actual(ActualLine::Occupancy, 2023), Some(dec!(61.0)));
    }

    #[test]
    fn test_load_empty_file_has_no_values() {
        let actuals = load_from_str("line,year,value\n", &timeline()).expect("should parse");

        assert!(actuals.is_empty());
    }

    #[test]
    fn test_duplicate_row_keeps_later_value() {
        let csv = "line,year,value\noccupancy,2024,70\noccupancy,2024,71\n";

        let actuals = load_from_str(csv, &timeline()).expect("should parse");

        assert_eq!(actuals.actual(ActualLine::Occupancy, 2024), Some(dec!(71)));
    }

    // -----------------------------------------------------------------------
    // errors
    // -----------------------------------------------------------------------

    #[test]
    fn test_unknown_line_reports_row() {
        let csv = "line,year,value\noccupancy,2024,70\nrevenue.spa,2024,100\n";

        let err = load_from_str(csv, &timeline()).expect_err("should reject");

        let ActualsLoaderError::UnknownLine { line, row } = err else {
            panic!("Expected UnknownLine error, got: {:?}", err);
        };
        assert_eq!(line, "revenue.spa");
        assert_eq!(row, 2);
    }

    #[test]
    fn test_forecast_year_is_rejected() {
        let csv = "line,year,value\nrevenue.rooms,2025,100\n";

        let err = load_from_str(csv, &timeline()).expect_err("should reject");

        assert!(
            matches!(err, ActualsLoaderError::NotHistoricalYear { year: 2025, row: 1 }),
            "got: {:?}",
            err
        );
    }

    #[test]
    fn test_bad_decimal_is_a_parse_error() {
        let csv = "line,year,value\noccupancy,2024,seventy\n";

        let err = load_from_str(csv, &timeline()).expect_err("should reject");

        assert!(matches!(err, ActualsLoaderError::Parse(_)), "got: {:?}", err);
    }

    #[test]
    fn test_missing_column_is_a_parse_error() {
        let csv = "line,year\noccupancy,2024\n";

        let err = load_from_str(csv, &timeline()).expect_err("should reject");

        let ActualsLoaderError::Parse(inner) = err else {
            panic!("Expected Parse error, got: {:?}", err);
        };
        assert!(
            inner.to_string().contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            inner
        );
    }
}
