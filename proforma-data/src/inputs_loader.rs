//! CSV loader for forecast inputs.
//!
//! ## CSV Format
//!
//! | Column   | Type    | Notes |
//! |----------|---------|-------|
//! | `line`   | string  | `occupancy`, `occupancy_growth`, `adr_growth`, `revenue.<department>` or `expense.<line>` |
//! | `method` | string  | Expense lines only: `por`, `percent_of_revenue` or `manual`. Empty writes the active method's series |
//! | `year`   | integer | Must be a forecast year |
//! | `value`  | text    | Stored as typed; `$`, `%` and `,` are stripped |
//!
//! ```csv
//! line,method,year,value
//! occupancy,,2025,72
//! revenue.food_beverage,,2025,31.50
//! expense.rooms,por,2025,45
//! expense.rooms,percent_of_revenue,2025,25
//! expense.insurance,,2025,"$95,000"
//! ```
//!
//! Values are not validated here. Text that does not read as a number is
//! kept and evaluates to zero.

use std::path::Path;

use proforma_core::inputs::LineItemStore;
use proforma_core::models::{ForecastMethod, InputLine, TimelineError, Year};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct CsvRow {
    line: String,
    method: Option<String>,
    year: Year,
    value: String,
}

/// Errors that can occur while loading forecast inputs.
#[derive(Debug, thiserror::Error)]
pub enum InputsLoaderError {
    #[error("could not read inputs file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised input line '{line}' on row {row}")]
    UnknownLine { line: String, row: usize },

    #[error("unrecognised forecast method '{method}' on row {row}")]
    UnknownMethod { method: String, row: usize },

    /// Only expense lines carry one series per method.
    #[error("line '{line}' on row {row} does not take a method")]
    UnexpectedMethod { line: String, row: usize },

    #[error("row {row}: {source}")]
    Timeline {
        row: usize,
        #[source]
        source: TimelineError,
    },
}

/// Writes every row of `input` into `store`. Returns the number of values
/// written.
///
/// Rows are applied in file order, so a later row for the same line, method
/// and year wins. Loading stops at the first bad row; rows before it stay
/// applied.
pub fn apply_from_str(
    input: &str,
    store: &mut LineItemStore,
) -> Result<usize, InputsLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let mut written = 0;
    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        apply_row(result?, idx + 1, store)?;
        written += 1;
    }

    info!(values = written, "forecast inputs loaded");
    Ok(written)
}

/// Reads a file from disk and delegates to [`apply_from_str`].
pub fn apply_from_file(
    path: &Path,
    store: &mut LineItemStore,
) -> Result<usize, InputsLoaderError> {
    let contents = std::fs::read_to_string(path)?;
    apply_from_str(&contents, store)
}

fn apply_row(
    row: CsvRow,
    row_number: usize,
    store: &mut LineItemStore,
) -> Result<(), InputsLoaderError> {
    let Some(line) = InputLine::parse(&row.line) else {
        return Err(InputsLoaderError::UnknownLine {
            line: row.line,
            row: row_number,
        });
    };

    let method = match row.method.as_deref() {
        None | Some("") => None,
        Some(name) => Some(ForecastMethod::parse(name).ok_or_else(|| {
            InputsLoaderError::UnknownMethod {
                method: name.to_string(),
                row: row_number,
            }
        })?),
    };

    let timeline_error = |source: TimelineError| InputsLoaderError::Timeline {
        row: row_number,
        source,
    };

    match (line, method) {
        (InputLine::Expense(expense), Some(method)) => store
            .set_raw_for(expense, method, row.year, &row.value)
            .map_err(timeline_error),
        (_, Some(_)) => Err(InputsLoaderError::UnexpectedMethod {
            line: row.line,
            row: row_number,
        }),
        (_, None) => store
            .set_raw(line, row.year, &row.value)
            .map_err(timeline_error),
    }
}
