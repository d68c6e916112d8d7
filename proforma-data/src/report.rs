//! Plain-text and JSON rendering of an [`OperatingStatement`].
//!
//! Values are rounded to cents here and nowhere else.

use proforma_core::calculations::common::{round_half_up, round_whole};
use proforma_core::calculations::{Driver, OperatingStatement, StatementLine, YearColumn};
use proforma_core::models::{Department, ExpenseLine, ForecastMethod, YearKind};
use rust_decimal::Decimal;
use tabled::Table;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Count the YTD year in the horizon total column.
    pub include_ytd: bool,
    /// Print a per-room or percent row under each line that has one.
    pub show_drivers: bool,
}

/// Renders the statement as a table: one column per year plus a horizon
/// total.
pub fn render_table(
    title: &str,
    statement: &OperatingStatement,
    options: ReportOptions,
) -> String {
    let columns = statement.columns();
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(columns.iter().map(column_header));
    header.push("Horizon".to_string());
    builder.push_record(header);

    for line in StatementLine::all() {
        if let Some(section) = section_title(line) {
            builder.push_record([section.to_string()]);
        }

        let mut row = vec![format!("  {}", line.label())];
        row.extend(columns.iter().map(|column| {
            column
                .value(line)
                .map(|value| format_line_value(line, value))
                .unwrap_or_default()
        }));
        row.push(
            statement
                .horizon_total(line, options.include_ytd)
                .map(format_amount)
                .unwrap_or_default(),
        );
        builder.push_record(row);

        if options.show_drivers {
            if let Some(row) = driver_row(line, columns) {
                builder.push_record(row);
            }
        }
    }

    let mut table = Table::from(builder);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());

    format!("{title}\n\n{table}\n")
}

/// Serializes the statement, every line and driver included.
pub fn render_json(statement: &OperatingStatement) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(statement)
}

/// `2025 A`, `2025 YTD` or `2025 F`.
fn column_header(column: &YearColumn) -> String {
    let suffix = match (column.kind, column.is_ytd) {
        (_, true) => "YTD",
        (YearKind::Historical, false) => "A",
        (YearKind::Forecast, false) => "F",
    };
    format!("{} {}", column.year, suffix)
}

fn section_title(line: StatementLine) -> Option<&'static str> {
    match line {
        StatementLine::AvailableRooms => Some("STATISTICS"),
        StatementLine::Revenue(Department::Rooms) => Some("REVENUE"),
        StatementLine::Expense(ExpenseLine::Rooms) => Some("DEPARTMENTAL EXPENSES"),
        StatementLine::Expense(ExpenseLine::AdminGeneral) => Some("UNDISTRIBUTED EXPENSES"),
        StatementLine::Expense(ExpenseLine::ManagementFees) => Some("NON-OPERATING EXPENSES"),
        StatementLine::TotalExpense => Some("PROFITABILITY"),
        _ => None,
    }
}

fn driver_row(
    line: StatementLine,
    columns: &[YearColumn],
) -> Option<Vec<String>> {
    let drivers: Vec<Option<Driver>> = columns
        .iter()
        .map(|column| column.get(line).and_then(|entry| entry.driver))
        .collect();

    let method = drivers.iter().flatten().next()?.method;
    if method == ForecastMethod::ManualInput {
        return None;
    }

    let mut row = vec![format!("      {}", driver_label(method))];
    row.extend(
        drivers
            .iter()
            .map(|driver| driver.map(format_driver).unwrap_or_default()),
    );
    row.push(String::new());
    Some(row)
}

fn driver_label(method: ForecastMethod) -> &'static str {
    match method {
        ForecastMethod::PerOccupiedRoom => "per occupied room",
        ForecastMethod::PercentOfRevenue => "% of revenue",
        ForecastMethod::ManualInput => "manual",
    }
}

fn format_driver(driver: Driver) -> String {
    match driver.method {
        ForecastMethod::PercentOfRevenue => format!("{}%", format_amount(driver.value)),
        _ => format_amount(driver.value),
    }
}

fn format_line_value(
    line: StatementLine,
    value: Decimal,
) -> String {
    match line {
        StatementLine::AvailableRooms | StatementLine::OccupiedRooms => {
            group_thousands(&round_whole(value).to_string())
        }
        StatementLine::Occupancy => format!("{}%", format_amount(value)),
        _ => format_amount(value),
    }
}

/// Cents with thousands separators: `1149750` → `1,149,750.00`.
pub fn format_amount(value: Decimal) -> String {
    group_thousands(&format!("{:.2}", round_half_up(value)))
}

fn group_thousands(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if grouped.chars().all(|c| c == '0' || c == ',')
        && fraction.is_none_or(|f| f.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
