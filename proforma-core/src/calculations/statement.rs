//! A computed operating statement: every line for every timeline year.
//!
//! The engines recompute on every call. [`OperatingStatement::build`] runs
//! them once per line and year and keeps the results, so a report can read
//! the same numbers repeatedly without recomputing chained growth.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::common::add;
use super::context::ProjectionContext;
use super::profitability::ProfitabilityRollup;
use crate::models::{Department, ExpenseLine, ForecastMethod, TimelineError, Year, YearKind};

/// A printable row of the operating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatementLine {
    AvailableRooms,
    OccupiedRooms,
    Occupancy,
    Adr,
    RevPar,
    Revenue(Department),
    TotalRevenue,
    Expense(ExpenseLine),
    TotalOtherOperated,
    TotalUndistributed,
    GrossOperatingProfit,
    TotalNonOperating,
    TotalExpense,
    Ebitda,
    ReserveForReplacement,
    NetOperatingIncome,
}

impl StatementLine {
    /// Every row in statement order.
    pub fn all() -> Vec<StatementLine> {
        let mut lines = vec![
            Self::AvailableRooms,
            Self::OccupiedRooms,
            Self::Occupancy,
            Self::Adr,
            Self::RevPar,
        ];
        lines.extend(Department::ALL.map(Self::Revenue));
        lines.push(Self::TotalRevenue);
        lines.push(Self::Expense(ExpenseLine::Rooms));
        lines.extend(ExpenseLine::OTHER_OPERATED.map(Self::Expense));
        lines.push(Self::TotalOtherOperated);
        lines.extend(ExpenseLine::UNDISTRIBUTED.map(Self::Expense));
        lines.push(Self::TotalUndistributed);
        lines.push(Self::GrossOperatingProfit);
        lines.extend(ExpenseLine::NON_OPERATING.map(Self::Expense));
        lines.push(Self::TotalNonOperating);
        lines.push(Self::TotalExpense);
        lines.push(Self::Ebitda);
        lines.push(Self::ReserveForReplacement);
        lines.push(Self::NetOperatingIncome);
        lines
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AvailableRooms => "Available Rooms",
            Self::OccupiedRooms => "Occupied Rooms",
            Self::Occupancy => "Occupancy %",
            Self::Adr => "ADR",
            Self::RevPar => "RevPAR",
            Self::Revenue(department) => department.label(),
            Self::TotalRevenue => "Total Revenue",
            Self::Expense(line) => line.label(),
            Self::TotalOtherOperated => "Total Other Operated Expense",
            Self::TotalUndistributed => "Total Undistributed Expense",
            Self::GrossOperatingProfit => "Gross Operating Profit",
            Self::TotalNonOperating => "Total Non-Operating Expense",
            Self::TotalExpense => "Total Expense",
            Self::Ebitda => "EBITDA",
            Self::ReserveForReplacement => "Reserve for Replacement",
            Self::NetOperatingIncome => "Net Operating Income",
        }
    }

    /// Dollar lines add up across years; room counts and rates do not.
    pub fn is_monetary(&self) -> bool {
        !matches!(
            self,
            Self::AvailableRooms | Self::OccupiedRooms | Self::Occupancy | Self::Adr | Self::RevPar
        )
    }

    fn evaluate(
        &self,
        rollup: &ProfitabilityRollup<'_>,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        let demand = rollup.demand();
        let revenue = rollup.revenue();
        let expense = rollup.expense();
        match *self {
            Self::AvailableRooms => demand.available_rooms(year),
            Self::OccupiedRooms => demand.occupied_rooms(year),
            Self::Occupancy => demand.occupancy_percent(year),
            Self::Adr => demand.adr(year),
            Self::RevPar => demand.revpar(year),
            Self::Revenue(department) => revenue.department(department, year),
            Self::TotalRevenue => revenue.total(year),
            Self::Expense(line) => expense.line(line, year),
            Self::TotalOtherOperated => expense.total_other_operated(year),
            Self::TotalUndistributed => expense.total_undistributed(year),
            Self::GrossOperatingProfit => rollup.gross_operating_profit(year),
            Self::TotalNonOperating => expense.total_non_operating(year),
            Self::TotalExpense => rollup.total_expense(year),
            Self::Ebitda => rollup.ebitda(year),
            Self::ReserveForReplacement => expense.reserve_for_replacement(year),
            Self::NetOperatingIncome => rollup.net_operating_income(year),
        }
    }

    fn driver(
        &self,
        rollup: &ProfitabilityRollup<'_>,
        year: Year,
    ) -> Result<Option<Driver>, TimelineError> {
        let driver = match *self {
            Self::Revenue(department) if department != Department::Rooms => Driver {
                method: ForecastMethod::PerOccupiedRoom,
                value: rollup.revenue().display_rate(department, year)?,
            },
            Self::Expense(line) => Driver {
                method: rollup.expense().method(line),
                value: rollup.expense().display_value(line, year)?,
            },
            _ => return Ok(None),
        };
        Ok(Some(driver))
    }
}

/// A line expressed in the unit of its forecast input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Driver {
    pub method: ForecastMethod,
    pub value: Decimal,
}

/// One line's value in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineValue {
    pub line: StatementLine,
    pub value: Decimal,
    /// Per occupied room for departmental revenue, the active method's unit
    /// for expenses.
    pub driver: Option<Driver>,
}

/// Every statement line for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearColumn {
    pub year: Year,
    pub kind: YearKind,
    pub is_ytd: bool,
    pub lines: Vec<LineValue>,
}

impl YearColumn {
    pub fn get(
        &self,
        line: StatementLine,
    ) -> Option<&LineValue> {
        self.lines.iter().find(|entry| entry.line == line)
    }

    pub fn value(
        &self,
        line: StatementLine,
    ) -> Option<Decimal> {
        self.get(line).map(|entry| entry.value)
    }
}

/// A full multi-year statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatingStatement {
    columns: Vec<YearColumn>,
}

impl OperatingStatement {
    /// Evaluates every line for every year of the context's timeline.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use proforma_core::actuals::HistoricalActuals;
    /// use proforma_core::calculations::{OperatingStatement, ProjectionContext, StatementLine};
    /// use proforma_core::inputs::LineItemStore;
    /// use proforma_core::models::{
    ///     ActualLine, Department, InputLine, PropertyAssumptions, Timeline, ValuationAssumptions,
    /// };
    ///
    /// let timeline = Timeline::new(vec![2024], vec![2025], None).unwrap();
    /// let mut store = LineItemStore::new(&timeline);
    /// store.set_raw(InputLine::Occupancy, 2025, "70").unwrap();
    ///
    /// let actuals: HistoricalActuals = [
    ///     (ActualLine::Occupancy, 2024, dec!(65)),
    ///     (ActualLine::Revenue(Department::Rooms), 2024, dec!(4758000)),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let assumptions = PropertyAssumptions {
    ///     room_keys: 100,
    ///     valuation: ValuationAssumptions::default(),
    /// };
    ///
    /// let context = ProjectionContext::new(&store, &actuals, &assumptions);
    /// let statement = OperatingStatement::build(context).unwrap();
    ///
    /// let rooms = StatementLine::Revenue(Department::Rooms);
    /// assert_eq!(statement.column(2025).unwrap().value(rooms), Some(dec!(5110000)));
    /// assert_eq!(statement.horizon_total(rooms, false), Some(dec!(5110000)));
    /// ```
    pub fn build(context: ProjectionContext<'_>) -> Result<Self, TimelineError> {
        let timeline = context.timeline();
        let rollup = ProfitabilityRollup::new(context);
        let lines = StatementLine::all();

        let mut columns = Vec::new();
        for year in timeline.years() {
            let mut values = Vec::with_capacity(lines.len());
            for line in &lines {
                values.push(LineValue {
                    line: *line,
                    value: line.evaluate(&rollup, year)?,
                    driver: line.driver(&rollup, year)?,
                });
            }
            columns.push(YearColumn {
                year,
                kind: timeline.classify(year)?,
                is_ytd: timeline.ytd_year() == Some(year),
                lines: values,
            });
        }

        debug!(years = columns.len(), lines = lines.len(), "operating statement built");
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[YearColumn] {
        &self.columns
    }

    pub fn column(
        &self,
        year: Year,
    ) -> Option<&YearColumn> {
        self.columns.iter().find(|column| column.year == year)
    }

    /// `(year, value)` of one line across the timeline.
    pub fn line_values(
        &self,
        line: StatementLine,
    ) -> Vec<(Year, Decimal)> {
        self.columns
            .iter()
            .filter_map(|column| column.value(line).map(|value| (column.year, value)))
            .collect()
    }

    /// Sum of a dollar line over the forecast years.
    ///
    /// The YTD year is left out unless `include_ytd` is set. Room counts and
    /// rates have no horizon total.
    pub fn horizon_total(
        &self,
        line: StatementLine,
        include_ytd: bool,
    ) -> Option<Decimal> {
        if !line.is_monetary() {
            return None;
        }
        let total = self
            .columns
            .iter()
            .filter(|column| column.kind == YearKind::Forecast)
            .filter(|column| include_ytd || !column.is_ytd)
            .filter_map(|column| column.value(line))
            .fold(Decimal::ZERO, add);
        Some(total)
    }
}
