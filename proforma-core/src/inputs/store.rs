//! In-memory store of every forecast input.
//!
//! The store is the raw input sink of the engine: the outer shell writes user
//! text into it and the engines read parsed values back out. Only forecast
//! years hold inputs; a write or read for any other year is rejected.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use proforma_core::inputs::LineItemStore;
//! use proforma_core::models::{ExpenseLine, ForecastMethod, InputLine, Timeline};
//!
//! let timeline = Timeline::new(vec![2024], vec![2025, 2026], None).unwrap();
//! let mut store = LineItemStore::new(&timeline);
//!
//! let rooms = InputLine::Expense(ExpenseLine::Rooms);
//! store.set_method(ExpenseLine::Rooms, ForecastMethod::PerOccupiedRoom);
//! store.set_raw(rooms, 2025, "$45.00").unwrap();
//!
//! assert_eq!(store.raw(rooms, 2025).unwrap().as_str(), "45.00");
//! assert_eq!(store.value(rooms, 2025).unwrap(), dec!(45));
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::series::{ExpenseInput, RawSeries};
use crate::models::{
    AdrGrowthMethod, Department, ExpenseLine, ForecastMethod, InputLine, OccupancyMethod,
    RawValue, Timeline, TimelineError, Year,
};

/// Forecast inputs for one property.
#[derive(Debug, Clone)]
pub struct LineItemStore {
    timeline: Timeline,
    occupancy_method: OccupancyMethod,
    occupancy: RawSeries,
    occupancy_growth: RawSeries,
    adr_method: AdrGrowthMethod,
    adr_flat_growth: RawValue,
    adr_growth: RawSeries,
    department_rates: BTreeMap<Department, RawSeries>,
    expenses: BTreeMap<ExpenseLine, ExpenseInput>,
}

impl LineItemStore {
    /// Creates a store with `"0"` in every forecast year of every line.
    pub fn new(timeline: &Timeline) -> Self {
        let years = timeline.forecast_years();
        Self {
            timeline: timeline.clone(),
            occupancy_method: OccupancyMethod::default(),
            occupancy: RawSeries::zeroed(years),
            occupancy_growth: RawSeries::zeroed(years),
            adr_method: AdrGrowthMethod::default(),
            adr_flat_growth: RawValue::default(),
            adr_growth: RawSeries::zeroed(years),
            department_rates: Department::NON_ROOMS
                .into_iter()
                .map(|d| (d, RawSeries::zeroed(years)))
                .collect(),
            expenses: ExpenseLine::ALL
                .into_iter()
                .map(|line| (line, ExpenseInput::new(line, years)))
                .collect(),
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    // -------------------------------------------------------------------------
    // per-year raw values
    // -------------------------------------------------------------------------

    /// Raw text for `line` in a forecast year. Expense lines answer with the
    /// series of their active method.
    pub fn raw(
        &self,
        line: InputLine,
        year: Year,
    ) -> Result<RawValue, TimelineError> {
        self.timeline.require_forecast(year)?;
        Ok(self
            .series(line)
            .map(|series| series.get(year))
            .unwrap_or_default())
    }

    /// Parsed value of [`raw`](Self::raw); malformed text reads as zero.
    pub fn value(
        &self,
        line: InputLine,
        year: Year,
    ) -> Result<Decimal, TimelineError> {
        self.raw(line, year).map(|raw| raw.to_decimal())
    }

    /// Stores user text for `line` in a forecast year. Expense lines write to
    /// the series of their active method.
    pub fn set_raw(
        &mut self,
        line: InputLine,
        year: Year,
        text: &str,
    ) -> Result<(), TimelineError> {
        self.timeline.require_forecast(year)?;
        self.series_mut(line).set(year, RawValue::from_input(text));
        Ok(())
    }

    /// Stores a programmatic value for `line` in a forecast year.
    pub fn set_value(
        &mut self,
        line: InputLine,
        year: Year,
        value: Decimal,
    ) -> Result<(), TimelineError> {
        self.timeline.require_forecast(year)?;
        self.series_mut(line).set(year, RawValue::from_decimal(value));
        Ok(())
    }

    /// Stores the same user text in every forecast year of `line`.
    pub fn fill(
        &mut self,
        line: InputLine,
        text: &str,
    ) {
        let raw = RawValue::from_input(text);
        let years = self.timeline.forecast_years().to_vec();
        let series = self.series_mut(line);
        for year in years {
            series.set(year, raw.clone());
        }
    }

    // -------------------------------------------------------------------------
    // expense methods
    // -------------------------------------------------------------------------

    pub fn method(
        &self,
        line: ExpenseLine,
    ) -> ForecastMethod {
        self.expenses
            .get(&line)
            .map_or_else(|| line.default_method(), ExpenseInput::method)
    }

    /// Switches the method of an expense line. The raw values of every
    /// method are kept.
    pub fn set_method(
        &mut self,
        line: ExpenseLine,
        method: ForecastMethod,
    ) {
        debug!(line = line.as_str(), method = method.as_str(), "forecast method changed");
        self.expense_mut(line).set_method(method);
    }

    /// Raw text of a specific method's series, whichever method is active.
    pub fn raw_for(
        &self,
        line: ExpenseLine,
        method: ForecastMethod,
        year: Year,
    ) -> Result<RawValue, TimelineError> {
        self.timeline.require_forecast(year)?;
        Ok(self
            .expenses
            .get(&line)
            .map(|input| input.series(method).get(year))
            .unwrap_or_default())
    }

    /// Stores user text in a specific method's series.
    pub fn set_raw_for(
        &mut self,
        line: ExpenseLine,
        method: ForecastMethod,
        year: Year,
        text: &str,
    ) -> Result<(), TimelineError> {
        self.timeline.require_forecast(year)?;
        self.expense_mut(line)
            .series_mut(method)
            .set(year, RawValue::from_input(text));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // demand switches
    // -------------------------------------------------------------------------

    pub fn occupancy_method(&self) -> OccupancyMethod {
        self.occupancy_method
    }

    pub fn set_occupancy_method(
        &mut self,
        method: OccupancyMethod,
    ) {
        debug!(method = method.as_str(), "occupancy method changed");
        self.occupancy_method = method;
    }

    pub fn adr_method(&self) -> AdrGrowthMethod {
        self.adr_method
    }

    pub fn set_adr_method(
        &mut self,
        method: AdrGrowthMethod,
    ) {
        debug!(method = method.as_str(), "ADR growth method changed");
        self.adr_method = method;
    }

    pub fn adr_flat_growth(&self) -> &RawValue {
        &self.adr_flat_growth
    }

    pub fn set_adr_flat_growth(
        &mut self,
        text: &str,
    ) {
        self.adr_flat_growth = RawValue::from_input(text);
    }

    // -------------------------------------------------------------------------
    // internals
    // -------------------------------------------------------------------------

    fn series(
        &self,
        line: InputLine,
    ) -> Option<&RawSeries> {
        match line {
            InputLine::Occupancy => Some(&self.occupancy),
            InputLine::OccupancyGrowth => Some(&self.occupancy_growth),
            InputLine::AdrGrowth => Some(&self.adr_growth),
            InputLine::DepartmentRate(department) => self.department_rates.get(&department),
            InputLine::Expense(expense) => self.expenses.get(&expense).map(|e| e.active_series()),
        }
    }

    fn series_mut(
        &mut self,
        line: InputLine,
    ) -> &mut RawSeries {
        match line {
            InputLine::Occupancy => &mut self.occupancy,
            InputLine::OccupancyGrowth => &mut self.occupancy_growth,
            InputLine::AdrGrowth => &mut self.adr_growth,
            InputLine::DepartmentRate(department) => {
                let years = self.timeline.forecast_years().to_vec();
                self.department_rates
                    .entry(department)
                    .or_insert_with(|| RawSeries::zeroed(&years))
            }
            InputLine::Expense(expense) => {
                let method = self.method(expense);
                self.expense_mut(expense).series_mut(method)
            }
        }
    }

    fn expense_mut(
        &mut self,
        line: ExpenseLine,
    ) -> &mut ExpenseInput {
        let years = self.timeline.forecast_years().to_vec();
        self.expenses
            .entry(line)
            .or_insert_with(|| ExpenseInput::new(line, &years))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn store() -> LineItemStore {
        let timeline = Timeline::new(vec![2023, 2024], vec![2025, 2026, 2027], None).unwrap();
        LineItemStore::new(&timeline)
    }

    const ROOMS: InputLine = InputLine::Expense(ExpenseLine::Rooms);

    // =========================================================================
    // defaults
    // =========================================================================

    #[test]
    fn new_store_defaults_every_forecast_year_to_zero_text() {
        let s = store();

        for year in [2025, 2026, 2027] {
            assert_eq!(s.raw(InputLine::Occupancy, year).unwrap().as_str(), "0");
            assert_eq!(
                s.raw(InputLine::DepartmentRate(Department::ResortFee), year)
                    .unwrap()
                    .as_str(),
                "0"
            );
            assert_eq!(s.value(ROOMS, year), Ok(Decimal::ZERO));
        }
    }

    #[test]
    fn new_store_uses_line_default_methods() {
        let s = store();

        assert_eq!(s.method(ExpenseLine::Rooms), ForecastMethod::PercentOfRevenue);
        assert_eq!(s.method(ExpenseLine::Insurance), ForecastMethod::ManualInput);
        assert_eq!(s.occupancy_method(), OccupancyMethod::Direct);
        assert_eq!(s.adr_method(), AdrGrowthMethod::Flat);
    }

    // =========================================================================
    // year contract
    // =========================================================================

    #[test]
    fn raw_rejects_historical_year() {
        let s = store();

        assert_eq!(
            s.raw(InputLine::Occupancy, 2024),
            Err(TimelineError::NotForecastYear(2024))
        );
    }

    #[test]
    fn set_raw_rejects_out_of_domain_year() {
        let mut s = store();

        assert_eq!(
            s.set_raw(InputLine::Occupancy, 2031, "70"),
            Err(TimelineError::OutOfDomain(2031))
        );
    }

    // =========================================================================
    // writes
    // =========================================================================

    #[test]
    fn set_raw_replaces_only_one_year() {
        let mut s = store();

        s.set_raw(InputLine::Occupancy, 2026, "72.5").unwrap();

        assert_eq!(s.value(InputLine::Occupancy, 2025), Ok(Decimal::ZERO));
        assert_eq!(s.value(InputLine::Occupancy, 2026), Ok(dec!(72.5)));
        assert_eq!(s.value(InputLine::Occupancy, 2027), Ok(Decimal::ZERO));
    }

    #[test]
    fn set_value_serializes_decimal() {
        let mut s = store();

        s.set_value(InputLine::AdrGrowth, 2025, dec!(3.50)).unwrap();

        assert_eq!(s.raw(InputLine::AdrGrowth, 2025).unwrap().as_str(), "3.50");
    }

    #[test]
    fn fill_sets_every_forecast_year() {
        let mut s = store();

        s.fill(InputLine::DepartmentRate(Department::FoodAndBeverage), "30");

        for year in [2025, 2026, 2027] {
            assert_eq!(
                s.value(InputLine::DepartmentRate(Department::FoodAndBeverage), year),
                Ok(dec!(30))
            );
        }
    }

    #[test]
    fn malformed_text_is_kept_but_reads_as_zero() {
        let mut s = store();

        s.set_raw(InputLine::Occupancy, 2025, "seventy").unwrap();

        assert_eq!(s.raw(InputLine::Occupancy, 2025).unwrap().as_str(), "seventy");
        assert_eq!(s.value(InputLine::Occupancy, 2025), Ok(Decimal::ZERO));
    }

    // =========================================================================
    // method switching
    // =========================================================================

    #[test]
    fn set_raw_on_expense_writes_active_method_series() {
        let mut s = store();
        s.set_method(ExpenseLine::Rooms, ForecastMethod::PerOccupiedRoom);

        s.set_raw(ROOMS, 2025, "45").unwrap();

        assert_eq!(
            s.raw_for(ExpenseLine::Rooms, ForecastMethod::PerOccupiedRoom, 2025)
                .unwrap()
                .as_str(),
            "45"
        );
        assert_eq!(
            s.raw_for(ExpenseLine::Rooms, ForecastMethod::PercentOfRevenue, 2025)
                .unwrap()
                .as_str(),
            "0"
        );
    }

    #[test]
    fn method_switch_round_trip_preserves_raw_value() {
        let mut s = store();
        s.set_method(ExpenseLine::Rooms, ForecastMethod::PerOccupiedRoom);
        s.set_raw(ROOMS, 2025, "45.50").unwrap();

        s.set_method(ExpenseLine::Rooms, ForecastMethod::PercentOfRevenue);
        s.set_raw(ROOMS, 2025, "22").unwrap();
        s.set_method(ExpenseLine::Rooms, ForecastMethod::PerOccupiedRoom);

        assert_eq!(s.raw(ROOMS, 2025).unwrap().as_str(), "45.50");
        assert_eq!(
            s.raw_for(ExpenseLine::Rooms, ForecastMethod::PercentOfRevenue, 2025)
                .unwrap()
                .as_str(),
            "22"
        );
    }

    #[test]
    fn set_raw_for_leaves_active_method_untouched() {
        let mut s = store();

        s.set_raw_for(ExpenseLine::Utilities, ForecastMethod::ManualInput, 2026, "150000")
            .unwrap();

        assert_eq!(s.method(ExpenseLine::Utilities), ForecastMethod::PercentOfRevenue);
        assert_eq!(
            s.value(InputLine::Expense(ExpenseLine::Utilities), 2026),
            Ok(Decimal::ZERO)
        );
    }

    #[test]
    fn adr_flat_growth_is_stored_as_text() {
        let mut s = store();

        s.set_adr_flat_growth("3.0%");

        assert_eq!(s.adr_flat_growth().as_str(), "3.0");
        assert_eq!(s.adr_flat_growth().to_decimal(), dec!(3.0));
    }
}
