use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseLine, ForecastMethod, RawValue, Year};

/// Raw values of one input line, keyed by forecast year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSeries {
    values: BTreeMap<Year, RawValue>,
}

impl RawSeries {
    /// A series holding the default `"0"` for every given year.
    pub fn zeroed(years: &[Year]) -> Self {
        Self {
            values: years.iter().map(|&y| (y, RawValue::default())).collect(),
        }
    }

    pub fn get(
        &self,
        year: Year,
    ) -> RawValue {
        self.values.get(&year).cloned().unwrap_or_default()
    }

    /// Replaces the entry for `year` in one step.
    pub fn set(
        &mut self,
        year: Year,
        value: RawValue,
    ) {
        self.values.insert(year, value);
    }
}

/// Inputs of one expense line: the active method and a separate series per
/// method, so leaving a method never discards what was entered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseInput {
    method: ForecastMethod,
    per_occupied_room: RawSeries,
    percent_of_revenue: RawSeries,
    manual: RawSeries,
}

impl ExpenseInput {
    pub fn new(
        line: ExpenseLine,
        years: &[Year],
    ) -> Self {
        Self {
            method: line.default_method(),
            per_occupied_room: RawSeries::zeroed(years),
            percent_of_revenue: RawSeries::zeroed(years),
            manual: RawSeries::zeroed(years),
        }
    }

    pub fn method(&self) -> ForecastMethod {
        self.method
    }

    pub fn set_method(
        &mut self,
        method: ForecastMethod,
    ) {
        self.method = method;
    }

    pub fn series(
        &self,
        method: ForecastMethod,
    ) -> &RawSeries {
        match method {
            ForecastMethod::PerOccupiedRoom => &self.per_occupied_room,
            ForecastMethod::PercentOfRevenue => &self.percent_of_revenue,
            ForecastMethod::ManualInput => &self.manual,
        }
    }

    pub fn series_mut(
        &mut self,
        method: ForecastMethod,
    ) -> &mut RawSeries {
        match method {
            ForecastMethod::PerOccupiedRoom => &mut self.per_occupied_room,
            ForecastMethod::PercentOfRevenue => &mut self.percent_of_revenue,
            ForecastMethod::ManualInput => &mut self.manual,
        }
    }

    /// Series the active method reads.
    pub fn active_series(&self) -> &RawSeries {
        self.series(self.method)
    }
}
