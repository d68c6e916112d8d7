use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ActualLine, Year};

/// Source of recorded historical values.
///
/// `None` means the property reported nothing for that line and year.
pub trait ActualsProvider {
    fn actual(
        &self,
        line: ActualLine,
        year: Year,
    ) -> Option<Decimal>;
}

/// In-memory actuals, loaded once per session and then read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalActuals {
    values: BTreeMap<(ActualLine, Year), Decimal>,
}

impl HistoricalActuals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a value. A later insert for the same line and year wins.
    pub fn insert(
        &mut self,
        line: ActualLine,
        year: Year,
        value: Decimal,
    ) {
        self.values.insert((line, year), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(ActualLine, Year, Decimal)> for HistoricalActuals {
    fn from_iter<I: IntoIterator<Item = (ActualLine, Year, Decimal)>>(iter: I) -> Self {
        let mut actuals = Self::new();
        for (line, year, value) in iter {
            actuals.insert(line, year, value);
        }
        actuals
    }
}

impl ActualsProvider for HistoricalActuals {
    fn actual(
        &self,
        line: ActualLine,
        year: Year,
    ) -> Option<Decimal> {
        self.values.get(&(line, year)).copied()
    }
}
