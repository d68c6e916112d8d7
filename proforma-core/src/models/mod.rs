mod assumptions;
mod line_item;
mod raw_value;
mod timeline;

pub use assumptions::{AssumptionsError, PropertyAssumptions, ValuationAssumptions};
pub use line_item::{
    ActualLine, AdrGrowthMethod, Department, ExpenseCategory, ExpenseLine, ForecastMethod,
    InputLine, OccupancyMethod,
};
pub use raw_value::RawValue;
pub use timeline::{Timeline, TimelineError, Year, YearKind, available_rooms, days_in_year};
