//! Forecast inputs: the raw text entered per line and year, and the method
//! switches that decide how the text is read.

mod series;
mod store;

pub use series::{ExpenseInput, RawSeries};
pub use store::LineItemStore;
