//! Historical actuals: the external provider seam and the historical-only
//! view the engines read through.

mod provider;
mod table;

pub use provider::{ActualsProvider, HistoricalActuals};
pub use table::ActualsTable;
