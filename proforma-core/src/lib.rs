//! Multi-year hotel operating statement engine.
//!
//! Historical years report recorded actuals. Forecast years are computed
//! from per-line inputs, each read through its selected forecast method, and
//! rolled up into revenue, expense, GOP, EBITDA and NOI.

pub mod actuals;
pub mod calculations;
pub mod inputs;
pub mod models;

pub use actuals::{ActualsProvider, HistoricalActuals};
pub use calculations::{OperatingStatement, ProfitabilityRollup, ProjectionContext};
pub use inputs::LineItemStore;
