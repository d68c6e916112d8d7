//! Statement calculations.
//!
//! The engines form a stack, each holding the one below it:
//! [`ProfitabilityRollup`] → [`ExpenseEngine`] → [`RevenueEngine`] →
//! [`DemandEngine`]. All of them read through one [`ProjectionContext`] and
//! compute on demand; nothing is cached between calls.

pub mod common;
mod context;
mod demand;
mod expense;
mod method;
mod profitability;
mod revenue;
mod statement;

pub use context::ProjectionContext;
pub use demand::DemandEngine;
pub use expense::ExpenseEngine;
pub use method::{MethodContext, evaluate, read_back};
pub use profitability::ProfitabilityRollup;
pub use revenue::RevenueEngine;
pub use statement::{Driver, LineValue, OperatingStatement, StatementLine, YearColumn};
