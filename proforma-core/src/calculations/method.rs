//! The one evaluation rule shared by every forecast expense line.
//!
//! | Method | Forward (`evaluate`) | Reverse (`read_back`) |
//! |--------|----------------------|------------------------|
//! | POR    | raw × occupied rooms | value ÷ occupied rooms |
//! | % of revenue | raw ÷ 100 × reference revenue | value ÷ reference revenue × 100 |
//! | Manual | raw | value |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use proforma_core::calculations::{MethodContext, evaluate};
//! use proforma_core::models::{ForecastMethod, RawValue};
//!
//! let context = MethodContext {
//!     occupied_rooms: dec!(25550),
//!     reference_revenue: dec!(766500),
//! };
//!
//! let por = evaluate(ForecastMethod::PerOccupiedRoom, &RawValue::from_input("45"), &context);
//! let pct = evaluate(ForecastMethod::PercentOfRevenue, &RawValue::from_input("40"), &context);
//!
//! assert_eq!(por, dec!(1149750));
//! assert_eq!(pct, dec!(306600));
//! ```

use rust_decimal::Decimal;

use super::common::{as_percent, mul, percent_of, safe_div};
use crate::models::{ForecastMethod, RawValue};

/// The drivers a forecast method scales against, for one line and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodContext {
    /// Occupied room-nights of the year.
    pub occupied_rooms: Decimal,
    /// Revenue of the line's own department, or total revenue when the line
    /// has no department.
    pub reference_revenue: Decimal,
}

/// Converts a raw input to a dollar value under `method`.
pub fn evaluate(
    method: ForecastMethod,
    raw: &RawValue,
    context: &MethodContext,
) -> Decimal {
    let input = raw.to_decimal();
    match method {
        ForecastMethod::PerOccupiedRoom => mul(input, context.occupied_rooms),
        ForecastMethod::PercentOfRevenue => percent_of(input, context.reference_revenue),
        ForecastMethod::ManualInput => input,
    }
}

/// Expresses a known dollar value in the unit of `method`.
///
/// Display only: the result never feeds a forward calculation.
pub fn read_back(
    method: ForecastMethod,
    value: Decimal,
    context: &MethodContext,
) -> Decimal {
    match method {
        ForecastMethod::PerOccupiedRoom => safe_div(value, context.occupied_rooms),
        ForecastMethod::PercentOfRevenue => as_percent(value, context.reference_revenue),
        ForecastMethod::ManualInput => value,
    }
}
