//! Common arithmetic helpers for statement calculations.
//!
//! Every ratio in the engine goes through [`safe_div`], so a zero
//! denominator yields zero instead of an error. Products and sums go
//! through [`mul`], [`add`] and [`sub`], so an input too large for a
//! `Decimal` yields zero instead of a panic.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Used for report output only; engine values are never rounded to cents.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole unit, halves away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(25549.5)), dec!(25550));
/// assert_eq!(round_whole(dec!(25549.49)), dec!(25549));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Divides, returning zero when the denominator is zero.
///
/// A quotient too large for a `Decimal` also yields zero.
///
/// # Arguments
///
/// * `numerator` - The value to divide
/// * `denominator` - The value to divide by
///
/// # Returns
///
/// `numerator / denominator`, or zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::safe_div;
///
/// assert_eq!(safe_div(dec!(1000000), dec!(5000000)), dec!(0.2));
/// assert_eq!(safe_div(dec!(1000000), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn safe_div(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// Multiplies two values, returning zero when the product overflows.
///
/// Raw inputs can hold any number a `Decimal` parses, so every engine
/// product goes through here rather than `*`. Overflow is logged the same
/// way malformed input text is.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::mul;
///
/// assert_eq!(mul(dec!(45), dec!(25550)), dec!(1149750));
/// assert_eq!(mul(Decimal::MAX, dec!(2)), Decimal::ZERO);
/// ```
pub fn mul(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| overflowed("multiplication", a, b))
}

/// Adds two values, returning zero when the sum overflows.
pub fn add(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| overflowed("addition", a, b))
}

/// Subtracts `b` from `a`, returning zero when the difference overflows.
pub fn sub(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| overflowed("subtraction", a, b))
}

/// Sums fallible values with [`add`], stopping at the first error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::sum;
///
/// let values: [Result<_, ()>; 3] = [Ok(dec!(1.5)), Ok(dec!(2)), Ok(dec!(-0.5))];
/// assert_eq!(sum(values), Ok(dec!(3)));
/// ```
pub fn sum<E>(values: impl IntoIterator<Item = Result<Decimal, E>>) -> Result<Decimal, E> {
    let mut total = Decimal::ZERO;
    for value in values {
        total = add(total, value?);
    }
    Ok(total)
}

/// Takes `percent` percent of `base`.
///
/// # Arguments
///
/// * `percent` - A percentage, e.g. `40` for 40%
/// * `base` - The amount the percentage applies to
///
/// # Returns
///
/// `percent / 100 * base`, or zero if the product overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(40), dec!(766500)), dec!(306600));
/// assert_eq!(percent_of(dec!(4.0), dec!(10000000)), dec!(400000));
/// ```
pub fn percent_of(
    percent: Decimal,
    base: Decimal,
) -> Decimal {
    mul(percent / Decimal::ONE_HUNDRED, base)
}

/// Expresses `part` as a percentage of `whole`.
///
/// # Arguments
///
/// * `part` - The amount being measured
/// * `whole` - The reference amount
///
/// # Returns
///
/// `part / whole * 100`, or zero when `whole` is zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::as_percent;
///
/// assert_eq!(as_percent(dec!(1000000), dec!(5000000)), dec!(20));
/// assert_eq!(as_percent(dec!(1000000), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn as_percent(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    mul(safe_div(part, whole), Decimal::ONE_HUNDRED)
}

/// Applies a growth percentage to a prior-year value.
///
/// # Arguments
///
/// * `base` - The prior-year value
/// * `growth_percent` - Year-over-year change, e.g. `3.5` or `-10`
///
/// # Returns
///
/// `base * (1 + growth_percent / 100)`, or zero if the product overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use proforma_core::calculations::common::grow;
///
/// assert_eq!(grow(dec!(200), dec!(5)), dec!(210));
/// assert_eq!(grow(dec!(200), dec!(-10)), dec!(180));
/// ```
pub fn grow(
    base: Decimal,
    growth_percent: Decimal,
) -> Decimal {
    mul(base, Decimal::ONE + growth_percent / Decimal::ONE_HUNDRED)
}

fn overflowed(
    operation: &str,
    a: Decimal,
    b: Decimal,
) -> Decimal {
    warn!(%a, %b, "{} overflowed, result treated as zero", operation);
    Decimal::ZERO
}
