//! Property-level assumptions injected into the engine.
//!
//! The room count and the reserve-for-replacement percentage are fixed for
//! the whole projection and are supplied by the caller rather than read from
//! any shared state.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use proforma_core::models::{PropertyAssumptions, ValuationAssumptions};
//!
//! let assumptions = PropertyAssumptions {
//!     room_keys: 120,
//!     valuation: ValuationAssumptions {
//!         reserve_for_replacement_percent: dec!(4.0),
//!     },
//! };
//!
//! assert!(assumptions.validate().is_ok());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`PropertyAssumptions::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssumptionsError {
    /// A property must have at least one room.
    #[error("room count must be positive")]
    NoRooms,

    /// The reserve percentage must be between 0 and 100.
    #[error("reserve for replacement percent must be between 0 and 100, got {0}")]
    InvalidReservePercent(Decimal),
}

/// Assumptions owned by the valuation side of the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationAssumptions {
    /// Percentage of total revenue set aside each forecast year, e.g. `4.0`.
    pub reserve_for_replacement_percent: Decimal,
}

/// Property facts that hold for every year of the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAssumptions {
    /// Number of guest rooms (keys); constant across all years.
    pub room_keys: u32,

    pub valuation: ValuationAssumptions,
}

impl PropertyAssumptions {
    /// Checks the assumptions are usable.
    ///
    /// # Errors
    ///
    /// Returns [`AssumptionsError`] if:
    /// - `room_keys` is zero
    /// - the reserve percentage is not in [0, 100]
    pub fn validate(&self) -> Result<(), AssumptionsError> {
        if self.room_keys == 0 {
            return Err(AssumptionsError::NoRooms);
        }
        let reserve = self.valuation.reserve_for_replacement_percent;
        if reserve < Decimal::ZERO || reserve > Decimal::ONE_HUNDRED {
            return Err(AssumptionsError::InvalidReservePercent(reserve));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn assumptions() -> PropertyAssumptions {
        PropertyAssumptions {
            room_keys: 100,
            valuation: ValuationAssumptions {
                reserve_for_replacement_percent: dec!(4.0),
            },
        }
    }

    #[test]
    fn validate_accepts_typical_values() {
        assert_eq!(assumptions().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_rooms() {
        let mut a = assumptions();
        a.room_keys = 0;

        assert_eq!(a.validate(), Err(AssumptionsError::NoRooms));
    }

    #[test]
    fn validate_rejects_negative_reserve() {
        let mut a = assumptions();
        a.valuation.reserve_for_replacement_percent = dec!(-1);

        assert_eq!(
            a.validate(),
            Err(AssumptionsError::InvalidReservePercent(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_reserve_above_one_hundred() {
        let mut a = assumptions();
        a.valuation.reserve_for_replacement_percent = dec!(100.5);

        assert_eq!(
            a.validate(),
            Err(AssumptionsError::InvalidReservePercent(dec!(100.5)))
        );
    }

    #[test]
    fn validate_accepts_zero_reserve() {
        let mut a = assumptions();
        a.valuation.reserve_for_replacement_percent = Decimal::ZERO;

        assert_eq!(a.validate(), Ok(()));
    }
}
