//! Basis-point representation for pool fees.

use core::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Denominator for basis-point arithmetic (10 000 = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A pool volume fee expressed in basis points (1 bp = 0.01%).
///
/// Pool fees must be strictly below 100%: a 10 000 bp fee would make
/// the fee modifier zero and every swap formula degenerate, so
/// [`new`](Self::new) rejects it.
///
/// # Examples
///
/// ```
/// use tidepool::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30).expect("0.3% is a valid fee");
/// assert_eq!(fee.get(), 30);
/// assert_eq!(fee.modifier(), 9_970);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%), the default volume fee.
    pub const ZERO: Self = Self(0);

    /// Creates a fee from a raw basis-point value.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSnapshot`] if `value` is not in
    /// `0..10_000`.
    pub fn new(value: u32) -> Result<Self> {
        if value >= BPS_DENOMINATOR {
            return Err(PricingError::InvalidSnapshot(
                "volume fee must be below 10000 basis points",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the fee modifier `10_000 - fee`, always in `1..=10_000`.
    #[must_use]
    pub const fn modifier(&self) -> u32 {
        BPS_DENOMINATOR - self.0
    }

    /// Scales `quantity` by `(10_000 − fee) / 10_000`, floor-divided.
    ///
    /// This is the on-chain-compatible rounding direction: the trader
    /// never receives the benefit of a fractional unit.
    #[must_use]
    pub fn take_fee(&self, quantity: &BigUint) -> BigUint {
        quantity * self.modifier() / BPS_DENOMINATOR
    }

    /// Scales `quantity` by `10_000 / (10_000 − fee)`, floor-divided:
    /// the gross amount whose net-of-fee portion covers `quantity`.
    #[must_use]
    pub fn gross_up(&self, quantity: &BigUint) -> BigUint {
        quantity * BPS_DENOMINATOR / self.modifier()
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

impl TryFrom<u32> for BasisPoints {
    type Error = PricingError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BasisPoints> for u32 {
    fn from(value: BasisPoints) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_in_range() {
        let Ok(fee) = BasisPoints::new(30) else {
            panic!("expected Ok");
        };
        assert_eq!(fee.get(), 30);
    }

    #[test]
    fn new_rejects_full_fee() {
        assert!(BasisPoints::new(10_000).is_err());
        assert!(BasisPoints::new(u32::MAX).is_err());
    }

    #[test]
    fn boundary_just_below_full() {
        let Ok(fee) = BasisPoints::new(9_999) else {
            panic!("expected Ok");
        };
        assert_eq!(fee.modifier(), 1);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
        assert_eq!(BasisPoints::ZERO.modifier(), 10_000);
    }

    #[test]
    fn take_fee_floors() {
        let Ok(fee) = BasisPoints::new(30) else {
            panic!("expected Ok");
        };
        // 10_000 * 9970 / 10_000 = 9_970
        assert_eq!(
            fee.take_fee(&BigUint::from(10_000u32)),
            BigUint::from(9_970u32)
        );
        // 3 * 9970 / 10_000 = 2.991 → 2
        assert_eq!(fee.take_fee(&BigUint::from(3u32)), BigUint::from(2u32));
    }

    #[test]
    fn gross_up_floors() {
        let Ok(fee) = BasisPoints::new(30) else {
            panic!("expected Ok");
        };
        // 9970 * 10_000 / 9970 = 10_000
        assert_eq!(
            fee.gross_up(&BigUint::from(9_970u32)),
            BigUint::from(10_000u32)
        );
    }

    #[test]
    fn zero_fee_is_identity() {
        let q = BigUint::from(12_345u32);
        assert_eq!(BasisPoints::ZERO.take_fee(&q), q);
        assert_eq!(BasisPoints::ZERO.gross_up(&q), q);
    }

    #[test]
    fn display() {
        let Ok(fee) = BasisPoints::new(30) else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{fee}"), "30bp");
    }
}
