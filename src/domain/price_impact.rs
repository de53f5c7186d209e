//! Price-impact ratio of a quoted swap.

use core::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// The price impact of a quoted swap, as a signed real ratio.
///
/// A value of `0` means either no detectable impact or a curve family
/// whose impact model is not computed (StableSwap quotes always report
/// `0` — slippage inside the tolerance band is treated as negligible,
/// which callers must not mistake for "no slippage" in all cases).
///
/// Impacts are derived from exact big-integer numerator/denominator
/// pairs so the `f64` value is the correctly-rounded true quotient.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceImpact(f64);

impl PriceImpact {
    /// No detectable impact (or no impact model for the curve family).
    pub const ZERO: Self = Self(0.0);

    /// Builds an impact from an exact integer ratio.
    ///
    /// Returns [`ZERO`](Self::ZERO) when the denominator is zero; the
    /// pricing formulas only produce a zero denominator for degenerate
    /// trades that are already reported as zero-impact.
    #[must_use]
    pub fn from_ratio(numerator: BigInt, denominator: BigInt) -> Self {
        if denominator.is_zero() {
            return Self::ZERO;
        }
        let value = BigRational::new(numerator, denominator)
            .to_f64()
            .unwrap_or(0.0);
        Self(value)
    }

    /// Returns the ratio as an `f64`.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the impact is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for PriceImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
