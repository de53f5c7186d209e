//! Pricing engines for every supported curve family.
//!
//! Each family gets its own module with a pricer struct borrowing a
//! [`PoolSnapshot`]; [`CurvePricing`] wraps them behind a single enum
//! so callers can quote any snapshot without caring which curve it
//! uses.
//!
//! | Module | Curve | Style |
//! |--------|-------|-------|
//! | [`constant_product`] | `x·y = k` | Uniswap V2 / Minswap |
//! | [`stable_swap`] | Curve invariant | Curve / WingRiders |
//! | [`constant_liquidity`] | programmable orders | Axo (stub) |

pub mod constant_liquidity;
pub mod constant_product;
pub mod stable_swap;

#[cfg(test)]
mod proptest_properties;

pub use constant_liquidity::ConstantLiquidityPricing;
pub use constant_product::ConstantProductPricing;
pub use stable_swap::StableSwapPricing;

use crate::domain::{AssetBundle, SwapQuote};
use crate::error::Result;
use crate::snapshot::{CurveFamily, PoolSnapshot};
use crate::traits::PricingPool;

/// Enum dispatch over all curve-family pricers.
///
/// Selecting the variant from [`PoolSnapshot::curve`] keeps dispatch
/// static: no vtable, no allocation, and the compiler checks that
/// every family is handled.
///
/// # Example
///
/// ```
/// use tidepool::prelude::*;
///
/// # fn main() -> Result<()> {
/// let pool = PoolSnapshot::constant_product(
///     Unit::lovelace(),
///     Unit::new("cafe0001"),
///     1_000_000u64,
///     1_000_000u64,
///     30,
/// )?;
/// let quote = CurvePricing::for_pool(&pool)
///     .get_amount_out(&AssetBundle::single(Unit::lovelace(), 10_000u32))?;
/// assert_eq!(format!("{}", quote.asset()), "9871 cafe0001");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub enum CurvePricing<'a> {
    /// Constant-product (XYK) pricing.
    ConstantProduct(ConstantProductPricing<'a>),

    /// StableSwap (Curve-style) pricing.
    StableSwap(StableSwapPricing<'a>),

    /// Constant-liquidity pricing (stub).
    ConstantLiquidity(ConstantLiquidityPricing<'a>),
}

impl<'a> CurvePricing<'a> {
    /// Builds the pricer matching the snapshot's curve family.
    #[must_use]
    pub fn for_pool(pool: &'a PoolSnapshot) -> Self {
        match pool.curve() {
            CurveFamily::ConstantProduct => {
                Self::ConstantProduct(ConstantProductPricing::new(pool))
            }
            CurveFamily::StableSwap(params) => {
                Self::StableSwap(StableSwapPricing::new(pool, params))
            }
            CurveFamily::ConstantLiquidity => {
                Self::ConstantLiquidity(ConstantLiquidityPricing::new(pool))
            }
        }
    }
}

impl PricingPool for CurvePricing<'_> {
    fn get_amount_out(&self, asset: &AssetBundle) -> Result<SwapQuote> {
        match self {
            Self::ConstantProduct(pricing) => pricing.get_amount_out(asset),
            Self::StableSwap(pricing) => pricing.get_amount_out(asset),
            Self::ConstantLiquidity(pricing) => pricing.get_amount_out(asset),
        }
    }

    fn get_amount_in(&self, asset: &AssetBundle) -> Result<SwapQuote> {
        match self {
            Self::ConstantProduct(pricing) => pricing.get_amount_in(asset),
            Self::StableSwap(pricing) => pricing.get_amount_in(asset),
            Self::ConstantLiquidity(pricing) => pricing.get_amount_in(asset),
        }
    }
}
