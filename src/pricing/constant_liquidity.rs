//! Constant-liquidity pool pricing (Axo style).
//!
//! These pools hold programmable liquidity whose shape is not
//! recoverable from a reserve snapshot alone, so no closed-form quote
//! exists here yet.  Full pricing will be added once the order
//! decomposition format is stable.

use crate::domain::{AssetBundle, SwapQuote};
use crate::error::{PricingError, Result};
use crate::snapshot::PoolSnapshot;
use crate::traits::PricingPool;

/// Constant-liquidity pricing over a borrowed pool snapshot.
///
/// Both quoting operations currently return
/// [`PricingError::Unimplemented`]; the snapshot is still validated
/// and carried so callers can enumerate these pools uniformly.
#[derive(Debug, Clone, Copy)]
pub struct ConstantLiquidityPricing<'a> {
    pool: &'a PoolSnapshot,
}

impl<'a> ConstantLiquidityPricing<'a> {
    /// Wraps a pool snapshot for constant-liquidity quoting.
    #[must_use]
    pub const fn new(pool: &'a PoolSnapshot) -> Self {
        Self { pool }
    }

    /// The wrapped snapshot.
    #[must_use]
    pub const fn pool(&self) -> &PoolSnapshot {
        self.pool
    }
}

impl PricingPool for ConstantLiquidityPricing<'_> {
    fn get_amount_out(&self, _asset: &AssetBundle) -> Result<SwapQuote> {
        Err(PricingError::Unimplemented(
            "constant liquidity get_amount_out",
        ))
    }

    fn get_amount_in(&self, _asset: &AssetBundle) -> Result<SwapQuote> {
        Err(PricingError::Unimplemented(
            "constant liquidity get_amount_in",
        ))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Unit;

    #[test]
    fn both_operations_are_unimplemented() {
        let Ok(pool) = PoolSnapshot::constant_liquidity(
            Unit::lovelace(),
            Unit::new("cafe0001"),
            1_000_000u64,
            1_000_000u64,
            30,
        ) else {
            panic!("expected valid snapshot");
        };
        let pricing = ConstantLiquidityPricing::new(&pool);
        let bundle = AssetBundle::single(Unit::lovelace(), 100u32);
        assert!(matches!(
            pricing.get_amount_out(&bundle),
            Err(PricingError::Unimplemented(_))
        ));
        assert!(matches!(
            pricing.get_amount_in(&bundle),
            Err(PricingError::Unimplemented(_))
        ));
        assert_eq!(pricing.pool().unit_a(), &Unit::lovelace());
    }
}
