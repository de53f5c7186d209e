//! Constant-product (XYK) pricing.
//!
//! The swap invariant is `x · y = k`.  All arithmetic is exact
//! big-integer math with floor division — the on-chain-compatible
//! rounding direction — and the fee enters as an integer modifier
//! `10_000 − volume_fee` applied to the input side.
//!
//! # Quote algorithm (input on side `in`, output on side `out`)
//!
//! ```text
//! numerator   = q · fee_modifier · reserve_out
//! denominator = q · fee_modifier + reserve_in · 10_000
//! amount_out  = ⌊numerator / denominator⌋
//! ```
//!
//! The price impact is derived from the same discrete
//! numerator/denominator values as the output — not the continuous
//! derivative — so it stays consistent with the integer formula.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::domain::{AssetBundle, PriceImpact, SwapQuote, Unit, BPS_DENOMINATOR};
use crate::error::{PricingError, Result};
use crate::snapshot::PoolSnapshot;
use crate::traits::PricingPool;

/// Constant-product pricing over a borrowed pool snapshot.
///
/// Stateless: every call reads only the snapshot and its argument.
#[derive(Debug, Clone, Copy)]
pub struct ConstantProductPricing<'a> {
    pool: &'a PoolSnapshot,
}

impl<'a> ConstantProductPricing<'a> {
    /// Wraps a pool snapshot for constant-product quoting.
    #[must_use]
    pub const fn new(pool: &'a PoolSnapshot) -> Self {
        Self { pool }
    }

    /// Validates the swap leg and returns `(quantity, unit)`.
    fn validated_leg<'b>(&self, asset: &'b AssetBundle) -> Result<(&'b BigUint, &'b Unit)> {
        let unit = asset.unit()?;
        if !self.pool.contains(unit) {
            return Err(self.pool.unknown_asset(unit));
        }
        let quantity = asset.quantity()?;
        Ok((quantity, unit))
    }
}

impl PricingPool for ConstantProductPricing<'_> {
    fn get_amount_out(&self, asset: &AssetBundle) -> Result<SwapQuote> {
        let (quantity, unit) = self.validated_leg(asset)?;

        let (reserve_in, reserve_out, unit_out) = if unit == self.pool.unit_a() {
            (self.pool.reserve_a(), self.pool.reserve_b(), self.pool.unit_b())
        } else {
            (self.pool.reserve_b(), self.pool.reserve_a(), self.pool.unit_a())
        };

        let fee_modifier = BigUint::from(self.pool.volume_fee().modifier());
        let numerator = quantity * &fee_modifier * reserve_out;
        let denominator = quantity * &fee_modifier + reserve_in * BPS_DENOMINATOR;
        let amount_out = &numerator / &denominator;

        // Degenerate trade: nothing comes out, and the impact formula
        // would divide by zero downstream.
        if amount_out.is_zero() {
            return Ok(SwapQuote::new(
                AssetBundle::single(unit_out.clone(), amount_out),
                PriceImpact::ZERO,
            ));
        }

        let scale = BigInt::from(reserve_out * quantity * &denominator);
        let impact_numerator =
            &scale * BigInt::from(fee_modifier) - BigInt::from(numerator * reserve_in * BPS_DENOMINATOR);
        let impact_denominator = scale * BPS_DENOMINATOR;
        let price_impact = PriceImpact::from_ratio(impact_numerator, impact_denominator);

        Ok(SwapQuote::new(
            AssetBundle::single(unit_out.clone(), amount_out),
            price_impact,
        ))
    }

    fn get_amount_in(&self, asset: &AssetBundle) -> Result<SwapQuote> {
        let (quantity, unit) = self.validated_leg(asset)?;

        // The argument names the desired output side.
        let (reserve_in, reserve_out, unit_in) = if unit == self.pool.unit_b() {
            (self.pool.reserve_a(), self.pool.reserve_b(), self.pool.unit_a())
        } else {
            (self.pool.reserve_b(), self.pool.reserve_a(), self.pool.unit_b())
        };

        // With q >= reserve_out the denominator is non-positive: the
        // request cannot be satisfied at any price.
        if quantity >= reserve_out {
            return Err(PricingError::InsufficientLiquidity {
                requested: quantity.clone(),
                reserve: reserve_out.clone(),
            });
        }

        let fee_modifier = BigUint::from(self.pool.volume_fee().modifier());
        let numerator = quantity * BPS_DENOMINATOR * reserve_in;
        let denominator = (reserve_out - quantity) * &fee_modifier;
        let amount_in = &numerator / &denominator;

        let scale = BigInt::from(reserve_out * &numerator);
        let impact_numerator = &scale * BigInt::from(fee_modifier)
            - BigInt::from(quantity * &denominator * reserve_in * BPS_DENOMINATOR);
        let impact_denominator = scale * BPS_DENOMINATOR;
        let price_impact = PriceImpact::from_ratio(impact_numerator, impact_denominator);

        Ok(SwapQuote::new(
            AssetBundle::single(unit_in.clone(), amount_in),
            price_impact,
        ))
    }
}
