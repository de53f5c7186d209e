//! StableSwap (Curve-style) pricing.
//!
//! Specialised for low-slippage swaps between similarly-priced
//! (pegged) assets such as stablecoins.
//!
//! # Invariant (n = 2 tokens)
//!
//! ```text
//! A·n·(x + y) + D = A·D·n + D³ / (n^n · x · y)
//! ```
//!
//! where:
//! - `A` — amplification coefficient (scaled to `ann` per variant).
//! - `D` — invariant parameter (≈ total reserves when at peg).
//! - `x`, `y` — balances of the two tokens.
//!
//! # Quote algorithm
//!
//! 1. Apply the fee according to the pool's [`FeeMode`]: deduct it
//!    from the input before the solve, or from the output after.
//! 2. Normalize the reserves through the per-asset multipliers, solve
//!    the invariant for `D`, then for the post-trade balance `y` of
//!    the opposite side.
//! 3. `amount_out = reserve_out − ⌊y / multiplier_out⌋`;
//!    [`get_amount_in`] runs the same solve with the trade quantity
//!    subtracted instead of added.
//!
//! Both Newton iterations run in `f64`: the solver converges to well
//! under one raw unit and the final quantity is truncated, which is
//! also what keeps the math bit-compatible across amp variants.
//!
//! [`get_amount_in`]: crate::traits::PricingPool::get_amount_in

use num_bigint::BigUint;
use num_traits::{FromPrimitive, ToPrimitive};
use tracing::{debug, trace};

use crate::domain::{AssetBundle, PriceImpact, SwapQuote, Unit};
use crate::error::{PricingError, Result};
use crate::snapshot::{FeeMode, PoolSnapshot, StableSwapParams};
use crate::traits::PricingPool;

/// Number of tokens in a StableSwap pair.
const N: f64 = 2.0;

/// Maximum Newton-Raphson iterations before accepting the current
/// iterate as-is.
const MAX_ITERATIONS: u32 = 256;

/// Convergence threshold (absolute difference between consecutive
/// iterates, in raw token units).
const CONVERGENCE_THRESHOLD: f64 = 1.0;

// ---------------------------------------------------------------------------
// StableSwap math helpers
// ---------------------------------------------------------------------------

/// Computes the StableSwap invariant `D` for two reserves via
/// Newton-Raphson iteration.
///
/// Rearranged for iteration:
/// ```text
/// D_next = D · (ann·S + n·D_P) / ((ann − 1)·D + (n + 1)·D_P)
/// ```
/// where `S = x + y` and `D_P = D³ / (n^n · x · y)`.
///
/// If the loop exhausts [`MAX_ITERATIONS`] the last iterate is
/// returned anyway; with two positive reserves the iteration is a
/// contraction and in practice converges in well under ten steps.
fn compute_d(x: f64, y: f64, ann: f64) -> f64 {
    let s = x + y;
    if s == 0.0 {
        return 0.0;
    }

    let mut d = s;
    for iteration in 0..MAX_ITERATIONS {
        let d_p = d.powi(3) / (N.powi(2) * x * y);
        let d_prev = d;
        d = d * (ann * s + d_p * N) / ((ann - 1.0) * d + (N + 1.0) * d_p);

        if (d - d_prev).abs() < CONVERGENCE_THRESHOLD {
            trace!(iterations = iteration + 1, "D solve converged");
            return d;
        }

        if iteration == MAX_ITERATIONS - 1 {
            debug!(residual = (d - d_prev).abs(), "D solve hit iteration cap");
        }
    }
    d
}

/// Solves the invariant for the opposite balance `y` given one
/// post-trade balance `x`, holding `D` fixed.
///
/// The quadratic in `y` is iterated as:
/// ```text
/// y_next = (y² + c) / (2·y + b − D)
/// ```
/// with `c = D³ / (n² · ann · x)` and `b = x + D / ann`.
///
/// Same best-effort convergence policy as [`compute_d`].
fn solve_y(x: f64, d: f64, ann: f64) -> f64 {
    let c = d.powi(3) / (N.powi(2) * ann * x);
    let b = x + d / ann;

    let mut y = d;
    for iteration in 0..MAX_ITERATIONS {
        let y_prev = y;
        y = (y * y + c) / (2.0 * y + b - d);

        if (y - y_prev).abs() < CONVERGENCE_THRESHOLD {
            trace!(iterations = iteration + 1, "y solve converged");
            return y;
        }

        if iteration == MAX_ITERATIONS - 1 {
            debug!(residual = (y - y_prev).abs(), "y solve hit iteration cap");
        }
    }
    y
}

/// Truncates a solver result into an arbitrary-precision integer,
/// clamping negatives (and non-finite values) to zero.
fn to_quantity(value: f64) -> BigUint {
    BigUint::from_f64(value.max(0.0).trunc()).unwrap_or_default()
}

fn to_f64(value: &BigUint) -> f64 {
    // Saturates for magnitudes beyond f64 range; the solver then
    // degenerates to a zero-output quote rather than panicking.
    value.to_f64().unwrap_or(f64::INFINITY)
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// StableSwap pricing over a borrowed pool snapshot.
///
/// Price impact is reported as zero for this family: near the peg the
/// execution price tracks the spot price closely enough that the
/// constant-product impact formula would be misleading.
#[derive(Debug, Clone, Copy)]
pub struct StableSwapPricing<'a> {
    pool: &'a PoolSnapshot,
    params: &'a StableSwapParams,
}

impl<'a> StableSwapPricing<'a> {
    /// Wraps a pool snapshot together with its StableSwap parameters.
    #[must_use]
    pub const fn new(pool: &'a PoolSnapshot, params: &'a StableSwapParams) -> Self {
        Self { pool, params }
    }

    fn validated_leg<'b>(&self, asset: &'b AssetBundle) -> Result<(&'b BigUint, &'b Unit)> {
        let unit = asset.unit()?;
        if !self.pool.contains(unit) {
            return Err(self.pool.unknown_asset(unit));
        }
        let quantity = asset.quantity()?;
        Ok((quantity, unit))
    }

    /// Runs the two-stage solve and returns the raw (pre-fee) traded
    /// quantity on the opposite side.
    ///
    /// With `withdraw = false` the quantity is added to its reserve
    /// (quoting an output); with `withdraw = true` it is subtracted
    /// (quoting the input needed for a desired output).
    fn solve_opposite(&self, quantity: f64, unit: &Unit, withdraw: bool) -> f64 {
        let ann = self.params.ann() as f64;
        let [multiplier_a, multiplier_b] = self.params.multipliers();
        // The invariant is solved in normalized balances so assets
        // with different decimal scales sit on a common peg.
        let balance_a = to_f64(self.pool.reserve_a()) * multiplier_a as f64;
        let balance_b = to_f64(self.pool.reserve_b()) * multiplier_b as f64;
        let d = compute_d(balance_a, balance_b, ann);

        let signed = if withdraw { -quantity } else { quantity };
        let (post_balance, out_balance, out_multiplier) = if unit == self.pool.unit_a() {
            (
                balance_a + signed * multiplier_a as f64,
                balance_b,
                multiplier_b as f64,
            )
        } else {
            (
                balance_b + signed * multiplier_b as f64,
                balance_a,
                multiplier_a as f64,
            )
        };

        // The solved balance is floored in raw output units before the
        // reserve delta. The order matters: flooring the delta instead
        // would shave one unit off every quote with a fractional
        // iterate.
        let y = (solve_y(post_balance, d, ann) / out_multiplier).trunc();
        let traded = out_balance / out_multiplier - y;
        if withdraw {
            -traded
        } else {
            traded
        }
    }
}

impl PricingPool for StableSwapPricing<'_> {
    fn get_amount_out(&self, asset: &AssetBundle) -> Result<SwapQuote> {
        let (quantity, unit) = self.validated_leg(asset)?;
        let unit_out = self.pool.other_unit(unit)?;

        let net_in = match self.params.fee_mode() {
            FeeMode::OnInput => self.pool.volume_fee().take_fee(quantity),
            FeeMode::OnOutput => quantity.clone(),
        };

        let mut amount_out = to_quantity(self.solve_opposite(to_f64(&net_in), unit, false));
        if self.params.fee_mode() == FeeMode::OnOutput {
            amount_out = self.pool.volume_fee().take_fee(&amount_out);
        }

        Ok(SwapQuote::new(
            AssetBundle::single(unit_out.clone(), amount_out),
            PriceImpact::ZERO,
        ))
    }

    fn get_amount_in(&self, asset: &AssetBundle) -> Result<SwapQuote> {
        let (quantity, unit) = self.validated_leg(asset)?;
        let unit_in = self.pool.other_unit(unit)?;

        let gross_out = match self.params.fee_mode() {
            FeeMode::OnInput => quantity.clone(),
            FeeMode::OnOutput => self.pool.volume_fee().gross_up(quantity),
        };

        // The grossed-up variant is what actually leaves the reserve,
        // so both the liquidity check and the reported amount use it.
        let out_reserve = if unit == self.pool.unit_a() {
            self.pool.reserve_a()
        } else {
            self.pool.reserve_b()
        };
        if &gross_out >= out_reserve {
            return Err(PricingError::InsufficientLiquidity {
                requested: gross_out,
                reserve: out_reserve.clone(),
            });
        }

        let mut amount_in = to_quantity(self.solve_opposite(to_f64(&gross_out), unit, true));
        if self.params.fee_mode() == FeeMode::OnInput {
            amount_in = self.pool.volume_fee().gross_up(&amount_in);
        }

        Ok(SwapQuote::new(
            AssetBundle::single(unit_in.clone(), amount_in),
            PriceImpact::ZERO,
        ))
    }
}
