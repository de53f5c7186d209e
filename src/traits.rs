//! Core pricing trait implemented by every curve family.
//!
//! [`PricingPool`] is the seam between the indexer-facing snapshot
//! layer and the transaction-builder collaborator: both operations
//! take one single-asset swap leg and return the opposite leg plus a
//! price impact.
//!
//! # Contract
//!
//! - The argument bundle must contain exactly one unit, and that unit
//!   must be one of the pool's two units.
//! - Implementations are pure: they read the snapshot and the
//!   argument, and return new values. No I/O, no caching, no shared
//!   mutable state — calls are safe from any number of threads.
//! - All output quantities are floored to integers; rounding never
//!   favors the trader.
//!
//! # Dispatch model
//!
//! Curve families are dispatched via the
//! [`CurvePricing`](crate::pricing::CurvePricing) enum rather than
//! `dyn` trait objects.

use crate::domain::{AssetBundle, SwapQuote};
use crate::error::Result;

/// Pricing interface shared by all curve families.
pub trait PricingPool {
    /// Computes how much of the opposite asset a trader receives for
    /// the given input leg.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidInput`](crate::error::PricingError::InvalidInput)
    ///   if `asset` does not contain exactly one unit.
    /// - [`PricingError::UnknownAsset`](crate::error::PricingError::UnknownAsset)
    ///   if the unit is not part of the pool.
    /// - [`PricingError::Unimplemented`](crate::error::PricingError::Unimplemented)
    ///   for curve families without a pricing algorithm.
    fn get_amount_out(&self, asset: &AssetBundle) -> Result<SwapQuote>;

    /// Computes how much of the opposite asset a trader must supply to
    /// receive the given output leg.
    ///
    /// # Errors
    ///
    /// All errors of [`get_amount_out`](Self::get_amount_out), plus
    /// [`PricingError::InsufficientLiquidity`](crate::error::PricingError::InsufficientLiquidity)
    /// when the requested output meets or exceeds the output-side
    /// reserve.
    fn get_amount_in(&self, asset: &AssetBundle) -> Result<SwapQuote>;
}
