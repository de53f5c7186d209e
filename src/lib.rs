//! # Tidepool
//!
//! Pricing engine for Cardano-style AMM liquidity pools: quote swap
//! outputs, required inputs, and price impact from an immutable
//! reserve snapshot.
//!
//! This crate provides domain types, the [`PricingPool`] trait, pool
//! snapshots, and pricing engines for three curve families:
//!
//! - **Constant Product** (`x·y = k`, Uniswap v2 / Minswap style) —
//!   exact big-integer arithmetic with floor rounding.
//! - **StableSwap** (Curve style) — Newton-solved invariant with
//!   pluggable amplification variants (standard `amp·n^n` and the
//!   common `amp·n` used by WingRiders) and configurable fee side.
//! - **Constant Liquidity** (Axo style) — recognised but not yet
//!   priceable; both operations report [`PricingError::Unimplemented`].
//!
//! Quoting is pure: a [`PoolSnapshot`] is never mutated, so one
//! snapshot can be priced concurrently from many threads.
//!
//! # Quick Start
//!
//! ```rust
//! use tidepool::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // 1. Capture a pool snapshot: 1M/1M reserves, 0.30% fee.
//! let pool = PoolSnapshot::constant_product(
//!     Unit::lovelace(),
//!     Unit::new("cafe0001"),
//!     1_000_000u64,
//!     1_000_000u64,
//!     30,
//! )?;
//!
//! // 2. Quote a 10_000 lovelace input.
//! let quote = CurvePricing::for_pool(&pool)
//!     .get_amount_out(&AssetBundle::single(Unit::lovelace(), 10_000u32))?;
//!
//! assert_eq!(format!("{}", quote.asset()), "9871 cafe0001");
//! assert!(quote.price_impact().get() < 0.01);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`domain`] | [`Unit`], [`AssetBundle`], [`BasisPoints`], [`PriceImpact`], [`SwapQuote`] |
//! | [`snapshot`] | [`PoolSnapshot`], [`CurveFamily`], [`StableSwapParams`] |
//! | [`traits`] | [`PricingPool`] |
//! | [`pricing`] | per-family engines and [`CurvePricing`] dispatch |
//! | [`error`] | [`PricingError`] |
//! | [`prelude`] | one-line import of the common surface |
//!
//! [`PricingPool`]: traits::PricingPool
//! [`PoolSnapshot`]: snapshot::PoolSnapshot
//! [`CurveFamily`]: snapshot::CurveFamily
//! [`StableSwapParams`]: snapshot::StableSwapParams
//! [`CurvePricing`]: pricing::CurvePricing
//! [`PricingError`]: error::PricingError
//! [`PricingError::Unimplemented`]: error::PricingError::Unimplemented
//! [`Unit`]: domain::Unit
//! [`AssetBundle`]: domain::AssetBundle
//! [`BasisPoints`]: domain::BasisPoints
//! [`PriceImpact`]: domain::PriceImpact
//! [`SwapQuote`]: domain::SwapQuote

pub mod domain;
pub mod error;
pub mod prelude;
pub mod pricing;
pub mod snapshot;
pub mod traits;
