//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used
//! items into scope:
//!
//! ```rust
//! use tidepool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{AssetBundle, BasisPoints, PriceImpact, SwapQuote, Unit, BPS_DENOMINATOR};

// Re-export snapshots
pub use crate::snapshot::{
    AmpVariant, CurveFamily, FeeMode, PoolSnapshot, StableSwapParams, DEFAULT_AMP,
};

// Re-export the core trait
pub use crate::traits::PricingPool;

// Re-export pricing engines and dispatch
pub use crate::pricing::{
    ConstantLiquidityPricing, ConstantProductPricing, CurvePricing, StableSwapPricing,
};

// Re-export error types
pub use crate::error::{PricingError, Result};
