//! Fundamental domain value types used throughout the pricing engine.
//!
//! All types are newtypes with validated constructors; none of them
//! mutate after construction.

mod asset_bundle;
mod basis_points;
mod price_impact;
mod swap_quote;
mod unit;

pub use asset_bundle::AssetBundle;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use price_impact::PriceImpact;
pub use swap_quote::SwapQuote;
pub use unit::Unit;
