//! Unified error types for the pricing engine.
//!
//! All fallible operations across the crate return [`PricingError`] as
//! their error type. Every error is detected synchronously, before or
//! during a pricing computation, and propagated to the immediate
//! caller; the engine never retries (the math is deterministic) and
//! never returns a partial result.

use num_bigint::BigUint;
use thiserror::Error;

use crate::domain::Unit;

/// Unified error enum for all pricing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The provided asset bundle does not contain exactly one unit.
    #[error("asset bundle must contain exactly one unit, got {len}")]
    InvalidInput {
        /// Number of units actually present in the bundle.
        len: usize,
    },

    /// The bundle's unit is neither of the pool's two units.
    #[error("asset {unit} is invalid for pool {unit_a}-{unit_b}")]
    UnknownAsset {
        /// The offending unit.
        unit: Unit,
        /// The pool's first unit.
        unit_a: Unit,
        /// The pool's second unit.
        unit_b: Unit,
    },

    /// A requested output meets or exceeds the available reserve on
    /// that side. Raised by inverse-direction (`get_amount_in`)
    /// computations only.
    #[error("requested output {requested} meets or exceeds reserve {reserve}")]
    InsufficientLiquidity {
        /// The requested output quantity.
        requested: BigUint,
        /// The output-side reserve.
        reserve: BigUint,
    },

    /// The pool's curve family has no pricing algorithm.
    #[error("{0} pricing is not implemented")]
    Unimplemented(&'static str),

    /// A pool snapshot constructor invariant was violated.
    #[error("invalid pool snapshot: {0}")]
    InvalidSnapshot(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PricingError>;
