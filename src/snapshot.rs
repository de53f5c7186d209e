//! Immutable pool state snapshots.
//!
//! A [`PoolSnapshot`] records one on-chain observation of a liquidity
//! pool: two reserves, their unit identifiers, the volume fee, and the
//! curve-family parameters. Snapshots are produced by an external
//! indexer layer and consumed read-only by the pricing engine; a new
//! snapshot must be constructed per observation — nothing here mutates
//! in place.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, Unit};
use crate::error::{PricingError, Result};

/// Default amplification coefficient for StableSwap pools.
pub const DEFAULT_AMP: u64 = 75;

/// Which side of a StableSwap trade the volume fee is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeMode {
    /// Deduct the fee from the input quantity before the invariant
    /// solve (the default).
    #[default]
    OnInput,
    /// Run the solve on the full input and deduct the fee from the
    /// resulting output (or add it to the required input).
    OnOutput,
}

/// How the amplification product `ann` is derived from the pool's
/// amplification coefficient.
///
/// Both variants share one invariant solver; only this term differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmpVariant {
    /// `ann = amp · n^n` — the original StableSwap derivation (the
    /// default).
    #[default]
    Standard,
    /// `ann = amp · n` — the common variant used by some deployments
    /// that drop the exponent.
    Common,
}

impl AmpVariant {
    /// Computes the amplification product for a two-asset pool.
    #[must_use]
    pub const fn ann(&self, amp: u64) -> u64 {
        // n = 2 for every pool this engine prices.
        match self {
            Self::Standard => amp * 4,
            Self::Common => amp * 2,
        }
    }
}

/// StableSwap-specific pool parameters.
///
/// Defaults match the reference deployment: `amp = 75`, multipliers
/// `[1, 1]`, standard amplification, fee on input.
///
/// # Examples
///
/// ```
/// use tidepool::snapshot::{AmpVariant, StableSwapParams};
///
/// let params = StableSwapParams::default()
///     .with_multipliers([1, 100])
///     .with_variant(AmpVariant::Common);
/// assert_eq!(params.amp(), 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StableSwapParams {
    amp: u64,
    multipliers: [u64; 2],
    variant: AmpVariant,
    fee_mode: FeeMode,
}

impl Default for StableSwapParams {
    fn default() -> Self {
        Self {
            amp: DEFAULT_AMP,
            multipliers: [1, 1],
            variant: AmpVariant::default(),
            fee_mode: FeeMode::default(),
        }
    }
}

impl StableSwapParams {
    /// Sets the amplification coefficient.
    #[must_use]
    pub const fn with_amp(mut self, amp: u64) -> Self {
        self.amp = amp;
        self
    }

    /// Sets the per-asset decimal-normalization multipliers.
    #[must_use]
    pub const fn with_multipliers(mut self, multipliers: [u64; 2]) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Sets the amplification variant.
    #[must_use]
    pub const fn with_variant(mut self, variant: AmpVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the fee placement mode.
    #[must_use]
    pub const fn with_fee_mode(mut self, fee_mode: FeeMode) -> Self {
        self.fee_mode = fee_mode;
        self
    }

    /// The amplification coefficient.
    #[must_use]
    pub const fn amp(&self) -> u64 {
        self.amp
    }

    /// The per-asset multipliers, `[multiplier_a, multiplier_b]`.
    #[must_use]
    pub const fn multipliers(&self) -> [u64; 2] {
        self.multipliers
    }

    /// The amplification variant.
    #[must_use]
    pub const fn variant(&self) -> AmpVariant {
        self.variant
    }

    /// The fee placement mode.
    #[must_use]
    pub const fn fee_mode(&self) -> FeeMode {
        self.fee_mode
    }

    /// The amplification product used by the invariant solver.
    #[must_use]
    pub const fn ann(&self) -> u64 {
        self.variant.ann(self.amp)
    }

    fn validate(&self) -> Result<()> {
        if self.amp == 0 {
            return Err(PricingError::InvalidSnapshot(
                "amplification coefficient must be positive",
            ));
        }
        if self.multipliers[0] == 0 || self.multipliers[1] == 0 {
            return Err(PricingError::InvalidSnapshot(
                "asset multipliers must be positive",
            ));
        }
        Ok(())
    }
}

/// The bonding-curve family a pool prices against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveFamily {
    /// Classic `x · y = k` pools.
    ConstantProduct,
    /// Curve-style StableSwap pools.
    StableSwap(StableSwapParams),
    /// Concentrated-liquidity pools. Recognized for interface
    /// completeness; pricing is deliberately unimplemented.
    ConstantLiquidity,
}

/// An immutable record of a pool's two reserves, unit identifiers, and
/// fee configuration.
///
/// Owned by the caller for the duration of one pricing call; the
/// engine holds no state across calls.
///
/// # Examples
///
/// ```
/// use tidepool::snapshot::PoolSnapshot;
/// use tidepool::domain::Unit;
///
/// let pool = PoolSnapshot::constant_product(
///     Unit::lovelace(),
///     Unit::new("cafe"),
///     1_000_000u32,
///     1_000_000u32,
///     30,
/// )
/// .expect("valid snapshot");
/// assert_eq!(pool.volume_fee().get(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    unit_a: Unit,
    unit_b: Unit,
    reserve_a: BigUint,
    reserve_b: BigUint,
    volume_fee: BasisPoints,
    curve: CurveFamily,
}

impl PoolSnapshot {
    /// Creates a constant-product pool snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSnapshot`] if the units are not
    /// distinct or the fee is out of range.
    pub fn constant_product(
        unit_a: Unit,
        unit_b: Unit,
        reserve_a: impl Into<BigUint>,
        reserve_b: impl Into<BigUint>,
        volume_fee: u32,
    ) -> Result<Self> {
        Self::build(
            unit_a,
            unit_b,
            reserve_a.into(),
            reserve_b.into(),
            volume_fee,
            CurveFamily::ConstantProduct,
        )
    }

    /// Creates a StableSwap pool snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSnapshot`] if the units are not
    /// distinct, the fee is out of range, the amplification is zero,
    /// or a multiplier is zero.
    pub fn stable_swap(
        unit_a: Unit,
        unit_b: Unit,
        reserve_a: impl Into<BigUint>,
        reserve_b: impl Into<BigUint>,
        volume_fee: u32,
        params: StableSwapParams,
    ) -> Result<Self> {
        params.validate()?;
        Self::build(
            unit_a,
            unit_b,
            reserve_a.into(),
            reserve_b.into(),
            volume_fee,
            CurveFamily::StableSwap(params),
        )
    }

    /// Creates a constant-liquidity pool snapshot.
    ///
    /// The snapshot itself is valid — indexers can still represent
    /// such pools — but every pricing call against it fails with
    /// [`PricingError::Unimplemented`].
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSnapshot`] if the units are not
    /// distinct or the fee is out of range.
    pub fn constant_liquidity(
        unit_a: Unit,
        unit_b: Unit,
        reserve_a: impl Into<BigUint>,
        reserve_b: impl Into<BigUint>,
        volume_fee: u32,
    ) -> Result<Self> {
        Self::build(
            unit_a,
            unit_b,
            reserve_a.into(),
            reserve_b.into(),
            volume_fee,
            CurveFamily::ConstantLiquidity,
        )
    }

    fn build(
        unit_a: Unit,
        unit_b: Unit,
        reserve_a: BigUint,
        reserve_b: BigUint,
        volume_fee: u32,
        curve: CurveFamily,
    ) -> Result<Self> {
        if unit_a == unit_b {
            return Err(PricingError::InvalidSnapshot(
                "pool units must be distinct",
            ));
        }
        Ok(Self {
            unit_a,
            unit_b,
            reserve_a,
            reserve_b,
            volume_fee: BasisPoints::new(volume_fee)?,
            curve,
        })
    }

    /// The pool's first unit.
    #[must_use]
    pub fn unit_a(&self) -> &Unit {
        &self.unit_a
    }

    /// The pool's second unit.
    #[must_use]
    pub fn unit_b(&self) -> &Unit {
        &self.unit_b
    }

    /// The reserve held for [`unit_a`](Self::unit_a).
    #[must_use]
    pub fn reserve_a(&self) -> &BigUint {
        &self.reserve_a
    }

    /// The reserve held for [`unit_b`](Self::unit_b).
    #[must_use]
    pub fn reserve_b(&self) -> &BigUint {
        &self.reserve_b
    }

    /// The pool's volume fee.
    #[must_use]
    pub fn volume_fee(&self) -> BasisPoints {
        self.volume_fee
    }

    /// The pool's curve family and its parameters.
    #[must_use]
    pub fn curve(&self) -> &CurveFamily {
        &self.curve
    }

    /// Returns `true` if `unit` is one of the pool's two units.
    #[must_use]
    pub fn contains(&self, unit: &Unit) -> bool {
        self.unit_a == *unit || self.unit_b == *unit
    }

    /// Returns the counterpart of `unit` in this pool.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownAsset`] if `unit` is neither of
    /// the pool's units.
    pub fn other_unit(&self, unit: &Unit) -> Result<&Unit> {
        if *unit == self.unit_a {
            Ok(&self.unit_b)
        } else if *unit == self.unit_b {
            Ok(&self.unit_a)
        } else {
            Err(self.unknown_asset(unit))
        }
    }

    /// Builds the [`PricingError::UnknownAsset`] error for `unit`.
    pub(crate) fn unknown_asset(&self, unit: &Unit) -> PricingError {
        PricingError::UnknownAsset {
            unit: unit.clone(),
            unit_a: self.unit_a.clone(),
            unit_b: self.unit_b.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn ada() -> Unit {
        Unit::lovelace()
    }

    fn djed() -> Unit {
        Unit::new("cafe0001")
    }

    #[test]
    fn constant_product_valid() {
        let Ok(pool) = PoolSnapshot::constant_product(ada(), djed(), 1_000u32, 2_000u32, 30)
        else {
            panic!("expected Ok");
        };
        assert_eq!(pool.reserve_a(), &BigUint::from(1_000u32));
        assert_eq!(pool.reserve_b(), &BigUint::from(2_000u32));
        assert_eq!(pool.volume_fee().get(), 30);
        assert_eq!(pool.curve(), &CurveFamily::ConstantProduct);
    }

    #[test]
    fn rejects_identical_units() {
        let result = PoolSnapshot::constant_product(ada(), ada(), 1u32, 1u32, 0);
        assert!(matches!(result, Err(PricingError::InvalidSnapshot(_))));
    }

    #[test]
    fn rejects_fee_at_denominator() {
        let result = PoolSnapshot::constant_product(ada(), djed(), 1u32, 1u32, 10_000);
        assert!(matches!(result, Err(PricingError::InvalidSnapshot(_))));
    }

    #[test]
    fn stable_swap_defaults() {
        let Ok(pool) = PoolSnapshot::stable_swap(
            ada(),
            djed(),
            1_000u32,
            1_000u32,
            0,
            StableSwapParams::default(),
        ) else {
            panic!("expected Ok");
        };
        let CurveFamily::StableSwap(params) = pool.curve() else {
            panic!("expected stable swap curve");
        };
        assert_eq!(params.amp(), DEFAULT_AMP);
        assert_eq!(params.multipliers(), [1, 1]);
        assert_eq!(params.variant(), AmpVariant::Standard);
        assert_eq!(params.fee_mode(), FeeMode::OnInput);
    }

    #[test]
    fn stable_swap_rejects_zero_amp() {
        let result = PoolSnapshot::stable_swap(
            ada(),
            djed(),
            1u32,
            1u32,
            0,
            StableSwapParams::default().with_amp(0),
        );
        assert!(matches!(result, Err(PricingError::InvalidSnapshot(_))));
    }

    #[test]
    fn stable_swap_rejects_zero_multiplier() {
        let result = PoolSnapshot::stable_swap(
            ada(),
            djed(),
            1u32,
            1u32,
            0,
            StableSwapParams::default().with_multipliers([1, 0]),
        );
        assert!(matches!(result, Err(PricingError::InvalidSnapshot(_))));
    }

    #[test]
    fn ann_variants_differ() {
        assert_eq!(AmpVariant::Standard.ann(75), 300);
        assert_eq!(AmpVariant::Common.ann(75), 150);
        assert_eq!(StableSwapParams::default().ann(), 300);
        assert_eq!(
            StableSwapParams::default()
                .with_variant(AmpVariant::Common)
                .ann(),
            150
        );
    }

    #[test]
    fn contains_and_other_unit() {
        let Ok(pool) = PoolSnapshot::constant_product(ada(), djed(), 1u32, 1u32, 0) else {
            panic!("expected Ok");
        };
        assert!(pool.contains(&ada()));
        assert!(pool.contains(&djed()));
        assert!(!pool.contains(&Unit::new("ffff")));
        assert_eq!(pool.other_unit(&ada()), Ok(&djed()));
        assert_eq!(pool.other_unit(&djed()), Ok(&ada()));
        assert!(matches!(
            pool.other_unit(&Unit::new("ffff")),
            Err(PricingError::UnknownAsset { .. })
        ));
    }

    #[test]
    fn constant_liquidity_snapshot_constructs() {
        let result = PoolSnapshot::constant_liquidity(ada(), djed(), 1u32, 1u32, 0);
        assert!(result.is_ok());
    }
}
