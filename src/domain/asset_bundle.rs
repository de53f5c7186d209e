//! Immutable multi-asset value bundles.

use core::fmt;
use std::collections::BTreeMap;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::Unit;
use crate::error::{PricingError, Result};

/// An immutable mapping from asset unit to non-negative integer
/// quantity.
///
/// A bundle is the value type all pricing math operates on. Swap legs
/// must contain exactly one unit — the sole-entry accessors
/// [`unit`](Self::unit) and [`quantity`](Self::quantity) enforce this.
/// Multi-asset bundles are only used to describe a pool's composite
/// holdings.
///
/// Entries iterate in unit order: `lovelace` first, then policy-id
/// units lexicographically, matching on-chain value encoding. The
/// indexed accessors [`unit_at`](Self::unit_at) and
/// [`quantity_at`](Self::quantity_at) address that stable order.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use tidepool::domain::{AssetBundle, Unit};
///
/// let leg = AssetBundle::single(Unit::lovelace(), 10_000u32);
/// assert_eq!(leg.unit().expect("one entry"), &Unit::lovelace());
/// assert_eq!(leg.quantity().expect("one entry"), &BigUint::from(10_000u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetBundle(BTreeMap<Unit, BigUint>);

impl AssetBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a bundle holding a single asset.
    pub fn single(unit: Unit, quantity: impl Into<BigUint>) -> Self {
        let mut root = BTreeMap::new();
        root.insert(unit, quantity.into());
        Self(root)
    }

    /// Adds an entry, returning the extended bundle. An existing entry
    /// for the same unit is replaced.
    #[must_use]
    pub fn with(mut self, unit: Unit, quantity: impl Into<BigUint>) -> Self {
        self.0.insert(unit, quantity.into());
        self
    }

    /// Number of distinct units in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bundle holds no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sole unit identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] unless the bundle
    /// contains exactly one entry.
    pub fn unit(&self) -> Result<&Unit> {
        self.sole_entry().map(|(unit, _)| unit)
    }

    /// Returns the sole quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] unless the bundle
    /// contains exactly one entry.
    pub fn quantity(&self) -> Result<&BigUint> {
        self.sole_entry().map(|(_, quantity)| quantity)
    }

    /// Returns the unit at the given iteration position, if any.
    #[must_use]
    pub fn unit_at(&self, index: usize) -> Option<&Unit> {
        self.0.keys().nth(index)
    }

    /// Returns the quantity at the given iteration position, if any.
    #[must_use]
    pub fn quantity_at(&self, index: usize) -> Option<&BigUint> {
        self.0.values().nth(index)
    }

    /// Returns the quantity for `unit`, or zero when absent.
    #[must_use]
    pub fn get(&self, unit: &Unit) -> BigUint {
        self.0.get(unit).cloned().unwrap_or_else(BigUint::zero)
    }

    /// Iterates entries in stable unit order.
    pub fn iter(&self) -> impl Iterator<Item = (&Unit, &BigUint)> {
        self.0.iter()
    }

    fn sole_entry(&self) -> Result<(&Unit, &BigUint)> {
        if self.0.len() != 1 {
            return Err(PricingError::InvalidInput { len: self.0.len() });
        }
        // len == 1 guarantees the iterator yields an entry.
        self.0
            .iter()
            .next()
            .ok_or(PricingError::InvalidInput { len: 0 })
    }
}

impl FromIterator<(Unit, BigUint)> for AssetBundle {
    fn from_iter<I: IntoIterator<Item = (Unit, BigUint)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for AssetBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (unit, quantity) in &self.0 {
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{quantity} {unit}")?;
            first = false;
        }
        Ok(())
    }
}
