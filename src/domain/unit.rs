//! Asset unit identifiers.

use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

/// The unit identifier of the chain's native currency.
const LOVELACE: &str = "lovelace";

/// An asset unit identifier: the concatenated policy id and
/// hex-encoded asset name, or the special `lovelace` unit for the
/// native currency.
///
/// Units order the way on-chain asset bundles do: `lovelace` sorts
/// before every policy-id unit, and policy-id units sort
/// lexicographically among themselves.
///
/// # Examples
///
/// ```
/// use tidepool::domain::Unit;
///
/// let ada = Unit::lovelace();
/// let djed = Unit::new("8db269c3ec630e06ae29f74bc39edd1f87c819f1056206e879a1cd61446a65644d6963726f555344");
/// assert!(ada < djed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(String);

impl Unit {
    /// Creates a unit from a policy + name string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The native-currency unit.
    #[must_use]
    pub fn lovelace() -> Self {
        Self(LOVELACE.to_string())
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the native-currency unit.
    #[must_use]
    pub fn is_lovelace(&self) -> bool {
        self.0 == LOVELACE
    }
}

impl Ord for Unit {
    fn cmp(&self, other: &Self) -> Ordering {
        // lovelace first, then lexicographic by identifier.
        (!self.is_lovelace(), &self.0).cmp(&(!other.is_lovelace(), &other.0))
    }
}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
