//! The result of a pricing call.

use serde::{Deserialize, Serialize};

use super::{AssetBundle, PriceImpact};

/// A fully computed quote: the opposite swap leg plus its price
/// impact.
///
/// The asset bundle always contains exactly one unit — the output
/// asset for [`get_amount_out`](crate::traits::PricingPool::get_amount_out),
/// or the required input asset for
/// [`get_amount_in`](crate::traits::PricingPool::get_amount_in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    asset: AssetBundle,
    price_impact: PriceImpact,
}

impl SwapQuote {
    /// Creates a quote from a computed single-asset leg and impact.
    pub(crate) fn new(asset: AssetBundle, price_impact: PriceImpact) -> Self {
        Self {
            asset,
            price_impact,
        }
    }

    /// The computed swap leg (exactly one unit).
    #[must_use]
    pub fn asset(&self) -> &AssetBundle {
        &self.asset
    }

    /// The price impact of the quoted trade.
    #[must_use]
    pub fn price_impact(&self) -> PriceImpact {
        self.price_impact
    }

    /// Consumes the quote, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (AssetBundle, PriceImpact) {
        (self.asset, self.price_impact)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Unit;

    #[test]
    fn accessors() {
        let leg = AssetBundle::single(Unit::lovelace(), 100u32);
        let quote = SwapQuote::new(leg.clone(), PriceImpact::ZERO);
        assert_eq!(quote.asset(), &leg);
        assert!(quote.price_impact().is_zero());
    }

    #[test]
    fn into_parts() {
        let leg = AssetBundle::single(Unit::lovelace(), 100u32);
        let (asset, impact) = SwapQuote::new(leg.clone(), PriceImpact::ZERO).into_parts();
        assert_eq!(asset, leg);
        assert!(impact.is_zero());
    }
}
