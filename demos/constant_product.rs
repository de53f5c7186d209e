//! Constant Product pricing example (Uniswap V2 / Minswap style).
//!
//! Demonstrates quoting swap outputs, required inputs, and price
//! impact against a constant-product pool snapshot.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use tidepool::prelude::*;

fn main() -> Result<()> {
    println!("=== Constant Product (x·y = k) ===\n");

    // ── 1. Capture a pool snapshot ──────────────────────────────────────
    //    1M ADA / 1M DJED, 0.30% volume fee.
    let pool = PoolSnapshot::constant_product(
        Unit::lovelace(),
        Unit::new("cafe0001"),
        1_000_000u64,
        1_000_000u64,
        30,
    )?;
    println!(
        "Pool: {} {} / {} {}, fee = {}",
        pool.reserve_a(),
        pool.unit_a(),
        pool.reserve_b(),
        pool.unit_b(),
        pool.volume_fee()
    );

    let pricing = CurvePricing::for_pool(&pool);

    // ── 2. Quote an output for a fixed input ────────────────────────────
    let input = AssetBundle::single(Unit::lovelace(), 10_000u32);
    let quote = pricing.get_amount_out(&input)?;
    println!("\nSwap in:  {input}");
    println!("Swap out: {}", quote.asset());
    println!("Price impact: {:.4}%", quote.price_impact().get() * 100.0);

    // ── 3. Quote the input needed for a desired output ──────────────────
    let desired = AssetBundle::single(Unit::new("cafe0001"), 9_871u32);
    let inverse = pricing.get_amount_in(&desired)?;
    println!("\nDesired out: {desired}");
    println!("Needed in:   {}", inverse.asset());

    // ── 4. Draining a reserve is refused ────────────────────────────────
    let whole_reserve = AssetBundle::single(Unit::new("cafe0001"), 1_000_000u64);
    match pricing.get_amount_in(&whole_reserve) {
        Err(PricingError::InsufficientLiquidity { requested, reserve }) => {
            println!("\nRefused: requested {requested} of a {reserve} reserve");
        }
        other => println!("\nUnexpected: {other:?}"),
    }

    Ok(())
}
