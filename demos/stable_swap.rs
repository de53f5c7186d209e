//! StableSwap pricing example (Curve / WingRiders style).
//!
//! Demonstrates the low-slippage behaviour of the StableSwap
//! invariant and the two amplification variants.
//!
//! # Run
//!
//! ```bash
//! cargo run --example stable_swap
//! ```

use tidepool::prelude::*;

fn main() -> Result<()> {
    println!("=== StableSwap (Curve invariant) ===\n");

    let usdc = Unit::new("aaaa0001");
    let usdt = Unit::new("bbbb0002");
    let input = AssetBundle::single(usdc.clone(), 50_000u32);

    // ── 1. Standard variant, default amp = 75 ───────────────────────────
    let standard = PoolSnapshot::stable_swap(
        usdc.clone(),
        usdt.clone(),
        1_000_000u64,
        1_000_000u64,
        30,
        StableSwapParams::default(),
    )?;
    let quote = CurvePricing::for_pool(&standard).get_amount_out(&input)?;
    println!("Standard variant (ann = amp·n^n):");
    println!("  in:  {input}");
    println!("  out: {}", quote.asset());

    // ── 2. Common variant, as used by WingRiders ────────────────────────
    let common = PoolSnapshot::stable_swap(
        usdc.clone(),
        usdt.clone(),
        1_000_000u64,
        1_000_000u64,
        30,
        StableSwapParams::default().with_variant(AmpVariant::Common),
    )?;
    let quote = CurvePricing::for_pool(&common).get_amount_out(&input)?;
    println!("\nCommon variant (ann = amp·n):");
    println!("  out: {}", quote.asset());

    // ── 3. Compare with constant product at the same reserves ──────────
    let xyk = PoolSnapshot::constant_product(
        usdc.clone(),
        usdt.clone(),
        1_000_000u64,
        1_000_000u64,
        30,
    )?;
    let quote = CurvePricing::for_pool(&xyk).get_amount_out(&input)?;
    println!("\nConstant product at the same reserves:");
    println!("  out: {}", quote.asset());

    // ── 4. Fee charged on the output side instead ───────────────────────
    let fee_on_output = PoolSnapshot::stable_swap(
        usdc,
        usdt,
        1_000_000u64,
        1_000_000u64,
        30,
        StableSwapParams::default().with_fee_mode(FeeMode::OnOutput),
    )?;
    let quote = CurvePricing::for_pool(&fee_on_output).get_amount_out(&input)?;
    println!("\nFee on output:");
    println!("  out: {}", quote.asset());

    Ok(())
}
