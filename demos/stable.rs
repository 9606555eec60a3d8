//! Stable pair example (Curve / Saddle StableSwap style).
//!
//! Demonstrates a DAI/USDC pair with mixed decimals: building it from a
//! snapshot, quoting both directions, checking that an exact-output quote
//! asks for the smallest sufficient input, and comparing slippage against
//! a constant-product pair holding the same reserves.
//!
//! # Run
//!
//! ```bash
//! cargo run --example stable
//! ```

use alloy_primitives::U256;
use multicurve_sdk::constants::A_PRECISION;
use multicurve_sdk::prelude::*;

const ONE_E18: u128 = 1_000_000_000_000_000_000;
const ONE_E6: u128 = 1_000_000;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Stable pair (amplified StableSwap) ===\n");

    // ── 1. Define tokens ────────────────────────────────────────────────
    let dai = Token::parse(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F", 18)?.with_symbol("DAI");
    let usdc = Token::parse(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)?.with_symbol("USDC");

    println!("Token 0: {dai} ({} decimals)", dai.decimals());
    println!("Token 1: {usdc} ({} decimals)", usdc.decimals());

    // ── 2. Snapshot 1M / 1M with A = 200 and a 0.04% fee ────────────────
    let reserves = (U256::from(1_000_000 * ONE_E18), U256::from(1_000_000 * ONE_E6));
    let amplification = U256::from(200 * A_PRECISION);
    let snapshot =
        PairSnapshot::stable((dai.clone(), usdc.clone()), reserves, 400, amplification)?;
    let stable = PairFactory::from_snapshot(&snapshot)?;
    println!("\nAmplification: {amplification} (A = 200, scaled by {A_PRECISION})");
    println!("Spot price (USDC per DAI): {}", stable.spot_price(&dai)?.to_fixed(6));

    // ── 3. Quote exact input: sell 100 000 USDC ─────────────────────────
    let sold = CurrencyAmount::from_raw(usdc.clone(), 100_000 * ONE_E6);
    let bought = stable.quote_output_for_input(&sold)?;
    println!("\n--- Sell {} USDC ---", sold.to_exact());
    println!("  Amount out:  {} DAI", bought.to_exact());

    // ── 4. Quote exact output for the same DAI ──────────────────────────
    let needed = stable.quote_input_for_output(&bought)?;
    println!("\n--- Buy {} DAI ---", bought.to_exact());
    println!("  Amount in:   {} USDC", needed.to_exact());
    println!("  Same input:  {}", needed == sold);

    // ── 5. Compare with a constant-product pair on the same reserves ────
    let flat = PairFactory::from_snapshot(&PairSnapshot::constant_product(
        (dai.clone(), usdc),
        reserves,
        400,
    )?)?;
    let flat_out = flat.quote_output_for_input(&sold)?;
    println!("\n--- Same sale on x · y = k ---");
    println!("  Amount out:  {} DAI", flat_out.to_exact());
    println!(
        "  Extra DAI from the stable curve: {}",
        bought.sub(&flat_out)?.to_exact()
    );

    // ── 6. Price impact of the stable trade ─────────────────────────────
    let route = Route::new(vec![stable], sold.currency().clone(), dai)?;
    let trade = Trade::exact_in(route, sold)?;
    println!("\nPrice impact: {}", trade.price_impact());

    println!("\n=== Done ===");
    Ok(())
}
