//! Constant Product pair example (Uniswap V2 style).
//!
//! Demonstrates building an `x · y = k` pair from a ledger snapshot,
//! quoting in both directions, and sizing a single-hop trade with
//! slippage bounds.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use alloy_primitives::U256;
use multicurve_sdk::prelude::*;

const ONE_E18: u128 = 1_000_000_000_000_000_000;
const ONE_E6: u128 = 1_000_000;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product pair (x · y = k) ===\n");

    // ── 1. Define tokens ────────────────────────────────────────────────
    let usdc = Token::parse(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)?
        .with_symbol("USDC")
        .with_name("USD Coin");
    let weth = Token::parse(1, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18)?
        .with_symbol("WETH")
        .with_name("Wrapped Ether");

    println!("Token 0: {usdc} ({} decimals)", usdc.decimals());
    println!("Token 1: {weth} ({} decimals)", weth.decimals());

    // ── 2. Snapshot a 20M USDC / 10k WETH pair with a 0.30% fee ─────────
    let snapshot = PairSnapshot::constant_product(
        (usdc.clone(), weth.clone()),
        (U256::from(20_000_000 * ONE_E6), U256::from(10_000 * ONE_E18)),
        3_000,
    )?;
    println!("\nSnapshot: curve {}, fee {} ppm", snapshot.curve_id(), snapshot.swap_fee());

    // ── 3. Build the pair via the factory ───────────────────────────────
    let pair = PairFactory::from_snapshot(&snapshot)?;
    println!("Reserve 0:   {} USDC", pair.reserve0().to_exact());
    println!("Reserve 1:   {} WETH", pair.reserve1().to_exact());

    // ── 4. Spot price, fee excluded ─────────────────────────────────────
    let spot = pair.spot_price(&weth)?;
    println!("\nSpot price (USDC per WETH): {}", spot.to_fixed(2));

    // ── 5. Quote exact input: sell 10 WETH ──────────────────────────────
    let sold = CurrencyAmount::from_raw(weth.clone(), 10 * ONE_E18);
    let bought = pair.quote_output_for_input(&sold)?;
    println!("\n--- Sell {} WETH ---", sold.to_exact());
    println!("  Amount out:  {} USDC", bought.to_exact());

    // ── 6. Quote exact output: buy 50 000 USDC ──────────────────────────
    let wanted = CurrencyAmount::from_raw(usdc.clone(), 50_000 * ONE_E6);
    let needed = pair.quote_input_for_output(&wanted)?;
    println!("\n--- Buy {} USDC ---", wanted.to_exact());
    println!("  Amount in:   {} WETH", needed.to_exact());

    // ── 7. Size a trade and derive its bounds ───────────────────────────
    let route = Route::new(vec![pair], weth.clone(), usdc)?;
    let trade = Trade::exact_in(route, sold)?;
    let slippage = Percent::from_bps(50);

    println!("\n--- Trade: exact input over one hop ---");
    println!("  Output:      {} USDC", trade.output_amount().to_exact());
    println!("  Exec. price: {}", trade.execution_price().to_fixed(2));
    println!("  Impact:      {}%", trade.price_impact().to_fixed(4, Rounding::Up));
    println!(
        "  Minimum out: {} USDC at {slippage}",
        trade.minimum_amount_out(&slippage)?.to_exact()
    );

    println!("\n=== Done ===");
    Ok(())
}
