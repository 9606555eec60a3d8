//! Router encoding example: from snapshots to submit-ready calldata.
//!
//! Demonstrates a two-hop, mixed-curve route (ETH → USDC on a constant
//! product pair, USDC → DAI on a stable pair), encoding an exact-input
//! swap paid in native ETH, an exact-output swap paid out in native ETH
//! through `multicall`, and the fee-on-transfer restriction.
//!
//! # Run
//!
//! ```bash
//! cargo run --example router
//! ```

use alloy_primitives::{Address, U256};
use multicurve_sdk::constants::A_PRECISION;
use multicurve_sdk::prelude::*;

const ONE_E18: u128 = 1_000_000_000_000_000_000;
const ONE_E6: u128 = 1_000_000;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== Multi-curve router calls ===\n");

    // ── 1. Define tokens and the native currency ────────────────────────
    let dai = Token::parse(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F", 18)?.with_symbol("DAI");
    let usdc = Token::parse(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)?.with_symbol("USDC");
    let weth = Token::parse(1, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18)?.with_symbol("WETH");
    let eth = NativeCurrency::new(weth.clone(), "ETH", "Ether");
    let recipient = Address::repeat_byte(0xab);

    // ── 2. Build both pairs from ledger snapshots ───────────────────────
    let snapshots = [
        PairSnapshot::constant_product(
            (usdc.clone(), weth.clone()),
            (U256::from(20_000_000 * ONE_E6), U256::from(10_000 * ONE_E18)),
            3_000,
        )?,
        PairSnapshot::stable(
            (dai.clone(), usdc.clone()),
            (U256::from(5_000_000 * ONE_E18), U256::from(5_000_000 * ONE_E6)),
            400,
            U256::from(200 * A_PRECISION),
        )?,
    ];
    let pairs = PairFactory::from_snapshots(&snapshots)?;
    println!("Built {} pairs", pairs.len());

    // ── 3. Route ETH → USDC → DAI ───────────────────────────────────────
    let route = Route::new(pairs.clone(), eth.clone(), dai.clone())?;
    let path: Vec<String> = route.path().iter().map(ToString::to_string).collect();
    let curves: Vec<String> = route.curve_ids().iter().map(ToString::to_string).collect();
    println!("\nPath:        {}", path.join(" → "));
    println!("Curves:      {}", curves.join(", "));
    println!("Mid price:   {}", route.mid_price()?);

    // ── 4. Exact input: sell 5 ETH, native value attached ───────────────
    let trade = Trade::exact_in(route, CurrencyAmount::from_raw(eth.clone(), 5 * ONE_E18))?;
    let options = SwapOptions::new(recipient).with_allowed_slippage(Percent::from_bps(30));
    let call = SwapRouter::swap_call_parameters(&trade, &options)?;

    println!("\n--- Sell 5 ETH for DAI ---");
    println!("  Output:      {} DAI", trade.output_amount().to_exact());
    println!("  Impact:      {}", trade.price_impact());
    println!("  Method:      {}", call.method_name());
    println!("  Value:       {}", call.value());
    println!("  Calldata:    {}", call.calldata());
    println!("{}", serde_json::to_string_pretty(&call)?);

    // ── 5. Exact output: buy 2 ETH, unwrapped through multicall ─────────
    let reverse: Vec<Pair> = pairs.into_iter().rev().collect();
    let route = Route::new(reverse, dai.clone(), eth.clone())?;
    let trade = Trade::exact_out(route, CurrencyAmount::from_raw(eth, 2 * ONE_E18))?;
    let call = SwapRouter::swap_call_parameters(&trade, &options)?;

    println!("\n--- Buy 2 ETH with DAI ---");
    println!("  Input:       {} DAI", trade.input_amount().to_exact());
    println!(
        "  Maximum in:  {} DAI",
        trade.maximum_amount_in(options.allowed_slippage())?.to_exact()
    );
    println!("  Method:      {}", call.method_name());
    println!("  Value:       {}", call.value());
    println!("  Calls:       {:?}", call.args());

    // ── 6. Fee-on-transfer tokens only trade exact input ────────────────
    let taxed = options.with_fee_on_transfer(true);
    match SwapRouter::swap_call_parameters(&trade, &taxed) {
        Err(AmmError::FeeOnTransferExactOutput) => {
            println!("\nFee-on-transfer exact output rejected, as expected");
        }
        other => println!("\nUnexpected result: {other:?}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
