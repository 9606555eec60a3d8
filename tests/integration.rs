//! Integration tests exercising the full flow from pair snapshots to
//! router calldata.
//!
//! These tests verify end-to-end behavior through the public API:
//! snapshot decoding and validation, route pricing, trade sizing,
//! slippage bounds and router encoding.
//!
//! These tests require both curve features to be enabled.

#![cfg(all(feature = "constant-product", feature = "stable"))]
#![allow(clippy::panic)]

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use multicurve_sdk::config::{PairSnapshot, SwapOptions};
use multicurve_sdk::domain::{
    Currency, CurrencyAmount, CurveId, NativeCurrency, Percent, Token, TradeType,
};
use multicurve_sdk::entities::{Pair, Route, Trade};
use multicurve_sdk::error::AmmError;
use multicurve_sdk::factory::PairFactory;
use multicurve_sdk::router::{to_hex, IMultiCurveRouter, SwapRouter, ROUTER_CUSTODY};

const ONE_E18: u128 = 1_000_000_000_000_000_000;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok(byte: u8, decimals: u8) -> Token {
    Token::new(1, Address::repeat_byte(byte), decimals)
}

fn tok_a() -> Token {
    tok(0x0a, 18).with_symbol("A")
}

fn tok_b() -> Token {
    tok(0x0b, 18).with_symbol("B")
}

fn tok_c() -> Token {
    tok(0x0c, 18).with_symbol("C")
}

fn usdc() -> Token {
    tok(0x0d, 6).with_symbol("USDC")
}

fn dai() -> Token {
    tok(0x0e, 18).with_symbol("DAI")
}

fn eth() -> NativeCurrency {
    NativeCurrency::new(tok_a(), "ETH", "Ether")
}

fn recipient() -> Address {
    Address::repeat_byte(0xfe)
}

fn cp_pair(a: Token, b: Token, ra: u128, rb: u128) -> Pair {
    let Ok(snapshot) =
        PairSnapshot::constant_product((a, b), (U256::from(ra), U256::from(rb)), 3_000)
    else {
        panic!("valid snapshot");
    };
    let Ok(pair) = PairFactory::from_snapshot(&snapshot) else {
        panic!("pair built");
    };
    pair
}

fn two_hop_route() -> Route {
    let Ok(route) = Route::new(
        vec![
            cp_pair(tok_a(), tok_b(), 1_000_000, 950_000),
            cp_pair(tok_b(), tok_c(), 2_000_000, 2_100_000),
        ],
        tok_a(),
        tok_c(),
    ) else {
        panic!("valid route");
    };
    route
}

fn trade(route: Route, amount: CurrencyAmount, trade_type: TradeType) -> Trade {
    let Ok(t) = Trade::new(route, amount, trade_type) else {
        panic!("trade sized");
    };
    t
}

// ===========================================================================
// Suite 1: Snapshot to Pair
// ===========================================================================

#[test]
fn snapshot_json_builds_stable_pair() {
    let json = serde_json::json!({
        "token0": { "chainId": 1, "address": "0x0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d", "decimals": 6 },
        "token1": { "chainId": 1, "address": "0x0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e", "decimals": 18 },
        "curveId": 1,
        "reserve0": "0xe8d4a51000",
        "reserve1": "0xd3c21bcecceda1000000",
        "swapFee": 0,
        "amplificationCoefficient": "0x4e20"
    });
    let Ok(snapshot) = serde_json::from_value::<PairSnapshot>(json) else {
        panic!("decodable snapshot");
    };
    let Ok(pair) = PairFactory::from_snapshot(&snapshot) else {
        panic!("pair built");
    };
    assert_eq!(pair.curve_id(), CurveId::Stable);
    assert_eq!(pair.amplification_coefficient(), Some(U256::from(20_000u64)));
    assert_eq!(pair.reserve0().raw(), U256::from(1_000_000_000_000u64));
    assert_eq!(pair.reserve1().raw(), U256::from(1_000_000 * ONE_E18));
}

#[test]
fn invalid_snapshot_is_rejected_by_factory() {
    let json = serde_json::json!({
        "token0": { "chainId": 1, "address": "0x0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a", "decimals": 18 },
        "token1": { "chainId": 1, "address": "0x0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b", "decimals": 18 },
        "curveId": 1,
        "reserve0": "0x0f4240",
        "reserve1": "0x0f4240",
        "swapFee": 3000
    });
    let Ok(snapshot) = serde_json::from_value::<PairSnapshot>(json) else {
        panic!("decodable snapshot");
    };
    let Err(AmmError::InvalidConfiguration(_)) = PairFactory::from_snapshot(&snapshot) else {
        panic!("stable snapshot without amplification must fail");
    };
}

// ===========================================================================
// Suite 2: Route Pricing
// ===========================================================================

#[test]
fn two_hop_mid_price_composes_hops() {
    let route = two_hop_route();
    let Ok(mid) = route.mid_price() else {
        panic!("priced route");
    };
    let Ok(hop1) = route.pairs()[0].spot_price(&tok_a()) else {
        panic!("hop 1 price");
    };
    let Ok(hop2) = route.pairs()[1].spot_price(&tok_b()) else {
        panic!("hop 2 price");
    };
    let Ok(composed) = hop1.multiply(&hop2) else {
        panic!("chained");
    };
    assert_eq!(mid.as_fraction(), composed.as_fraction());
    assert_eq!(mid.to_fixed(4), "0.9975");
    assert_eq!(mid.base(), &Currency::from(tok_a()));
    assert_eq!(mid.quote_currency(), &Currency::from(tok_c()));
}

#[test]
fn mixed_curve_route() {
    let stable_snapshot = PairSnapshot::stable(
        (usdc(), dai()),
        (U256::from(1_000_000_000_000u64), U256::from(1_000_000 * ONE_E18)),
        0,
        U256::from(20_000u64),
    );
    let Ok(stable_snapshot) = stable_snapshot else {
        panic!("valid snapshot");
    };
    let cp_snapshot = PairSnapshot::constant_product(
        (tok_c(), dai()),
        (U256::from(1_000 * ONE_E18), U256::from(2_000_000 * ONE_E18)),
        3_000,
    );
    let Ok(cp_snapshot) = cp_snapshot else {
        panic!("valid snapshot");
    };
    let Ok(pairs) = PairFactory::from_snapshots([&stable_snapshot, &cp_snapshot]) else {
        panic!("pairs built");
    };
    let Ok(route) = Route::new(pairs, usdc(), tok_c()) else {
        panic!("valid route");
    };
    assert_eq!(route.curve_ids(), vec![CurveId::Stable, CurveId::ConstantProduct]);

    let t = trade(
        route,
        CurrencyAmount::from_raw(usdc(), 1_000_000_000),
        TradeType::ExactInput,
    );
    // 1000 USDC buys just under 1000 DAI, then roughly half a C.
    assert!(t.output_amount().raw() > U256::from(ONE_E18 / 2 - ONE_E18 / 100));
    assert!(t.output_amount().raw() < U256::from(ONE_E18 / 2));
}

#[test]
fn stable_quote_matches_contract_math() {
    let Ok(snapshot) = PairSnapshot::stable(
        (usdc(), dai()),
        (U256::from(1_000_000_000_000u64), U256::from(1_000_000 * ONE_E18)),
        0,
        U256::from(20_000u64),
    ) else {
        panic!("valid snapshot");
    };
    let Ok(pair) = PairFactory::from_snapshot(&snapshot) else {
        panic!("pair built");
    };
    let Ok(out) = pair.quote_output_for_input(&CurrencyAmount::from_raw(usdc(), 1_000_000_000))
    else {
        panic!("quoted");
    };
    assert_eq!(out.raw(), U256::from(999_995_024_895_447_954_850u128));
    assert_eq!(out.currency(), &Currency::from(dai()));
}

#[test]
fn zero_output_reserve_is_insufficient_liquidity() {
    let Ok(pair) = Pair::new(
        (tok_a(), tok_b()),
        (U256::from(1_000_000u64), U256::ZERO),
        3_000,
        multicurve_sdk::curves::ConstantProductCurve,
    ) else {
        panic!("valid pair");
    };
    let Err(AmmError::InsufficientLiquidity { token_in, token_out }) =
        pair.quote_output_for_input(&CurrencyAmount::from_raw(tok_a(), 1_000))
    else {
        panic!("expected InsufficientLiquidity");
    };
    assert_eq!(token_in, tok_a().address());
    assert_eq!(token_out, tok_b().address());
}

// ===========================================================================
// Suite 3: Trade Sizing and Slippage
// ===========================================================================

#[test]
fn zero_slippage_bounds_equal_quotes() {
    let zero = Percent::zero();
    for t in [
        trade(two_hop_route(), CurrencyAmount::from_raw(tok_a(), 1_000), TradeType::ExactInput),
        trade(two_hop_route(), CurrencyAmount::from_raw(tok_c(), 989), TradeType::ExactOutput),
    ] {
        let (Ok(min_out), Ok(max_in)) = (t.minimum_amount_out(&zero), t.maximum_amount_in(&zero))
        else {
            panic!("bounds computed");
        };
        assert_eq!(&min_out, t.output_amount());
        assert_eq!(&max_in, t.input_amount());
    }
}

#[test]
fn exact_output_of_exact_input_never_costs_more() {
    for amount in [1_000u128, 12_345, 250_000] {
        let forward = trade(
            two_hop_route(),
            CurrencyAmount::from_raw(tok_a(), amount),
            TradeType::ExactInput,
        );
        let back = trade(
            two_hop_route(),
            forward.output_amount().clone(),
            TradeType::ExactOutput,
        );
        assert!(back.input_amount().raw() <= U256::from(amount));
    }
}

#[test]
fn two_hop_trade_numbers() {
    let t = trade(
        two_hop_route(),
        CurrencyAmount::from_raw(tok_a(), 1_000),
        TradeType::ExactInput,
    );
    assert_eq!(t.output_amount().raw(), U256::from(989u16));
    let Ok(impact) = Percent::new(8u8, 997u16) else {
        panic!("valid percent");
    };
    assert_eq!(t.price_impact(), &impact);
    let Ok(min_out) = t.minimum_amount_out(&Percent::from_bps(100)) else {
        panic!("bound computed");
    };
    assert_eq!(min_out.raw(), U256::from(979u16));
}

// ===========================================================================
// Suite 4: Router Encoding
// ===========================================================================

#[test]
fn native_input_single_call_carries_value() {
    let Ok(route) = Route::new(
        vec![cp_pair(tok_a(), tok_b(), 1_000_000, 950_000)],
        eth(),
        tok_b(),
    ) else {
        panic!("valid route");
    };
    let t = trade(route, CurrencyAmount::from_raw(eth(), 1_000), TradeType::ExactInput);
    let options = SwapOptions::new(recipient()).with_allowed_slippage(Percent::zero());
    let Ok(params) = SwapRouter::swap_call_parameters(&t, &options) else {
        panic!("encoded");
    };
    assert_eq!(params.method_name(), "swapExactForVariable");
    assert_eq!(params.value(), to_hex(U256::from(1_000u16)));
    assert_eq!(params.value(), "0x03e8");

    let Ok(call) =
        IMultiCurveRouter::swapExactForVariableCall::abi_decode(params.calldata(), true)
    else {
        panic!("decodable calldata");
    };
    assert_eq!(call.amountOutMin, U256::from(946u16));
    assert_eq!(call.to, recipient());
}

#[test]
fn native_output_batches_swap_and_unwrap() {
    let Ok(route) = Route::new(
        vec![cp_pair(tok_a(), tok_b(), 1_000_000, 950_000)],
        tok_b(),
        eth(),
    ) else {
        panic!("valid route");
    };
    let t = trade(route, CurrencyAmount::from_raw(tok_b(), 1_000), TradeType::ExactInput);
    let options = SwapOptions::new(recipient());
    let Ok(params) = SwapRouter::swap_call_parameters(&t, &options) else {
        panic!("encoded");
    };
    assert_eq!(params.method_name(), "multicall");
    assert_eq!(params.value(), "0x00");

    let Ok(batch) = IMultiCurveRouter::multicallCall::abi_decode(params.calldata(), true) else {
        panic!("decodable multicall");
    };
    assert_eq!(batch.data.len(), 2);
    let Ok(swap) = IMultiCurveRouter::swapExactForVariableCall::abi_decode(&batch.data[0], true)
    else {
        panic!("swap first");
    };
    let Ok(unwrap) = IMultiCurveRouter::unwrapWETHCall::abi_decode(&batch.data[1], true) else {
        panic!("unwrap second");
    };
    assert_eq!(swap.to, ROUTER_CUSTODY);
    assert_eq!(unwrap.recipient, recipient());
    assert_eq!(unwrap.amountMinimum, swap.amountOutMin);
}

#[test]
fn full_flow_from_json_to_calldata() {
    let snapshots: Vec<PairSnapshot> = [
        PairSnapshot::constant_product(
            (tok_a(), tok_b()),
            (U256::from(1_000_000u64), U256::from(950_000u64)),
            3_000,
        ),
        PairSnapshot::constant_product(
            (tok_b(), tok_c()),
            (U256::from(2_000_000u64), U256::from(2_100_000u64)),
            3_000,
        ),
    ]
    .into_iter()
    .map(|s| {
        let Ok(s) = s else {
            panic!("valid snapshot");
        };
        let Ok(json) = serde_json::to_string(&s) else {
            panic!("serializable");
        };
        let Ok(back) = serde_json::from_str::<PairSnapshot>(&json) else {
            panic!("decodable");
        };
        back
    })
    .collect();

    let Ok(pairs) = PairFactory::from_snapshots(&snapshots) else {
        panic!("pairs built");
    };
    let Ok(route) = Route::new(pairs, tok_a(), tok_c()) else {
        panic!("valid route");
    };
    let t = trade(route, CurrencyAmount::from_raw(tok_c(), 989), TradeType::ExactOutput);
    let options = SwapOptions::new(recipient()).with_allowed_slippage(Percent::from_bps(100));
    let Ok(params) = SwapRouter::swap_call_parameters(&t, &options) else {
        panic!("encoded");
    };
    assert_eq!(params.method_name(), "swapVariableForExact");

    let Ok(call) =
        IMultiCurveRouter::swapVariableForExactCall::abi_decode(params.calldata(), true)
    else {
        panic!("decodable calldata");
    };
    assert_eq!(call.amountOut, U256::from(989u16));
    assert_eq!(call.path, vec![tok_a().address(), tok_b().address(), tok_c().address()]);
    assert_eq!(call.curveIds, vec![0u8, 0]);
    let Ok(max_in) = t.maximum_amount_in(&Percent::from_bps(100)) else {
        panic!("bound computed");
    };
    assert_eq!(call.amountInMax, max_in.raw());
}
