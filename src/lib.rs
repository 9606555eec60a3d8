//! # Multi-curve SDK
//!
//! Client-side pricing, routing and router-call encoding for an exchange
//! whose pools trade on either of two curves:
//!
//! - **Constant Product** (Uniswap v2 style): `constant-product` feature
//! - **Stable** (Curve / Saddle StableSwap style): `stable` feature
//!
//! Everything is computed off-chain from pair snapshots with the same
//! `uint256` integer math the contracts use, so quotes match execution
//! exactly. Nothing here talks to a node; fetching reserves and sending
//! transactions belong to the caller.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `constant-product` | yes | `x · y = k` pairs (curve id 0) |
//! | `stable` | yes | Amplified StableSwap pairs (curve id 1) |
//! | `all-curves` | yes | Enables both curves |
//!
//! # Quick Start
//!
//! ```rust
//! use alloy_primitives::{Address, U256};
//! use multicurve_sdk::prelude::*;
//!
//! let weth = Token::new(1, Address::repeat_byte(0x11), 18).with_symbol("WETH");
//! let usdc = Token::new(1, Address::repeat_byte(0x22), 18).with_symbol("USDC");
//!
//! // 1. Pair snapshots as read from the ledger
//! let snapshot = PairSnapshot::constant_product(
//!     (weth.clone(), usdc.clone()),
//!     (U256::from(1_000_000u64), U256::from(950_000u64)),
//!     3_000, // 0.3%
//! )
//! .expect("valid snapshot");
//! let pair = PairFactory::from_snapshot(&snapshot).expect("pair built");
//!
//! // 2. Route and size the trade
//! let route = Route::new(vec![pair], weth.clone(), usdc).expect("connected route");
//! let trade = Trade::exact_in(route, CurrencyAmount::from_raw(weth, 1_000)).expect("quoted");
//! assert_eq!(trade.output_amount().raw(), U256::from(946u64));
//!
//! // 3. Encode the router call
//! let options = SwapOptions::new(Address::repeat_byte(0xab));
//! let call = SwapRouter::swap_call_parameters(&trade, &options).expect("encoded");
//! assert_eq!(call.method_name(), "swapExactForVariable");
//! assert_eq!(call.value(), "0x00");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ PairSnapshot │  ledger data, serde
//! └──────┬───────┘
//!        │ PairFactory::from_snapshot
//!        ▼
//! ┌──────────────┐
//! │     Pair     │  CurveBox (enum dispatch over SwapCurve)
//! └──────┬───────┘
//!        │ Route::new / Trade::new
//!        ▼
//! ┌──────────────┐
//! │    Trade     │  amounts, execution price, price impact
//! └──────┬───────┘
//!        │ SwapRouter::swap_call_parameters
//!        ▼
//! ┌────────────────┐
//! │ SwapParameters │  method, args, value, calldata
//! └────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Token`](domain::Token), [`CurrencyAmount`](domain::CurrencyAmount), [`Price`](domain::Price), [`Percent`](domain::Percent), ... |
//! | [`traits`] | [`SwapCurve`](traits::SwapCurve), the per-curve quoting abstraction |
//! | [`curves`] | Feature-gated curve math and the [`CurveBox`](curves::CurveBox) dispatch enum |
//! | [`entities`] | [`Pair`](entities::Pair), [`Route`](entities::Route), [`Trade`](entities::Trade) |
//! | [`config`] | [`PairSnapshot`](config::PairSnapshot) and [`SwapOptions`](config::SwapOptions) |
//! | [`factory`] | [`PairFactory`](factory::PairFactory) for snapshot-driven pair construction |
//! | [`router`] | [`SwapRouter`](router::SwapRouter) calldata encoding |
//! | [`math`] | Checked `U256` arithmetic and `BigUint` conversions |
//! | [`constants`] | Protocol parameters fixed by the contracts |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod constants;
pub mod curves;
pub mod domain;
pub mod entities;
pub mod error;
pub mod factory;
pub mod math;
pub mod prelude;
pub mod router;
pub mod traits;
