//! Protocol parameters shared with the deployed pool and router contracts.
//!
//! These values are fixed by the on-chain contracts. Changing any of them
//! makes every quote diverge from what the pools actually execute.

/// Denominator of `swap_fee`: a fee of `3_000` is 0.3%.
pub const FEE_ACCURACY: u32 = 1_000_000;

/// Fixed-point precision of the stable curve's amplification coefficient.
pub const A_PRECISION: u64 = 100;

/// Liquidity floor below which a non-empty pool is considered degenerate.
///
/// Compared against `√(reserve0 · reserve1)`.
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

/// Iteration cap for every Newton solve on the stable curve.
pub const MAX_LOOP_LIMIT: u32 = 256;

/// Decimals every stable-curve balance is normalized to before solving.
pub const STABLE_DECIMALS: u8 = 18;

/// Number of coins in a pool.
pub(crate) const N_COINS: u64 = 2;
