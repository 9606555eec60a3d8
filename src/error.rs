//! Unified error type for the SDK.
//!
//! Every fallible operation in the crate returns [`AmmError`]. Errors are
//! raised at the point of failure and carry whatever token, pair or hop
//! context is available there; nothing is retried or replaced by a default.

use alloy_primitives::Address;

/// Errors produced while pricing, routing or encoding a trade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// Two values that must live on the same chain do not.
    #[error("chain id mismatch: expected {expected}, found {found}")]
    ChainIdMismatch {
        /// Chain id of the first value seen.
        expected: u64,
        /// Chain id of the offending value.
        found: u64,
    },

    /// Two tokens that must be distinct share an address.
    #[error("tokens share the same address {0}")]
    SameToken(Address),

    /// A token was given to a pair that does not hold it.
    #[error("token {token} is not part of pair {token0}/{token1}")]
    InvalidToken {
        /// The token that was passed in.
        token: Address,
        /// The pair's first token.
        token0: Address,
        /// The pair's second token.
        token1: Address,
    },

    /// Amounts or prices over different currencies were combined.
    #[error("currency mismatch: {0}")]
    CurrencyMismatch(&'static str),

    /// A route was built from an empty pair list.
    #[error("route must contain at least one pair")]
    EmptyRoute,

    /// A pair in the route does not continue the path built so far.
    #[error("route is disconnected at hop {hop}: pair does not hold {token}")]
    DisconnectedPath {
        /// Zero-based index of the offending pair.
        hop: usize,
        /// The token the pair was expected to hold.
        token: Address,
    },

    /// The route input is not held by the first pair.
    #[error("input token {0} is not in the first pair of the route")]
    InputNotInRoute(Address),

    /// The route output is not held by the last pair, or the path ends elsewhere.
    #[error("output token {0} is not reached by the route")]
    OutputNotInRoute(Address),

    /// The pool cannot satisfy the requested amount.
    #[error("insufficient liquidity swapping {token_in} for {token_out}")]
    InsufficientLiquidity {
        /// Token entering the pool.
        token_in: Address,
        /// Token leaving the pool.
        token_out: Address,
    },

    /// A positive input quotes to a zero output.
    #[error("input amount too small to receive any {token_out} for {token_in}")]
    InsufficientInputAmount {
        /// Token entering the pool.
        token_in: Address,
        /// Token leaving the pool.
        token_out: Address,
    },

    /// The stable-curve solver did not converge within its iteration cap.
    #[error("{stage} did not converge within {iterations} iterations")]
    ConvergenceFailure {
        /// Which solver step failed.
        stage: &'static str,
        /// Iterations spent before giving up.
        iterations: u32,
    },

    /// Both sides of the trade are the native asset.
    #[error("a swap cannot have the native asset as both input and output")]
    NativeInNativeOut,

    /// Fee-on-transfer tokens are only supported for exact-input trades.
    #[error("fee-on-transfer tokens cannot be traded with an exact output")]
    FeeOnTransferExactOutput,

    /// The slippage tolerance is outside the usable range.
    #[error("invalid slippage tolerance: {0}")]
    InvalidSlippage(&'static str),

    /// A pair snapshot or option set violates its invariants.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An address string could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// An amount is not usable for the requested operation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// Arithmetic exceeded the 256-bit range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
