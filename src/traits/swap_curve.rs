//! The capability every pricing curve provides.
//!
//! [`SwapCurve`] is the seam between a [`Pair`](crate::entities::Pair) and
//! its pricing formula. Curves are stateless apart from their own
//! parameters (for example the stable curve's amplification); balances,
//! decimals and the fee arrive in a [`DirectedReserves`] already oriented
//! along the swap, so each formula is written once, `in → out`.
//!
//! # Rounding Contract
//!
//! Every implementation rounds in the pool's favour: outputs round down
//! and required inputs round up. A quote may therefore under-promise by
//! a unit but never over-promise.
//!
//! # Dispatch Model
//!
//! Curves are dispatched through the [`CurveBox`](crate::curves::CurveBox)
//! enum, not trait objects.

use alloy_primitives::U256;

use crate::domain::{CurveId, DirectedReserves, Fraction};
use crate::error::AmmError;

/// Pricing formula of a pair.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`]. Common variants:
///
/// - [`AmmError::InsufficientLiquidity`]: a reserve is zero or the
///   requested output reaches the reserve.
/// - [`AmmError::InsufficientInputAmount`]: a positive input quotes to
///   zero output.
/// - [`AmmError::ConvergenceFailure`]: an iterative solver gave up.
/// - [`AmmError::Overflow`]: an intermediate left the 256-bit range.
pub trait SwapCurve {
    /// The identifier the router uses for this curve.
    #[must_use]
    fn curve_id(&self) -> CurveId;

    /// Output received for `amount_in` of `reserves.token_in()`, rounded down.
    ///
    /// # Errors
    ///
    /// See the trait-level list.
    fn amount_out(&self, reserves: &DirectedReserves, amount_in: U256) -> Result<U256, AmmError>;

    /// Input required to receive exactly `amount_out`, rounded up.
    ///
    /// # Errors
    ///
    /// See the trait-level list.
    fn amount_in(&self, reserves: &DirectedReserves, amount_out: U256) -> Result<U256, AmmError>;

    /// Marginal price of the input token in raw output units, fee excluded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is zero.
    /// - [`AmmError::ConvergenceFailure`] if the curve needs a solve that fails.
    fn spot_price(&self, reserves: &DirectedReserves) -> Result<Fraction, AmmError>;
}
