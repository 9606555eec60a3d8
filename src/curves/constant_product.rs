//! Constant-product curve (`x · y = k`).
//!
//! The fee is taken from the input before the invariant is applied and is
//! expressed in parts per [`FEE_ACCURACY`].
//!
//! # Formulas
//!
//! ```text
//! in_after_fee = amount_in · (FEE_ACCURACY − fee)
//! amount_out   = ⌊in_after_fee · r_out / (r_in · FEE_ACCURACY + in_after_fee)⌋
//! amount_in    = ⌈r_in · amount_out · FEE_ACCURACY / ((r_out − amount_out) · (FEE_ACCURACY − fee))⌉
//! spot         = r_out / r_in
//! ```

use alloy_primitives::U256;

use crate::constants::FEE_ACCURACY;
use crate::domain::{CurveId, DirectedReserves, Fraction, Rounding};
use crate::error::AmmError;
use crate::math::{to_big, CheckedArithmetic};
use crate::traits::SwapCurve;

/// The `x · y = k` pricing formula.
///
/// The curve has no parameters of its own; everything it needs comes from
/// the [`DirectedReserves`] of the pair being quoted.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::{Address, U256};
/// use multicurve_sdk::curves::ConstantProductCurve;
/// use multicurve_sdk::domain::DirectedReserves;
/// use multicurve_sdk::traits::SwapCurve;
///
/// let reserves = DirectedReserves::new(
///     (Address::repeat_byte(1), Address::repeat_byte(2)),
///     (U256::from(1_000_000u64), U256::from(950_000u64)),
///     (18, 18),
///     3_000, // 0.3%
/// );
/// let out = ConstantProductCurve.amount_out(&reserves, U256::from(1_000u64)).expect("quote");
/// assert_eq!(out, U256::from(946u64));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantProductCurve;

/// `FEE_ACCURACY − fee`.
fn fee_complement(reserves: &DirectedReserves) -> Result<U256, AmmError> {
    let complement = U256::from(FEE_ACCURACY).safe_sub(
        U256::from(reserves.swap_fee()),
        "fee complement",
    )?;
    if complement.is_zero() {
        return Err(AmmError::InvalidConfiguration("swap fee consumes the whole input"));
    }
    Ok(complement)
}

impl SwapCurve for ConstantProductCurve {
    fn curve_id(&self) -> CurveId {
        CurveId::ConstantProduct
    }

    fn amount_out(&self, reserves: &DirectedReserves, amount_in: U256) -> Result<U256, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("input amount must be non-zero"));
        }
        if reserves.is_empty() {
            return Err(reserves.insufficient_liquidity());
        }

        let in_after_fee = amount_in.safe_mul(fee_complement(reserves)?, "input after fee")?;
        let numerator = in_after_fee.safe_mul(reserves.reserve_out(), "output numerator")?;
        let denominator = reserves
            .reserve_in()
            .safe_mul(U256::from(FEE_ACCURACY), "scaled input reserve")?
            .safe_add(in_after_fee, "output denominator")?;
        let amount_out = numerator.safe_div(denominator, Rounding::Down)?;

        if amount_out.is_zero() {
            return Err(reserves.insufficient_input());
        }
        if amount_out >= reserves.reserve_out() {
            return Err(reserves.insufficient_liquidity());
        }
        Ok(amount_out)
    }

    fn amount_in(&self, reserves: &DirectedReserves, amount_out: U256) -> Result<U256, AmmError> {
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("output amount must be non-zero"));
        }
        if reserves.is_empty() || amount_out >= reserves.reserve_out() {
            return Err(reserves.insufficient_liquidity());
        }

        let numerator = reserves
            .reserve_in()
            .safe_mul(amount_out, "input numerator")?
            .safe_mul(U256::from(FEE_ACCURACY), "scaled input numerator")?;
        let denominator = reserves
            .reserve_out()
            .safe_sub(amount_out, "remaining output reserve")?
            .safe_mul(fee_complement(reserves)?, "input denominator")?;
        numerator.safe_div(denominator, Rounding::Up)
    }

    fn spot_price(&self, reserves: &DirectedReserves) -> Result<Fraction, AmmError> {
        if reserves.is_empty() {
            return Err(reserves.insufficient_liquidity());
        }
        Fraction::new(to_big(reserves.reserve_out()), to_big(reserves.reserve_in()))
    }
}
