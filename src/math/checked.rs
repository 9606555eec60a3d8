//! Checked `U256` arithmetic that fails with a labelled error.
//!
//! The curve formulas chain many multiplications and divisions; each step
//! names itself so an overflow report points at the exact term.
//!
//! ```
//! use alloy_primitives::U256;
//! use multicurve_sdk::math::CheckedArithmetic;
//!
//! let a = U256::from(100u8);
//! let b = U256::from(200u8);
//! assert_eq!(a.safe_add(b, "sum"), Ok(U256::from(300u16)));
//! assert!(U256::MAX.safe_add(b, "sum").is_err());
//! ```

use alloy_primitives::U256;

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Fallible arithmetic with a context label.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: saturation hides bugs; errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] labelled with `what`.
    fn safe_add(&self, other: Self, what: &'static str) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] labelled with `what`.
    fn safe_sub(&self, other: Self, what: &'static str) -> Result<Self>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] labelled with `what`.
    fn safe_mul(&self, other: Self, what: &'static str) -> Result<Self>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: Self, rounding: Rounding) -> Result<Self>;
}

impl CheckedArithmetic for U256 {
    #[inline]
    fn safe_add(&self, other: Self, what: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(AmmError::Overflow(what))
    }

    #[inline]
    fn safe_sub(&self, other: Self, what: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(AmmError::Underflow(what))
    }

    #[inline]
    fn safe_mul(&self, other: Self, what: &'static str) -> Result<Self> {
        self.checked_mul(other).ok_or(AmmError::Overflow(what))
    }

    #[inline]
    fn safe_div(&self, other: Self, rounding: Rounding) -> Result<Self> {
        super::div_round(*self, other, rounding).ok_or(AmmError::DivisionByZero)
    }
}
