//! Rounding helpers for integer division.
//!
//! **Always round against the trader** (pool-favorable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Output amount | [`Rounding::Down`] |
//! | Required input | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use multicurve_sdk::domain::Rounding;
//! use multicurve_sdk::math::div_round;
//!
//! let ten = U256::from(10u8);
//! let three = U256::from(3u8);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u8)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u8)));
//! assert_eq!(div_round(ten, U256::ZERO, Rounding::Down), None);
//! ```

use alloy_primitives::U256;

use crate::domain::Rounding;

/// Integer division of `U256` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero. Never overflows: ceiling
/// division is computed as `floor + (remainder != 0)`.
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up => {
            // q + 1 cannot overflow: a non-zero remainder implies d > 1.
            if (numerator % denominator).is_zero() {
                Some(q)
            } else {
                Some(q + U256::from(1u8))
            }
        }
    }
}

/// Integer square root (floor) via Newton's method.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::ZERO;
    }
    let two = U256::from(2u8);
    let mut x = n;
    let mut y = n / two + U256::from(n.bit(0) as u8);
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}
