//! Percentages such as slippage tolerance and price impact.

use core::fmt;

use num_bigint::BigUint;

use super::{Fraction, Rounding};
use crate::error::Result;

/// Basis-point denominator (10 000 = 100%).
const BPS_DENOMINATOR: u32 = 10_000;

/// A non-negative percentage stored as an exact fraction of one.
///
/// `Percent::new(50, 10_000)` is 0.5%.
///
/// ```
/// use multicurve_sdk::domain::Percent;
///
/// let slippage = Percent::from_bps(50);
/// assert_eq!(slippage.to_string(), "0.50%");
/// assert_eq!(slippage, Percent::new(1u8, 200u8).expect("valid"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(Fraction);

impl Percent {
    /// Creates `numerator / denominator` (as a fraction of 100%).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`](crate::error::AmmError::DivisionByZero)
    /// if `denominator` is zero.
    pub fn new(numerator: impl Into<BigUint>, denominator: impl Into<BigUint>) -> Result<Self> {
        Fraction::new(numerator, denominator).map(Self)
    }

    /// Creates a percentage from basis points (1 bp = 0.01%).
    #[must_use]
    pub fn from_bps(bps: u32) -> Self {
        Self(Fraction::from_raw_parts(
            BigUint::from(bps),
            BigUint::from(BPS_DENOMINATOR),
        ))
    }

    /// Wraps an existing fraction.
    #[must_use]
    pub const fn from_fraction(fraction: Fraction) -> Self {
        Self(fraction)
    }

    /// 0%.
    #[must_use]
    pub fn zero() -> Self {
        Self(Fraction::zero())
    }

    /// Returns the underlying fraction of one.
    #[must_use]
    pub const fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    /// Returns `true` for 0%.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the percentage exceeds 100%.
    #[must_use]
    pub fn exceeds_whole(&self) -> bool {
        self.0 > Fraction::one()
    }

    /// Formats as a percentage with `places` decimals, e.g. `"0.50"`.
    #[must_use]
    pub fn to_fixed(&self, places: u32, rounding: Rounding) -> String {
        self.0
            .multiply(&Fraction::from_integer(100u8))
            .to_fixed(places, rounding)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_fixed(2, Rounding::Down))
    }
}
