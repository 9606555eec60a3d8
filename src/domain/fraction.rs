//! Unbounded rational numbers for prices and percentages.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::Rounding;
use crate::error::{AmmError, Result};

/// A non-negative rational `numerator / denominator` over unbounded integers.
///
/// Composing prices across hops multiplies numerators and denominators, so
/// fractions are never reduced and never narrowed to a fixed width. The
/// denominator is always non-zero.
///
/// ```
/// use multicurve_sdk::domain::{Fraction, Rounding};
///
/// let f = Fraction::new(7u8, 2u8).expect("non-zero denominator");
/// assert_eq!(f.quotient().to_string(), "3");
/// assert_eq!(f.quotient_rounded(Rounding::Up).to_string(), "4");
/// assert_eq!(f.to_fixed(2, Rounding::Down), "3.50");
/// ```
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigUint,
    denominator: BigUint,
}

impl Fraction {
    /// Creates a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn new(numerator: impl Into<BigUint>, denominator: impl Into<BigUint>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        Ok(Self {
            numerator: numerator.into(),
            denominator,
        })
    }

    /// Creates a fraction whose denominator is known to be non-zero.
    pub(crate) const fn from_raw_parts(numerator: BigUint, denominator: BigUint) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates `value / 1`.
    #[must_use]
    pub fn from_integer(value: impl Into<BigUint>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigUint::one(),
        }
    }

    /// Returns `0 / 1`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(BigUint::zero())
    }

    /// Returns `1 / 1`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_integer(BigUint::one())
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Floor of the value.
    #[must_use]
    pub fn quotient(&self) -> BigUint {
        &self.numerator / &self.denominator
    }

    /// The value rounded to an integer in the given direction.
    #[must_use]
    pub fn quotient_rounded(&self, rounding: Rounding) -> BigUint {
        let q = self.quotient();
        if rounding.is_up() && !(&self.numerator % &self.denominator).is_zero() {
            q + 1u8
        } else {
            q
        }
    }

    /// Returns `denominator / numerator`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the value is zero.
    pub fn invert(&self) -> Result<Self> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Sum of two fractions.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Difference of two fractions.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `other` is larger than `self`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        if right > left {
            return Err(AmmError::Underflow("fraction subtraction below zero"));
        }
        Ok(Self {
            numerator: left - right,
            denominator: &self.denominator * &other.denominator,
        })
    }

    /// Product of two fractions.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    /// Quotient of two fractions.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Formats the value with exactly `places` decimal digits.
    #[must_use]
    pub fn to_fixed(&self, places: u32, rounding: Rounding) -> String {
        let scale = BigUint::from(10u8).pow(places);
        let scaled = Self {
            numerator: &self.numerator * &scale,
            denominator: self.denominator.clone(),
        }
        .quotient_rounded(rounding);
        let integer = &scaled / &scale;
        if places == 0 {
            return integer.to_string();
        }
        let fractional = (&scaled % &scale).to_string();
        let width = places as usize;
        format!("{integer}.{fractional:0>width$}")
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
