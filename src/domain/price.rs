//! Exchange rate between two currencies.

use core::fmt;

use num_bigint::BigUint;

use super::{Currency, CurrencyAmount, Fraction, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{from_big, to_big};

/// The price of `base` in units of `quote`, over raw on-chain units.
///
/// `numerator / denominator` is the number of raw `quote` units one raw
/// `base` unit is worth. The ratio is kept exact, so composing prices
/// along a route never loses precision.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use multicurve_sdk::domain::{Price, Token};
///
/// let a = Token::new(1, Address::repeat_byte(1), 18);
/// let b = Token::new(1, Address::repeat_byte(2), 18);
/// let c = Token::new(1, Address::repeat_byte(3), 18);
///
/// let ab = Price::new(a.clone(), b.clone(), 2u8, 3u8).expect("valid"); // 1 A = 1.5 B
/// let bc = Price::new(b, c, 1u8, 4u8).expect("valid");               // 1 B = 4 C
/// let ac = ab.multiply(&bc).expect("chained");
///
/// assert_eq!(ac.to_fixed(1), "6.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    base: Currency,
    quote: Currency,
    fraction: Fraction,
}

impl Price {
    /// Creates a price from its raw ratio `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn new(
        base: impl Into<Currency>,
        quote: impl Into<Currency>,
        denominator: impl Into<BigUint>,
        numerator: impl Into<BigUint>,
    ) -> Result<Self> {
        Ok(Self {
            base: base.into(),
            quote: quote.into(),
            fraction: Fraction::new(numerator, denominator)?,
        })
    }

    /// Creates the price implied by exchanging `base_amount` for `quote_amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `base_amount` is zero.
    pub fn from_amounts(base_amount: &CurrencyAmount, quote_amount: &CurrencyAmount) -> Result<Self> {
        Ok(Self {
            base: base_amount.currency().clone(),
            quote: quote_amount.currency().clone(),
            fraction: Fraction::new(to_big(quote_amount.raw()), to_big(base_amount.raw()))?,
        })
    }

    /// Wraps an existing fraction.
    pub(crate) fn from_fraction(base: Currency, quote: Currency, fraction: Fraction) -> Self {
        Self {
            base,
            quote,
            fraction,
        }
    }

    /// Returns the base currency.
    #[must_use]
    pub const fn base(&self) -> &Currency {
        &self.base
    }

    /// Returns the quote currency.
    #[must_use]
    pub const fn quote_currency(&self) -> &Currency {
        &self.quote
    }

    /// Returns the raw ratio.
    #[must_use]
    pub const fn as_fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Returns the raw numerator (quote side).
    #[must_use]
    pub const fn numerator(&self) -> &BigUint {
        self.fraction.numerator()
    }

    /// Returns the raw denominator (base side).
    #[must_use]
    pub const fn denominator(&self) -> &BigUint {
        self.fraction.denominator()
    }

    /// Returns the same ratio re-labelled with other currencies.
    pub(crate) fn with_currencies(&self, base: &Currency, quote: &Currency) -> Self {
        Self::from_fraction(base.clone(), quote.clone(), self.fraction.clone())
    }

    /// Returns the price of `quote` in units of `base`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the price is zero.
    pub fn invert(&self) -> Result<Self> {
        Ok(Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            fraction: self.fraction.invert()?,
        })
    }

    /// Chains `self` (base → quote) with `other` (quote → other quote).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CurrencyMismatch`] if `other.base` is not `self.quote`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.quote != other.base {
            return Err(AmmError::CurrencyMismatch(
                "chained price must start where the previous one ends",
            ));
        }
        Ok(Self {
            base: self.base.clone(),
            quote: other.quote.clone(),
            fraction: self.fraction.multiply(&other.fraction),
        })
    }

    /// Converts an amount of `base` into `quote` at this price, rounding down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CurrencyMismatch`] if `amount` is not in the base currency.
    /// - [`AmmError::Overflow`] if the result exceeds 256 bits.
    pub fn quote(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount> {
        if *amount.currency() != self.base {
            return Err(AmmError::CurrencyMismatch(
                "quoted amount must be in the base currency",
            ));
        }
        let raw = self
            .fraction
            .multiply(&Fraction::from_integer(to_big(amount.raw())))
            .quotient();
        Ok(CurrencyAmount::new(self.quote.clone(), from_big(&raw)?))
    }

    /// The price in whole units: raw ratio scaled by `10^base_decimals / 10^quote_decimals`.
    #[must_use]
    pub fn adjusted_for_decimals(&self) -> Fraction {
        let ten = BigUint::from(10u8);
        let scalar = Fraction::from_raw_parts(
            ten.pow(u32::from(self.base.decimals())),
            ten.pow(u32::from(self.quote.decimals())),
        );
        self.fraction.multiply(&scalar)
    }

    /// Formats the decimal-adjusted price with `places` digits, rounded down.
    #[must_use]
    pub fn to_fixed(&self, places: u32) -> String {
        self.adjusted_for_decimals().to_fixed(places, Rounding::Down)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.to_fixed(6), self.quote, self.base)
    }
}
