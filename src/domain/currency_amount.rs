//! Raw on-chain quantities tagged with their currency.

use core::cmp::Ordering;
use core::fmt;

use alloy_primitives::U256;

use super::{Currency, Fraction, Rounding, Token};
use crate::error::{AmmError, Result};
use crate::math::{from_big, to_big, CheckedArithmetic};

/// A raw quantity of a currency in its smallest unit (wei or equivalent).
///
/// The raw value is a `uint256`, exactly as the contracts see it. Combining
/// amounts of different currencies is an error, never an implicit
/// conversion, and so is leaving the 256-bit range.
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, U256};
/// use multicurve_sdk::domain::{CurrencyAmount, Token};
///
/// let usdc = Token::new(1, Address::repeat_byte(1), 6);
/// let a = CurrencyAmount::from_raw(usdc.clone(), 1_500_000);
/// let b = CurrencyAmount::from_raw(usdc, 250_000);
///
/// let sum = a.add(&b).expect("same currency");
/// assert_eq!(sum.raw(), U256::from(1_750_000u64));
/// assert_eq!(sum.to_exact(), "1.75");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct CurrencyAmount {
    currency: Currency,
    raw: U256,
}

impl CurrencyAmount {
    /// Creates an amount of `currency`.
    pub fn new(currency: impl Into<Currency>, raw: U256) -> Self {
        Self {
            currency: currency.into(),
            raw,
        }
    }

    /// Creates an amount from a `u128` raw value.
    pub fn from_raw(currency: impl Into<Currency>, raw: u128) -> Self {
        Self::new(currency, U256::from(raw))
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    /// Returns `true` if the quantity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Returns the same quantity expressed in the wrapped token.
    ///
    /// Token amounts are returned unchanged.
    pub fn wrapped(&self) -> Self {
        Self::new(self.currency.wrapped().clone(), self.raw)
    }

    /// Returns the same quantity tagged with another currency.
    pub(crate) fn with_currency(&self, currency: &Currency) -> Self {
        Self::new(currency.clone(), self.raw)
    }

    /// Returns the wrapped token this amount trades as.
    #[must_use]
    pub const fn token(&self) -> &Token {
        self.currency.wrapped()
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CurrencyMismatch`] if the currencies differ.
    /// - [`AmmError::Overflow`] if the sum exceeds 256 bits.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_currency(other, "cannot add amounts of different currencies")?;
        let raw = self.raw.safe_add(other.raw, "currency amount addition")?;
        Ok(Self::new(self.currency.clone(), raw))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CurrencyMismatch`] if the currencies differ.
    /// - [`AmmError::Underflow`] if `other` is larger.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_currency(other, "cannot subtract amounts of different currencies")?;
        let raw = self.raw.safe_sub(other.raw, "currency amount subtraction")?;
        Ok(Self::new(self.currency.clone(), raw))
    }

    /// Compares two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CurrencyMismatch`] if the currencies differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.ensure_same_currency(other, "cannot compare amounts of different currencies")?;
        Ok(self.raw.cmp(&other.raw))
    }

    /// Scales the quantity by `factor`, rounding in the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds 256 bits.
    pub fn multiply(&self, factor: &Fraction, rounding: Rounding) -> Result<Self> {
        let scaled = Fraction::from_integer(to_big(self.raw)).multiply(factor);
        let raw = from_big(&scaled.quotient_rounded(rounding))?;
        Ok(Self::new(self.currency.clone(), raw))
    }

    /// Returns the quantity as a fraction of whole units (`raw / 10^decimals`).
    #[must_use]
    pub fn as_fraction(&self) -> Fraction {
        Fraction::from_raw_parts(
            to_big(self.raw),
            num_bigint::BigUint::from(10u8).pow(u32::from(self.currency.decimals())),
        )
    }

    /// Formats the exact decimal value without trailing zeros.
    #[must_use]
    pub fn to_exact(&self) -> String {
        let decimals = u32::from(self.currency.decimals());
        let fixed = self.as_fraction().to_fixed(decimals, Rounding::Down);
        if decimals == 0 {
            return fixed;
        }
        fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
    }

    fn ensure_same_currency(&self, other: &Self, what: &'static str) -> Result<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(AmmError::CurrencyMismatch(what))
        }
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency)
    }
}
