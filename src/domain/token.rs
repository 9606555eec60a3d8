//! ERC-20 style token identity.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::{AmmError, Result};

/// A fungible token deployed on a specific chain.
///
/// Identity is `(chain_id, address)`: decimals, symbol and name are
/// metadata and take no part in equality or hashing. Addresses are stored
/// as raw bytes, so parsing `0xABC…` and `0xabc…` yields the same token.
///
/// # Examples
///
/// ```
/// use multicurve_sdk::domain::Token;
///
/// let usdc = Token::parse(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)
///     .expect("valid address")
///     .with_symbol("USDC");
/// let same = Token::parse(1, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", 6)
///     .expect("valid address");
///
/// assert_eq!(usdc, same);
/// assert_eq!(usdc.symbol(), Some("USDC"));
/// ```
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Token {
    /// Creates a token without symbol or name.
    #[must_use]
    pub const fn new(chain_id: u64, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    /// Parses a hex address (any letter case, `0x` prefix optional).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAddress`] if `address` is not 20 bytes of hex.
    pub fn parse(chain_id: u64, address: &str, decimals: u8) -> Result<Self> {
        let address =
            Address::from_str(address).map_err(|_| AmmError::InvalidAddress(address.to_owned()))?;
        Ok(Self::new(chain_id, address, decimals))
    }

    /// Attaches a ticker symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Attaches a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the chain id.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Returns the contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the ticker symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the display name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if `self` is ordered before `other` by address bytes.
    ///
    /// This is the ordering pools use to decide which token is `token0`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ChainIdMismatch`] if the tokens live on different chains.
    /// - [`AmmError::SameToken`] if both tokens share an address.
    pub fn sorts_before(&self, other: &Self) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(AmmError::ChainIdMismatch {
                expected: self.chain_id,
                found: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(AmmError::SameToken(self.address));
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, "{}", self.address),
        }
    }
}
