//! Tradable currencies: ERC-20 tokens and the chain's native asset.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::Token;

/// The native asset of a chain (e.g. ETH), tied to the token it trades as.
///
/// Pools never hold the native asset directly; every hop through a pool
/// uses [`wrapped`](Self::wrapped). The router attaches native value on
/// input and unwraps on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeCurrency {
    symbol: String,
    name: String,
    wrapped: Token,
}

impl NativeCurrency {
    /// Creates a native currency backed by `wrapped`.
    ///
    /// The chain id and decimals are those of the wrapped token.
    #[must_use]
    pub fn new(wrapped: Token, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            wrapped,
        }
    }

    /// Returns the chain id.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.wrapped.chain_id()
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.wrapped.decimals()
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wrapped token used inside pools.
    #[must_use]
    pub const fn wrapped(&self) -> &Token {
        &self.wrapped
    }
}

/// Either an ERC-20 token or the chain's native asset.
///
/// Two native currencies are equal when they live on the same chain; two
/// tokens follow [`Token`] equality; a native currency never equals a token,
/// not even its own wrapped token.
#[derive(Debug, Clone, Eq)]
pub enum Currency {
    /// The chain's native asset.
    Native(NativeCurrency),
    /// An ERC-20 token.
    Token(Token),
}

impl Currency {
    /// Returns `true` for the native asset.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Returns `true` for an ERC-20 token.
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Returns the chain id.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Native(native) => native.chain_id(),
            Self::Token(token) => token.chain_id(),
        }
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        match self {
            Self::Native(native) => native.decimals(),
            Self::Token(token) => token.decimals(),
        }
    }

    /// Returns the ticker symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Native(native) => Some(native.symbol()),
            Self::Token(token) => token.symbol(),
        }
    }

    /// Returns the token this currency trades as inside pools.
    #[must_use]
    pub const fn wrapped(&self) -> &Token {
        match self {
            Self::Native(native) => native.wrapped(),
            Self::Token(token) => token,
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => a.chain_id() == b.chain_id(),
            (Self::Token(a), Self::Token(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Native(native) => {
                0u8.hash(state);
                native.chain_id().hash(state);
            }
            Self::Token(token) => {
                1u8.hash(state);
                token.hash(state);
            }
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Self::Native(native)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => write!(f, "{}", native.symbol()),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}
