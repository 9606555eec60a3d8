//! Which side of a trade is fixed.

use core::fmt;

/// Which amount of a trade the caller fixes.
///
/// With [`TradeType::ExactInput`] the input is given and the output is
/// quoted; with [`TradeType::ExactOutput`] the output is given and the
/// required input is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TradeType {
    /// The input amount is fixed; the output is computed.
    ExactInput = 0,
    /// The output amount is fixed; the input is computed.
    ExactOutput = 1,
}

impl TradeType {
    /// Returns `true` for [`TradeType::ExactInput`].
    #[must_use]
    pub const fn is_exact_input(&self) -> bool {
        matches!(self, Self::ExactInput)
    }

    /// Returns `true` for [`TradeType::ExactOutput`].
    #[must_use]
    pub const fn is_exact_output(&self) -> bool {
        matches!(self, Self::ExactOutput)
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactInput => write!(f, "ExactInput"),
            Self::ExactOutput => write!(f, "ExactOutput"),
        }
    }
}
