//! Numeric identifiers of the pricing curves the router understands.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Identifier of a pair's pricing curve, as the router contract encodes it.
///
/// The router receives one `uint8` per hop, so the discriminants are part
/// of the wire format.
///
/// ```
/// use multicurve_sdk::domain::CurveId;
///
/// assert_eq!(CurveId::try_from(1u8), Ok(CurveId::Stable));
/// assert!(CurveId::try_from(7u8).is_err());
/// assert_eq!(CurveId::ConstantProduct.as_u8(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum CurveId {
    /// `x · y = k`.
    ConstantProduct = 0,
    /// Two-coin StableSwap with an amplification coefficient.
    Stable = 1,
}

impl CurveId {
    /// Returns the on-chain discriminant.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if pairs on this curve need an amplification coefficient.
    #[must_use]
    pub const fn is_amplified(self) -> bool {
        matches!(self, Self::Stable)
    }
}

impl TryFrom<u8> for CurveId {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::ConstantProduct),
            1 => Ok(Self::Stable),
            _ => Err(AmmError::InvalidConfiguration("unknown curve id")),
        }
    }
}

impl From<CurveId> for u8 {
    fn from(id: CurveId) -> Self {
        id.as_u8()
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct => write!(f, "ConstantProduct"),
            Self::Stable => write!(f, "Stable"),
        }
    }
}
