//! Enum dispatch over every enabled curve.
//!
//! [`CurveBox`] wraps each concrete curve behind one enum so a
//! [`Pair`](crate::entities::Pair) can hold any of them by value. Each
//! variant is feature-gated to match its curve.

use alloy_primitives::U256;

#[cfg(feature = "constant-product")]
use super::constant_product::ConstantProductCurve;
#[cfg(feature = "stable")]
use super::stable::StableCurve;

use crate::domain::{CurveId, DirectedReserves, Fraction};
use crate::error::AmmError;
use crate::traits::SwapCurve;

/// Static-dispatch enum over the concrete curves.
///
/// Implements [`SwapCurve`] by delegating every call to the inner curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveBox {
    /// `x · y = k`.
    #[cfg(feature = "constant-product")]
    ConstantProduct(ConstantProductCurve),

    /// Two-coin StableSwap.
    #[cfg(feature = "stable")]
    Stable(StableCurve),
}

impl CurveBox {
    /// Returns the amplification coefficient for stable curves.
    #[must_use]
    pub const fn amplification(&self) -> Option<U256> {
        match self {
            #[cfg(feature = "stable")]
            Self::Stable(c) => Some(c.amplification()),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

#[cfg(feature = "constant-product")]
impl From<ConstantProductCurve> for CurveBox {
    fn from(curve: ConstantProductCurve) -> Self {
        Self::ConstantProduct(curve)
    }
}

#[cfg(feature = "stable")]
impl From<StableCurve> for CurveBox {
    fn from(curve: StableCurve) -> Self {
        Self::Stable(curve)
    }
}

/// Delegates a method call to every `CurveBox` variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            #[cfg(feature = "constant-product")]
            CurveBox::ConstantProduct(c) => c.$method($($arg),*),
            #[cfg(feature = "stable")]
            CurveBox::Stable(c) => c.$method($($arg),*),
        }
    };
}

impl SwapCurve for CurveBox {
    fn curve_id(&self) -> CurveId {
        delegate!(self, curve_id())
    }

    fn amount_out(&self, reserves: &DirectedReserves, amount_in: U256) -> Result<U256, AmmError> {
        delegate!(self, amount_out(reserves, amount_in))
    }

    fn amount_in(&self, reserves: &DirectedReserves, amount_out: U256) -> Result<U256, AmmError> {
        delegate!(self, amount_in(reserves, amount_out))
    }

    fn spot_price(&self, reserves: &DirectedReserves) -> Result<Fraction, AmmError> {
        delegate!(self, spot_price(reserves))
    }
}
