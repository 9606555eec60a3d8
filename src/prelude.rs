//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use multicurve_sdk::prelude::*;
//! ```

pub use crate::config::{PairSnapshot, SwapOptions};
pub use crate::curves::CurveBox;
#[cfg(feature = "constant-product")]
pub use crate::curves::ConstantProductCurve;
#[cfg(feature = "stable")]
pub use crate::curves::StableCurve;
pub use crate::domain::{
    Currency, CurrencyAmount, CurveId, Fraction, NativeCurrency, Percent, Price, Rounding, Token,
    TradeType,
};
pub use crate::entities::{Pair, Route, Trade};
pub use crate::error::{AmmError, Result};
pub use crate::factory::PairFactory;
pub use crate::router::{SwapParameters, SwapRouter};
pub use crate::traits::SwapCurve;
