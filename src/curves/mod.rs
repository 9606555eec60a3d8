//! Feature-gated curve implementations and the [`CurveBox`] dispatch enum.
//!
//! # Curves
//!
//! | Feature | Curve | Id | Style |
//! |---------|-------|----|-------|
//! | `constant-product` | [`ConstantProductCurve`] | 0 | Uniswap V2 |
//! | `stable` | [`StableCurve`] | 1 | Curve / Saddle StableSwap |

#[cfg(feature = "constant-product")]
pub mod constant_product;
#[cfg(feature = "stable")]
pub mod stable;

mod curve_box;

#[cfg(all(test, feature = "all-curves"))]
mod proptest_properties;

#[cfg(feature = "constant-product")]
pub use constant_product::ConstantProductCurve;
pub use curve_box::CurveBox;
#[cfg(feature = "stable")]
pub use stable::StableCurve;
