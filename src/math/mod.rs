//! Exact integer helpers shared by the curve implementations.
//!
//! Everything here operates on 256-bit unsigned integers (the width the
//! pool contracts compute in) or on unbounded [`BigUint`](num_bigint::BigUint)
//! values for price fractions.
//!
//! - [`CheckedArithmetic`]: overflow-checked `U256` operations that fail
//!   with a labelled [`AmmError`](crate::error::AmmError).
//! - [`div_round`]: division with an explicit rounding direction.
//! - [`isqrt`]: integer square root.
//! - [`to_big`] / [`from_big`]: conversions between `U256` and `BigUint`.

mod big;
mod checked;
mod rounding;

pub use big::{from_big, to_big};
pub use checked::CheckedArithmetic;
pub use rounding::{div_round, isqrt};
