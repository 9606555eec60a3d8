//! Core trait abstractions.
//!
//! [`SwapCurve`] is implemented once per curve kind and by the
//! [`CurveBox`](crate::curves::CurveBox) dispatch enum.

mod swap_curve;

pub use swap_curve::SwapCurve;
