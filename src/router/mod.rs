//! Router call encoding.
//!
//! [`SwapRouter`] turns a [`Trade`](crate::entities::Trade) and
//! [`SwapOptions`](crate::config::SwapOptions) into the method name,
//! arguments, native value and calldata of one router call.

mod abi;
mod parameters;
mod swap_router;

pub use abi::IMultiCurveRouter;
pub use parameters::{to_hex, SwapArg, SwapParameters};
pub use swap_router::{SwapRouter, ROUTER_CUSTODY};
