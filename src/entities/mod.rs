//! Pairs, routes and trades: the pricing pipeline.
//!
//! ```text
//! PairSnapshot ──▶ Pair ──▶ Route ──▶ Trade ──▶ SwapRouter
//! ```

pub(crate) mod pair;
mod route;
mod trade;

pub use pair::Pair;
pub use route::Route;
pub use trade::Trade;
