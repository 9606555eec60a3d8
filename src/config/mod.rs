//! Declarative inputs: pair snapshots from the data source and execution
//! options for the router.

mod pair_snapshot;
mod swap_options;

pub use pair_snapshot::PairSnapshot;
pub use swap_options::SwapOptions;
