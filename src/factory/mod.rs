//! Snapshot-driven pair construction.

mod pair_factory;

pub use pair_factory::PairFactory;
