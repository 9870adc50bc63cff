//! Domain types: coins, products, cash and the per-sale transaction.
//!
//! Nothing in here performs I/O; the engine in `application` orchestrates it.

pub mod cash;
pub mod change;
pub mod denomination;
pub mod product;
pub mod transaction;
