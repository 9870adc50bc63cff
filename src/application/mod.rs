//! Application layer containing the sale and refill orchestration.
//!
//! This module defines the `VendingMachine`, the single owner of the product
//! catalog and the cash inventory, and the entry point for every operation.

pub mod command;
pub mod engine;
