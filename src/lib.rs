//! Capital gains - tax on stock operations
//!
//! This library computes the capital gains tax due on each operation of a
//! sequence of buys and sells of one stock, using weighted average cost,
//! loss carryforward and a per-sale exemption threshold.

pub mod cli;
pub mod config;
pub mod error;
pub mod importers;
pub mod models;
pub mod pipeline;
pub mod tax;
