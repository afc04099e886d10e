#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Ensemble combinator
//!
//! Combines the per-algorithm trading histories the [inductor driver](../inductor) keeps
//! into a single [`inductor_formula::TradingPolicy`] for the next update, using the budget
//! factor builder to keep every admitted algorithm's exposure bounded regardless of how many
//! others are admitted alongside it.

mod error;
mod firm;

pub use error::EnsembleError;
pub use firm::trading_firm;
