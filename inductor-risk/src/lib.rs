#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Budget factor builder
//!
//! Given a budget floor and the histories leading up to a new trading policy, computes a
//! symbolic multiplier that, applied to every entry of that policy, keeps the trader's
//! cumulative value-of-holdings at or above the floor in every propositionally consistent
//! world. This is the piece that lets the [ensemble combinator](../inductor_ensemble)
//! admit infinitely many algorithms while bounding each one's exposure.

mod budget;
mod error;

pub use budget::budget_factor;
pub use error::RiskError;
