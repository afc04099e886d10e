#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Trading-formula algebra
//!
//! The symbolic expression language traders use to describe how many tokens to buy, as a
//! function of the credence history: constants, price lookups, sums, products, extrema, and
//! a safe reciprocal. See [`TradingFormula`] for the full operation set.

mod error;
mod formula;
mod policy;

pub use error::FormulaError;
pub use formula::TradingFormula;
pub use policy::TradingPolicy;
