#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Market maker
//!
//! The routine that, given a set of trading formulas and a credence history, searches for a
//! next credence assignment that no world can exploit above a tolerance, plus the
//! propositionally-consistent world enumeration the budget factor and ensemble combinator
//! build on.

mod cancellation;
mod error;
mod evaluate;
mod find_credences;
mod worlds;

pub use cancellation::CancellationToken;
pub use error::MarketError;
pub use evaluate::{all_truth_assignments, evaluate};
pub use find_credences::{default_search_order, find_credences, SearchOrder};
pub use worlds::worlds_consistent_with;
