#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Credence history
//!
//! Exact-rational credences and the ordered, persistent sequence of belief states that the
//! logical inductor accumulates one update at a time.

mod credence;
mod error;
mod history;

pub use credence::Credence;
pub use error::HistoryError;
pub use history::{BeliefState, History};
