#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Inductor
//!
//! An implementation of a **logical inductor**: an online algorithm that, on each update,
//! ingests a newly observed propositional sentence and a new trader, and emits a new belief
//! state mapping sentences to credences in `[0, 1]`. As updates accumulate, no admitted
//! trader can systematically exploit the sequence of belief states.
//!
//! This is a brute-force reference implementation over exact rationals, not a
//! polynomial-time market-making service: every update enumerates every truth assignment to
//! the current support and searches a dense rational grid for a satisfying belief state. See
//! [`inductor_market::find_credences`] for where that cost is paid.
//!
//! ## Components
//!
//! - [`inductor_enumerate`] — the lazy-sequence enumerators the market maker's search and the
//!   world enumeration are built from.
//! - [`inductor_sentence`] — the propositional sentence algebra used for observations.
//! - [`inductor_history`] — the persistent credence history.
//! - [`inductor_formula`] — the symbolic trading-formula algebra.
//! - [`inductor_market`] — the market maker (`find_credences`/`evaluate`) and consistent-world
//!   enumeration.
//! - [`inductor_risk`] — the budget factor builder.
//! - [`inductor_ensemble`] — the ensemble combinator ("trading firm").
//! - this crate — [`Inductor`], the update-loop driver.

mod algorithm;
mod config;
mod driver;
pub mod error;

/// Default [`tracing`] initialisers for binaries embedding an inductor.
pub mod logging;

pub use algorithm::TradingAlgorithm;
pub use config::{default_tolerance, InductorConfig};
pub use driver::Inductor;
pub use error::InductorError;

// Re-exported boundary per the external interfaces design: callers build sentences,
// formulas, and policies, and read histories, without depending on the component crates
// directly.
pub use inductor_enumerate::{
    allocations_of, integer_vectors, integers, nonnegative_rationals, product, rationals_between,
};
pub use inductor_ensemble::trading_firm;
pub use inductor_formula::{TradingFormula, TradingPolicy};
pub use inductor_history::{BeliefState, Credence, History};
pub use inductor_market::{
    all_truth_assignments, default_search_order, evaluate, find_credences, worlds_consistent_with,
    CancellationToken, SearchOrder,
};
pub use inductor_risk::budget_factor;
pub use inductor_sentence::{BaseFacts, Sentence, World};
