#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Enumerators
//!
//! Streaming, pull-based enumerators for the logical inductor's brute-force search
//! routines: arithmetic progressions, integer partitions, integer vectors, rationals, and
//! the cartesian power of a possibly-infinite sequence.
//!
//! Every constructor here returns a fresh iterator holding its own state; nothing is shared
//! or memoized across calls, so a sequence can be restarted simply by calling the
//! constructor again.

mod allocations;
mod integers;
mod product;
mod rational;

pub use allocations::{allocations_of, integer_vectors};
pub use integers::{integers, Integers};
pub use product::{product, Product};
pub use rational::{nonnegative_rationals, rationals_between, RationalsBetween};
