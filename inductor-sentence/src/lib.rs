#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    clippy::unused_self,
    missing_debug_implementations,
    rust_2018_idioms
)]

//! # Sentence
//!
//! The propositional sentence language used for observations: atoms joined by negation,
//! disjunction, conjunction, implication and biconditional. Sentences are immutable value
//! objects, structurally equatable and hashable, evaluated against a [`BaseFacts`]
//! assignment.

mod base_facts;
mod error;
mod sentence;
mod world;

pub use base_facts::BaseFacts;
pub use error::SentenceError;
pub use sentence::Sentence;
pub use world::World;
