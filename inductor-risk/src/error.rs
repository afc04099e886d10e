use inductor_market::MarketError;
use inductor_sentence::SentenceError;
use thiserror::Error;

/// Errors raised while building a budget factor.
#[derive(Debug, Clone, Error)]
pub enum RiskError {
    #[error(transparent)]
    Sentence(#[from] SentenceError),

    #[error(transparent)]
    Market(#[from] MarketError),

    /// Either `budget` was not strictly positive at the call boundary, or `remaining`
    /// (budget plus prior cumulative value) came out non-positive after the prefix
    /// bankruptcy check already passed. The latter should not occur; it signals a logic
    /// bug rather than bad caller input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
