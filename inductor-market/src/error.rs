use inductor_formula::FormulaError;
use inductor_sentence::SentenceError;
use thiserror::Error;

/// Errors raised by the market maker's value evaluation and credence search.
#[derive(Debug, Clone, Error)]
pub enum MarketError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    Sentence(#[from] SentenceError),

    /// A caller-supplied [`crate::CancellationToken`] fired before a satisfying candidate
    /// was found.
    #[error("credence search cancelled")]
    Cancelled,
}
