use inductor_ensemble::EnsembleError;
use inductor_formula::FormulaError;
use inductor_history::HistoryError;
use inductor_market::MarketError;
use inductor_risk::RiskError;
use inductor_sentence::SentenceError;
use thiserror::Error;

/// Central error type for the inductor crate, aggregating every failure mode named in the
/// error handling design: a history lookup out of range, a sentence evaluation missing a
/// base fact, an internal invariant violation, a trading algorithm running dry, or a
/// caller-supplied cancellation firing mid-search.
///
/// `update` leaves the [`crate::Inductor`] unchanged whenever it returns any of these.
#[derive(Debug, Clone, Error)]
pub enum InductorError {
    /// `History::lookup` was called with `day` outside `[1, len]`.
    #[error("day index should be in [1, {len}] but got {day}")]
    ArgumentOutOfRange { day: usize, len: usize },

    /// A `Sentence::evaluate` referenced an atom absent from the supplied base facts.
    #[error("missing base fact for atom `{label}`")]
    MissingBaseFact { label: String },

    /// An internal precondition was violated: a non-positive budget, or a non-positive
    /// remaining budget inside the budget-factor builder after the prefix bankruptcy check
    /// already passed. Signals a logic bug rather than bad input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// A [`crate::TradingAlgorithm`] terminated before yielding enough policies for the
    /// current update count.
    #[error("trading algorithm {algorithm_index} exhausted before yielding update {requested}")]
    Exhausted {
        algorithm_index: usize,
        requested: usize,
    },

    /// A caller-supplied cancellation token fired before `find_credences` converged.
    #[error("credence search cancelled")]
    Cancelled,
}

impl From<HistoryError> for InductorError {
    fn from(error: HistoryError) -> Self {
        match error {
            HistoryError::ArgumentOutOfRange { day, len } => Self::ArgumentOutOfRange { day, len },
        }
    }
}

impl From<SentenceError> for InductorError {
    fn from(error: SentenceError) -> Self {
        match error {
            SentenceError::MissingBaseFact { label } => Self::MissingBaseFact { label },
        }
    }
}

impl From<FormulaError> for InductorError {
    fn from(error: FormulaError) -> Self {
        match error {
            FormulaError::History(history) => history.into(),
        }
    }
}

impl From<MarketError> for InductorError {
    fn from(error: MarketError) -> Self {
        match error {
            MarketError::Formula(formula) => formula.into(),
            MarketError::Sentence(sentence) => sentence.into(),
            MarketError::Cancelled => Self::Cancelled,
        }
    }
}

impl From<RiskError> for InductorError {
    fn from(error: RiskError) -> Self {
        match error {
            RiskError::Sentence(sentence) => sentence.into(),
            RiskError::Market(market) => market.into(),
            RiskError::InvariantViolation(message) => Self::InvariantViolation(message),
        }
    }
}

impl From<EnsembleError> for InductorError {
    fn from(error: EnsembleError) -> Self {
        match error {
            EnsembleError::Risk(risk) => risk.into(),
        }
    }
}
