use inductor_history::HistoryError;
use thiserror::Error;

/// Errors raised while evaluating a [`crate::TradingFormula`](crate::formula::TradingFormula).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// A `Price` node referenced a day outside the supplied history.
    #[error(transparent)]
    History(#[from] HistoryError),
}
