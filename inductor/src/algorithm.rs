use inductor_formula::TradingPolicy;

use crate::error::InductorError;

/// A lazy, potentially infinite sequence of [`TradingPolicy`]: the k-th call to
/// [`next_policy`](TradingAlgorithm::next_policy) yields the policy for update k.
///
/// The inductor is the sole caller that advances an admitted algorithm (monotone
/// advancement, per spec §5): implementors may assume calls are sequential and never
/// repeated. An algorithm that cannot produce a policy for the requested update should
/// return [`InductorError::Exhausted`] rather than panic.
pub trait TradingAlgorithm {
    fn next_policy(&mut self) -> Result<TradingPolicy, InductorError>;
}

impl<F> TradingAlgorithm for F
where
    F: FnMut() -> Result<TradingPolicy, InductorError>,
{
    fn next_policy(&mut self) -> Result<TradingPolicy, InductorError> {
        (self)()
    }
}
