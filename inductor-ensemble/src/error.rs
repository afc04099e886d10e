use inductor_risk::RiskError;
use thiserror::Error;

/// Errors raised while combining admitted traders into a single ensemble policy.
#[derive(Debug, Clone, Error)]
pub enum EnsembleError {
    #[error(transparent)]
    Risk(#[from] RiskError),
}
