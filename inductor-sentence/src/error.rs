use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while evaluating a [`crate::Sentence`](crate::sentence::Sentence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Error)]
pub enum SentenceError {
    /// Evaluation referenced an atom absent from the supplied
    /// [`BaseFacts`](crate::base_facts::BaseFacts).
    #[error("missing base fact for atom `{label}`")]
    MissingBaseFact { label: String },
}
