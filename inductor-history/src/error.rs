use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a [`crate::History`](crate::history::History).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Error)]
pub enum HistoryError {
    /// `lookup` was called with `day` outside `[1, len]`.
    #[error("day index should be in [1, {len}] but got {day}")]
    ArgumentOutOfRange { day: usize, len: usize },
}
