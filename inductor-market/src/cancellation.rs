use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative cancellation signal checked at the market maker's loop boundaries.
///
/// Cloning shares the same underlying flag; firing it from any clone (e.g. from another
/// thread) is observed by every holder on their next loop iteration. The inductor's state is
/// guaranteed unchanged when a search is cancelled (see [`crate::MarketError::Cancelled`]).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
