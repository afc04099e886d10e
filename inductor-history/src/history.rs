use std::sync::Arc;

use indexmap::IndexMap;
use inductor_sentence::Sentence;

use crate::credence::Credence;
use crate::error::HistoryError;

/// A single belief state: the credence assigned to every sentence priced on one update.
pub type BeliefState = IndexMap<Sentence, Credence>;

struct Node {
    state: BeliefState,
    prev: Option<Arc<Node>>,
    day: usize,
}

/// An ordered, persistent sequence of belief states, 1-indexed by update ("day").
///
/// `History` is a singly linked list of reference-counted nodes: [`History::with_next_update`]
/// allocates one new node pointing at the unchanged previous tail, so extending a history
/// never mutates or copies the snapshot any other caller may still be holding.
#[derive(Clone, Default)]
pub struct History(Option<Arc<Node>>);

impl History {
    /// An empty history (no updates yet).
    pub fn new() -> Self {
        Self(None)
    }

    /// The number of belief states recorded so far.
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.day)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The credence history extended with one more belief state. `self` is left unchanged.
    pub fn with_next_update(&self, state: BeliefState) -> History {
        History(Some(Arc::new(Node {
            state,
            prev: self.0.clone(),
            day: self.len() + 1,
        })))
    }

    /// The credence assigned to `sentence` on the given 1-based `day`, or zero if `sentence`
    /// was not priced that day.
    pub fn lookup(&self, sentence: &Sentence, day: usize) -> Result<Credence, HistoryError> {
        let len = self.len();
        if day < 1 || day > len {
            return Err(HistoryError::ArgumentOutOfRange { day, len });
        }
        let mut steps_back = len - day;
        let mut node = self.0.as_ref();
        while steps_back > 0 {
            node = node.and_then(|n| n.prev.as_ref());
            steps_back -= 1;
        }
        let state = &node.expect("day within [1, len] guarantees a node exists").state;
        Ok(state.get(sentence).cloned().unwrap_or_else(Credence::zero))
    }

    /// The credence assigned to `sentence` on the most recent update, or zero if the history
    /// is empty or `sentence` was never priced.
    pub fn price(&self, sentence: &Sentence) -> Credence {
        match &self.0 {
            None => Credence::zero(),
            Some(node) => node
                .state
                .get(sentence)
                .cloned()
                .unwrap_or_else(Credence::zero),
        }
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn half() -> Credence {
        Credence::new(BigRational::new(BigInt::from(1), BigInt::from(2)))
    }

    #[test]
    fn with_next_update_grows_len_and_preserves_original() {
        let h0 = History::new();
        let mut state = BeliefState::new();
        state.insert(Sentence::atom("a"), half());
        let h1 = h0.with_next_update(state);

        assert_eq!(h0.len(), 0);
        assert_eq!(h1.len(), 1);
    }

    #[test]
    fn price_is_zero_for_empty_history() {
        let h = History::new();
        assert_eq!(h.price(&Sentence::atom("a")), Credence::zero());
    }

    #[test]
    fn lookup_out_of_range_errors() {
        let h = History::new();
        assert_eq!(
            h.lookup(&Sentence::atom("a"), 1),
            Err(HistoryError::ArgumentOutOfRange { day: 1, len: 0 })
        );
    }

    #[test]
    fn lookup_recovers_earlier_snapshots_through_later_extension() {
        let a = Sentence::atom("a");
        let mut s1 = BeliefState::new();
        s1.insert(a.clone(), half());
        let h1 = History::new().with_next_update(s1);

        let mut s2 = BeliefState::new();
        s2.insert(a.clone(), Credence::one());
        let h2 = h1.with_next_update(s2);

        assert_eq!(h2.lookup(&a, 1), Ok(half()));
        assert_eq!(h2.lookup(&a, 2), Ok(Credence::one()));
        // h1 is untouched by building h2.
        assert_eq!(h1.len(), 1);
        assert_eq!(h1.price(&a), half());
    }
}
