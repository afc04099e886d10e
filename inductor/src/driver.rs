use inductor_ensemble::trading_firm;
use inductor_formula::TradingPolicy;
use inductor_history::{BeliefState, History};
use inductor_market::{find_credences, CancellationToken, SearchOrder};
use inductor_sentence::Sentence;

use crate::algorithm::TradingAlgorithm;
use crate::config::InductorConfig;
use crate::error::InductorError;

/// The logical inductor: maintains the observation, trading, and credence histories and
/// drives one [`Inductor::update`] per admitted observation/trader pair.
///
/// `Inductor` owns its histories and is shared with callers only through read-only handles
/// (a cheap, reference-counted [`History`] clone, or a `&Inductor` borrow); it is `!Sync` by
/// design, matching spec §5's single-owner resource policy.
pub struct Inductor {
    config: InductorConfig,
    observations: Vec<Sentence>,
    algorithms: Vec<Box<dyn TradingAlgorithm>>,
    trading_histories: Vec<Vec<TradingPolicy>>,
    credences: History,
}

impl std::fmt::Debug for Inductor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inductor")
            .field("observations", &self.observations.len())
            .field("algorithms", &self.algorithms.len())
            .field("credences", &self.credences)
            .finish()
    }
}

impl Inductor {
    pub fn new(config: InductorConfig) -> Self {
        Self {
            config,
            observations: Vec::new(),
            algorithms: Vec::new(),
            trading_histories: Vec::new(),
            credences: History::new(),
        }
    }

    /// The number of updates committed so far.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// A read-only handle to the credence history built up so far. Cloning a [`History`] is
    /// O(1): it shares the underlying persistent chain.
    pub fn credences(&self) -> History {
        self.credences.clone()
    }

    /// Ingests one new observation and one new trading algorithm, and returns the belief
    /// state for this update.
    ///
    /// Implements spec §4.9 exactly. On any `Err`, every field *owned* by `self`
    /// (`observations`, `trading_histories`, `credences`, and the set of admitted
    /// algorithms) is left exactly as it was: every intermediate value is built in local
    /// scratch variables and assigned back to `self` only once every fallible step above
    /// has succeeded.
    ///
    /// This does **not** mean the update is fully reversible in every sense. Step 2 draws
    /// the next policy from each *already-admitted* [`TradingAlgorithm`] by calling
    /// `next_policy` directly on the `Box<dyn TradingAlgorithm>` objects `self` already
    /// owns (trait objects are not `Clone`, so there is no scratch copy of an algorithm to
    /// discard instead). If an earlier algorithm's draw in that loop succeeds and a later
    /// one then fails the loop, or a later step (the ensemble combinator or
    /// `find_credences`) errors afterward, the earlier algorithm's internal generator state
    /// has already advanced by one policy that this update then discards, and there is no
    /// way to undo that draw. The net effect is that the retried update (whenever the
    /// caller tries again) re-requests a policy the algorithm has already been asked to
    /// produce, silently skipping ahead by one in that algorithm's sequence. See
    /// `existing_algorithm_draws_are_not_rolled_back_on_a_later_failure` in
    /// `tests/driver_scenarios.rs` for a reproduction.
    pub fn update(
        &mut self,
        observation: Sentence,
        mut algorithm: Box<dyn TradingAlgorithm>,
        search_order: Option<&SearchOrder>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<BeliefState, InductorError> {
        // 1. Append observation to observations (scratch copy).
        let mut observations = self.observations.clone();
        observations.push(observation);

        // 2. Every previously admitted algorithm draws one more policy.
        let mut trading_histories = self.trading_histories.clone();
        for (index, (algo, row)) in self
            .algorithms
            .iter_mut()
            .zip(trading_histories.iter_mut())
            .enumerate()
        {
            let policy = algo.next_policy().map_err(|err| {
                tracing::debug!(algorithm_index = index, "algorithm exhausted mid-update");
                err
            })?;
            row.push(policy);
        }

        // 3. The new algorithm draws one policy per update so far, including this one.
        let mut new_row = Vec::with_capacity(observations.len());
        for _ in 1..=observations.len() {
            new_row.push(algorithm.next_policy()?);
        }
        trading_histories.push(new_row);

        // 5. Combine every admitted algorithm's row into one ensemble policy.
        let ensemble_policy = trading_firm(&trading_histories, &observations, &self.credences)?;

        // 6. Tolerance tightens as more updates accumulate.
        let tolerance = (self.config.tolerance)(observations.len());

        // 7. Search for the next belief state that no admitted trader can exploit.
        let credences_next = find_credences(
            &ensemble_policy,
            &self.credences,
            &tolerance,
            search_order,
            cancellation,
        )?;

        // 8. Commit: every scratch value replaces the corresponding field atomically.
        self.observations = observations;
        self.algorithms.push(algorithm);
        self.trading_histories = trading_histories;
        self.credences = self.credences.with_next_update(credences_next.clone());

        tracing::info!(update = self.len(), "inductor update committed");

        // 9. Return the new belief state.
        Ok(credences_next)
    }
}
