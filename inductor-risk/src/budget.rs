use indexmap::IndexSet;
use inductor_formula::{TradingFormula, TradingPolicy};
use inductor_history::History;
use inductor_market::{evaluate, worlds_consistent_with};
use inductor_sentence::Sentence;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::RiskError;

/// Slack subtracted from the budget floor before the bankruptcy check, so a trader sitting
/// exactly at `-B` is not spuriously declared bankrupt by rounding.
fn slack() -> BigRational {
    BigRational::new(BigInt::from(1), BigInt::from(10_000_000))
}

/// The two shapes a budget factor computation can end in, echoing the approve/refuse split
/// a [`risk`](https://docs.rs/risk)-style check returns, collapsed to a single
/// [`TradingFormula`] at the public boundary.
enum BudgetOutcome {
    AlreadyBankrupt,
    Factor(TradingFormula),
}

impl BudgetOutcome {
    fn into_formula(self) -> TradingFormula {
        match self {
            BudgetOutcome::AlreadyBankrupt => TradingFormula::zero(),
            BudgetOutcome::Factor(formula) => formula,
        }
    }
}

/// Builds a symbolic multiplier for `next_trading_policy` that keeps the trader's cumulative
/// value-of-holdings at or above `-budget` in every world consistent with
/// `observation_history ∪ {next_observation}`.
///
/// `trading_history` and `observation_history` must be the same length `n`; `credence_history`
/// holds the `n` belief states already committed. See spec §4.7 for the four-step algorithm
/// this follows exactly.
pub fn budget_factor(
    budget: &BigRational,
    observation_history: &[Sentence],
    next_observation: &Sentence,
    trading_history: &[TradingPolicy],
    next_trading_policy: &TradingPolicy,
    credence_history: &History,
) -> Result<TradingFormula, RiskError> {
    if *budget <= BigRational::zero() {
        return Err(RiskError::InvariantViolation(format!(
            "budget must be strictly positive, got {budget}"
        )));
    }

    let support0: IndexSet<Sentence> = trading_history
        .iter()
        .flat_map(TradingPolicy::keys)
        .cloned()
        .collect();
    let domain0: Vec<Sentence> = support0.iter().cloned().collect();

    let floor = -budget.clone() + slack();
    for prefix_len in 1..=trading_history.len() {
        for world in worlds_consistent_with(&observation_history[..prefix_len], &domain0) {
            let world = world?;
            let mut cumulative = BigRational::zero();
            for policy in &trading_history[..prefix_len] {
                cumulative += evaluate(policy, credence_history, &world)?;
            }
            if cumulative < floor {
                tracing::debug!(prefix_len, "budget factor: trader already bankrupt");
                return Ok(BudgetOutcome::AlreadyBankrupt.into_formula());
            }
        }
    }

    let mut support = support0;
    support.extend(next_trading_policy.keys().cloned());
    let domain: Vec<Sentence> = support.into_iter().collect();

    let mut observations_prime: Vec<Sentence> = observation_history.to_vec();
    observations_prime.push(next_observation.clone());

    let next_day = credence_history.len() + 1;

    let mut divisors = Vec::new();
    for world in worlds_consistent_with(&observations_prime, &domain) {
        let world = world?;

        let mut prior = BigRational::zero();
        for policy in trading_history {
            prior += evaluate(policy, credence_history, &world)?;
        }
        let remaining = budget.clone() + prior;
        if remaining <= BigRational::zero() {
            // Should not occur: the prefix bankruptcy check above already guarantees every
            // consistent prefix's cumulative value stays above `-budget`, so `remaining`
            // here is provably positive. A non-positive value signals a logic bug rather
            // than a reachable runtime condition.
            return Err(RiskError::InvariantViolation(format!(
                "remaining budget non-positive ({remaining}) after the prefix bankruptcy check already passed"
            )));
        }

        let mut terms = Vec::with_capacity(next_trading_policy.len());
        for (sentence, formula) in next_trading_policy {
            let payout = if world.get(sentence).unwrap_or(false) {
                TradingFormula::constant(BigRational::one())
            } else {
                TradingFormula::zero()
            };
            let price = TradingFormula::price(sentence.clone(), next_day);
            let payout_minus_price = TradingFormula::sum([
                payout,
                TradingFormula::product([TradingFormula::constant(-BigRational::one()), price]),
            ]);
            terms.push(TradingFormula::product([formula.clone(), payout_minus_price]));
        }
        let value_of_w = TradingFormula::sum(terms);

        let inverse_remaining = TradingFormula::constant(BigRational::one() / remaining);
        let divisor = TradingFormula::product([
            inverse_remaining,
            TradingFormula::product([
                TradingFormula::constant(-BigRational::one()),
                value_of_w,
            ]),
        ]);
        divisors.push(divisor);
    }

    let final_divisor = TradingFormula::max(divisors);
    Ok(BudgetOutcome::Factor(TradingFormula::safe_reciprocal(final_divisor)).into_formula())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inductor_history::{BeliefState, Credence};

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn no_history_yet_yields_a_nontrivial_reciprocal_factor() {
        let a = Sentence::atom("a");
        let mut next_policy = TradingPolicy::new();
        next_policy.insert(a.clone(), TradingFormula::constant(r(1, 1)));

        let factor = budget_factor(
            &r(1, 1),
            &[],
            &a,
            &[],
            &next_policy,
            &History::new(),
        )
        .unwrap();

        // One unit long on `a` risks at most 1 against a budget of 1, so the factor is 1 (no
        // need to scale down) no matter what the next update's price for `a` turns out to be.
        let mut next_day = BeliefState::new();
        next_day.insert(a.clone(), Credence::new(r(1, 2)));
        let h = History::new().with_next_update(next_day);
        assert_eq!(factor.evaluate(&h).unwrap(), BigRational::one());
    }

    #[test]
    fn bankruptcy_in_an_earlier_prefix_forces_the_zero_formula() {
        let obs = Sentence::atom("obs");
        let a = Sentence::atom("a");

        let mut day1 = BeliefState::new();
        day1.insert(a.clone(), Credence::new(r(1, 2)));
        let credences = History::new().with_next_update(day1);

        let mut policy1 = TradingPolicy::new();
        // A huge long position against a tiny budget guarantees bankruptcy in the world where
        // `a` turns out false: value = 1000 * (0 - 0.5) = -500, far below a budget floor of 1.
        // The day-1 observation is the unrelated atom `obs`, so both truth values of `a`
        // remain consistent with it.
        policy1.insert(a.clone(), TradingFormula::constant(r(1000, 1)));

        let mut next_policy = TradingPolicy::new();
        next_policy.insert(a.clone(), TradingFormula::constant(r(1, 1)));

        let factor = budget_factor(
            &r(1, 1),
            &[obs.clone()],
            &obs,
            &[policy1],
            &next_policy,
            &credences,
        )
        .unwrap();

        let h = History::new();
        assert_eq!(factor.evaluate(&h).unwrap(), BigRational::zero());
    }

    #[test]
    fn non_positive_budget_is_rejected_as_an_invariant_violation() {
        let a = Sentence::atom("a");
        let mut next_policy = TradingPolicy::new();
        next_policy.insert(a.clone(), TradingFormula::constant(r(1, 1)));

        for bad_budget in [r(0, 1), r(-1, 1)] {
            let result = budget_factor(
                &bad_budget,
                &[],
                &a,
                &[],
                &next_policy,
                &History::new(),
            );
            assert!(matches!(result, Err(RiskError::InvariantViolation(_))));
        }
    }
}
