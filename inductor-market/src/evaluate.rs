use indexmap::{IndexMap, IndexSet};
use inductor_history::History;
use inductor_sentence::Sentence;
use inductor_formula::TradingPolicy;
use num_rational::BigRational;
use num_traits::Zero;

use crate::error::MarketError;

/// Computes the value of the trades executed by `policy` in `world`: for every `(sentence,
/// formula)` pair, `quantity * (payout - price)` where `quantity = formula.evaluate(history)`,
/// `price = history.price(sentence)`, and `payout` is 1 if `world` assigns `sentence` true
/// (0 otherwise, including when `sentence` is absent from `world`).
pub fn evaluate(
    policy: &TradingPolicy,
    history: &History,
    world: &IndexMap<Sentence, bool>,
) -> Result<BigRational, MarketError> {
    let mut value_of_holdings = BigRational::zero();
    for (sentence, formula) in policy {
        let quantity = formula.evaluate(history)?;
        let price = history.price(sentence).into_rational();
        let payout = if world.get(sentence).copied().unwrap_or(false) {
            BigRational::from_integer(1.into())
        } else {
            BigRational::zero()
        };
        value_of_holdings += quantity * (payout - price);
    }
    Ok(value_of_holdings)
}

/// Enumerates every one of the `2^|support|` raw truth assignments over `support`, with no
/// propositional-consistency filtering: the market maker must be robust against every
/// possible payout pattern for its own support, not only the logically consistent ones
/// (consistency is what [`crate::worlds_consistent_with`] is for).
pub fn all_truth_assignments(
    support: &IndexSet<Sentence>,
) -> impl Iterator<Item = IndexMap<Sentence, bool>> + '_ {
    let n = support.len();
    (0u64..(1u64 << n)).map(move |bits| {
        support
            .iter()
            .enumerate()
            .map(|(i, sentence)| (sentence.clone(), bits & (1 << i) != 0))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inductor_formula::TradingFormula;
    use inductor_history::{BeliefState, Credence};
    use num_bigint::BigInt;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn evaluate_matches_worked_example_from_spec() {
        // world = {1:T, 2:F, 3:F}; three days of history; policy references day 2 and day 3.
        let s1 = Sentence::atom("1");
        let s2 = Sentence::atom("2");
        let s3 = Sentence::atom("3");

        let mut h = History::new();
        let mut day1 = BeliefState::new();
        day1.insert(s1.clone(), Credence::new(r(6, 10)));
        h = h.with_next_update(day1);

        let mut day2 = BeliefState::new();
        day2.insert(s1.clone(), Credence::new(r(7, 10)));
        day2.insert(s2.clone(), Credence::new(r(4, 10)));
        h = h.with_next_update(day2);

        let mut day3 = BeliefState::new();
        day3.insert(s1.clone(), Credence::new(r(8, 10)));
        day3.insert(s2.clone(), Credence::new(r(1, 10)));
        day3.insert(s3.clone(), Credence::new(r(5, 10)));
        h = h.with_next_update(day3);

        let mut policy = TradingPolicy::new();
        policy.insert(s1.clone(), TradingFormula::price(s1.clone(), 2));
        policy.insert(s2.clone(), TradingFormula::price(s2.clone(), 3));

        let world: IndexMap<Sentence, bool> = [(s1, true), (s2, false), (s3, false)]
            .into_iter()
            .collect();

        let value = evaluate(&policy, &h, &world).unwrap();
        assert_eq!(value, r(13, 100));
    }

    #[test]
    fn all_truth_assignments_enumerates_two_to_the_n() {
        let support: IndexSet<Sentence> = [Sentence::atom("a"), Sentence::atom("b")]
            .into_iter()
            .collect();
        let worlds: Vec<_> = all_truth_assignments(&support).collect();
        assert_eq!(worlds.len(), 4);
    }
}
