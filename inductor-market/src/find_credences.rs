use indexmap::IndexSet;
use inductor_enumerate::{product, rationals_between};
use inductor_formula::TradingPolicy;
use inductor_history::{BeliefState, Credence, History};
use inductor_sentence::Sentence;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::cancellation::CancellationToken;
use crate::error::MarketError;
use crate::evaluate::{all_truth_assignments, evaluate};

/// A source of candidate credence tuples over a search domain of the given size. The
/// default ([`default_search_order`]) enumerates `[0, 1]^|domain|` via the product of
/// `rationals_between(0, 1)` with itself; callers may substitute a different order (e.g. to
/// bias the search toward previously-successful regions) as long as it still eventually
/// covers every rational tuple it needs to.
pub type SearchOrder = dyn Fn(usize) -> Box<dyn Iterator<Item = Vec<BigRational>>>;

/// The default candidate order: all rational tuples in `[0, 1]^n`, lexicographically first
/// assignment first.
pub fn default_search_order(n: usize) -> Box<dyn Iterator<Item = Vec<BigRational>>> {
    Box::new(product(
        rationals_between(BigRational::zero(), BigRational::one()),
        n as u64,
    ))
}

/// Searches for a belief state such that no world over `policy`'s support yields the
/// trader a value-of-holdings greater than `tolerance`.
///
/// 1. `support` is the set of sentences `policy` prices.
/// 2. `search_domain` is `support` unioned with every `Price`-referenced sentence in any of
///    `policy`'s formulas.
/// 3. Candidates are drawn from `search_order` (default: [`default_search_order`]) over
///    `search_domain`.
/// 4. For each candidate, the extended history is built and the trader's value-of-holdings
///    is checked against every one of the `2^|support|` raw truth assignments to `support`.
/// 5. The first candidate satisfying every world is returned; this is also the tie-break
///    policy (the search order fixes which candidate is "first").
pub fn find_credences(
    policy: &TradingPolicy,
    history: &History,
    tolerance: &BigRational,
    search_order: Option<&SearchOrder>,
    cancellation: Option<&CancellationToken>,
) -> Result<BeliefState, MarketError> {
    let support: IndexSet<Sentence> = policy.keys().cloned().collect();

    let mut search_domain: IndexSet<Sentence> = support.clone();
    for formula in policy.values() {
        search_domain.extend(formula.domain());
    }

    let candidates: Box<dyn Iterator<Item = Vec<BigRational>>> = match search_order {
        Some(order) => order(search_domain.len()),
        None => default_search_order(search_domain.len()),
    };

    let worlds: Vec<_> = all_truth_assignments(&support).collect();

    for candidate in candidates {
        if cancellation.is_some_and(CancellationToken::is_cancelled) {
            return Err(MarketError::Cancelled);
        }

        let state: BeliefState = search_domain
            .iter()
            .zip(candidate.into_iter())
            .map(|(sentence, credence)| (sentence.clone(), Credence::new(credence)))
            .collect();
        let extended = history.with_next_update(state.clone());

        let mut satisfied = true;
        for world in &worlds {
            let value = evaluate(policy, &extended, world)?;
            if value > *tolerance {
                satisfied = false;
                break;
            }
        }

        if satisfied {
            tracing::debug!(support = support.len(), "find_credences converged");
            return Ok(state);
        }
    }

    unreachable!(
        "the default search order is infinite and the ensemble's tolerance schedule \
         guarantees a satisfying candidate exists"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use inductor_formula::TradingFormula;
    use num_bigint::BigInt;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn trivial_search_over_empty_history_finds_zero() {
        let mut policy = TradingPolicy::new();
        let s1 = Sentence::atom("1");
        policy.insert(s1.clone(), TradingFormula::price(s1.clone(), 1));

        let state = find_credences(&policy, &History::new(), &r(1, 2), None, None).unwrap();
        assert_eq!(state.get(&s1), Some(&Credence::zero()));
    }

    #[test]
    fn one_variable_search_converges_near_one_third() {
        let s1 = Sentence::atom("1");
        let mut policy = TradingPolicy::new();
        policy.insert(
            s1.clone(),
            TradingFormula::sum([
                TradingFormula::constant(r(1, 1)),
                TradingFormula::product([
                    TradingFormula::constant(r(-3, 1)),
                    TradingFormula::price(s1.clone(), 1),
                ]),
            ]),
        );

        let tol = BigRational::new(BigInt::from(1), BigInt::from(100_000));
        let state = find_credences(&policy, &History::new(), &tol, None, None).unwrap();
        let c = state.get(&s1).unwrap().to_f64();
        assert!((c - 1.0 / 3.0).abs() < 1e-3);
    }
}
