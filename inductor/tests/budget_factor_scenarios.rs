//! Budget-factor scenarios from the testable-properties scenario suite: a trivial
//! single-atom observation, a disjunctive observation that widens the consistent-world set,
//! and an already-bankrupt trader forced to a zero factor.

use inductor::{
    budget_factor, BeliefState, Credence, History, Sentence, TradingFormula, TradingPolicy,
};
use num_bigint::BigInt;
use num_rational::BigRational;

fn r(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn history_pricing(sentence: &Sentence, credence: BigRational) -> History {
    let mut state = BeliefState::new();
    state.insert(sentence.clone(), Credence::new(credence));
    History::new().with_next_update(state)
}

#[test]
fn trivial_single_atom_observation_always_yields_a_factor_of_one() {
    let phi = Sentence::atom("phi");
    let mut policy = TradingPolicy::new();
    policy.insert(phi.clone(), TradingFormula::constant(r(10, 1)));

    let factor = budget_factor(&r(2, 1), &[], &phi, &[], &policy, &History::new()).unwrap();

    for credence in [r(0, 1), r(1, 5), r(3, 5), r(1, 1)] {
        let h = history_pricing(&phi, credence);
        assert_eq!(factor.evaluate(&h).unwrap(), r(1, 1));
    }
}

#[test]
fn disjunctive_observation_scales_the_factor_with_credence() {
    let phi = Sentence::atom("phi");
    let psi = Sentence::atom("psi");
    let observation = Sentence::or([phi.clone(), psi.clone()]);

    let mut policy = TradingPolicy::new();
    policy.insert(phi.clone(), TradingFormula::constant(r(10, 1)));

    let factor =
        budget_factor(&r(2, 1), &[], &observation, &[], &policy, &History::new()).unwrap();

    let expect = [
        (r(1, 1), r(1, 5)),
        (r(2, 5), r(1, 2)),
        (r(1, 5), r(1, 1)),
        (r(0, 1), r(1, 1)),
    ];
    for (credence, expected) in expect {
        let h = history_pricing(&phi, credence);
        assert_eq!(factor.evaluate(&h).unwrap(), expected);
    }
}

#[test]
fn trader_already_bankrupt_in_a_consistent_prefix_forces_zero() {
    let phi = Sentence::atom("phi");
    let psi = Sentence::atom("psi");
    let observation = Sentence::or([phi.clone(), psi.clone()]);

    let mut past_credences = BeliefState::new();
    past_credences.insert(phi.clone(), Credence::new(r(6, 10)));
    past_credences.insert(psi.clone(), Credence::new(r(7, 10)));
    let credences = History::new().with_next_update(past_credences);

    let mut past_policy = TradingPolicy::new();
    past_policy.insert(psi.clone(), TradingFormula::constant(r(10, 1)));

    let mut next_policy = TradingPolicy::new();
    next_policy.insert(phi.clone(), TradingFormula::constant(r(10, 1)));

    let factor = budget_factor(
        &r(2, 1),
        &[observation.clone()],
        &observation,
        &[past_policy],
        &next_policy,
        &credences,
    )
    .unwrap();

    let h = History::new();
    assert_eq!(factor.evaluate(&h).unwrap(), r(0, 1));
}
