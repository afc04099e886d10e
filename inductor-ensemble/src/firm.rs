use indexmap::IndexMap;
use inductor_formula::{TradingFormula, TradingPolicy};
use inductor_history::History;
use inductor_risk::budget_factor;
use inductor_sentence::Sentence;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::error::EnsembleError;

fn power_of_two_weight(exponent: usize) -> BigRational {
    BigRational::new(BigInt::from(1), BigInt::from(2).pow(exponent as u32))
}

/// Combines every admitted algorithm's trading history into a single policy for the next
/// update, via the doubly-geometric weighting of spec §4.8: over algorithm admission order
/// `k` and, within each algorithm, over a budgeted series `b = 1..net_value_bound` plus one
/// unbudgeted tail term.
///
/// `trading_histories[k]` is algorithm `k`'s policy for every update so far (length `n`, same
/// as `observation_history`); `credence_history` holds the `n - 1` belief states committed
/// before the update this policy is being built for.
pub fn trading_firm(
    trading_histories: &[Vec<TradingPolicy>],
    observation_history: &[Sentence],
    credence_history: &History,
) -> Result<TradingPolicy, EnsembleError> {
    let mut terms: IndexMap<Sentence, Vec<TradingFormula>> = IndexMap::new();

    for (k, row) in trading_histories.iter().enumerate() {
        if row.is_empty() {
            continue;
        }

        let mut clipped = row.clone();
        let clip_len = k.min(clipped.len());
        for entry in &mut clipped[..clip_len] {
            *entry = TradingPolicy::new();
        }

        let total_bound: BigRational = clipped
            .iter()
            .flat_map(TradingPolicy::values)
            .map(TradingFormula::bound)
            .sum();
        let net_value_bound = (total_bound * BigRational::from_integer(BigInt::from(2)))
            .ceil()
            .to_integer()
            .to_usize()
            .unwrap_or(0);

        let (trading_prefix, next_policy) = clipped.split_at(clipped.len() - 1);
        let next_policy = &next_policy[0];
        let observation_prefix = &observation_history[..observation_history.len() - 1];
        let next_observation = &observation_history[observation_history.len() - 1];

        for b in 1..=net_value_bound {
            let bf = budget_factor(
                &BigRational::from_integer(BigInt::from(b)),
                observation_prefix,
                next_observation,
                trading_prefix,
                next_policy,
                credence_history,
            )?;
            let weight = power_of_two_weight(k + 1 + b);
            for (sentence, expr) in next_policy {
                terms.entry(sentence.clone()).or_default().push(
                    TradingFormula::product([
                        TradingFormula::constant(weight.clone()),
                        bf.clone(),
                        expr.clone(),
                    ]),
                );
            }
            tracing::debug!(k, b, net_value_bound, "ensemble: budgeted term added");
        }

        let tail_weight = power_of_two_weight(k + 1 + net_value_bound);
        for (sentence, expr) in next_policy {
            terms.entry(sentence.clone()).or_default().push(
                TradingFormula::product([
                    TradingFormula::constant(tail_weight.clone()),
                    expr.clone(),
                ]),
            );
        }
    }

    Ok(terms
        .into_iter()
        .map(|(sentence, parts)| (sentence, TradingFormula::sum(parts)))
        .collect())
}
