use std::sync::Arc;

use indexmap::IndexSet;
use inductor_history::History;
use inductor_sentence::Sentence;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::FormulaError;

/// A symbolic expression over credences and prices: "the quantity of tokens to buy, as a
/// function of the credence history".
///
/// `TradingFormula` is a tagged-variant tree (wrapped in [`Arc`] for cheap cloning), not a
/// trait object hierarchy: every operation (`evaluate`, `bound`, `domain`) is a single match
/// over [`FormulaKind`], so adding behavior never requires touching a family of `impl`
/// blocks.
#[derive(Debug, Clone)]
pub struct TradingFormula(Arc<FormulaKind>);

#[derive(Debug)]
enum FormulaKind {
    Constant(BigRational),
    Price(Sentence, usize),
    Sum(Vec<TradingFormula>),
    Product(Vec<TradingFormula>),
    Max(Vec<TradingFormula>),
    Min(Vec<TradingFormula>),
    SafeReciprocal(TradingFormula),
}

impl TradingFormula {
    pub fn constant(k: BigRational) -> Self {
        Self(Arc::new(FormulaKind::Constant(k)))
    }

    pub fn zero() -> Self {
        Self::constant(BigRational::zero())
    }

    /// Looks up the credence assigned to `sentence` on the given 1-based `day`.
    pub fn price(sentence: Sentence, day: usize) -> Self {
        Self(Arc::new(FormulaKind::Price(sentence, day)))
    }

    pub fn sum(terms: impl IntoIterator<Item = TradingFormula>) -> Self {
        Self(Arc::new(FormulaKind::Sum(terms.into_iter().collect())))
    }

    pub fn product(terms: impl IntoIterator<Item = TradingFormula>) -> Self {
        Self(Arc::new(FormulaKind::Product(terms.into_iter().collect())))
    }

    pub fn max(terms: impl IntoIterator<Item = TradingFormula>) -> Self {
        Self(Arc::new(FormulaKind::Max(terms.into_iter().collect())))
    }

    pub fn min(terms: impl IntoIterator<Item = TradingFormula>) -> Self {
        Self(Arc::new(FormulaKind::Min(terms.into_iter().collect())))
    }

    /// `1 / max(1, evaluate(x))`: clips to at most 1, so multiplying by this factor only
    /// ever scales a trader down.
    pub fn safe_reciprocal(x: TradingFormula) -> Self {
        Self(Arc::new(FormulaKind::SafeReciprocal(x)))
    }

    /// Evaluates this formula against `history`. Total whenever every `(sentence, day)`
    /// referenced by a `Price` node is present and in range.
    pub fn evaluate(&self, history: &History) -> Result<BigRational, FormulaError> {
        match self.0.as_ref() {
            FormulaKind::Constant(k) => Ok(k.clone()),
            FormulaKind::Price(sentence, day) => {
                Ok(history.lookup(sentence, *day)?.into_rational())
            }
            FormulaKind::Sum(terms) => {
                let mut total = BigRational::zero();
                for term in terms {
                    total += term.evaluate(history)?;
                }
                Ok(total)
            }
            FormulaKind::Product(terms) => {
                let mut total = BigRational::one();
                for term in terms {
                    total *= term.evaluate(history)?;
                }
                Ok(total)
            }
            FormulaKind::Max(terms) => fold_extremum(terms, history, BigRational::max),
            FormulaKind::Min(terms) => fold_extremum(terms, history, BigRational::min),
            FormulaKind::SafeReciprocal(x) => {
                let v = x.evaluate(history)?;
                let denom = if v > BigRational::one() {
                    v
                } else {
                    BigRational::one()
                };
                Ok(BigRational::one() / denom)
            }
        }
    }

    /// An upper bound on `|evaluate(history)|` for any history whose prices lie in `[0, 1]`.
    pub fn bound(&self) -> BigRational {
        match self.0.as_ref() {
            FormulaKind::Constant(k) => k.abs(),
            FormulaKind::Price(_, _) => BigRational::one(),
            FormulaKind::Sum(terms) => terms.iter().map(TradingFormula::bound).sum(),
            FormulaKind::Product(terms) => {
                terms.iter().map(TradingFormula::bound).fold(BigRational::one(), |a, b| a * b)
            }
            FormulaKind::Max(terms) | FormulaKind::Min(terms) => terms
                .iter()
                .map(TradingFormula::bound)
                .fold(BigRational::zero(), |a, b| if b > a { b } else { a }),
            FormulaKind::SafeReciprocal(_) => BigRational::one(),
        }
    }

    /// The set of sentences this formula's `Price` nodes depend on, in first-referenced
    /// order (so the default search order over the domain is deterministic).
    pub fn domain(&self) -> IndexSet<Sentence> {
        let mut out = IndexSet::new();
        self.collect_domain(&mut out);
        out
    }

    fn collect_domain(&self, out: &mut IndexSet<Sentence>) {
        match self.0.as_ref() {
            FormulaKind::Constant(_) => {}
            FormulaKind::Price(sentence, _) => {
                out.insert(sentence.clone());
            }
            FormulaKind::Sum(terms)
            | FormulaKind::Product(terms)
            | FormulaKind::Max(terms)
            | FormulaKind::Min(terms) => {
                for term in terms {
                    term.collect_domain(out);
                }
            }
            FormulaKind::SafeReciprocal(x) => x.collect_domain(out),
        }
    }
}

fn fold_extremum(
    terms: &[TradingFormula],
    history: &History,
    pick: impl Fn(BigRational, BigRational) -> BigRational,
) -> Result<BigRational, FormulaError> {
    let mut iter = terms.iter();
    let first = match iter.next() {
        Some(term) => term.evaluate(history)?,
        None => return Ok(BigRational::zero()),
    };
    let mut acc = first;
    for term in iter {
        acc = pick(acc, term.evaluate(history)?);
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inductor_history::BeliefState;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn history_with(prices: &[(&str, i64, i64)]) -> History {
        let mut h = History::new();
        for &(label, n, d) in prices {
            let mut state = BeliefState::new();
            state.insert(
                Sentence::atom(label),
                inductor_history::Credence::new(r(n, d)),
            );
            h = h.with_next_update(state);
        }
        h
    }

    #[test]
    fn constant_evaluates_and_bounds_to_its_absolute_value() {
        let f = TradingFormula::constant(r(-3, 1));
        let h = History::new();
        assert_eq!(f.evaluate(&h).unwrap(), r(-3, 1));
        assert_eq!(f.bound(), r(3, 1));
        assert!(f.domain().is_empty());
    }

    #[test]
    fn price_looks_up_history_and_bounds_to_one() {
        let h = history_with(&[("a", 1, 2)]);
        let f = TradingFormula::price(Sentence::atom("a"), 1);
        assert_eq!(f.evaluate(&h).unwrap(), r(1, 2));
        assert_eq!(f.bound(), BigRational::one());
        assert_eq!(f.domain().len(), 1);
    }

    #[test]
    fn sum_and_product_compose() {
        let h = history_with(&[("a", 1, 2)]);
        let price = TradingFormula::price(Sentence::atom("a"), 1);
        let sum = TradingFormula::sum([TradingFormula::constant(r(1, 1)), price.clone()]);
        assert_eq!(sum.evaluate(&h).unwrap(), r(3, 2));
        assert_eq!(sum.bound(), r(2, 1));

        let product = TradingFormula::product([TradingFormula::constant(r(2, 1)), price]);
        assert_eq!(product.evaluate(&h).unwrap(), r(1, 1));
        assert_eq!(product.bound(), r(2, 1));
    }

    #[test]
    fn max_and_min_pick_extremes_and_bound_by_the_largest_child() {
        let h = History::new();
        let a = TradingFormula::constant(r(1, 1));
        let b = TradingFormula::constant(r(-5, 1));
        assert_eq!(TradingFormula::max([a.clone(), b.clone()]).evaluate(&h).unwrap(), r(1, 1));
        assert_eq!(TradingFormula::min([a.clone(), b.clone()]).evaluate(&h).unwrap(), r(-5, 1));
        assert_eq!(TradingFormula::max([a.clone(), b.clone()]).bound(), r(5, 1));
        assert_eq!(TradingFormula::min([a, b]).bound(), r(5, 1));
    }

    #[test]
    fn safe_reciprocal_clips_to_one_and_never_exceeds_it() {
        let h = History::new();
        let small = TradingFormula::safe_reciprocal(TradingFormula::constant(r(1, 2)));
        assert_eq!(small.evaluate(&h).unwrap(), BigRational::one());

        let large = TradingFormula::safe_reciprocal(TradingFormula::constant(r(4, 1)));
        assert_eq!(large.evaluate(&h).unwrap(), r(1, 4));
        assert_eq!(large.bound(), BigRational::one());
    }
}
