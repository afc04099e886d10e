use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::base_facts::BaseFacts;
use crate::error::SentenceError;

/// A combination of atoms and logical connectives that evaluates to true or false over a
/// given [`BaseFacts`] assignment.
///
/// `Sentence` is a cheap-to-clone value object: it wraps its variant in an [`Arc`] so
/// structural equality and hashing walk the tree once but cloning a sentence (as happens
/// constantly while building trading formulas and worlds) is a pointer bump.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Sentence(Arc<SentenceKind>);

#[derive(Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
enum SentenceKind {
    Atom(String),
    Negation(Sentence),
    Disjunction(Vec<Sentence>),
    Conjunction(Vec<Sentence>),
    Implication(Sentence, Sentence),
    Iff(Sentence, Sentence),
}

impl Sentence {
    /// An unanalyzed propositional symbol identified by `label`.
    pub fn atom(label: impl Into<String>) -> Self {
        Self(Arc::new(SentenceKind::Atom(label.into())))
    }

    /// True iff `inner` is false.
    pub fn not(inner: Sentence) -> Self {
        Self(Arc::new(SentenceKind::Negation(inner)))
    }

    /// True iff any disjunct is true.
    pub fn or(disjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        Self(Arc::new(SentenceKind::Disjunction(
            disjuncts.into_iter().collect(),
        )))
    }

    /// True iff every conjunct is true.
    pub fn and(conjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        Self(Arc::new(SentenceKind::Conjunction(
            conjuncts.into_iter().collect(),
        )))
    }

    /// True unless `antecedent` is true and `consequent` is false.
    pub fn implies(antecedent: Sentence, consequent: Sentence) -> Self {
        Self(Arc::new(SentenceKind::Implication(antecedent, consequent)))
    }

    /// True iff `left` and `right` have the same truth value.
    pub fn iff(left: Sentence, right: Sentence) -> Self {
        Self(Arc::new(SentenceKind::Iff(left, right)))
    }

    /// Evaluates this sentence over `base_facts`.
    ///
    /// Total whenever `base_facts` supplies every atom in [`Sentence::atoms`]; otherwise
    /// returns [`SentenceError::MissingBaseFact`] for the first missing atom encountered.
    pub fn evaluate(&self, base_facts: &BaseFacts) -> Result<bool, SentenceError> {
        match self.0.as_ref() {
            SentenceKind::Atom(label) => {
                base_facts
                    .get(label)
                    .ok_or_else(|| SentenceError::MissingBaseFact {
                        label: label.clone(),
                    })
            }
            SentenceKind::Negation(inner) => inner.evaluate(base_facts).map(|v| !v),
            SentenceKind::Disjunction(terms) => {
                let mut any = false;
                for term in terms {
                    any |= term.evaluate(base_facts)?;
                }
                Ok(any)
            }
            SentenceKind::Conjunction(terms) => {
                let mut all = true;
                for term in terms {
                    all &= term.evaluate(base_facts)?;
                }
                Ok(all)
            }
            SentenceKind::Implication(antecedent, consequent) => {
                let a = antecedent.evaluate(base_facts)?;
                if !a {
                    return Ok(true);
                }
                consequent.evaluate(base_facts)
            }
            SentenceKind::Iff(left, right) => {
                Ok(left.evaluate(base_facts)? == right.evaluate(base_facts)?)
            }
        }
    }

    /// The transitive set of atom labels referenced by this sentence, sorted for
    /// deterministic downstream enumeration.
    pub fn atoms(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_atoms(&mut out);
        out
    }

    fn collect_atoms(&self, out: &mut BTreeSet<String>) {
        match self.0.as_ref() {
            SentenceKind::Atom(label) => {
                out.insert(label.clone());
            }
            SentenceKind::Negation(inner) => inner.collect_atoms(out),
            SentenceKind::Disjunction(terms) | SentenceKind::Conjunction(terms) => {
                for term in terms {
                    term.collect_atoms(out);
                }
            }
            SentenceKind::Implication(a, c) => {
                a.collect_atoms(out);
                c.collect_atoms(out);
            }
            SentenceKind::Iff(l, r) => {
                l.collect_atoms(out);
                r.collect_atoms(out);
            }
        }
    }

    fn is_atom(&self) -> bool {
        matches!(self.0.as_ref(), SentenceKind::Atom(_))
    }
}

fn parenthize(sentence: &Sentence) -> String {
    if sentence.is_atom() {
        sentence.to_string()
    } else {
        format!("({sentence})")
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            SentenceKind::Atom(label) => write!(f, "{label}"),
            SentenceKind::Negation(inner) => write!(f, "\u{ac}{}", parenthize(inner)),
            SentenceKind::Disjunction(terms) => {
                let rendered: Vec<String> = terms.iter().map(parenthize).collect();
                write!(f, "{}", rendered.join(" | "))
            }
            SentenceKind::Conjunction(terms) => {
                let rendered: Vec<String> = terms.iter().map(parenthize).collect();
                write!(f, "{}", rendered.join(" & "))
            }
            SentenceKind::Implication(a, c) => write!(f, "{} \u{2192} {}", parenthize(a), parenthize(c)),
            SentenceKind::Iff(l, r) => write!(f, "{} \u{27f7} {}", parenthize(l), parenthize(r)),
        }
    }
}
