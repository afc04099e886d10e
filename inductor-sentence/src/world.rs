use std::ops::Deref;

use indexmap::IndexMap;

use crate::base_facts::BaseFacts;
use crate::error::SentenceError;
use crate::sentence::Sentence;

/// A truth assignment for a fixed domain of sentences, induced by evaluating each sentence
/// in the domain against a [`BaseFacts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World(IndexMap<Sentence, bool>);

impl World {
    /// Evaluates every sentence in `domain` against `base_facts`.
    pub fn build(domain: &[Sentence], base_facts: &BaseFacts) -> Result<Self, SentenceError> {
        let mut out = IndexMap::with_capacity(domain.len());
        for sentence in domain {
            let value = sentence.evaluate(base_facts)?;
            out.insert(sentence.clone(), value);
        }
        Ok(Self(out))
    }

    /// The truth value this world assigns to `sentence`, if it is in the domain.
    pub fn get(&self, sentence: &Sentence) -> Option<bool> {
        self.0.get(sentence).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for World {
    type Target = IndexMap<Sentence, bool>;

    fn deref(&self) -> &IndexMap<Sentence, bool> {
        &self.0
    }
}

impl FromIterator<(Sentence, bool)> for World {
    fn from_iter<T: IntoIterator<Item = (Sentence, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_evaluates_domain_over_base_facts() {
        let a = Sentence::atom("a");
        let not_a = Sentence::not(a.clone());
        let base = BaseFacts::new().with("a", true);
        let world = World::build(&[a.clone(), not_a.clone()], &base).unwrap();
        assert_eq!(world.get(&a), Some(true));
        assert_eq!(world.get(&not_a), Some(false));
    }
}
