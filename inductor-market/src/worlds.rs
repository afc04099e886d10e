use std::collections::BTreeSet;

use inductor_sentence::{BaseFacts, Sentence, SentenceError, World};

/// Enumerates every world consistent with `observations`, restricted to `domain`.
///
/// The atom set is `⋃ atoms(s)` for `s` in `observations ∪ domain`, sorted for
/// reproducibility. Every one of the `2^|atoms|` truth assignments to that atom set is
/// tried; an assignment survives iff every observation evaluates to true under it, and the
/// emitted [`World`] records the truth value of every sentence in `domain` (not just the
/// atoms) under the surviving assignment.
pub fn worlds_consistent_with(
    observations: &[Sentence],
    domain: &[Sentence],
) -> impl Iterator<Item = Result<World, SentenceError>> + '_ {
    let mut atoms: BTreeSet<String> = BTreeSet::new();
    for sentence in observations.iter().chain(domain.iter()) {
        atoms.extend(sentence.atoms());
    }
    let atoms: Vec<String> = atoms.into_iter().collect();
    let width = atoms.len() as u32;

    (0u64..(1u64 << width)).filter_map(move |bits| {
        let mut base_facts = BaseFacts::new();
        for (i, atom) in atoms.iter().enumerate() {
            base_facts.insert(atom.clone(), bits & (1 << i) != 0);
        }

        for observation in observations {
            match observation.evaluate(&base_facts) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => return Some(Err(err)),
            }
        }

        let mut assignment = Vec::with_capacity(domain.len());
        for sentence in domain {
            match sentence.evaluate(&base_facts) {
                Ok(value) => assignment.push((sentence.clone(), value)),
                Err(err) => return Some(Err(err)),
            }
        }
        Some(Ok(assignment.into_iter().collect()))
    })
}
