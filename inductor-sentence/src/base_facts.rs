use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A truth assignment over atom labels.
///
/// Backed by an [`IndexMap`] (as the teacher's crates prefer over `std::collections::HashMap`
/// wherever iteration order is observable) so that a [`BaseFacts`] built in a particular
/// order can be replayed deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BaseFacts(IndexMap<String, bool>);

impl BaseFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: impl Into<String>, value: bool) -> Self {
        self.0.insert(label.into(), value);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, value: bool) {
        self.0.insert(label.into(), value);
    }

    pub fn get(&self, label: &str) -> Option<bool> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for BaseFacts {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
