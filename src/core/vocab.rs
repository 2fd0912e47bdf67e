use hashbrown::HashMap;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense index of a symbol within a [`Vocabulary`].
pub type SymbolId = usize;

/// Bidirectional mapping between symbol names and dense indices 0..N-1.
///
/// Immutable once built; both engines take a copy at construction time so
/// nothing shared and mutable crosses component boundaries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashMap<String, SymbolId>,
}

impl Vocabulary {
    /// Build from an ordered sequence of names.
    /// Duplicates collapse to the first occurrence.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self {
            names: Vec::new(),
            index: HashMap::new(),
        };
        for name in names {
            let name = name.into();
            if vocab.index.contains_key(&name) {
                continue;
            }
            let id = vocab.names.len();
            vocab.index.insert(name.clone(), id);
            vocab.names.push(name);
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn id(&self, name: &str) -> Option<SymbolId> {
        self.index.get(name).copied()
    }

    /// Like [`Vocabulary::id`] but fails with [`Error::UnknownSymbol`].
    pub fn require(&self, name: &str) -> Result<SymbolId> {
        self.id(name)
            .ok_or_else(|| Error::UnknownSymbol(name.to_string()))
    }

    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id).map(|s| s.as_str())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_get_dense_indices() {
        let vocab = Vocabulary::from_names(["King", "Queen", "Apple"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("King"), Some(0));
        assert_eq!(vocab.id("Queen"), Some(1));
        assert_eq!(vocab.id("Apple"), Some(2));
        assert_eq!(vocab.name(1), Some("Queen"));
        assert_eq!(vocab.name(3), None);
    }

    #[test]
    fn duplicates_collapse_to_first() {
        let vocab = Vocabulary::from_names(["a", "b", "a"]);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.id("a"), Some(0));
        assert_eq!(vocab.id("b"), Some(1));
    }

    #[test]
    fn require_fails_for_unknown() {
        let vocab = Vocabulary::from_names(["a"]);
        assert_eq!(vocab.require("a"), Ok(0));
        assert_eq!(
            vocab.require("z"),
            Err(Error::UnknownSymbol("z".to_string()))
        );
    }
}
