//! First-occurrence deduplication
//!
//! Curation is a single in-memory pass, so a plain hash set is enough.

use ahash::RandomState;
use hashbrown::HashSet;

/// Set of words already emitted during a curation pass
#[derive(Debug, Default)]
pub struct SeenWords {
    set: HashSet<String, RandomState>,
}

impl SeenWords {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Record a word as emitted
    pub fn insert(&mut self, word: &str) {
        if !self.set.contains(word) {
            self.set.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }
}
