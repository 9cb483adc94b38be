use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The section letter of an item, as assigned by [`crate::Sectioner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Letter(pub char);
impl Letter {
    /// The bucket for empty keys and keys that start with a non-letter.
    pub const FALLBACK: Letter = Letter('#');

    /// The fixed A-Z sequence shown when every letter is requested.
    pub const ALPHABET: [Letter; 26] = {
        let mut letters = [Letter('A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Letter((b'A' + i as u8) as char);
            i += 1;
        }
        letters
    };

    /// The underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}
impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps each letter present in a grouping to the entry position where its section begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterIndex(BTreeMap<Letter, usize>);
impl LetterIndex {
    /// The recorded position for `letter`, if any row maps to it.
    pub fn get(&self, letter: Letter) -> Option<usize> {
        self.0.get(&letter).copied()
    }

    /// Letters and their positions, in ascending letter order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, usize)> + '_ {
        self.0.iter().map(|(letter, index)| (*letter, *index))
    }

    /// The number of letters recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no letters are recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records `index` for `letter` unless the letter already has a position.
    pub(crate) fn record_first(&mut self, letter: Letter, index: usize) {
        self.0.entry(letter).or_insert(index);
    }
}

/// The set of letters for which at least one row exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterSet(BTreeSet<Letter>);
impl LetterSet {
    /// Whether any row maps to `letter`.
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }

    /// Letters in ascending codepoint order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().copied()
    }

    /// The number of distinct letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, letter: Letter) {
        self.0.insert(letter);
    }
}
