use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CaseLevel, CollatorOptions, Strength},
};

use crate::{Entry, EntryKey, Letter, LetterIndex, LetterSet, Sectioner};

/// The output of [`group`]. The three parts are derived in the same pass and
/// belong together; never pair parts from different groupings.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<T> {
    /// The ordered, headered entry sequence.
    pub entries: Vec<Entry<T>>,
    /// Where each letter's section begins in `entries`.
    pub letter_index: LetterIndex,
    /// The letters that have at least one row.
    pub letter_set: LetterSet,
}
impl<T> Grouping<T> {
    /// A grouping with no entries.
    pub fn empty() -> Self {
        Self {
            entries: vec![],
            letter_index: LetterIndex::default(),
            letter_set: LetterSet::default(),
        }
    }

    /// The number of row entries.
    pub fn row_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_header()).count()
    }
}
impl<T> Default for Grouping<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Creates the collator used to order keys: case-insensitive and accent-aware.
pub fn create_collator() -> CollatorBorrowed<'static> {
    let mut collator_options = CollatorOptions::default();
    collator_options.strength = Some(Strength::Secondary);
    collator_options.case_level = Some(CaseLevel::Off);

    Collator::try_new(CollatorPreferences::default(), collator_options)
        .expect("compiled collation data is always available")
}

/// Sorts `items` by their key and partitions them into lettered sections.
///
/// The sort is by key alone and stable: items with equal keys keep their input
/// order. Each row's letter comes from [`Sectioner`]. A row whose letter the
/// collator can't tell apart from the current section's (`Ά` under `Α`), or whose
/// letter already had a section, joins the current section, so every letter has
/// exactly one contiguous run.
///
/// When `include_headers` is set, a header entry precedes each letter's first row
/// and the letter index points at the header; otherwise it points at the first row.
pub fn group<T>(
    items: impl IntoIterator<Item = T>,
    key_of: impl Fn(&T) -> String,
    include_headers: bool,
) -> Grouping<T> {
    let mut keyed: Vec<(String, T)> = items
        .into_iter()
        .map(|item| (key_of(&item), item))
        .collect();

    if keyed.is_empty() {
        return Grouping::empty();
    }

    let collator = create_collator();
    keyed.sort_by(|(a, _), (b, _)| collator.compare(a, b));

    let sectioner = Sectioner::new();
    let mut grouping = Grouping {
        entries: Vec::with_capacity(keyed.len()),
        ..Grouping::empty()
    };
    let mut current_letter: Option<Letter> = None;

    for (position, (key, value)) in keyed.into_iter().enumerate() {
        let mut letter = sectioner.letter_for(&key);
        if let Some(current) = current_letter
            && current != letter
            && (sectioner.same_section(current, letter) || grouping.letter_set.contains(letter))
        {
            letter = current;
        }
        grouping.letter_set.insert(letter);

        if current_letter != Some(letter) {
            current_letter = Some(letter);
            grouping
                .letter_index
                .record_first(letter, grouping.entries.len());
            if include_headers {
                grouping.entries.push(Entry::Header {
                    letter,
                    key: EntryKey::header(letter),
                });
            }
        }

        grouping.entries.push(Entry::Row {
            value,
            key: EntryKey::row(position),
        });
    }

    grouping
}
