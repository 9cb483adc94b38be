use std::cmp::Ordering;

use icu_collator::{
    Collator, CollatorBorrowed, CollatorPreferences,
    options::{CaseLevel, CollatorOptions, Strength},
};

use crate::Letter;

/// Assigns keys to lettered sections.
///
/// A key's letter is its uppercased initial. Latin initials outside A-Z are
/// folded onto the A-Z letter the collator files them under, so `É` and `Æ`
/// land in `E` and `A` and stay reachable from a fixed A-Z jump bar. Initials
/// from scripts without a Latin base keep their own letter, including caseless
/// ones such as `東`, since they sort after Latin and would split a `#` section.
/// Keys that are empty or start with a non-letter go to [`Letter::FALLBACK`].
pub struct Sectioner {
    primary: CollatorBorrowed<'static>,
}
impl Sectioner {
    /// Creates a sectioner backed by a primary-strength collator.
    pub fn new() -> Self {
        let mut collator_options = CollatorOptions::default();
        collator_options.strength = Some(Strength::Primary);
        collator_options.case_level = Some(CaseLevel::Off);

        Self {
            primary: Collator::try_new(CollatorPreferences::default(), collator_options)
                .expect("compiled collation data is always available"),
        }
    }

    /// The section letter for `key`.
    pub fn letter_for(&self, key: &str) -> Letter {
        let Some(initial) = key.chars().next() else {
            return Letter::FALLBACK;
        };
        if !initial.is_alphabetic() {
            return Letter::FALLBACK;
        }

        let upper = initial.to_uppercase().next().unwrap_or(initial);
        if upper.is_ascii_uppercase() {
            return Letter(upper);
        }
        self.latin_base(initial).unwrap_or(Letter(upper))
    }

    /// Whether rows with initials `a` and `b` belong in one section: the letters
    /// match, or the collator can't tell them apart at primary strength.
    pub fn same_section(&self, a: Letter, b: Letter) -> bool {
        a == b
            || (a != Letter::FALLBACK
                && b != Letter::FALLBACK
                && self.compare(a.0, b.0) == Ordering::Equal)
    }

    /// The A-Z letter whose collation range contains `initial`. Nothing sorts
    /// past `Z` into its range, so only an exact match maps there.
    fn latin_base(&self, initial: char) -> Option<Letter> {
        let at_or_before = Letter::ALPHABET
            .partition_point(|letter| self.compare(letter.0, initial) != Ordering::Greater);
        let base = Letter::ALPHABET[at_or_before.checked_sub(1)?];
        if base == Letter('Z') && self.compare(base.0, initial) != Ordering::Equal {
            return None;
        }
        Some(base)
    }

    fn compare(&self, a: char, b: char) -> Ordering {
        let (mut buf_a, mut buf_b) = ([0u8; 4], [0u8; 4]);
        self.primary
            .compare(a.encode_utf8(&mut buf_a), b.encode_utf8(&mut buf_b))
    }
}
impl Default for Sectioner {
    fn default() -> Self {
        Self::new()
    }
}
