//! The jump bar beside the list: which letters it shows, which of them can be
//! pressed, and where each section sits within the content.

use alphalist_state::{Letter, LetterIndex, LetterSet};
use serde::Serialize;

use crate::layout::LayoutTable;

/// A letter shown in the jump bar. Disabled letters have no section to jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarLetter {
    pub letter: Letter,
    pub enabled: bool,
}

/// The letters the jump bar shows, in display order.
///
/// With `show_all_letters` this is always A-Z, whether or not the data has rows
/// for each letter. Otherwise it is the letters present in the data, in ascending
/// codepoint order (so `#` comes first).
pub fn sidebar_letters(show_all_letters: bool, letter_set: &LetterSet) -> Vec<Letter> {
    if show_all_letters {
        Letter::ALPHABET.to_vec()
    } else {
        letter_set.iter().collect()
    }
}

/// [`sidebar_letters`] with each letter flagged as enabled or disabled.
pub fn sidebar(show_all_letters: bool, letter_set: &LetterSet) -> Vec<SidebarLetter> {
    sidebar_letters(show_all_letters, letter_set)
        .into_iter()
        .map(|letter| SidebarLetter {
            letter,
            enabled: letter_set.contains(letter),
        })
        .collect()
}

/// Computes where each section starts as a fraction (0.0-1.0) of the total
/// content length, for hosts that place letters proportionally beside the scrollbar.
pub fn letter_fractions(layout: &LayoutTable, letter_index: &LetterIndex) -> Vec<(Letter, f32)> {
    let total_length = layout.total_length();
    if total_length <= 0.0 {
        return Vec::new();
    }

    let mut fractions: Vec<(Letter, f32)> = letter_index
        .iter()
        .filter_map(|(letter, index)| {
            let item = layout.get(index)?;
            Some((letter, item.offset / total_length))
        })
        .collect();
    fractions.sort_by(|a, b| a.1.total_cmp(&b.1));
    fractions
}
