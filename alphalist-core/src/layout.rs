//! Pixel layout for an entry sequence with fixed header and row heights.
//!
//! A virtualized list needs the length and offset of any entry up front, without
//! measuring the entries before it, so it can jump straight to an offscreen section.

use alphalist_state::{Entry, Letter, LetterIndex};
use serde::Serialize;

/// The fixed heights of the two entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Heights {
    pub header: f32,
    pub row: f32,
}
impl Heights {
    pub fn of<T>(&self, entry: &Entry<T>) -> f32 {
        if entry.is_header() {
            self.header
        } else {
            self.row
        }
    }
}
impl Default for Heights {
    fn default() -> Self {
        Self {
            header: 40.0,
            row: 40.0,
        }
    }
}

/// The length and offset of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemLayout {
    pub length: f32,
    pub offset: f32,
    pub index: usize,
}

/// Computes the layout of `entries[index]` by summing the lengths of every entry before it.
///
/// Panics if `index` is out of bounds.
pub fn layout_of<T>(entries: &[Entry<T>], index: usize, heights: Heights) -> ItemLayout {
    assert!(
        index < entries.len(),
        "layout query for entry {index} but the sequence has {} entries",
        entries.len()
    );

    let offset = entries[..index]
        .iter()
        .fold(0.0, |sum, entry| sum + heights.of(entry));

    ItemLayout {
        length: heights.of(&entries[index]),
        offset,
        index,
    }
}

/// Resolves a letter to the entry position where its section begins.
pub fn target_index_for(letter: Letter, letter_index: &LetterIndex) -> Option<usize> {
    letter_index.get(letter)
}

/// Precomputed layouts for an entry sequence.
///
/// Offsets are accumulated in the same order as [`layout_of`], so both give
/// identical results for the same sequence and heights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTable {
    /// `(offset, length)` per entry.
    spans: Vec<(f32, f32)>,
    total_length: f32,
}
impl LayoutTable {
    pub fn new<T>(entries: &[Entry<T>], heights: Heights) -> Self {
        let mut spans = Vec::with_capacity(entries.len());
        let mut offset = 0.0;
        for entry in entries {
            let length = heights.of(entry);
            spans.push((offset, length));
            offset += length;
        }
        Self {
            spans,
            total_length: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The combined length of every entry.
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn get(&self, index: usize) -> Option<ItemLayout> {
        let (offset, length) = *self.spans.get(index)?;
        Some(ItemLayout {
            length,
            offset,
            index,
        })
    }

    /// Like [`LayoutTable::get`], but panics if `index` is out of bounds.
    pub fn layout_of(&self, index: usize) -> ItemLayout {
        self.get(index).unwrap_or_else(|| {
            panic!(
                "layout query for entry {index} but the sequence has {} entries",
                self.len()
            )
        })
    }

    /// The entry that covers `offset`, if the offset falls within the content.
    pub fn index_at_offset(&self, offset: f32) -> Option<usize> {
        if !(0.0..self.total_length).contains(&offset) {
            return None;
        }
        // Entries whose top is at or above `offset`; the last of them covers it.
        let covering = self.spans.partition_point(|(top, _)| *top <= offset);
        covering.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use alphalist_state::group;

    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn entries(list: &[&str], include_headers: bool) -> Vec<Entry<String>> {
        group(names(list), |n| n.clone(), include_headers).entries
    }

    #[test]
    fn test_layout_of_example() {
        let entries = entries(&["bob", "Ann", "alice"], true);
        let offsets: Vec<f32> = (0..entries.len())
            .map(|i| layout_of(&entries, i, Heights::default()).offset)
            .collect();
        assert_eq!(offsets, vec![0.0, 40.0, 80.0, 120.0, 160.0]);
    }

    #[test]
    fn test_layout_of_mixed_heights() {
        let entries = entries(&["bob", "Ann", "alice"], true);
        let heights = Heights {
            header: 24.0,
            row: 56.0,
        };

        let layouts: Vec<(f32, f32)> = (0..entries.len())
            .map(|i| {
                let layout = layout_of(&entries, i, heights);
                (layout.length, layout.offset)
            })
            .collect();
        assert_eq!(
            layouts,
            vec![
                (24.0, 0.0),
                (56.0, 24.0),
                (56.0, 80.0),
                (24.0, 136.0),
                (56.0, 160.0)
            ]
        );
    }

    #[test]
    #[should_panic(expected = "layout query for entry 5")]
    fn test_layout_of_out_of_range() {
        let entries = entries(&["bob", "Ann", "alice"], true);
        layout_of(&entries, 5, Heights::default());
    }

    #[test]
    fn test_table_matches_direct_sum() {
        let list = [
            "kiwi", "Fig", "lime", "fig", "Kumquat", "", "apple", "1up", "zucchini", "lemon",
        ];
        let heights = Heights {
            header: 17.3,
            row: 33.1,
        };
        for include_headers in [true, false] {
            let entries = entries(&list, include_headers);
            let table = LayoutTable::new(&entries, heights);
            assert_eq!(table.len(), entries.len());
            for i in 0..entries.len() {
                let direct = layout_of(&entries, i, heights);
                let fast = table.layout_of(i);
                assert_eq!(direct.offset.to_bits(), fast.offset.to_bits());
                assert_eq!(direct.length.to_bits(), fast.length.to_bits());
                assert_eq!(direct.length, heights.of(&entries[i]));
                assert_eq!(direct.index, fast.index);
            }
        }
    }

    #[test]
    fn test_table_offsets_are_monotonic() {
        let entries = entries(&["d", "a", "c", "b", "aa", "cc"], true);
        let table = LayoutTable::new(&entries, Heights::default());

        for i in 0..table.len() - 1 {
            let current = table.layout_of(i);
            let next = table.layout_of(i + 1);
            assert!(next.offset >= current.offset);
            assert_eq!(next.offset, current.offset + current.length);
        }
        assert_eq!(table.total_length(), 40.0 * entries.len() as f32);
    }

    #[test]
    fn test_table_empty() {
        let table = LayoutTable::new::<String>(&[], Heights::default());
        assert!(table.is_empty());
        assert_eq!(table.total_length(), 0.0);
        assert_eq!(table.get(0), None);
        assert_eq!(table.index_at_offset(0.0), None);
    }

    #[test]
    fn test_index_at_offset() {
        let entries = entries(&["bob", "Ann", "alice"], true);
        let heights = Heights {
            header: 20.0,
            row: 50.0,
        };
        let table = LayoutTable::new(&entries, heights);
        // Tops: 0, 20, 70, 120, 140; total 190.

        assert_eq!(table.index_at_offset(0.0), Some(0));
        assert_eq!(table.index_at_offset(19.9), Some(0));
        assert_eq!(table.index_at_offset(20.0), Some(1));
        assert_eq!(table.index_at_offset(125.0), Some(3));
        assert_eq!(table.index_at_offset(189.0), Some(4));
        assert_eq!(table.index_at_offset(190.0), None);
        assert_eq!(table.index_at_offset(-1.0), None);
    }

    #[test]
    fn test_target_index_for() {
        let grouping = group(names(&["bob", "Ann", "alice"]), |n| n.clone(), true);
        assert_eq!(target_index_for(Letter('A'), &grouping.letter_index), Some(0));
        assert_eq!(target_index_for(Letter('B'), &grouping.letter_index), Some(3));
        assert_eq!(target_index_for(Letter('C'), &grouping.letter_index), None);
    }
}
