use std::sync::Arc;

use alphalist_state::{Entry, EntryKey, Grouping, Letter, LetterIndex, LetterSet, group};
use serde::Serialize;

use crate::{
    layout::{Heights, ItemLayout, LayoutTable, target_index_for},
    options::ListOptions,
    render::{Rendered, Renderers},
    sidebar::{self, SidebarLetter},
};

/// Extracts the grouping key of an item.
pub type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// A request for the host list to scroll to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub index: usize,
    pub offset: f32,
    pub animated: bool,
    /// The snapshot the index refers to.
    pub generation: u64,
}

/// One grouping of the data together with its layout.
///
/// The entries, letter index, letter set and layout of a snapshot always come
/// from the same recompute, as does the key function its default row labels use.
/// Snapshots are never modified; a change produces a new one.
pub struct Snapshot<T> {
    generation: u64,
    grouping: Arc<Grouping<T>>,
    layout: LayoutTable,
    key_of: KeyFn<T>,
}
impl<T: std::fmt::Debug> std::fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("generation", &self.generation)
            .field("grouping", &self.grouping)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}
impl<T> Snapshot<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.grouping.entries
    }

    pub fn letter_index(&self) -> &LetterIndex {
        &self.grouping.letter_index
    }

    pub fn letter_set(&self) -> &LetterSet {
        &self.grouping.letter_set
    }

    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.grouping.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grouping.entries.is_empty()
    }

    /// The render identity of the entry at `index`.
    pub fn key_of_entry(&self, index: usize) -> Option<&EntryKey> {
        self.grouping.entries.get(index).map(Entry::key)
    }

    /// Panics if `index` is out of bounds.
    pub fn layout_of(&self, index: usize) -> ItemLayout {
        self.layout.layout_of(index)
    }

    /// Renders the entry at `index` of this snapshot, falling back to the
    /// default labels where `renderers` has no custom renderer.
    pub fn render<R>(&self, index: usize, renderers: &Renderers<T, R>) -> Option<Rendered<R>> {
        let entry = self.grouping.entries.get(index)?;
        Some(renderers.render(entry, &*self.key_of))
    }

    /// Resolves a letter press against this snapshot.
    pub fn resolve(&self, letter: Letter) -> Option<ScrollRequest> {
        let index = target_index_for(letter, &self.grouping.letter_index)?;
        Some(ScrollRequest {
            index,
            offset: self.layout.layout_of(index).offset,
            animated: true,
            generation: self.generation,
        })
    }

    /// The letter of the section that contains the entry at `offset`.
    pub fn letter_at_offset(&self, offset: f32) -> Option<Letter> {
        let index = self.layout.index_at_offset(offset)?;
        self.grouping
            .letter_index
            .iter()
            .filter(|(_, start)| *start <= index)
            .max_by_key(|(_, start)| *start)
            .map(|(letter, _)| letter)
    }
}

/// An alphabetically grouped list with a jump bar.
///
/// Owns the data and the active [`Snapshot`]. Any change to the data, key or
/// header mode regroups from scratch; a change to the heights only relays out.
pub struct AlphabetList<T> {
    data: Vec<T>,
    key_of: KeyFn<T>,
    options: ListOptions,
    snapshot: Arc<Snapshot<T>>,
    generation: u64,
}
impl<T: Clone> AlphabetList<T> {
    pub fn new(
        data: Vec<T>,
        key_of: impl Fn(&T) -> String + Send + Sync + 'static,
        options: ListOptions,
    ) -> Self {
        let key_of: KeyFn<T> = Arc::new(key_of);
        let mut list = Self {
            data,
            key_of: key_of.clone(),
            options,
            snapshot: Arc::new(Snapshot {
                generation: 0,
                grouping: Arc::new(Grouping::empty()),
                layout: LayoutTable::default(),
                key_of,
            }),
            generation: 0,
        };
        list.regroup();
        list
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.regroup();
    }

    pub fn set_key_of(&mut self, key_of: impl Fn(&T) -> String + Send + Sync + 'static) {
        self.key_of = Arc::new(key_of);
        self.regroup();
    }

    pub fn set_show_header(&mut self, show_header: bool) {
        if self.options.show_header == show_header {
            return;
        }
        self.options.show_header = show_header;
        self.regroup();
    }

    /// Only affects the jump bar, so the snapshot is kept.
    pub fn set_show_all_letters(&mut self, show_all_letters: bool) {
        self.options.show_all_letters = show_all_letters;
    }

    pub fn set_heights(&mut self, heights: Heights) {
        if self.options.heights() == heights {
            return;
        }
        self.options.item_height = heights.row;
        self.options.header_height = heights.header;
        self.relayout();
    }

    /// The active snapshot. Hosts holding on to it keep a consistent view even
    /// after the list has moved on to a newer one.
    pub fn snapshot(&self) -> Arc<Snapshot<T>> {
        self.snapshot.clone()
    }

    pub fn sidebar(&self) -> Vec<SidebarLetter> {
        sidebar::sidebar(self.options.show_all_letters, self.snapshot.letter_set())
    }

    pub fn letter_fractions(&self) -> Vec<(Letter, f32)> {
        sidebar::letter_fractions(self.snapshot.layout(), self.snapshot.letter_index())
    }

    /// Panics if `index` is out of bounds for the active snapshot.
    pub fn layout_of(&self, index: usize) -> ItemLayout {
        self.snapshot.layout_of(index)
    }

    pub fn key_of_entry(&self, index: usize) -> Option<&EntryKey> {
        self.snapshot.key_of_entry(index)
    }

    /// Renders the entry at `index` of the active snapshot.
    pub fn render<R>(&self, index: usize, renderers: &Renderers<T, R>) -> Option<Rendered<R>> {
        self.snapshot.render(index, renderers)
    }

    /// Resolves a jump-bar press against the active snapshot.
    ///
    /// Returns `None` for letters with no section; the press should be ignored.
    pub fn press_letter(&self, letter: Letter) -> Option<ScrollRequest> {
        let request = self.snapshot.resolve(letter);
        if request.is_none() {
            tracing::trace!(
                "ignoring press on {letter}: no section in generation {}",
                self.snapshot.generation
            );
        }
        request
    }

    fn regroup(&mut self) {
        let key_of = &*self.key_of;
        let grouping = group(
            self.data.iter().cloned(),
            |item| key_of(item),
            self.options.show_header,
        );
        tracing::debug!(
            "grouped {} rows into {} sections ({} entries)",
            self.data.len(),
            grouping.letter_set.len(),
            grouping.entries.len()
        );
        self.replace(Arc::new(grouping));
    }

    fn relayout(&mut self) {
        let grouping = self.snapshot.grouping.clone();
        self.replace(grouping);
    }

    fn replace(&mut self, grouping: Arc<Grouping<T>>) {
        self.generation += 1;
        let layout = LayoutTable::new(&grouping.entries, self.options.heights());
        self.snapshot = Arc::new(Snapshot {
            generation: self.generation,
            grouping,
            layout,
            key_of: self.key_of.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Contact {
        name: String,
        city: Option<String>,
    }

    fn contact(name: &str) -> Contact {
        Contact {
            name: name.to_string(),
            city: None,
        }
    }

    fn contacts(names: &[&str]) -> Vec<Contact> {
        names.iter().map(|n| contact(n)).collect()
    }

    fn by_name(c: &Contact) -> String {
        c.name.clone()
    }

    #[test]
    fn test_example_list() {
        let list = AlphabetList::new(
            contacts(&["bob", "Ann", "alice"]),
            by_name,
            ListOptions::default(),
        );
        let snapshot = list.snapshot();

        let keys: Vec<&str> = (0..snapshot.len())
            .map(|i| list.key_of_entry(i).unwrap().as_str())
            .collect();
        assert_eq!(
            keys,
            vec!["header-A", "item-0", "item-1", "header-B", "item-2"]
        );

        let offsets: Vec<f32> = (0..snapshot.len())
            .map(|i| list.layout_of(i).offset)
            .collect();
        assert_eq!(offsets, vec![0.0, 40.0, 80.0, 120.0, 160.0]);

        assert_eq!(snapshot.letter_index().get(Letter('A')), Some(0));
        assert_eq!(snapshot.letter_index().get(Letter('B')), Some(3));
    }

    #[test]
    fn test_press_with_all_letters() {
        let list = AlphabetList::new(
            contacts(&["mallory", "alice", "mike"]),
            by_name,
            ListOptions {
                show_all_letters: true,
                ..Default::default()
            },
        );

        let bar = list.sidebar();
        assert_eq!(bar.len(), 26);
        let enabled: Vec<Letter> = bar.iter().filter(|l| l.enabled).map(|l| l.letter).collect();
        assert_eq!(enabled, vec![Letter('A'), Letter('M')]);

        assert_eq!(list.press_letter(Letter('C')), None);

        let request = list.press_letter(Letter('M')).unwrap();
        assert_eq!(request.index, 2);
        assert_eq!(request.offset, 80.0);
        assert!(request.animated);
        assert_eq!(
            Some(request.index),
            list.snapshot().letter_index().get(Letter('M'))
        );
    }

    #[test]
    fn test_without_headers() {
        let list = AlphabetList::new(
            contacts(&["mallory", "alice", "mike", "bob"]),
            by_name,
            ListOptions {
                show_header: false,
                item_height: 30.0,
                ..Default::default()
            },
        );

        assert_eq!(list.snapshot().len(), 4);
        let request = list.press_letter(Letter('M')).unwrap();
        assert_eq!(request.index, 2);
        assert_eq!(request.offset, 60.0);
        assert!(list.sidebar().iter().all(|l| l.enabled));
    }

    #[test]
    fn test_missing_keys_use_fallback() {
        let mut data = contacts(&["", "zed"]);
        data.push(Contact {
            name: "yara".to_string(),
            city: Some("York".to_string()),
        });
        let list = AlphabetList::new(
            data,
            |c: &Contact| c.city.clone().unwrap_or_default(),
            ListOptions::default(),
        );

        let letters: Vec<Letter> = list.sidebar().iter().map(|l| l.letter).collect();
        assert_eq!(letters, vec![Letter::FALLBACK, Letter('Y')]);
        assert_eq!(list.press_letter(Letter::FALLBACK).map(|r| r.index), Some(0));
    }

    #[test]
    fn test_empty_list() {
        let list = AlphabetList::new(Vec::<Contact>::new(), by_name, ListOptions::default());
        assert!(list.snapshot().is_empty());
        assert!(list.sidebar().is_empty());
        assert_eq!(list.press_letter(Letter('A')), None);
        assert_eq!(list.key_of_entry(0), None);
    }

    #[test]
    fn test_stale_snapshot_stays_consistent() {
        let mut list = AlphabetList::new(
            contacts(&["alice", "bob"]),
            by_name,
            ListOptions::default(),
        );
        let stale = list.snapshot();

        list.set_data(contacts(&["zoe", "carol", "bob", "amy", "andy"]));
        let current = list.snapshot();
        assert!(current.generation() > stale.generation());

        // The old snapshot still pairs its own entries with its own index.
        let old = stale.resolve(Letter('B')).unwrap();
        assert_eq!(old.index, 2);
        assert_eq!(old.generation, stale.generation());
        assert_eq!(stale.entries()[old.index].letter(), Some(Letter('B')));

        // Presses always resolve against the active snapshot.
        let new = list.press_letter(Letter('B')).unwrap();
        assert_eq!(new.index, 3);
        assert_eq!(new.generation, current.generation());
        assert_eq!(current.entries()[new.index].letter(), Some(Letter('B')));

        assert_eq!(stale.resolve(Letter('Z')), None);
        assert!(list.press_letter(Letter('Z')).is_some());
    }

    #[test]
    fn test_show_header_regroups_only_on_change() {
        let mut list = AlphabetList::new(
            contacts(&["alice", "bob"]),
            by_name,
            ListOptions::default(),
        );
        let generation = list.snapshot().generation();

        list.set_show_header(true);
        assert_eq!(list.snapshot().generation(), generation);

        list.set_show_header(false);
        assert!(list.snapshot().generation() > generation);
        assert_eq!(list.snapshot().len(), 2);
        assert_eq!(list.press_letter(Letter('B')).map(|r| r.index), Some(1));
    }

    #[test]
    fn test_show_all_letters_keeps_snapshot() {
        let mut list = AlphabetList::new(contacts(&["alice"]), by_name, ListOptions::default());
        let generation = list.snapshot().generation();

        list.set_show_all_letters(true);
        assert_eq!(list.snapshot().generation(), generation);
        assert_eq!(list.sidebar().len(), 26);
    }

    #[test]
    fn test_set_heights_relays_out() {
        let mut list = AlphabetList::new(
            contacts(&["bob", "Ann", "alice"]),
            by_name,
            ListOptions::default(),
        );
        let before = list.snapshot();

        list.set_heights(Heights {
            header: 20.0,
            row: 50.0,
        });
        let after = list.snapshot();

        assert!(after.generation() > before.generation());
        assert_eq!(after.entries(), before.entries());
        assert_eq!(list.layout_of(3).offset, 120.0);
        assert_eq!(before.layout_of(3).offset, 120.0);
        assert_eq!(list.layout_of(4).offset, 140.0);
        assert_eq!(list.press_letter(Letter('B')).map(|r| r.offset), Some(120.0));
    }

    #[test]
    fn test_set_key_of_regroups() {
        let mut list = AlphabetList::new(
            vec![
                Contact {
                    name: "alice".to_string(),
                    city: Some("Zurich".to_string()),
                },
                Contact {
                    name: "bob".to_string(),
                    city: Some("Oslo".to_string()),
                },
            ],
            by_name,
            ListOptions::default(),
        );
        assert!(list.press_letter(Letter('Z')).is_none());

        list.set_key_of(|c: &Contact| c.city.clone().unwrap_or_default());
        let letters: Vec<Letter> = list.sidebar().iter().map(|l| l.letter).collect();
        assert_eq!(letters, vec![Letter('O'), Letter('Z')]);
        assert_eq!(list.press_letter(Letter('Z')).map(|r| r.index), Some(2));
    }

    #[test]
    fn test_render_dispatch() {
        let list = AlphabetList::new(
            contacts(&["bob", "Ann", "alice"]),
            by_name,
            ListOptions::default(),
        );

        let defaults = Renderers::<Contact, String>::new();
        assert_eq!(
            list.render(0, &defaults),
            Some(Rendered::HeaderLabel(Letter('A')))
        );
        assert_eq!(
            list.render(2, &defaults),
            Some(Rendered::RowLabel("Ann".to_string()))
        );
        assert_eq!(list.render(5, &defaults), None);

        let custom = Renderers::<Contact, String>::new().with_row(|c| c.name.to_uppercase());
        assert_eq!(
            list.render(4, &custom),
            Some(Rendered::Custom("BOB".to_string()))
        );
    }

    #[test]
    fn test_stale_snapshot_renders_its_own_rows() {
        let mut list = AlphabetList::new(
            contacts(&["bob", "Ann", "alice"]),
            by_name,
            ListOptions::default(),
        );
        let stale = list.snapshot();

        list.set_data(contacts(&["zoe"]));
        list.set_key_of(|c: &Contact| c.name.to_uppercase());

        let defaults = Renderers::<Contact, String>::new();
        assert_eq!(
            stale.render(2, &defaults),
            Some(Rendered::RowLabel("Ann".to_string()))
        );
        assert_eq!(
            stale.render(4, &defaults),
            Some(Rendered::RowLabel("bob".to_string()))
        );
        assert_eq!(list.render(2, &defaults), None);
        assert_eq!(
            list.render(1, &defaults),
            Some(Rendered::RowLabel("ZOE".to_string()))
        );
    }

    #[test]
    fn test_letter_at_offset() {
        let list = AlphabetList::new(
            contacts(&["bob", "Ann", "alice"]),
            by_name,
            ListOptions::default(),
        );
        let snapshot = list.snapshot();

        assert_eq!(snapshot.letter_at_offset(0.0), Some(Letter('A')));
        assert_eq!(snapshot.letter_at_offset(119.0), Some(Letter('A')));
        assert_eq!(snapshot.letter_at_offset(120.0), Some(Letter('B')));
        assert_eq!(snapshot.letter_at_offset(500.0), None);
    }

    #[test]
    fn test_letter_fractions() {
        let list = AlphabetList::new(
            contacts(&["bob", "Ann", "alice"]),
            by_name,
            ListOptions::default(),
        );
        assert_eq!(
            list.letter_fractions(),
            vec![(Letter('A'), 0.0), (Letter('B'), 0.6)]
        );
    }
}
