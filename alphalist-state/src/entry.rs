use serde::Serialize;
use smol_str::{SmolStr, format_smolstr};

use crate::Letter;

/// The render identity of an entry. Unique across an entry sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryKey(pub SmolStr);
impl EntryKey {
    /// The key of the header for `letter`.
    pub fn header(letter: Letter) -> Self {
        Self(format_smolstr!("header-{letter}"))
    }

    /// The key of the row at sorted position `position`.
    pub fn row(position: usize) -> Self {
        Self(format_smolstr!("item-{position}"))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// One unit of the rendered sequence: either a section header or a data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry<T> {
    /// The header that starts the section for `letter`.
    Header {
        /// The section letter.
        letter: Letter,
        /// The render identity.
        key: EntryKey,
    },
    /// A data row.
    Row {
        /// The item this row displays.
        value: T,
        /// The render identity.
        key: EntryKey,
    },
}
impl<T> Entry<T> {
    /// The render identity of this entry.
    pub fn key(&self) -> &EntryKey {
        match self {
            Entry::Header { key, .. } | Entry::Row { key, .. } => key,
        }
    }

    /// Whether this entry is a section header.
    pub fn is_header(&self) -> bool {
        matches!(self, Entry::Header { .. })
    }

    /// The letter of a header entry.
    pub fn letter(&self) -> Option<Letter> {
        match self {
            Entry::Header { letter, .. } => Some(*letter),
            Entry::Row { .. } => None,
        }
    }

    /// The value of a row entry.
    pub fn value(&self) -> Option<&T> {
        match self {
            Entry::Header { .. } => None,
            Entry::Row { value, .. } => Some(value),
        }
    }
}
