//! The data model of an alphabetically grouped list, and the grouping pass that
//! turns a flat collection into headered sections with a letter index.
//!
//! Separated out so hosts can group data without pulling in layout or rendering.
#![deny(missing_docs)]

mod entry;
pub use entry::{Entry, EntryKey};

mod group;
pub use group::{Grouping, create_collator, group};

mod letter;
pub use letter::{Letter, LetterIndex, LetterSet};

mod section;
pub use section::Sectioner;
