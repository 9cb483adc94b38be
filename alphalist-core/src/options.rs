use serde::{Deserialize, Serialize};

use crate::layout::Heights;

/// How the list is grouped and laid out, and what the jump bar shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListOptions {
    /// Whether each section starts with a header entry.
    pub show_header: bool,
    /// Whether the jump bar always shows A-Z, disabling letters without rows.
    pub show_all_letters: bool,
    /// The height of a row entry.
    pub item_height: f32,
    /// The height of a header entry.
    pub header_height: f32,
}
impl ListOptions {
    pub fn heights(&self) -> Heights {
        Heights {
            header: self.header_height,
            row: self.item_height,
        }
    }
}
impl Default for ListOptions {
    fn default() -> Self {
        let heights = Heights::default();
        Self {
            show_header: true,
            show_all_letters: false,
            item_height: heights.row,
            header_height: heights.header,
        }
    }
}
