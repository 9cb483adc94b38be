use std::sync::Arc;

use alphalist_core::{
    AlphabetList, ItemLayout, Rendered, Renderers, ScrollRequest, SidebarLetter, Snapshot,
    alphalist_state::{Entry, Letter, LetterIndex},
};
use serde::Serialize;
use serde_json::Value;

/// Everything the list exposes to a host, for one snapshot.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generation: u64,
    pub entries: Vec<Entry<Value>>,
    pub layouts: Vec<ItemLayout>,
    pub letter_index: LetterIndex,
    pub sidebar: Vec<SidebarLetter>,
    pub jump: Option<Jump>,
    #[serde(skip)]
    snapshot: Arc<Snapshot<Value>>,
}

/// The outcome of pressing a jump-bar letter.
#[derive(Debug, Serialize)]
pub struct Jump {
    pub letter: Letter,
    pub target: Option<ScrollRequest>,
}

impl Report {
    pub fn new(list: &AlphabetList<Value>, jump: Option<Letter>) -> Self {
        let snapshot = list.snapshot();
        Self {
            generation: snapshot.generation(),
            entries: snapshot.entries().to_vec(),
            layouts: (0..snapshot.len()).map(|i| snapshot.layout_of(i)).collect(),
            letter_index: snapshot.letter_index().clone(),
            sidebar: list.sidebar(),
            jump: jump.map(|letter| Jump {
                letter,
                // Resolve against the same snapshot the rest of the report shows.
                target: snapshot.resolve(letter),
            }),
            snapshot,
        }
    }

    /// Renders the report as plain text: the entries with their layouts, the jump
    /// bar (disabled letters in parentheses) and the jump result.
    pub fn to_text(&self) -> String {
        let renderers = Renderers::<Value, String>::new().with_header(|letter| format!("[{letter}]"));

        let mut lines: Vec<String> = self
            .entries
            .iter()
            .zip(&self.layouts)
            .enumerate()
            .filter_map(|(index, (entry, layout))| {
                let label = match self.snapshot.render(index, &renderers)? {
                    Rendered::Custom(label) => label,
                    Rendered::HeaderLabel(letter) => letter.to_string(),
                    Rendered::RowLabel(label) => format!("  {label}"),
                };
                Some(format!(
                    "{:>8} {:>6}  {:<10} {label}",
                    layout.offset,
                    layout.length,
                    entry.key().as_str()
                ))
            })
            .collect();

        let sidebar: Vec<String> = self
            .sidebar
            .iter()
            .map(|l| {
                if l.enabled {
                    l.letter.to_string()
                } else {
                    format!("({})", l.letter)
                }
            })
            .collect();
        lines.push(format!("sidebar: {}", sidebar.join(" ")));

        if let Some(jump) = &self.jump {
            lines.push(match &jump.target {
                Some(target) => format!(
                    "jump {} -> index {} @ offset {}",
                    jump.letter, target.index, target.offset
                ),
                None => format!("jump {} -> no section", jump.letter),
            });
        }

        lines.push(String::new());
        lines.join("\n")
    }
}
