//! Layout, jump-bar and render dispatch for an alphabetically grouped list,
//! plus [`AlphabetList`], which keeps them in step with the data.

pub use alphalist_state;

pub mod layout;
pub mod options;
pub mod render;
pub mod sidebar;

mod list;
pub use list::{AlphabetList, KeyFn, ScrollRequest, Snapshot};

pub use layout::{Heights, ItemLayout, LayoutTable, layout_of, target_index_for};
pub use options::ListOptions;
pub use render::{Rendered, Renderers};
pub use sidebar::{SidebarLetter, sidebar_letters};
