use alphalist_state::{Entry, Letter};

/// What an entry renders as: the host's own description, or one of the default labels.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<R> {
    Custom(R),
    /// The default header: the section letter as a label.
    HeaderLabel(Letter),
    /// The default row: the row's key field as text.
    RowLabel(String),
}

type HeaderFn<R> = Box<dyn Fn(Letter) -> R + Send + Sync>;
type RowFn<T, R> = Box<dyn Fn(&T) -> R + Send + Sync>;

/// Optional custom renderers for headers and rows.
pub struct Renderers<T, R> {
    header: Option<HeaderFn<R>>,
    row: Option<RowFn<T, R>>,
}
impl<T, R> Default for Renderers<T, R> {
    fn default() -> Self {
        Self {
            header: None,
            row: None,
        }
    }
}
impl<T, R> Renderers<T, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, render: impl Fn(Letter) -> R + Send + Sync + 'static) -> Self {
        self.header = Some(Box::new(render));
        self
    }

    pub fn with_row(mut self, render: impl Fn(&T) -> R + Send + Sync + 'static) -> Self {
        self.row = Some(Box::new(render));
        self
    }

    /// Renders `entry` with the matching custom renderer, or the default label if none was given.
    ///
    /// `key_of` produces the default row label.
    pub fn render(&self, entry: &Entry<T>, key_of: impl Fn(&T) -> String) -> Rendered<R> {
        match entry {
            Entry::Header { letter, .. } => match &self.header {
                Some(render) => Rendered::Custom(render(*letter)),
                None => Rendered::HeaderLabel(*letter),
            },
            Entry::Row { value, .. } => match &self.row {
                Some(render) => Rendered::Custom(render(value)),
                None => Rendered::RowLabel(key_of(value)),
            },
        }
    }
}
