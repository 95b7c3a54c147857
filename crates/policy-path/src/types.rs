//! Path AST — the dotted/indexed subset of JSONPath spec.md §4.1 defines.

/// One step of a [`Path`]: a property name or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `.name` or `['name']`-equivalent dotted access.
    Property(String),
    /// `[n]` array access, `n >= 0`.
    Index(i64),
}

/// A parsed path: an ordered sequence of [`Segment`]s. The empty sequence
/// addresses the root (`$`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Path { segments: Vec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path { segments }
    }
}
