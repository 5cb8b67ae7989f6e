//! Byte offset to line/column translation.

/// A zero-based line and character position.
///
/// `character` counts Unicode scalar values from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based character column.
    pub character: usize,
}

/// Line start offsets of a document.
///
/// # Examples
/// ```
/// use headwind::{LineIndex, Position};
/// let index = LineIndex::new("a\nbé c");
/// assert_eq!(index.position_at(5), Position { line: 1, character: 2 });
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex<'t> {
    text: &'t str,
    line_starts: Vec<usize>,
}

impl<'t> LineIndex<'t> {
    /// Index the line starts of `text`.
    #[must_use]
    pub fn new(text: &'t str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        Self { text, line_starts }
    }

    /// The position of byte `offset`. Offsets past the end clamp to the end
    /// of the text; offsets inside a character count that character. Only
    /// the line holding `offset` is scanned.
    #[must_use]
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or_default();
        let line_text = self.text.get(line_start..).unwrap_or_default();
        let character = line_text
            .char_indices()
            .take_while(|(index, _)| line_start + index < offset)
            .count();
        Position { line, character }
    }
}
