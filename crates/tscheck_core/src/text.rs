//! Source positions.
//!
//! `TextRange` is what nodes carry (`pos..end`, leading trivia included);
//! `TextSpan` is what diagnostics carry (`start` + `length`).

use std::fmt;

/// Byte offset from the start of a file.
pub type TextPos = u32;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.start && pos < self.end()
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextRange {
    /// Inclusive start, before leading trivia.
    pub pos: TextPos,
    /// Exclusive end.
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }

    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Whether `other` lies entirely inside this range.
    #[inline]
    pub fn contains_range(&self, other: TextRange) -> bool {
        other.pos >= self.pos && other.end <= self.end
    }

    #[inline]
    pub fn to_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl From<TextRange> for TextSpan {
    fn from(range: TextRange) -> Self {
        range.to_span()
    }
}

/// Skip whitespace and newlines starting at `pos`.
pub fn skip_trivia(text: &str, pos: TextPos) -> TextPos {
    let bytes = text.as_bytes();
    let mut i = pos as usize;
    while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r') {
        i += 1;
    }
    i as TextPos
}

/// Line number (0-based) of `pos` in `text`.
pub fn line_of_position(text: &str, pos: TextPos) -> u32 {
    let end = (pos as usize).min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.end(), 15);
        assert!(span.contains(5));
        assert!(span.contains(14));
        assert!(!span.contains(15));
    }

    #[test]
    fn test_range_contains_range() {
        let outer = TextRange::new(10, 40);
        assert!(outer.contains_range(TextRange::new(10, 40)));
        assert!(outer.contains_range(TextRange::new(12, 20)));
        assert!(!outer.contains_range(TextRange::new(5, 20)));
    }

    #[test]
    fn test_skip_trivia() {
        let text = "a  \n b";
        assert_eq!(skip_trivia(text, 1), 5);
        assert_eq!(skip_trivia(text, 5), 5);
        assert_eq!(skip_trivia(text, 6), 6);
    }

    #[test]
    fn test_line_of_position() {
        let text = "x\n=>\ny";
        assert_eq!(line_of_position(text, 0), 0);
        assert_eq!(line_of_position(text, 2), 1);
        assert_eq!(line_of_position(text, 5), 2);
    }
}
