//! Source positions carried by AST nodes.
//!
//! ASTs handed to the rewriter usually come from a parser, so every node keeps
//! the byte range it was read from. Rewritten nodes inherit the span of the
//! node they replace, which lets rewrite errors point back at the input text.

/// A span in the source text, identified by byte offsets.
///
/// Spans are inclusive of start and exclusive of end: `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// Byte offset of the start (inclusive)
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new span from start to end byte offsets.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty span at a single position.
    ///
    /// Programmatically built nodes use `SourceSpan::point(0)`.
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }
}

impl std::fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_span_is_empty_range() {
        let span = SourceSpan::point(12);
        assert_eq!(span, SourceSpan::new(12, 12));
        assert_eq!(span.to_string(), "12..12");
    }

    #[test]
    fn test_span_display() {
        assert_eq!(SourceSpan::new(3, 7).to_string(), "3..7");
    }
}
