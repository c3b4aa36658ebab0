mod render;

pub use render::{ColorScheme, render_spans};

/// Byte offsets into a single source string: the joined command line, or an expression.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SpanRange {
    start: usize,  // inclusive
    end: usize,    // exclusive
}

impl SpanRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);

        SpanRange { start, end }
    }

    /// a span of a single byte
    pub fn at(index: usize) -> Self {
        SpanRange {
            start: index,
            end: index + 1,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use = "method returns a new span and does not mutate the original value"]
    pub fn offset(&self, offset: usize) -> Self {
        SpanRange {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// the smallest span that covers both
    #[must_use = "method returns a new span and does not mutate the original value"]
    pub fn merge(&self, other: SpanRange) -> Self {
        SpanRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn last_char(&self) -> Self {
        SpanRange {
            start: self.end.max(1) - 1,
            end: self.end.max(1),
        }
    }
}
