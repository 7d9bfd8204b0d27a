//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the source text with the 1-based line the
//! range starts on. Lox diagnostics are reported per line only, so there is no
//! column or file information here.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::Span;
//!
//! let span = Span::new(4, 9, 2);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.line, 2);
//! ```

use std::fmt;

/// Source location span
///
/// `start` is inclusive and `end` is exclusive, both in bytes.
///
/// # Examples
///
/// ```
/// use loxc_util::span::Span;
///
/// let span = Span::new(0, 3, 1);
/// assert!(!span.is_empty());
///
/// let point = Span::point(7, 3);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span at a single byte offset
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self::new(offset, offset, line)
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns true if `other` starts at or after the end of `self`
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let a = Span::new(0, 3, 1);
    /// let b = Span::new(3, 4, 1);
    /// assert!(a.precedes(&b));
    /// assert!(!b.precedes(&a));
    /// ```
    #[inline]
    pub const fn precedes(&self, other: &Span) -> bool {
        self.end <= other.start
    }

    /// Returns the source text covered by this span
    ///
    /// Returns `None` if the span is out of bounds or does not fall on
    /// character boundaries.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_span_new() {
        let span = Span::new(2, 5, 3);
        assert_eq!(span.start, 2);
        assert_eq!(span.end, 5);
        assert_eq!(span.line, 3);
    }

    #[test]
    fn test_span_len_and_empty() {
        assert_eq!(Span::new(2, 5, 1).len(), 3);
        assert!(Span::point(4, 1).is_empty());
        assert_eq!(Span::point(4, 1).len(), 0);
    }

    #[test]
    fn test_span_precedes() {
        let a = Span::new(0, 2, 1);
        let b = Span::new(2, 2, 1);
        let c = Span::new(1, 3, 1);
        assert!(a.precedes(&b));
        assert!(!a.precedes(&c));
    }

    #[test]
    fn test_span_slice() {
        let source = "var x = 1;";
        assert_eq!(Span::new(4, 5, 1).slice(source), Some("x"));
        assert_eq!(Span::new(8, 40, 1).slice(source), None);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 12).to_string(), "line 12");
    }

    #[test]
    fn test_span_default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
