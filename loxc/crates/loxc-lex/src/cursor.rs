//! Character cursor for traversing source code.
//!
//! The cursor owns the read position and the line counter. Lines are counted
//! as `'\n'` is consumed, so every sub-scanner that crosses a newline keeps
//! the counter correct without doing anything special.

/// A cursor for traversing source code character by character.
///
/// Positions are byte offsets into the source and always sit on a character
/// boundary. Lookahead past the end yields `'\0'`.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
///
/// assert_eq!(cursor.advance(), 'a');
/// assert_eq!(cursor.peek(), '\n');
/// cursor.advance();
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.slice_from(0), "a\n");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character at the given byte offset from the current
    /// position, or `'\0'` past the end.
    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Returns the next unconsumed character without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(), 'a');
    /// assert_eq!(Cursor::new("").peek(), '\0');
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character after [`peek`](Self::peek).
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek_next(), '.');
    /// assert_eq!(Cursor::new("1").peek_next(), '\0');
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        self.char_at(self.peek().len_utf8())
    }

    /// Consumes and returns the next character.
    ///
    /// Consuming `'\n'` bumps the line counter. At the end of input nothing is
    /// consumed and `'\0'` is returned.
    #[inline]
    pub fn advance(&mut self) -> char {
        let c = self.peek();
        if self.is_at_end() {
            return c;
        }

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.peek(), '>');
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the source text from byte offset `start` up to the current
    /// position.
    ///
    /// `start` must be a position previously returned by
    /// [`position`](Self::position); otherwise the result is empty.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }
}
