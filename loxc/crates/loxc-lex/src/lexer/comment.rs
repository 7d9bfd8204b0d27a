//! Comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips the rest of a line comment.
    ///
    /// Called after `//` has been consumed. Stops in front of the newline so
    /// the dispatch loop consumes it and the line counter moves on as usual.
    pub(crate) fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.peek() != '\n' {
            self.cursor.advance();
        }
    }
}
