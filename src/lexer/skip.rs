//! Line-comment skipping for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a `//` line comment if one starts at the current position.
    ///
    /// Discards characters up to and including the next newline (the
    /// newline itself is consumed here so its line-counter bump happens
    /// through [`Lexer::advance`]); at EOF it simply stops. Emits no
    /// token, per spec.md §4.1.
    ///
    /// # Returns
    ///
    /// `true` if a comment was present and consumed, `false` otherwise.
    pub(super) fn skip_line_comment(&mut self) -> bool {
        if self.current_char() == Some('/') && self.peek_next_char() == Some('/') {
            while let Some(c) = self.current_char() {
                if c == '\n' {
                    self.advance();
                    break;
                }
                self.advance();
            }
            true
        } else {
            false
        }
    }
}
