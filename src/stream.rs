//! Cursor over a materialized token sequence.
//!
//! The grammar is LL(1), so the stream only needs non-advancing single-token
//! look-ahead plus a consuming read. There is deliberately no rewind: the
//! cursor is monotonically non-decreasing within one parse.

use crate::error::{ExprError, Result};
use crate::lexer::{Token, TokenKind};
use alloc::vec::Vec;

/// Owns the token sequence for one parse and a cursor into it.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// Index of the next unread token.
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// True while at least one unread token remains.
    pub fn has_next(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Look at the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Consume and return the next token, advancing the cursor by exactly
    /// one position.
    pub fn next(&mut self) -> Result<Token> {
        let token = self
            .tokens
            .get(self.cursor)
            .cloned()
            .ok_or(ExprError::EndOfStream)?;
        self.cursor += 1;
        Ok(token)
    }

    /// True when a next token exists and its kind satisfies `predicate`.
    /// Never fails: an exhausted stream simply answers false.
    pub fn next_is(&self, predicate: impl Fn(&TokenKind) -> bool) -> bool {
        self.peek().is_some_and(|t| predicate(&t.kind))
    }

    /// Byte position to report for "ran off the end" errors: just past the
    /// last token, or 0 for an empty sequence.
    pub fn end_position(&self) -> usize {
        self.tokens.last().map(|t| t.position + 1).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn stream(input: &str) -> TokenStream {
        TokenStream::new(Lexer::new(input).scan().unwrap())
    }

    #[test]
    fn peek_does_not_advance() {
        let s = stream("1+2");
        assert_eq!(s.peek().unwrap().kind, TokenKind::Number(1.0));
        assert_eq!(s.peek().unwrap().kind, TokenKind::Number(1.0));
    }

    #[test]
    fn next_advances_exactly_one() {
        let mut s = stream("1+2");
        assert_eq!(s.next().unwrap().kind, TokenKind::Number(1.0));
        assert_eq!(s.next().unwrap().kind, TokenKind::Plus);
        assert_eq!(s.next().unwrap().kind, TokenKind::Number(2.0));
        assert!(!s.has_next());
    }

    #[test]
    fn next_past_end_fails() {
        let mut s = stream("1");
        s.next().unwrap();
        assert_eq!(s.next().unwrap_err(), ExprError::EndOfStream);
    }

    #[test]
    fn next_is_never_fails_on_empty() {
        let s = stream("");
        assert!(!s.next_is(TokenKind::is_number));
        assert!(s.peek().is_none());
    }

    #[test]
    fn next_is_checks_kind() {
        let s = stream("+1");
        assert!(s.next_is(TokenKind::is_additive));
        assert!(!s.next_is(TokenKind::is_number));
    }
}
