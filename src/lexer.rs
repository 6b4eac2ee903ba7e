//! Tokenizer for arithmetic expressions.
//!
//! [`Lexer::scan`] turns an input string into a materialized `Vec<Token>` in
//! a single left-to-right pass. The token sequence is materialized rather
//! than streamed because the parser wants cheap single-token look-ahead over
//! an owned sequence (see [`crate::stream::TokenStream`]).
//!
//! The scanner is total over any input string: every character either starts
//! a token, is whitespace, or produces a descriptive error.

use crate::Real;
use crate::error::{ExprError, Result};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Kind of a lexical token, including its payload.
///
/// A single tagged enum instead of a token class hierarchy: the parser
/// dispatches by exhaustive match, so a missing case is a compile error
/// rather than a forgotten runtime type check.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A number literal, already parsed to its value.
    Number(Real),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    OpenParen,
    CloseParen,
    /// A symbol name: a run of ASCII letters, case-sensitive.
    Symbol(String),
}

impl TokenKind {
    pub fn is_number(&self) -> bool {
        matches!(self, TokenKind::Number(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, TokenKind::Symbol(_))
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TokenKind::OpenParen)
    }

    pub fn is_close(&self) -> bool {
        matches!(self, TokenKind::CloseParen)
    }

    /// True for the Expression-level operators `+` and `-`.
    pub fn is_additive(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }

    /// True for the Term-level operators `*`, `/`, `%` and `^`, which all
    /// share one precedence level in this grammar.
    pub fn is_multiplicative(&self) -> bool {
        matches!(
            self,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent | TokenKind::Caret
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "number '{}'", value),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::Caret => write!(f, "'^'"),
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::Symbol(name) => write!(f, "symbol '{}'", name),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character of the token in the input.
    pub position: usize,
}

/// Tokenizer configuration.
///
/// The source this crate consolidates had divergent tokenizer variants, some
/// using `,` as the decimal separator and some accepting `{ } [ ]` as
/// grouping characters. Both knobs live here instead of in parallel copies
/// of the scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexerConfig {
    /// Character accepted as the decimal separator inside number literals.
    pub decimal_separator: char,
    /// Whether `{ }` and `[ ]` are accepted as equivalents of `( )`.
    pub extended_grouping: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            extended_grouping: true,
        }
    }
}

/// The lexer struct, which produces tokens from an input string.
#[derive(Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: &'a str, config: LexerConfig) -> Self {
        Self {
            input,
            pos: 0,
            config,
        }
    }

    /// Peek at the current character.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advance the position by one character.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scan the whole input into a token sequence.
    ///
    /// Fails with [`ExprError::UnknownCharacter`] on the first character that
    /// matches no rule, or [`ExprError::MalformedNumber`] on a broken number
    /// literal. An empty or all-whitespace input yields an empty sequence.
    pub fn scan(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let start = self.pos;
            let Some(c) = self.peek() else {
                break;
            };

            let kind = if c.is_ascii_digit() || c == self.config.decimal_separator {
                self.scan_number()?
            } else if c.is_ascii_alphabetic() {
                self.scan_symbol()
            } else {
                let kind = match c {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    '%' => TokenKind::Percent,
                    '^' => TokenKind::Caret,
                    '(' => TokenKind::OpenParen,
                    ')' => TokenKind::CloseParen,
                    '{' | '[' if self.config.extended_grouping => TokenKind::OpenParen,
                    '}' | ']' if self.config.extended_grouping => TokenKind::CloseParen,
                    _ => {
                        return Err(ExprError::UnknownCharacter {
                            character: c,
                            position: start,
                        });
                    }
                };
                self.advance();
                kind
            };

            tokens.push(Token {
                kind,
                position: start,
            });
        }

        Ok(tokens)
    }

    /// Scan a number literal: digits with at most one decimal separator.
    fn scan_number(&mut self) -> Result<TokenKind> {
        let start = self.pos;
        let sep = self.config.decimal_separator;
        let mut saw_separator = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == sep {
                if saw_separator {
                    self.advance();
                    return Err(ExprError::MalformedNumber {
                        text: String::from(&self.input[start..self.pos]),
                        position: start,
                    });
                }
                saw_separator = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[start..self.pos];
        let parsed = if sep == '.' {
            text.parse::<Real>()
        } else {
            text.replace(sep, ".").parse::<Real>()
        };

        match parsed {
            Ok(value) if value.is_finite() => Ok(TokenKind::Number(value)),
            _ => Err(ExprError::MalformedNumber {
                text: String::from(text),
                position: start,
            }),
        }
    }

    /// Scan a symbol name: a greedy run of ASCII letters. Digits do not
    /// continue a symbol, so `e3` lexes as symbol `e` followed by number `3`.
    fn scan_symbol(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphabetic() {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Symbol(String::from(&self.input[start..self.pos]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .scan()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn scans_all_token_kinds() {
        let tokens = kinds("1 + 2.5 * (pi) - 3 / 4 % 5 ^ 6");
        assert!(tokens.contains(&TokenKind::Number(1.0)));
        assert!(tokens.contains(&TokenKind::Number(2.5)));
        assert!(tokens.contains(&TokenKind::Plus));
        assert!(tokens.contains(&TokenKind::Minus));
        assert!(tokens.contains(&TokenKind::Star));
        assert!(tokens.contains(&TokenKind::Slash));
        assert!(tokens.contains(&TokenKind::Percent));
        assert!(tokens.contains(&TokenKind::Caret));
        assert!(tokens.contains(&TokenKind::OpenParen));
        assert!(tokens.contains(&TokenKind::CloseParen));
        assert!(tokens.contains(&TokenKind::Symbol("pi".into())));
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = Lexer::new("1+sin(2)").scan().unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, [0, 1, 2, 5, 6, 7]);
    }

    #[test]
    fn whitespace_is_skipped_silently() {
        assert_eq!(kinds(" 1 +\t2\n"), kinds("1+2"));
        assert!(kinds("   ").is_empty());
        assert!(kinds("").is_empty());
    }

    #[test]
    fn leading_dot_number() {
        assert_eq!(kinds(".5"), [TokenKind::Number(0.5)]);
    }

    #[test]
    fn second_separator_is_malformed() {
        let err = Lexer::new("3..4").scan().unwrap_err();
        assert_eq!(
            err,
            ExprError::MalformedNumber {
                text: "3..".into(),
                position: 0,
            }
        );
    }

    #[test]
    fn lone_separator_is_malformed() {
        assert!(matches!(
            Lexer::new("1 + .").scan().unwrap_err(),
            ExprError::MalformedNumber { .. }
        ));
    }

    #[test]
    fn unknown_character_reports_position() {
        let err = Lexer::new("1+2&3").scan().unwrap_err();
        assert_eq!(
            err,
            ExprError::UnknownCharacter {
                character: '&',
                position: 3,
            }
        );
    }

    #[test]
    fn symbols_stop_at_digits() {
        assert_eq!(
            kinds("e3"),
            [TokenKind::Symbol("e".into()), TokenKind::Number(3.0)]
        );
    }

    #[test]
    fn extended_grouping_maps_to_parens() {
        assert_eq!(kinds("{1}"), kinds("(1)"));
        assert_eq!(kinds("[1]"), kinds("(1)"));
    }

    #[test]
    fn extended_grouping_can_be_disabled() {
        let config = LexerConfig {
            extended_grouping: false,
            ..LexerConfig::default()
        };
        let err = Lexer::with_config("{1}", config).scan().unwrap_err();
        assert_eq!(
            err,
            ExprError::UnknownCharacter {
                character: '{',
                position: 0,
            }
        );
    }

    #[test]
    fn comma_decimal_separator() {
        let config = LexerConfig {
            decimal_separator: ',',
            ..LexerConfig::default()
        };
        let tokens = Lexer::with_config("3,14", config).scan().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number(3.14));
    }
}
