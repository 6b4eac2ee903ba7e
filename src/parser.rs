//! Recursive descent parser and eager evaluator.
//!
//! The parser walks the grammar top-down, consuming the token stream with
//! single-token look-ahead and consulting the symbol table. Each grammar
//! rule returns its numeric value directly; no AST is built.
//!
//! ```text
//! Expression := ["-"] Term { ("+" | "-") Term }
//! Term       := Factor { ("*" | "/" | "%" | "^") Factor }
//! Factor     := Number | Symbol ["(" Expression ")"] | "(" Expression ")"
//! ```
//!
//! The Term/Factor split already encodes precedence, so `2+5*3` is 17
//! without any precedence climbing. `*`, `/`, `%` and `^` share one level
//! and evaluate left to right; a leading `-` negates the first Term only.

use crate::error::{ExprError, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::stream::TokenStream;
use crate::symbols::{Entry, SymbolTable};
use crate::{Real, functions};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Maximum nesting depth for expressions and defined-symbol expansion.
/// Guards against pathological parenthesization and self-referential
/// definitions (`define("x", "x")`).
pub const MAX_RECURSION_DEPTH: usize = 64;

/// One-shot parser: consumes its token stream and produces exactly one
/// numeric result or one error.
pub struct Parser<'a> {
    stream: TokenStream,
    symbols: &'a SymbolTable,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, symbols: &'a SymbolTable) -> Self {
        Self::with_depth(tokens, symbols, 0)
    }

    fn with_depth(tokens: Vec<Token>, symbols: &'a SymbolTable, depth: usize) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            symbols,
            depth,
        }
    }

    /// Parses and evaluates one complete Expression. Tokens left over after
    /// the top-level Expression are an error, not silently ignored.
    pub fn evaluate(mut self) -> Result<Real> {
        let value = self.expression()?;
        if let Some(token) = self.stream.peek() {
            return Err(ExprError::UnexpectedToken {
                expected: "end of expression",
                found: token.kind.to_string(),
                position: token.position,
            });
        }
        Ok(value)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(ExprError::RecursionLimit(String::from(
                "expression nesting too deep",
            )));
        }
        Ok(())
    }

    /// Expression := ["-"] Term { ("+" | "-") Term }
    fn expression(&mut self) -> Result<Real> {
        self.enter()?;

        let negative = self.stream.next_is(|k| matches!(k, TokenKind::Minus));
        if negative {
            self.stream.next()?;
        }

        let mut value = self.term()?;
        if negative {
            value = -value;
        }

        while self.stream.next_is(TokenKind::is_additive) {
            let operator = self.stream.next()?;
            let rhs = self.term()?;
            if matches!(operator.kind, TokenKind::Plus) {
                value += rhs;
            } else {
                value -= rhs;
            }
        }

        self.depth -= 1;
        Ok(value)
    }

    /// Term := Factor { ("*" | "/" | "%" | "^") Factor }
    ///
    /// Division and remainder follow IEEE 754: dividing by zero yields an
    /// infinity or NaN, never an error.
    fn term(&mut self) -> Result<Real> {
        let mut value = self.factor()?;

        while self.stream.next_is(TokenKind::is_multiplicative) {
            let operator = self.stream.next()?;
            let rhs = self.factor()?;
            value = match operator.kind {
                TokenKind::Star => value * rhs,
                TokenKind::Slash => value / rhs,
                TokenKind::Percent => value % rhs,
                // The loop guard admits only Term operators; Caret is the
                // remaining case.
                _ => functions::pow(value, rhs),
            };
        }

        Ok(value)
    }

    /// Factor := Number | Symbol ["(" Expression ")"] | "(" Expression ")"
    fn factor(&mut self) -> Result<Real> {
        let Some(token) = self.stream.peek().cloned() else {
            return Err(ExprError::EndOfStream);
        };

        match token.kind {
            TokenKind::Number(value) => {
                self.stream.next()?;
                Ok(value)
            }
            TokenKind::Symbol(_) => self.symbol(),
            TokenKind::OpenParen => {
                self.stream.next()?;
                let value = self.expression()?;
                self.expect_close_paren()?;
                Ok(value)
            }
            kind => Err(ExprError::UnexpectedToken {
                expected: "a number, a symbol, or '('",
                found: kind.to_string(),
                position: token.position,
            }),
        }
    }

    /// A bare Symbol resolves as a nullary call; a Symbol immediately
    /// followed by `(` resolves as a unary call on the parenthesized
    /// sub-expression's value.
    fn symbol(&mut self) -> Result<Real> {
        let token = self.stream.next()?;
        let name = match token.kind {
            TokenKind::Symbol(name) => name,
            kind => {
                return Err(ExprError::UnexpectedToken {
                    expected: "a symbol",
                    found: kind.to_string(),
                    position: token.position,
                });
            }
        };

        if self.stream.next_is(TokenKind::is_open) {
            self.stream.next()?;
            let argument = self.expression()?;
            self.expect_close_paren()?;
            self.call_unary(&name, argument)
        } else {
            self.call_nullary(&name)
        }
    }

    fn call_nullary(&self, name: &str) -> Result<Real> {
        match self.symbols.lookup(name)? {
            Entry::Constant(f) => Ok(f()),
            Entry::Defined(source) => {
                let source = source.clone();
                self.evaluate_defined(name, &source)
            }
            entry @ (Entry::Unary(_) | Entry::Trig(_)) => {
                let (min, max) = entry.arity();
                Err(ExprError::InvalidFunctionCall {
                    name: String::from(name),
                    min,
                    max,
                    found: 0,
                })
            }
        }
    }

    fn call_unary(&self, name: &str, argument: Real) -> Result<Real> {
        match self.symbols.lookup(name)? {
            Entry::Unary(f) => Ok(f(argument)),
            Entry::Trig(f) => Ok(self.symbols.apply_angle_mode(f(argument))),
            entry @ (Entry::Constant(_) | Entry::Defined(_)) => {
                let (min, max) = entry.arity();
                Err(ExprError::InvalidFunctionCall {
                    name: String::from(name),
                    min,
                    max,
                    found: 1,
                })
            }
        }
    }

    /// Expands a user-defined symbol by re-scanning and evaluating its
    /// stored expression against the same symbol table. The accumulated
    /// depth carries over, so definition cycles hit the recursion limit
    /// instead of overflowing the stack.
    fn evaluate_defined(&self, name: &str, source: &str) -> Result<Real> {
        if self.depth >= MAX_RECURSION_DEPTH {
            return Err(ExprError::RecursionLimit(format!(
                "while expanding defined symbol '{}'",
                name
            )));
        }
        let tokens = Lexer::new(source).scan()?;
        Parser::with_depth(tokens, self.symbols, self.depth).evaluate()
    }

    fn expect_close_paren(&mut self) -> Result<()> {
        match self.stream.peek().cloned() {
            Some(token) if token.kind.is_close() => {
                self.stream.next()?;
                Ok(())
            }
            Some(token) => Err(ExprError::UnmatchedParenthesis {
                position: token.position,
                found: token.kind.to_string(),
            }),
            None => Err(ExprError::UnmatchedParenthesis {
                position: self.stream.end_position(),
                found: String::from("end of expression"),
            }),
        }
    }
}
