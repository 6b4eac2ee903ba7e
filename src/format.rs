//! Cosmetic JSON-ish pretty printer over a flattened token sequence.
//!
//! Calculator hosts sometimes want to show a structured trace of what was
//! parsed. This formatter is a standalone consumer of the materialized token
//! sequence and is deliberately not wired into the evaluator; the numeric
//! result never depends on it.

use crate::lexer::{Token, TokenKind};
use alloc::string::String;
use core::fmt::Write;

fn operator_name(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "plus",
        TokenKind::Minus => "minus",
        TokenKind::Star => "mul",
        TokenKind::Slash => "div",
        TokenKind::Percent => "mod",
        TokenKind::Caret => "pow",
        _ => "?",
    }
}

/// Renders a token sequence as a JSON-ish trace.
///
/// Numbers become `"Operand"` entries, operators `"Operator"` entries with
/// spelled-out names, symbols `"Symbol"` entries, and parenthesized groups
/// nested `"Expression"` objects.
///
/// ```
/// use rdcalc::format::token_trace;
/// use rdcalc::lexer::Lexer;
///
/// let tokens = Lexer::new("1+2").scan().unwrap();
/// assert_eq!(token_trace(&tokens), "{\n\"Operand\": 1,\"Operator\": \"plus\",\"Operand\": 2}\n");
/// ```
pub fn token_trace(tokens: &[Token]) -> String {
    let mut out = String::from("{\n");

    for (i, token) in tokens.iter().enumerate() {
        match &token.kind {
            TokenKind::Number(value) => {
                let _ = write!(out, "\"Operand\": {}", value);
            }
            TokenKind::Symbol(name) => {
                let _ = write!(out, "\"Symbol\": \"{}\"", name);
            }
            TokenKind::OpenParen => {
                out.push_str("\"Expression\": {\n");
                continue;
            }
            TokenKind::CloseParen => {
                out.push_str("}\n");
            }
            operator => {
                let _ = write!(out, "\"Operator\": \"{}\"", operator_name(operator));
            }
        }

        // No separator before a closing brace or at the end of the sequence.
        if i + 1 != tokens.len() && !tokens[i + 1].kind.is_close() {
            out.push(',');
        }
    }

    out.push_str("}\n");
    out
}
