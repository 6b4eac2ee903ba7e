//! Error types for expression scanning, parsing, and evaluation.
//!
//! Every failure mode in the crate is a variant of [`ExprError`]. Errors are
//! terminal for the current `evaluate` call: nothing is retried or recovered
//! internally, and the caller decides how to present the failure. Numeric
//! edge cases (division by zero, log of a negative number) are *not* errors;
//! they follow IEEE 754 semantics and flow through as `Inf` or `NaN`.

use alloc::string::String;
use core::fmt;

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, ExprError>;

/// Error type for expression scanning, parsing, and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// The lexer hit a character that matches no tokenization rule.
    ///
    /// `position` is the byte offset of the character in the input string.
    UnknownCharacter { character: char, position: usize },

    /// A number literal could not be scanned: either a second decimal
    /// separator appeared inside one literal, or the consumed text failed
    /// to parse as a finite number.
    MalformedNumber { text: String, position: usize },

    /// A symbol name was not found in the symbol table.
    ///
    /// Symbol names are case-sensitive; `Pi` does not resolve `pi`.
    UnknownSymbol { name: String },

    /// The parser needed a specific kind of token at a decision point and
    /// found something else.
    UnexpectedToken {
        /// Human-readable description of what the grammar required here.
        expected: &'static str,
        /// Display form of the token actually found.
        found: String,
        position: usize,
    },

    /// A parenthesized sub-expression was not closed where the grammar
    /// required it.
    UnmatchedParenthesis { position: usize, found: String },

    /// The grammar expected another token but the input was exhausted.
    EndOfStream,

    /// A symbol was called with the wrong number of arguments, e.g. a
    /// constant applied to an argument (`pi(1)`) or a unary function used
    /// bare (`sin`).
    InvalidFunctionCall {
        name: String,
        min: usize,
        max: usize,
        found: usize,
    },

    /// Evaluation of user-defined symbols nested too deeply, which usually
    /// means a definition refers to itself.
    RecursionLimit(String),

    /// A bounded container in the symbol table is full.
    CapacityExceeded(&'static str),

    /// A symbol name exceeds the fixed name-length limit.
    StringTooLong,
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::UnknownCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Unknown character in expression at position {}: '{}'",
                    position, character
                )
            }
            ExprError::MalformedNumber { text, position } => {
                write!(f, "Malformed number at position {}: '{}'", position, text)
            }
            ExprError::UnknownSymbol { name } => write!(f, "Unknown symbol: '{}'", name),
            ExprError::UnexpectedToken {
                expected,
                found,
                position,
            } => {
                write!(
                    f,
                    "Expected {} at position {}, instead got {}",
                    expected, position, found
                )
            }
            ExprError::UnmatchedParenthesis { position, found } => {
                write!(
                    f,
                    "Expecting ')' in expression at position {}, instead got {}",
                    position, found
                )
            }
            ExprError::EndOfStream => write!(f, "Unexpected end of expression"),
            ExprError::InvalidFunctionCall {
                name,
                min,
                max,
                found,
            } => {
                if min == max {
                    write!(
                        f,
                        "Invalid call to '{}': expected {} argument(s), found {}",
                        name, min, found
                    )
                } else {
                    write!(
                        f,
                        "Invalid call to '{}': expected between {} and {} arguments, found {}",
                        name, min, max, found
                    )
                }
            }
            ExprError::RecursionLimit(what) => {
                write!(f, "Recursion limit exceeded: {}", what)
            }
            ExprError::CapacityExceeded(container) => {
                write!(f, "Capacity exceeded for {}", container)
            }
            ExprError::StringTooLong => write!(f, "Symbol name too long"),
        }
    }
}
