//! Public entry points tying the lexer, stream, symbol table, and parser
//! together.
//!
//! One call to [`evaluate`] (or a sibling) builds a fresh lexer and token
//! stream, so concurrent or repeated evaluations never share cursor state.
//! The symbol table is the only piece a caller may want to keep across
//! calls, for user-defined symbols or a sticky angle mode.

use crate::Real;
use crate::error::Result;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::symbols::{AngleMode, SymbolTable};

/// Evaluates an expression with the built-in symbols and the default
/// `Degrees` angle mode.
///
/// ```
/// use rdcalc::engine::evaluate;
///
/// assert_eq!(evaluate("2+5*3").unwrap(), 17.0);
/// ```
pub fn evaluate(expression: &str) -> Result<Real> {
    evaluate_with_mode(expression, AngleMode::default())
}

/// Evaluates an expression with the built-in symbols and an explicit angle
/// mode.
pub fn evaluate_with_mode(expression: &str, angle_mode: AngleMode) -> Result<Real> {
    evaluate_with_symbols(expression, &SymbolTable::with_mode(angle_mode))
}

/// Evaluates an expression against a caller-provided symbol table, which
/// carries the angle mode and any user-defined symbols.
pub fn evaluate_with_symbols(expression: &str, symbols: &SymbolTable) -> Result<Real> {
    let tokens = Lexer::new(expression).scan()?;
    Parser::new(tokens, symbols).evaluate()
}
