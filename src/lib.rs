#![cfg_attr(not(test), no_std)]
#![doc = r#"
# rdcalc

A small, no_std-friendly recursive descent parser and evaluator for
calculator-style arithmetic expressions.

## Overview

rdcalc tokenizes a text expression, parses it against a fixed LL(1)
arithmetic grammar, and eagerly evaluates it to a floating-point result.
There is no intermediate AST: each grammar rule returns its numeric value
directly. Named constants (`pi`, `tau`) and unary math functions (`sin`,
`sqrt`, `ln`, ...) are resolved through a per-evaluation symbol table,
which also supports user-defined symbols.

The grammar:

```text
Expression := ["-"] Term { ("+" | "-") Term }
Term       := Factor { ("*" | "/" | "%" | "^") Factor }
Factor     := Number | Symbol ["(" Expression ")"] | "(" Expression ")"
```

`*`, `/`, `%` and `^` share one precedence level and associate left to
right; `+` and `-` bind loosest. A leading `-` negates the value of the
first Term only.

## Quick start

```rust
use rdcalc::engine::evaluate;

let result = evaluate("2 + 5 * 3").unwrap();
assert_eq!(result, 17.0);

let result = evaluate("tau / 2").unwrap();
assert!((result - rdcalc::constants::PI).abs() < 1e-10);
```

## Angle mode

The trigonometric entries honor an angle-mode flag on the symbol table.
In the default `Degrees` mode their *result* is scaled by `180/pi` before
being returned; `Radians` leaves results untouched. Note that this is a
post-scaling of the output, not a conversion of the input — the historical
calculator behavior this crate reproduces. See [`symbols::AngleMode`].

```rust
use rdcalc::engine::{evaluate, evaluate_with_mode};
use rdcalc::symbols::AngleMode;
use rdcalc::constants::PI;

let deg = evaluate("sin(1)").unwrap();
let rad = evaluate_with_mode("sin(1)", AngleMode::Radians).unwrap();
assert!((deg - rad * 180.0 / PI).abs() < 1e-10);
```

## User-defined symbols

```rust
use rdcalc::engine::evaluate_with_symbols;
use rdcalc::symbols::SymbolTable;

let mut symbols = SymbolTable::new();
symbols.define("phi", "(1 + sqrt(5)) / 2").unwrap();
let result = evaluate_with_symbols("phi * 2", &symbols).unwrap();
assert!((result - 3.23606797749979).abs() < 1e-10);
```

## Error handling

Every failure mode is a variant of [`error::ExprError`]: unknown
characters and malformed numbers from the lexer, unknown symbols and
arity mismatches from the symbol table, unexpected tokens, unmatched
parentheses and premature end of input from the parser. Division by zero
is *not* an error: `1/0` evaluates to infinity per IEEE 754, and `NaN`
propagates silently through arithmetic.

## no_std

The crate is `no_std` (with `alloc`) outside of tests. All math goes
through `libm`, and the symbol table is a bounded `heapless` map, so the
evaluator stays usable on embedded targets.
"#]

extern crate alloc;

pub mod engine;
pub mod error;
pub mod format;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod stream;
pub mod symbols;

pub use engine::{evaluate, evaluate_with_mode, evaluate_with_symbols};
pub use error::{ExprError, Result};
pub use lexer::{Lexer, LexerConfig, Token, TokenKind};
pub use parser::Parser;
pub use stream::TokenStream;
pub use symbols::{AngleMode, SymbolTable};

/// Floating-point type used for all expression values.
#[cfg(feature = "f32")]
pub type Real = f32;

/// Floating-point type used for all expression values.
#[cfg(not(feature = "f32"))]
pub type Real = f64;

pub mod constants {
    use super::Real;

    #[cfg(feature = "f32")]
    pub const PI: Real = core::f32::consts::PI;
    #[cfg(feature = "f32")]
    pub const TAU: Real = core::f32::consts::TAU;
    #[cfg(feature = "f32")]
    pub const TEST_PRECISION: Real = 1e-6;

    #[cfg(not(feature = "f32"))]
    pub const PI: Real = core::f64::consts::PI;
    #[cfg(not(feature = "f32"))]
    pub const TAU: Real = core::f64::consts::TAU;
    #[cfg(not(feature = "f32"))]
    pub const TEST_PRECISION: Real = 1e-10;
}

/// Utility macro to check that two floating point values are approximately
/// equal within a given epsilon. NaN compares equal to NaN and same-signed
/// infinities compare equal, which is what expression-level tests want.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::constants::TEST_PRECISION)
    };
    ($left:expr, $right:expr, $epsilon:expr $(,)?) => {{
        let left_val: $crate::Real = $left;
        let right_val: $crate::Real = $right;
        let eps: $crate::Real = $epsilon;

        if left_val.is_nan() && right_val.is_nan() {
            // NaN == NaN for our purposes
        } else if left_val.is_infinite()
            && right_val.is_infinite()
            && left_val.signum() == right_val.signum()
        {
            // Same-signed infinities are equal
        } else {
            assert!(
                (left_val - right_val).abs() < eps,
                "assertion failed: `(left ≈ right)` (left: `{}`, right: `{}`, epsilon: `{}`)",
                left_val,
                right_val,
                eps
            );
        }
    }};
}
