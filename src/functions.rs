//! Built-in mathematical functions backing the symbol table.
//!
//! All transcendental functions go through the `libm` crate so the crate
//! works in no_std environments. Depending on the selected floating-point
//! precision (the `f32` feature), the f32 or f64 variants of the libm
//! functions are used.
//!
//! Domain violations (square root or logarithm of a negative number) return
//! NaN rather than an error, consistent with IEEE 754 semantics throughout
//! the evaluator.

#[cfg(feature = "f32")]
use libm::{
    cosf as libm_cos, coshf as libm_cosh, log10f as libm_log10, logf as libm_ln,
    powf as libm_pow, sinf as libm_sin, sinhf as libm_sinh, sqrtf as libm_sqrt,
    tanf as libm_tan, tanhf as libm_tanh,
};

#[cfg(not(feature = "f32"))]
use libm::{
    cos as libm_cos, cosh as libm_cosh, log as libm_ln, log10 as libm_log10, pow as libm_pow,
    sin as libm_sin, sinh as libm_sinh, sqrt as libm_sqrt, tan as libm_tan, tanh as libm_tanh,
};

use crate::Real;

pub fn pi() -> Real {
    crate::constants::PI
}

pub fn tau() -> Real {
    crate::constants::TAU
}

/// Square root. Negative inputs yield NaN.
pub fn sqrt(a: Real) -> Real {
    if a < 0.0 { Real::NAN } else { libm_sqrt(a) }
}

pub fn sin(a: Real) -> Real {
    libm_sin(a)
}

pub fn cos(a: Real) -> Real {
    libm_cos(a)
}

pub fn tan(a: Real) -> Real {
    libm_tan(a)
}

pub fn sinh(a: Real) -> Real {
    libm_sinh(a)
}

pub fn cosh(a: Real) -> Real {
    libm_cosh(a)
}

pub fn tanh(a: Real) -> Real {
    libm_tanh(a)
}

/// Natural logarithm. Zero or negative inputs yield NaN.
pub fn ln(a: Real) -> Real {
    if a <= 0.0 { Real::NAN } else { libm_ln(a) }
}

/// Base-10 logarithm. Zero or negative inputs yield NaN.
pub fn log(a: Real) -> Real {
    if a <= 0.0 { Real::NAN } else { libm_log10(a) }
}

/// Exponentiation, used for the `^` operator. Standard `pow` semantics:
/// negative and fractional exponents are supported, 0^0 is 1.
pub fn pow(a: Real, b: Real) -> Real {
    libm_pow(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn test_pi_tau() {
        assert_approx_eq!(pi() * 2.0, tau());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(4.0), 2.0);
        assert!(sqrt(-1.0).is_nan());
    }

    #[test]
    fn test_trig_at_zero() {
        assert_approx_eq!(sin(0.0), 0.0);
        assert_approx_eq!(cos(0.0), 1.0);
        assert_approx_eq!(tan(0.0), 0.0);
        assert_approx_eq!(sinh(0.0), 0.0);
        assert_approx_eq!(cosh(0.0), 1.0);
        assert_approx_eq!(tanh(0.0), 0.0);
    }

    #[test]
    fn test_ln() {
        assert_approx_eq!(ln(core::f64::consts::E as crate::Real), 1.0);
        assert!(ln(0.0).is_nan());
        assert!(ln(-1.0).is_nan());
    }

    #[test]
    fn test_log() {
        assert_approx_eq!(log(1000.0), 3.0);
        assert!(log(-1.0).is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(3.0, 2.0), 9.0);
        assert_eq!(pow(0.0, 0.0), 1.0);
        assert_approx_eq!(pow(2.0, -1.0), 0.5);
        assert_approx_eq!(pow(4.0, 0.5), 2.0);
    }
}
