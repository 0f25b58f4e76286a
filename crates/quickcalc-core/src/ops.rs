//! Arithmetic and advanced operations.
//!
//! Pure functions over `f64`. Operations that can fail return
//! [`MathResult`]; the rest follow IEEE-754 host semantics without extra
//! checking (overflow to infinity, NaN propagation).

use tracing::trace;

use crate::error::{MathError, MathResult};

// ── Basic arithmetic ──────────────────────────────────────────────────────────

pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Standard quotient, or [`MathError::DivisionByZero`] when `y == 0`.
pub fn divide(x: f64, y: f64) -> MathResult<f64> {
    if y == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(x / y)
}

// ── Advanced operations ───────────────────────────────────────────────────────

/// Factorial of the integer part of `n`.
///
/// Negative input is a domain error. The product is accumulated in `u128`
/// with checked multiplication; 35! is the first value that does not fit.
pub fn factorial(n: f64) -> MathResult<u128> {
    if n < 0.0 {
        return Err(MathError::NegativeFactorial);
    }
    let n = n.trunc() as u128;
    trace!(n, "computing factorial");
    let mut acc: u128 = 1;
    for k in 2..=n {
        acc = acc
            .checked_mul(k)
            .ok_or(MathError::FactorialOverflow)?;
    }
    Ok(acc)
}

/// `x` raised to `y` under host exponentiation semantics.
///
/// Fractional and negative exponents follow real-number rules; invalid
/// combinations (e.g. negative base, fractional exponent) yield NaN.
pub fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Logarithm of `x` in the given base.
///
/// `x <= 0` is a domain error. The base is not validated: degenerate bases
/// (1, negative) produce whatever the `ln` ratio produces. Callers wanting
/// the natural logarithm pass [`std::f64::consts::E`].
pub fn logarithm(x: f64, base: f64) -> MathResult<f64> {
    if x <= 0.0 {
        return Err(MathError::NonPositiveLogarithm);
    }
    Ok(x.ln() / base.ln())
}

// ── Trigonometry (degrees) ────────────────────────────────────────────────────

pub fn sine(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

pub fn cosine(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Tangent in degrees. No domain restriction: near odd multiples of 90°
/// the result is merely very large, because the radian argument is never
/// exactly π/2 in binary floating point.
pub fn tangent(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

// ── tests ─────────────────────────────────────────────────────────────────────
