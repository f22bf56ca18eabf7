//! Pure numeric functions with the calculator's edge-case policy
//!
//! Every function here is total: undefined inputs produce NaN and results
//! beyond the `f64` range produce infinity. Nothing panics and nothing
//! returns an error. [`ScientificCalculator`](crate::ScientificCalculator)
//! delegates to these and records the returned value as its last result.

use std::f64::consts;

/// Largest `n` whose factorial fits in an `f64` (170! ~ 7.26e306)
pub const MAX_FACTORIAL_INPUT: i32 = 170;

// === Arithmetic ===

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`, or NaN when `b` is zero (either sign)
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }
    a / b
}

/// Truncated remainder with the sign of `a` (C `fmod`), NaN when `b` is zero
pub fn modulo(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }
    a % b
}

// === Power and roots ===

/// IEEE `pow`: negative base with a fractional exponent is NaN,
/// zero base with a negative exponent is infinity
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn square_root(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    x.sqrt()
}

/// Real cube root, defined for negative inputs
pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

/// `x^(1/n)`, NaN when `n` is zero
///
/// Goes through [`power`], so a negative `x` yields NaN whenever `1/n` is not
/// an integer. That includes odd `n` such as `nth_root(-8, 3)`, where
/// [`cube_root`] would return a real root. For `n = 1`, `-1` or `0.5` the
/// exponent is integral and the result is real.
pub fn nth_root(x: f64, n: f64) -> f64 {
    if n == 0.0 {
        return f64::NAN;
    }
    power(x, 1.0 / n)
}

// === Trigonometry (radians) ===

pub fn sine(x: f64) -> f64 {
    x.sin()
}

pub fn cosine(x: f64) -> f64 {
    x.cos()
}

pub fn tangent(x: f64) -> f64 {
    x.tan()
}

fn outside_unit_interval(x: f64) -> bool {
    x < -1.0 || x > 1.0
}

pub fn arcsine(x: f64) -> f64 {
    if outside_unit_interval(x) {
        return f64::NAN;
    }
    x.asin()
}

pub fn arccosine(x: f64) -> f64 {
    if outside_unit_interval(x) {
        return f64::NAN;
    }
    x.acos()
}

pub fn arctangent(x: f64) -> f64 {
    x.atan()
}

// === Hyperbolic ===

pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

// === Logarithms and exponential ===
//
// Zero is rejected with NaN rather than mapped to -inf.

pub fn natural_log(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    x.ln()
}

pub fn log10(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    x.log10()
}

pub fn log2(x: f64) -> f64 {
    if x <= 0.0 {
        return f64::NAN;
    }
    x.log2()
}

/// `e^x`; overflows to +inf for large `x`
pub fn exponential(x: f64) -> f64 {
    x.exp()
}

// === Special ===

/// Iterative product `2 * 3 * ... * n`
///
/// NaN for negative `n`, +inf above [`MAX_FACTORIAL_INPUT`].
pub fn factorial(n: i32) -> f64 {
    if n < 0 {
        return f64::NAN;
    }
    if n > MAX_FACTORIAL_INPUT {
        return f64::INFINITY;
    }
    (2..=n).fold(1.0, |acc, i| acc * f64::from(i))
}

pub fn absolute(x: f64) -> f64 {
    x.abs()
}

pub fn ceiling(x: f64) -> f64 {
    x.ceil()
}

pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Nearest integer, halfway cases away from zero (`2.5 -> 3`, `-2.5 -> -3`)
pub fn round(x: f64) -> f64 {
    x.round()
}

// === Conversion ===

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * consts::PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / consts::PI
}

// === Constants ===

pub fn pi() -> f64 {
    consts::PI
}

pub fn e() -> f64 {
    consts::E
}

/// `(1 + sqrt(5)) / 2`, computed rather than taken from a literal
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// True for NaN and both infinities
pub fn is_sentinel(value: f64) -> bool {
    !value.is_finite()
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 4.0), 2.5);
        assert!(divide(1.0, 0.0).is_nan());
        assert!(divide(1.0, -0.0).is_nan());
        assert!(divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(modulo(7.0, 3.0), 1.0);
        assert_eq!(modulo(-7.0, 3.0), -1.0);
        assert_eq!(modulo(7.0, -3.0), 1.0);
        assert_eq!(modulo(5.5, 2.0), 1.5);
        assert!(modulo(7.0, 0.0).is_nan());
    }

    #[test]
    fn test_power_ieee_cases() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(-2.0, 3.0), -8.0);
        assert!(power(-8.0, 0.5).is_nan());
        assert_eq!(power(0.0, -1.0), f64::INFINITY);
        assert_eq!(power(0.0, 0.0), 1.0);
        assert_eq!(power(f64::NAN, 0.0), 1.0);
    }

    #[test]
    fn test_roots() {
        assert_eq!(square_root(16.0), 4.0);
        assert!(square_root(-1.0).is_nan());
        assert_eq!(square_root(0.0), 0.0);
        assert!(close(cube_root(27.0), 3.0));
        assert_eq!(cube_root(-8.0), -2.0);
        assert!(close(nth_root(81.0, 4.0), 3.0));
        assert!(nth_root(5.0, 0.0).is_nan());
    }

    #[test]
    fn test_nth_root_negative_base_is_nan_unlike_cube_root() {
        assert!(nth_root(-8.0, 3.0).is_nan());
        assert_eq!(cube_root(-8.0), -2.0);
    }

    #[test]
    fn test_inverse_trig_domain() {
        assert!(arcsine(1.5).is_nan());
        assert!(arcsine(-1.0001).is_nan());
        assert!(arccosine(2.0).is_nan());
        assert!(close(arcsine(1.0), consts::FRAC_PI_2));
        assert!(close(arccosine(-1.0), consts::PI));
        assert!(close(arctangent(1.0), consts::FRAC_PI_4));
    }

    #[test]
    fn test_logs_reject_zero_and_negative() {
        for x in [0.0, -0.0, -1.0, -1e-300] {
            assert!(natural_log(x).is_nan(), "ln({x})");
            assert!(log10(x).is_nan(), "log10({x})");
            assert!(log2(x).is_nan(), "log2({x})");
        }
        assert!(close(log10(1000.0), 3.0));
        assert_eq!(log2(1024.0), 10.0);
        assert!(close(natural_log(consts::E), 1.0));
    }

    #[test]
    fn test_exponential_overflow() {
        assert_eq!(exponential(0.0), 1.0);
        assert_eq!(exponential(1000.0), f64::INFINITY);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000.0);
        assert!(factorial(-1).is_nan());
        assert!(factorial(i32::MIN).is_nan());
        assert_eq!(factorial(171), f64::INFINITY);
        assert_eq!(factorial(i32::MAX), f64::INFINITY);
        assert!(factorial(MAX_FACTORIAL_INPUT).is_finite());
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round(0.5), 1.0);
        assert_eq!(round(2.4), 2.0);
        assert_eq!(ceiling(-1.5), -1.0);
        assert_eq!(floor(-1.5), -2.0);
        assert_eq!(absolute(-3.25), 3.25);
    }

    #[test]
    fn test_conversion() {
        assert!(close(degrees_to_radians(180.0), consts::PI));
        assert!(close(radians_to_degrees(consts::FRAC_PI_2), 90.0));
    }

    #[test]
    fn test_constants() {
        assert_eq!(pi(), consts::PI);
        assert_eq!(e(), consts::E);
        assert!((golden_ratio() - 1.618_033_988_7).abs() < 1e-10);
    }

    #[test]
    fn test_is_sentinel() {
        assert!(is_sentinel(f64::NAN));
        assert!(is_sentinel(f64::INFINITY));
        assert!(is_sentinel(f64::NEG_INFINITY));
        assert!(!is_sentinel(0.0));
    }
}
