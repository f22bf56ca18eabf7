//! Display formatting for engine results
//!
//! Sentinels show as `Error` unless raw output is requested. Tiny magnitudes
//! collapse to `0`, very large ones switch to exponential notation with a
//! signed exponent (`2.50000000e+12`).

/// Below this magnitude a result is shown as `0`
const ZERO_THRESHOLD: f64 = 1e-10;
/// Above this magnitude a result is shown in exponential notation
const EXPONENTIAL_THRESHOLD: f64 = 1e10;
/// Mantissa digits in exponential notation
const EXPONENTIAL_DIGITS: usize = 8;

/// Text for a NaN or infinite result
pub fn sentinel_label(value: f64, raw: bool) -> &'static str {
    match (raw, value.is_nan(), value.is_sign_positive()) {
        (false, _, _) => "Error",
        (true, true, _) => "NaN",
        (true, false, true) => "inf",
        (true, false, false) => "-inf",
    }
}

/// Eight-digit mantissa with an explicit exponent sign
fn exponential(value: f64) -> String {
    let text = format!("{:.*e}", EXPONENTIAL_DIGITS, value);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}

pub fn format_value(value: f64, precision: usize, raw: bool) -> String {
    if !value.is_finite() {
        return sentinel_label(value, raw).to_string();
    }

    let magnitude = value.abs();
    if magnitude < ZERO_THRESHOLD {
        return "0".to_string();
    }
    if magnitude > EXPONENTIAL_THRESHOLD {
        return exponential(value);
    }

    let fixed = format!("{:.*}", precision, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(format_value(f64::NAN, 10, false), "Error");
        assert_eq!(format_value(f64::INFINITY, 10, false), "Error");
        assert_eq!(format_value(f64::NAN, 10, true), "NaN");
        assert_eq!(format_value(f64::INFINITY, 10, true), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY, 10, true), "-inf");
    }

    #[test]
    fn test_ordinary_values() {
        assert_eq!(format_value(5.0, 10, false), "5");
        assert_eq!(format_value(-2.5, 10, false), "-2.5");
        assert_eq!(format_value(0.1 + 0.2, 10, false), "0.3");
        assert_eq!(format_value(1.0 / 3.0, 4, false), "0.3333");
        assert_eq!(format_value(120.0, 0, false), "120");
    }

    #[test]
    fn test_precision_counts_decimal_places() {
        assert_eq!(format_value(1234.56789, 4, false), "1234.5679");
        assert_eq!(format_value(1234.56789, 1, false), "1234.6");
        assert_eq!(format_value(0.000123456, 5, false), "0.00012");
    }

    #[test]
    fn test_tiny_values_collapse_to_zero() {
        assert_eq!(format_value(1e-11, 10, false), "0");
        assert_eq!(format_value(-1e-12, 10, false), "0");
        assert_eq!(format_value(0.0, 10, false), "0");
        assert_eq!(format_value(-0.001, 2, false), "0");
    }

    #[test]
    fn test_large_values_use_exponent() {
        assert_eq!(format_value(2.5e12, 10, false), "2.50000000e+12");
        assert_eq!(format_value(-1e15, 10, false), "-1.00000000e+15");
        assert_eq!(format_value(f64::MAX, 10, false), "1.79769313e+308");
        assert_eq!(exponential(1.5e-12), "1.50000000e-12");
        assert_eq!(format_value(1e10, 10, false), "10000000000");
    }
}
