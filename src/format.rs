//! Number rendering for stack display

/// Default number of fractional digits shown for each stack value
pub const DEFAULT_PRECISION: usize = 10;

/// Format a value with at most `precision` fractional digits.
///
/// Trailing zeros and a dangling decimal point are dropped, so `3.0` renders
/// as `3` and `2f64.sqrt()` as `1.4142135624` at the default precision.
/// Infinities render as `∞` and `-∞`, NaN as `NaN`.
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let mut out = format!("{:.*}", precision, value);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_value(3.0, DEFAULT_PRECISION), "3");
        assert_eq!(format_value(-1.0, DEFAULT_PRECISION), "-1");
        assert_eq!(format_value(0.0, DEFAULT_PRECISION), "0");
        assert_eq!(format_value(120.0, DEFAULT_PRECISION), "120");
    }

    #[test]
    fn test_fraction_is_rounded_and_trimmed() {
        assert_eq!(format_value(2f64.sqrt(), DEFAULT_PRECISION), "1.4142135624");
        assert_eq!(format_value(10.5, DEFAULT_PRECISION), "10.5");
        assert_eq!(format_value(1.0 / 3.0, 4), "0.3333");
        assert_eq!(format_value(2.4, 0), "2");
        assert_eq!(format_value(2.0 / 3.0, 2), "0.67");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_value(f64::NAN, DEFAULT_PRECISION), "NaN");
        assert_eq!(format_value(f64::INFINITY, DEFAULT_PRECISION), "∞");
        assert_eq!(format_value(f64::NEG_INFINITY, 2), "-∞");
    }
}
