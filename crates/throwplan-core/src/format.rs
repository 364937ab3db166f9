//! Numeric label formatting.
//!
//! Dimension labels, titles, and output file names all format numbers with
//! the same rule: whole values render as plain integers, fractional values
//! render fixed-point with at most [`MAX_DECIMALS`] places and trailing
//! zeros stripped.

/// Maximum number of decimal places rendered for fractional values.
pub const MAX_DECIMALS: usize = 3;

/// Formats a number for display in labels and file names.
///
/// Integral values render without a decimal point. Fractional values are
/// rounded to [`MAX_DECIMALS`] places, then trailing zeros and a bare
/// trailing point are stripped.
///
/// # Examples
///
/// ```
/// # use throwplan_core::format::format_number;
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(15.625), "15.625");
/// assert_eq!(format_number(12.3456), "12.346");
/// assert_eq!(format_number(2.500), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.prec$}", prec = MAX_DECIMALS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    // "-0" can survive trimming for tiny negative values
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Formats a dimension value with the feet unit suffix, e.g. `"25 ft"`.
pub fn format_feet(value: f64) -> String {
    format!("{} ft", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_have_no_decimal_point() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(20.000), "20");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        assert_eq!(format_number(2.50), "2.5");
        assert_eq!(format_number(0.1875), "0.188");
        assert_eq!(format_number(15.625), "15.625");
    }

    #[test]
    fn test_rounding_to_three_decimals() {
        assert_eq!(format_number(19.995), "19.995");
        assert_eq!(format_number(12.3456), "12.346");
        assert_eq!(format_number(1.0001), "1");
    }

    #[test]
    fn test_negative_zero_normalizes() {
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_format_feet() {
        assert_eq!(format_feet(25.0), "25 ft");
        assert_eq!(format_feet(15.625), "15.625 ft");
    }
}
