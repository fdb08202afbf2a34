//! # Shared Utility Functions
//!
//! Display helpers used by the storefront client.
//!
//! - [`format_number`] - Format a number with comma thousands separators
//! - [`format_price`] - Format a product price, dropping zero fractions
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(1000.0), "1,000");
//! assert_eq!(format_price(1234.5), "1,234.50");
//! ```

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// assert_eq!(format_number(-4500.0, 0), "-4,500");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" is not worth showing
    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Format a product price for display.
///
/// Whole amounts are shown without decimals, anything else with two.
/// Non-finite values render as `N/A`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "N/A".to_string();
    }
    if price.fract() == 0.0 {
        format_number(price, 0)
    } else {
        format_number(price, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(-0.0, 0), "0");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1000.0), "1,000");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(25.5), "25.50");
        assert_eq!(format_price(1_200_000.0), "1,200,000");
        assert_eq!(format_price(f64::NAN), "N/A");
    }
}
