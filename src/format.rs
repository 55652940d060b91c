//! Display formatting for metric values
//!
//! Pure string transforms; total over finite numeric input. Grouping follows
//! en-US conventions (comma thousands separators, no decimals on integers).

/// Round to the nearest integer and insert thousands separators
fn grouped_integer(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }

    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format as currency: symbol prefix, grouped integer, no decimal places
pub fn format_currency(value: f64) -> String {
    format_currency_with_symbol(value, "$")
}

/// Format as currency with an explicit symbol
pub fn format_currency_with_symbol(value: f64, symbol: &str) -> String {
    format!("{}{}", symbol, grouped_integer(value))
}

/// Format as a percentage with one decimal place and a trailing `%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format as a grouped integer with no decimals
pub fn format_number(value: f64) -> String {
    grouped_integer(value)
}

/// Format with a fixed number of decimal places (default 1)
pub fn format_decimal(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(9_000.0), "$9,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(50.0), "$50");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_currency_rounds() {
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(999.4), "$999");
    }

    #[test]
    fn test_format_currency_with_symbol() {
        assert_eq!(format_currency_with_symbol(1_500.0, "€"), "€1,500");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(10.0), "10.0%");
        assert_eq!(format_percentage(3.26), "3.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(171.0), "171.0%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(180.0), "180");
        assert_eq!(format_number(10_000.0), "10,000");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(1_000.0), "1,000");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-10_000.0), "-10,000");
        assert_eq!(format_number(-1.0), "-1");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(2.5, 1), "2.5");
        assert_eq!(format_decimal(2.5, 3), "2.500");
        assert_eq!(format_decimal(33.333, 1), "33.3");
        assert_eq!(format_decimal(2.0, 0), "2");
    }
}
