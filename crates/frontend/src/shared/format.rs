//! Formatting helpers for table cells.

/// Formats a unit price as "$1299.99".
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1299.99), "$1299.99");
        assert_eq!(format_price(45.0), "$45.00");
        assert_eq!(format_price(12.989), "$12.99");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
