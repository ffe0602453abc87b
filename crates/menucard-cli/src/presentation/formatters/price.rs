/// Price as shown on a dish card: `"R 185"`.
///
/// The price text is shown as entered (surrounding whitespace aside); no
/// numeric reformatting happens.
pub fn format_price(currency_label: &str, price: &str) -> String {
    let price = price.trim();
    let currency = currency_label.trim();
    if currency.is_empty() {
        price.to_string()
    } else {
        format!("{} {}", currency, price)
    }
}

/// Placeholder for the empty price input: `"R 0.00"`.
pub fn price_placeholder(currency_label: &str) -> String {
    format_price(currency_label, "0.00")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_with_currency() {
        assert_eq!(format_price("R", "185"), "R 185");
        assert_eq!(format_price("R", " 99.50 "), "R 99.50");
    }

    #[test]
    fn test_format_price_without_currency() {
        assert_eq!(format_price("", "12"), "12");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(price_placeholder("R"), "R 0.00");
        assert_eq!(price_placeholder("$"), "$ 0.00");
    }
}
