//! Price-string currency conversion.

use std::sync::LazyLock;

use regex::Regex;

/// Default USD to LKR exchange rate used when none is configured.
pub const DEFAULT_EXCHANGE_RATE: f64 = 325.0;

/// Marker appended by [`convert_currency`]; its presence means the string has
/// already been converted.
const CONVERTED_MARKER: &str = "~LKR";

/// Regex to find a dollar amount like "$50" or "$9.99".
static DOLLAR_AMOUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([0-9]+(?:\.[0-9]+)?)").expect("Invalid dollar amount regex")
});

/// Append the LKR equivalent to a price string containing a dollar amount.
///
/// "$50/month" with rate 325 becomes "$50/month (~LKR 16250)". Strings with
/// no dollar amount, and strings that already carry a converted amount, pass
/// through unchanged; the latter keeps record normalization idempotent.
pub fn convert_currency(text: &str, rate: f64) -> String {
    if text.contains(CONVERTED_MARKER) {
        return text.to_string();
    }

    let Some(cap) = DOLLAR_AMOUNT_REGEX.captures(text) else {
        return text.to_string();
    };

    let amount: f64 = match cap[1].parse() {
        Ok(amount) => amount,
        Err(_) => return text.to_string(),
    };

    let converted = (amount * rate).round() as i64;
    format!("{} (~LKR {})", text, converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dollar_amount_passes_through() {
        assert_eq!(convert_currency("Free", 325.0), "Free");
        assert_eq!(convert_currency("N/A", 325.0), "N/A");
        assert_eq!(convert_currency("Contact sales", 325.0), "Contact sales");
    }

    #[test]
    fn test_dollar_amount_gets_lkr_equivalent() {
        let converted = convert_currency("$50/month", 325.0);
        assert_eq!(converted, "$50/month (~LKR 16250)");
    }

    #[test]
    fn test_fractional_amount_rounds() {
        let converted = convert_currency("$9.99", 325.0);
        assert_eq!(converted, "$9.99 (~LKR 3247)");
    }

    #[test]
    fn test_only_first_amount_converted() {
        let converted = convert_currency("$10 to $20 per seat", 325.0);
        assert_eq!(converted, "$10 to $20 per seat (~LKR 3250)");
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let once = convert_currency("$50/month", 325.0);
        let twice = convert_currency(&once, 325.0);
        assert_eq!(once, twice);
    }
}
