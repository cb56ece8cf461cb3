//! Price text normalization.
//!
//! Store pages print prices as e.g. `"1,299.00 DH"` or `"450 MAD"`.
//! Commas are thousands separators, except a final comma followed by exactly
//! two digits (`"299,00 DH"`), which is a decimal comma. In that form dots
//! are the thousands separators (`"1.299,00 DH"`).

use crate::utils::config::CURRENCY_MARKERS;
use crate::utils::error::ListingError;

/// Extract a numeric price from retailer text
///
/// **Public** - used by the HTML parser and available to custom collectors
///
/// # Errors
/// * `ListingError::InvalidPrice` - text has no parseable, non-negative number
pub fn extract_price(text: &str) -> Result<f64, ListingError> {
    let mut cleaned = text.to_string();
    for marker in CURRENCY_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }

    let cleaned: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = normalize_separators(&cleaned);

    let price: f64 = cleaned
        .parse()
        .map_err(|_| ListingError::InvalidPrice(text.trim().to_string()))?;

    if !price.is_finite() || price < 0.0 {
        return Err(ListingError::InvalidPrice(text.trim().to_string()));
    }

    Ok(price + 0.0)
}

/// Rewrite the digits so `str::parse::<f64>` sees a plain decimal number
fn normalize_separators(digits: &str) -> String {
    let decimal_comma = digits.rfind(',').filter(|&idx| {
        let tail = &digits[idx + 1..];
        tail.len() == 2 && tail.chars().all(|c| c.is_ascii_digit())
    });

    match decimal_comma {
        Some(idx) => {
            let whole: String = digits[..idx]
                .chars()
                .filter(|c| *c != ',' && *c != '.')
                .collect();
            format!("{}.{}", whole, &digits[idx + 1..])
        }
        None => digits.chars().filter(|c| *c != ',').collect(),
    }
}
