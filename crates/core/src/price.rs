//! Price display formatting.
//!
//! Prices are plain non-negative integer units. The single display format
//! groups digits in threes from the right ("#,###" style): no decimals, no
//! currency symbol, no locale parameterization.

/// Format a price with thousands separators, e.g. `1234567` -> `"1,234,567"`.
pub fn format(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
