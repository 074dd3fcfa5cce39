/// Maximum number of digits kept in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Reformats raw phone input into the `(DDD) DDD-DDDD` display mask.
///
/// Non-digits are stripped and the result is truncated to
/// [`PHONE_DIGITS`] digits before formatting, so partial input yields a
/// partial mask:
///
/// - 0–2 digits: the digits unchanged
/// - 3–5 digits: `(DDD) D…`
/// - 6+ digits: `(DDD) DDD-D…`
///
/// Reformatting an already formatted value returns it unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Removes the last digit from a masked phone value and re-applies the mask.
///
/// Plain character deletion would only strip mask punctuation (for example
/// the trailing space of `"(123) "`), which the mask immediately restores.
pub fn delete_last_digit(masked: &str) -> String {
    let mut digits: String = masked.chars().filter(char::is_ascii_digit).collect();
    digits.pop();
    format_phone(&digits)
}
