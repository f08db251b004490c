//! Per-keystroke input normalization for the checkout form fields.
//!
//! Each formatter takes the latest raw input string and returns the new
//! display value; the previously processed value is irrelevant. All
//! formatters are pure and deterministic with no side effects.

/// Strip non-digits, regroup into blocks of four separated by single
/// spaces, and cap the formatted result at 19 characters (16 digits plus
/// 3 separators).
pub fn format_card_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut formatted = String::with_capacity(19);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted.truncate(19);
    formatted
}

/// Strip non-digits; once at least two digits are present, insert `/`
/// after the second and keep at most four digits total (MM/YY). With
/// fewer than two digits the input is returned unformatted.
pub fn format_expiry_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let year_end = digits.len().min(4);
        format!("{}/{}", &digits[..2], &digits[2..year_end])
    } else {
        digits
    }
}

/// Strip non-digits and keep at most four characters.
pub fn format_cvv(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.truncate(4);
    digits
}

/// Keep only digits and literal decimal points. Multiple decimal points
/// are NOT collapsed; whether such input survives submission is decided
/// by the validator's numeric parse, not here.
pub fn format_amount(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
