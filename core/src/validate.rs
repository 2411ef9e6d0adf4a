use chrono::NaiveDate;

/// Integer parse under number-coercion rules: surrounding whitespace is
/// ignored and empty input coerces to zero. A decimal is accepted only when
/// it has no fractional part, so "3.0" passes and "3.5" does not.
pub fn coerce_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let num: f64 = trimmed.parse().ok()?;
    if num.is_finite() && num.fract() == 0.0 && num.abs() < i64::MAX as f64 {
        Some(num as i64)
    } else {
        None
    }
}

pub fn is_integer(raw: &str) -> bool {
    coerce_integer(raw).is_some()
}

/// Strict DD/MM/YYYY check: two-digit day, two-digit month, four-digit
/// year, slash separators, and a real calendar date.
pub fn is_valid_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return false;
    }
    let all_digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !all_digits(0..2) || !all_digits(3..5) || !all_digits(6..10) {
        return false;
    }
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").is_ok()
}
