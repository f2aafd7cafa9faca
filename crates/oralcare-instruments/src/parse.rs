//! Lenient numeric parsing for free-text clinical entries.

/// Reads the leading integer of `raw`: leading whitespace, an optional sign,
/// then decimal digits. Anything after the digits is ignored, so `"6mm"`
/// reads as 6 and `"4.5"` as 4. Returns `None` when no digit follows.
/// Values beyond the `i32` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }

    let limit = i64::from(i32::MAX) + 1;
    let magnitude = digits[..len]
        .bytes()
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')).min(limit));
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Like [`parse_leading_int`], but an unparseable entry counts as 0.
/// Never fails.
pub fn parse_score_or_default(raw: &str) -> i32 {
    parse_leading_int(raw).unwrap_or(0)
}
