//! Data parsing helpers for the string boundary.
//!
//! These functions only check the *shape* of their input.  Whether the
//! parsed numbers form a real calendar date is decided by the date types.

/// Parse a date string in strict ISO 8601 calendar format (`YYYY-MM-DD`).
///
/// The year must have exactly four digits and the month and day exactly
/// two.  Surrounding whitespace is rejected.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.split('-');
    let year = parse_fixed_digits(parts.next()?, 4)?;
    let month = parse_fixed_digits(parts.next()?, 2)?;
    let day = parse_fixed_digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year as u16, month as u8, day as u8))
}

/// Parse a month-day string (`MM-DD`) as used by the rule documents.
///
/// Returns `(month, day)` on success.
pub fn parse_month_day(s: &str) -> Option<(u8, u8)> {
    let (month, day) = s.split_once('-')?;
    let month = parse_fixed_digits(month, 2)?;
    let day = parse_fixed_digits(day, 2)?;
    Some((month as u8, day as u8))
}

/// Parse a year given as an integer literal (optional sign, decimal digits).
///
/// Range checking is left to the caller.
pub fn parse_year(s: &str) -> Option<i32> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
