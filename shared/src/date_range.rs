//! Date range input parsing.
//!
//! The search bar holds a range in the picker's display format,
//! `MM/DD/YYYY - MM/DD/YYYY`. The backend filters on integer business dates
//! `YYYYMMDD`, so each side is folded into `year * 10000 + month * 100 + day`.
//! Nothing is validated: a side that does not parse yields an invalid key
//! which is still sent, rendered as `NaN`.

use std::fmt;

const RANGE_SEPARATOR: &str = " - ";

/// Comparable business date key, `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateKey(Option<i64>);

impl DateKey {
    /// A key built from already-known parts; invalid when it does not fit.
    pub fn from_parts(year: i64, month: i64, day: i64) -> Self {
        let key = year
            .checked_mul(10000)
            .and_then(|key| key.checked_add(month.checked_mul(100)?))
            .and_then(|key| key.checked_add(day));
        DateKey(key)
    }

    /// A key that could not be computed.
    pub const fn invalid() -> Self {
        DateKey(None)
    }

    /// The numeric key, `None` when a part did not parse.
    pub fn value(self) -> Option<i64> {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("NaN"),
        }
    }
}

/// Parses `"MM/DD/YYYY - MM/DD/YYYY"` into `[from_key, to_key]`.
pub fn parse_date_range(input: &str) -> [DateKey; 2] {
    let mut sides = input.split(RANGE_SEPARATOR);
    let from = sides.next().map(parse_date_key).unwrap_or(DateKey::invalid());
    let to = sides.next().map(parse_date_key).unwrap_or(DateKey::invalid());
    [from, to]
}

/// Parses one `MM/DD/YYYY` side.
pub fn parse_date_key(side: &str) -> DateKey {
    let mut parts = side.split('/');
    let (Some(month), Some(day), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return DateKey::invalid();
    };
    match (coerce_number(year), coerce_number(month), coerce_number(day)) {
        (Some(year), Some(month), Some(day)) => DateKey::from_parts(year, month, day),
        _ => DateKey::invalid(),
    }
}

// Number coercion the way the browser reads form text: blank is zero,
// `0x`/`0o`/`0b` prefixes and decimal or exponent notation are accepted.
// Keys are integers, so a value with a fractional part is invalid.
fn coerce_number(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let digits = text
            .get(..2)
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .map(|_| &text[2..]);
        if let Some(digits) = digits {
            if digits.starts_with(['+', '-']) {
                return None;
            }
            return i64::from_str_radix(digits, radix).ok();
        }
    }
    // `f64::from_str` also takes `inf` and `NaN`, which are not finite.
    let value: f64 = text.parse().ok()?;
    let integral = value.is_finite() && value.fract() == 0.0;
    (integral && value >= i64::MIN as f64 && value < i64::MAX as f64).then(|| value as i64)
}

/// Formats a single-day range in the picker's display format.
pub fn single_day_range(year: u32, month: u32, day: u32) -> String {
    let date = format!("{month:02}/{day:02}/{year:04}");
    format!("{date}{RANGE_SEPARATOR}{date}")
}
