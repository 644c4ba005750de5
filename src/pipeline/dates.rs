use chrono::NaiveDate;

/// Parse an album release date at day, month or year precision.
///
/// Month-precision dates land on the first of the month and year-precision
/// dates on January 1. Anything else yields `None`.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    let mut parts = raw.split('-');
    let year = parse_fixed_digits(parts.next()?, 4)?;
    let month = match parts.next() {
        Some(month) => parse_fixed_digits(month, 2)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year as i32, month, 1)
}

pub fn ms_to_minutes(duration_ms: u64) -> f64 {
    duration_ms as f64 / 60_000.0
}

fn parse_fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
