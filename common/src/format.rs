//! Text formatting into fixed-capacity buffers.
//!
//! All per-frame text goes through [`heapless::String`] so drawing never
//! allocates.

use core::fmt::Write;

use chrono::{Datelike, NaiveDateTime, Timelike};
use heapless::String;

/// Short Indonesian weekday names, Sunday first.
const CLOCK_DAYS: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];

/// Short Indonesian month names.
const CLOCK_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Formatted count (fits any i64 with separators).
pub type CountText = String<32>;

/// Formatted clock line.
pub type ClockText = String<32>;

/// Format a count with Indonesian digit grouping: `1234567` → `1.234.567`.
pub fn format_count(value: i64) -> CountText {
    let mut out = CountText::new();
    if value < 0 {
        out.push('-').ok();
    }

    let mut digits: String<20> = String::new();
    write!(digits, "{}", value.unsigned_abs()).ok();

    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.').ok();
        }
        out.push(ch).ok();
    }
    out
}

/// Format the header clock: `Sab, 18 Okt 2026 09:16:05`.
pub fn format_clock(dt: &NaiveDateTime) -> ClockText {
    let mut out = ClockText::new();
    write!(
        out,
        "{}, {:02} {} {} {:02}:{:02}:{:02}",
        CLOCK_DAYS[dt.weekday().num_days_from_sunday() as usize],
        dt.day(),
        CLOCK_MONTHS[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    )
    .ok();
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_format_count_grouping() {
        assert_eq!(format_count(0).as_str(), "0");
        assert_eq!(format_count(275).as_str(), "275");
        assert_eq!(format_count(1000).as_str(), "1.000");
        assert_eq!(format_count(1_234_567).as_str(), "1.234.567");
        assert_eq!(format_count(-45_000).as_str(), "-45.000");
    }

    #[test]
    fn test_format_count_extremes_fit() {
        assert_eq!(format_count(i64::MIN).as_str(), "-9.223.372.036.854.775.808");
        assert_eq!(format_count(i64::MAX).as_str(), "9.223.372.036.854.775.807");
    }

    #[test]
    fn test_format_clock() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 17)
            .and_then(|d| d.and_hms_opt(9, 16, 5))
            .unwrap();
        assert_eq!(format_clock(&dt).as_str(), "Sab, 17 Okt 2026 09:16:05");
    }

    #[test]
    fn test_format_clock_pads_day_and_month_names() {
        let dt = NaiveDate::from_ymd_opt(2026, 5, 3)
            .and_then(|d| d.and_hms_opt(23, 0, 9))
            .unwrap();
        assert_eq!(format_clock(&dt).as_str(), "Min, 03 Mei 2026 23:00:09");
    }
}
