// src/specs/dates.rs
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

// "March 5, 2025"
static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^({})\s+([0-9]{{1,2}}),\s+([0-9]{{4}})$", MONTHS.join("|")))
        .expect("month-day-year pattern")
});

// "12 April 2025" or "12-13 April 2025"
static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^([0-9]{{1,2}})(?:-[0-9]{{1,2}})?\s+({})\s+([0-9]{{4}})$",
        MONTHS.join("|")
    ))
    .expect("day-month-year pattern")
});

/// A date found in card text: ISO form plus the wording it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceDate {
    pub iso: String,
    pub display: String,
}

/// Recognise a whole (already trimmed) text run as a race date.
///
/// `Month D, YYYY` is tried first, then `D[-D] Month YYYY`; for a range only
/// the first day counts. Month names are English and case sensitive. Text that
/// matches a pattern but names no real day (`February 30, 2025`) yields `None`.
pub fn parse_race_date(text: &str) -> Option<RaceDate> {
    let ymd = MONTH_DAY_YEAR
        .captures(text)
        .and_then(|c| to_date(&c[3], &c[1], &c[2]))
        .or_else(|| {
            DAY_MONTH_YEAR
                .captures(text)
                .and_then(|c| to_date(&c[3], &c[2], &c[1]))
        })?;

    Some(RaceDate {
        iso: ymd.format("%Y-%m-%d").to_string(),
        display: s!(text),
    })
}

fn to_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok().filter(|&y| y >= 1)?;
    let month = MONTHS.iter().position(|&m| m == month)? as u32 + 1;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
