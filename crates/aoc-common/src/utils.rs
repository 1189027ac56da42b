//! Shared utility functions for dates and embed colours.

use crate::types::{AocError, Result};
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::America::New_York;

/// First year Advent of Code was held.
pub const FIRST_AOC_YEAR: i32 = 2015;

/// Returns the latest Advent of Code edition that has started on `today`.
///
/// A new edition begins on December 1st, so any date before December belongs
/// to the previous year's edition.
pub fn current_aoc_year(today: NaiveDate) -> i32 {
    if today.month() < 12 {
        today.year() - 1
    } else {
        today.year()
    }
}

/// Today's date as seen by the Advent of Code servers.
///
/// Puzzles unlock at midnight US Eastern time.
pub fn aoc_today() -> NaiveDate {
    Utc::now().with_timezone(&New_York).date_naive()
}

/// Parses a `#RRGGBB` (or `RRGGBB`) colour string into its RGB value.
pub fn parse_hex_colour(input: &str) -> Result<u32> {
    let hex = input.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AocError::validation(
            format!("'{input}' is not a #RRGGBB colour"),
            "colour",
        ));
    }

    u32::from_str_radix(hex, 16)
        .map_err(|e| AocError::validation(format!("'{input}': {e}"), "colour"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_aoc_year_before_december() {
        assert_eq!(current_aoc_year(date(2021, 1, 1)), 2020);
        assert_eq!(current_aoc_year(date(2021, 11, 30)), 2020);
    }

    #[test]
    fn test_current_aoc_year_switches_on_december_first() {
        assert_eq!(current_aoc_year(date(2021, 12, 1)), 2021);
        assert_eq!(current_aoc_year(date(2021, 12, 31)), 2021);
    }

    #[test]
    fn test_parse_hex_colour() {
        assert_eq!(parse_hex_colour("#1C5D99").unwrap(), 0x1C5D99);
        assert_eq!(parse_hex_colour("bc3838").unwrap(), 0xBC3838);
        assert_eq!(parse_hex_colour(" #ffffff ").unwrap(), 0xFFFFFF);
    }

    #[test]
    fn test_parse_hex_colour_rejects_garbage() {
        assert!(parse_hex_colour("").is_err());
        assert!(parse_hex_colour("#fff").is_err());
        assert!(parse_hex_colour("#gggggg").is_err());
        assert!(parse_hex_colour("#1234567").is_err());
    }
}
