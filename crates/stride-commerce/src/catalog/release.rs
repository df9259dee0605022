//! Release recency window.

use chrono::{Months, NaiveDate};

use crate::error::CommerceError;

/// How long after its release date a listing counts as a new release.
pub const RECENCY_WINDOW_MONTHS: u32 = 1;

/// Check whether a release date falls inside the recency window.
///
/// A listing stays "new" until one calendar month after its release date,
/// so a shoe released on Jan 31 stops being new at the end of February.
pub fn is_recent_release(release_date: NaiveDate, today: NaiveDate) -> bool {
    match release_date.checked_add_months(Months::new(RECENCY_WINDOW_MONTHS)) {
        Some(window_end) => today < window_end,
        None => false,
    }
}

/// Parse a catalog feed release date (`YYYY-MM-DD`).
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, CommerceError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CommerceError::InvalidReleaseDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_recent_within_window() {
        // Released 20 days ago.
        assert!(is_recent_release(date(2024, 5, 26), date(2024, 6, 15)));
    }

    #[test]
    fn test_not_recent_outside_window() {
        // Released 2 years ago.
        assert!(!is_recent_release(date(2022, 6, 15), date(2024, 6, 15)));
    }

    #[test]
    fn test_window_closes_after_one_month() {
        let release = date(2024, 5, 15);
        assert!(is_recent_release(release, date(2024, 6, 14)));
        assert!(!is_recent_release(release, date(2024, 6, 15)));
    }

    #[test]
    fn test_month_end_clamping() {
        // Jan 31 + 1 month clamps to Feb 29 in a leap year.
        let release = date(2024, 1, 31);
        assert!(is_recent_release(release, date(2024, 2, 28)));
        assert!(!is_recent_release(release, date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_release_date() {
        assert_eq!(parse_release_date("2024-05-26").unwrap(), date(2024, 5, 26));
        assert!(matches!(
            parse_release_date("26/05/2024"),
            Err(CommerceError::InvalidReleaseDate(_))
        ));
    }
}
