//! Turnaround-time parsing for the duration sort key.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Sentinel for empty or unrecognized turnaround text. Large enough to sort
/// after any real estimate, used identically for "missing" and
/// "unparseable".
pub const UNPARSEABLE_TURNAROUND_DAYS: u32 = 999;

static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Derive a comparable day count from a free-text turnaround estimate.
///
/// "3 days" -> 3, "2 weeks" -> 14, "1 month" -> 30. A unit keyword without
/// digits falls back to one unit ("days" -> 1, "weeks" -> 7, "months" ->
/// 30). Everything else, including the empty string, maps to the sentinel.
pub fn turnaround_days(text: &str) -> u32 {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return UNPARSEABLE_TURNAROUND_DAYS;
    }

    let first_int = |default: u32| {
        FIRST_INTEGER
            .find(&text)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(default)
    };

    if text.contains("day") {
        first_int(1)
    } else if text.contains("week") {
        first_int(1).saturating_mul(7)
    } else if text.contains("month") {
        first_int(1).saturating_mul(30)
    } else {
        UNPARSEABLE_TURNAROUND_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days() {
        assert_eq!(turnaround_days("3 days"), 3);
        assert_eq!(turnaround_days("1 day"), 1);
        assert_eq!(turnaround_days("Same day"), 1);
    }

    #[test]
    fn test_weeks() {
        assert_eq!(turnaround_days("2 weeks"), 14);
        assert_eq!(turnaround_days("1 week"), 7);
        assert_eq!(turnaround_days("a few weeks"), 7);
    }

    #[test]
    fn test_months() {
        assert_eq!(turnaround_days("1 month"), 30);
        assert_eq!(turnaround_days("2 months"), 60);
        assert_eq!(turnaround_days("within a month"), 30);
    }

    #[test]
    fn test_sentinel_for_empty_and_unrecognized() {
        assert_eq!(turnaround_days(""), UNPARSEABLE_TURNAROUND_DAYS);
        assert_eq!(turnaround_days("   "), UNPARSEABLE_TURNAROUND_DAYS);
        assert_eq!(turnaround_days("ASAP"), UNPARSEABLE_TURNAROUND_DAYS);
        assert_eq!(turnaround_days("instant"), UNPARSEABLE_TURNAROUND_DAYS);
    }

    #[test]
    fn test_case_insensitive_units() {
        assert_eq!(turnaround_days("3 DAYS"), 3);
        assert_eq!(turnaround_days("2 Weeks"), 14);
    }

    #[test]
    fn test_day_keyword_wins_over_later_units() {
        // First matching unit in priority order: day, then week, then month.
        assert_eq!(turnaround_days("1 day to 1 week"), 1);
    }
}
