//! UTC date utilities without timezone dependencies.
//!
//! Only the piece the build needs: the current year for the footer copyright.

use std::time::{SystemTime, UNIX_EPOCH};

/// Calendar date in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateUtc {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl DateUtc {
    /// Convert seconds since the Unix epoch to a civil date.
    ///
    /// Howard Hinnant's `civil_from_days`, valid for the proleptic Gregorian calendar.
    pub fn from_unix(secs: i64) -> Self {
        let days = secs.div_euclid(86_400);
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self { year, month, day }
    }

    /// Today's date (UTC).
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Self::from_unix(secs)
    }
}

/// Current year in UTC.
pub fn current_year() -> i64 {
    DateUtc::today().year
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(
            DateUtc::from_unix(0),
            DateUtc {
                year: 1970,
                month: 1,
                day: 1
            }
        );
    }

    #[test]
    fn test_known_dates() {
        // 2024-02-29T12:00:00Z (leap day)
        let ymd = |d: DateUtc| (d.year, d.month, d.day);
        assert_eq!(ymd(DateUtc::from_unix(1_709_208_000)), (2024, 2, 29));
        // 2023-12-31T23:59:59Z
        assert_eq!(ymd(DateUtc::from_unix(1_704_067_199)), (2023, 12, 31));
        // 2024-01-01T00:00:00Z
        assert_eq!(ymd(DateUtc::from_unix(1_704_067_200)), (2024, 1, 1));
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
