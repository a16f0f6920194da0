//! Proleptic Gregorian calendar rules over the full extended year range.
//!
//! Every rule here has two paths. Inside the standard range (years 1
//! through 9999) the answer comes from the host records in [`crate::iso`],
//! which are authoritative there. Outside it the rule is computed directly.

use crate::{
    codec,
    iso::{is_standard_year, IsoDate},
    TemporalError, TemporalResult,
};

/// The weekday every out-of-range year is assumed to start on.
///
/// 0000-01-01 falls on a Saturday in the proleptic Gregorian calendar. Using
/// it for every year outside the standard range is an approximation; see
/// [`day_of_week`].
pub const OUT_OF_RANGE_NEW_YEAR_WEEKDAY: Weekday = Weekday::Saturday;

/// A day of the week, numbered per ISO 8601 (`Monday = 1`).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Returns the weekday `index` days after Monday, for `index` in `0..7`.
    pub(crate) const fn from_monday_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// Returns the ISO 8601 weekday number.
    #[inline]
    #[must_use]
    pub const fn to_iso_number(self) -> u8 {
        self as u8
    }
}

#[inline]
fn host_date(year: i64, month: u8, day: u8) -> Option<IsoDate> {
    is_standard_year(year).then(|| IsoDate::new_unchecked(year as i32, month, day))
}

/// The leap year rule of the proleptic Gregorian calendar.
#[inline]
#[must_use]
pub const fn proleptic_is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns whether `year` has a February 29th.
#[must_use]
pub fn is_leap_year(year: i64) -> bool {
    match host_date(year, 1, 1) {
        Some(date) => date.is_in_leap_year(),
        None => proleptic_is_leap_year(year),
    }
}

/// Returns the number of days in `month` of `year`.
///
/// Fails with a validation error if `month` is not in `1..=12`.
pub fn days_in_month(year: i64, month: u8) -> TemporalResult<u8> {
    if !(1..=12).contains(&month) {
        return Err(TemporalError::validation().with_message("month must be in 1..=12."));
    }
    Ok(days_in_month_unchecked(year, month))
}

/// Returns the number of days in a month already known to be in `1..=12`.
pub(crate) fn days_in_month_unchecked(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("days_in_month panicking is an implementation error."),
    }
}

/// Returns 365 or 366.
#[inline]
#[must_use]
pub fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the one-based ordinal of a date within its year.
///
/// Fails with a validation error if the date is not valid.
pub fn day_of_year(year: i64, month: u8, day: u8) -> TemporalResult<u16> {
    codec::validate_date(year, month, day)?;
    Ok(day_of_year_unchecked(year, month, day))
}

pub(crate) fn day_of_year_unchecked(year: i64, month: u8, day: u8) -> u16 {
    if let Some(date) = host_date(year, month, day) {
        return date.day_of_year();
    }
    let preceding: u16 = (1..month)
        .map(|m| u16::from(days_in_month_unchecked(year, m)))
        .sum();
    preceding + u16::from(day)
}

/// Returns the weekday of a date.
///
/// Inside the standard range this is exact. Outside it, every year is
/// treated as beginning on [`OUT_OF_RANGE_NEW_YEAR_WEEKDAY`] and the weekday
/// is counted forward from there by the day of the year. This does not track
/// the real weekday drift between years and is kept as a deliberate
/// approximation.
///
/// Fails with a validation error if the date is not valid.
pub fn day_of_week(year: i64, month: u8, day: u8) -> TemporalResult<Weekday> {
    codec::validate_date(year, month, day)?;
    Ok(day_of_week_unchecked(year, month, day))
}

pub(crate) fn day_of_week_unchecked(year: i64, month: u8, day: u8) -> Weekday {
    if let Some(date) = host_date(year, month, day) {
        return date.day_of_week();
    }
    let offset = (day_of_year_unchecked(year, month, day) - 1) % 7;
    let start = OUT_OF_RANGE_NEW_YEAR_WEEKDAY as u8 - 1;
    Weekday::from_monday_index(start + offset as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, MAX_YEAR};

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(1_000_000_000));
        assert!(!is_leap_year(1_000_000_100));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(-1));
    }

    #[test]
    fn host_and_proleptic_rules_agree() {
        for year in 1..=9999 {
            assert_eq!(is_leap_year(year), proleptic_is_leap_year(year), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(20_000, 2).unwrap(), 29);
        assert_eq!(days_in_month(-7, 4).unwrap(), 30);
        assert_eq!(days_in_month(781_225, 8).unwrap(), 31);
    }

    #[test]
    fn day_of_year_matches_across_paths() {
        assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
        assert_eq!(day_of_year(12_000, 12, 31).unwrap(), 366);
        assert_eq!(day_of_year(12_001, 3, 1).unwrap(), 60);
        assert_eq!(day_of_year(2001, 3, 1).unwrap(), 60);
    }

    #[test]
    fn out_of_range_weekday_is_anchored_per_year() {
        assert_eq!(day_of_week(0, 1, 1).unwrap(), Weekday::Saturday);
        assert_eq!(day_of_week(10_000, 1, 1).unwrap(), Weekday::Saturday);
        assert_eq!(day_of_week(10_000, 1, 2).unwrap(), Weekday::Sunday);
        assert_eq!(day_of_week(-52, 1, 8).unwrap(), Weekday::Saturday);
        assert_eq!(day_of_week(2014, 4, 20).unwrap(), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.to_iso_number(), 7);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let err = days_in_month(2023, 13).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(days_in_month(20_023, 0).is_err());

        assert_eq!(day_of_year(2023, 13, 1).unwrap_err().kind(), ErrorKind::Validation);
        assert!(day_of_year(2023, 2, 29).is_err());
        assert!(day_of_year(20_023, 4, 31).is_err());
        assert!(day_of_year(MAX_YEAR + 1, 1, 1).is_err());

        assert_eq!(day_of_week(2023, 2, 30).unwrap_err().kind(), ErrorKind::Validation);
        assert!(day_of_week(20_023, 13, 1).is_err());
        assert!(day_of_week(i64::MIN, 1, 1).is_err());
    }
}
