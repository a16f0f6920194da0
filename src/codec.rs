//! Fixed-point encoding of calendar and clock fields.
//!
//! A date is packed into a signed "day ordinal" using the fixed radixes
//! [`DAY_RADIX`] and [`MONTH_RADIX`]:
//!
//! ```text
//! ordinal = (day - 1) + 31 * ((month - 1) + 12 * year)
//! ```
//!
//! The radixes do not reflect real month lengths. The packing is only an
//! order preserving bijection: ordinals compare exactly as the dates they
//! encode, and an ordinal is negative exactly when its year is.
//!
//! A time of day is packed into unsigned "ticks" of 10 femtoseconds since
//! midnight.

use core_maths::CoreFloat;

use crate::{
    calendar, TemporalError, TemporalResult, MAX_YEAR, MIN_YEAR, TICKS_PER_DAY, TICKS_PER_SECOND,
};

/// Radix used for the day field of a day ordinal.
pub const DAY_RADIX: i64 = 31;
/// Radix used for the month field of a day ordinal.
pub const MONTH_RADIX: i64 = 12;

/// Checks that a `(year, month, day)` triple names a real date in the supported range.
pub fn validate_date(year: i64, month: u8, day: u8) -> TemporalResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TemporalError::validation().with_message("year exceeds the supported range."));
    }
    if !(1..=12).contains(&month) {
        return Err(TemporalError::validation().with_message("month must be in 1..=12."));
    }
    if day == 0 || day > calendar::days_in_month_unchecked(year, month) {
        return Err(
            TemporalError::validation().with_message("day is not valid for the given month.")
        );
    }
    Ok(())
}

/// Packs a validated date into a day ordinal.
pub fn pack_date(year: i64, month: u8, day: u8) -> TemporalResult<i64> {
    validate_date(year, month, day)?;
    Ok(pack_date_unchecked(year, month, day))
}

/// Packs a date that is already known to be valid.
#[inline]
pub(crate) const fn pack_date_unchecked(year: i64, month: u8, day: u8) -> i64 {
    (day as i64 - 1) + DAY_RADIX * ((month as i64 - 1) + MONTH_RADIX * year)
}

/// Unpacks a day ordinal into `(year, month, day)`.
#[inline]
#[must_use]
pub const fn unpack_date(ordinal: i64) -> (i64, u8, u8) {
    let day = ordinal.rem_euclid(DAY_RADIX) + 1;
    let rest = ordinal.div_euclid(DAY_RADIX);
    let month = rest.rem_euclid(MONTH_RADIX) + 1;
    let year = rest.div_euclid(MONTH_RADIX);
    (year, month as u8, day as u8)
}

/// The clock fields of a packed time of day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Sub-second remainder in ticks, `0..TICKS_PER_SECOND`.
    pub subsecond: u64,
}

impl TimeFields {
    /// Returns the sub-second remainder as a fraction of a second.
    #[inline]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.subsecond as f64 / TICKS_PER_SECOND as f64
    }
}

/// Converts a fraction of a second into ticks.
///
/// The fraction must lie in `[0, 1)`. Rounding is to the nearest tick,
/// capped at the last tick of the second so a fraction just below one never
/// carries into the next second.
pub fn fraction_to_ticks(fraction: f64) -> TemporalResult<u64> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(TemporalError::validation().with_message("fraction must be in [0, 1)."));
    }
    let ticks = CoreFloat::round(fraction * TICKS_PER_SECOND as f64) as u64;
    Ok(ticks.min(TICKS_PER_SECOND - 1))
}

/// Packs clock fields and a sub-second tick count into ticks since midnight.
pub fn pack_time(hour: u8, minute: u8, second: u8, subsecond: u64) -> TemporalResult<u64> {
    if hour > 23 {
        return Err(TemporalError::validation().with_message("hour must be in 0..=23."));
    }
    if minute > 59 {
        return Err(TemporalError::validation().with_message("minute must be in 0..=59."));
    }
    if second > 59 {
        return Err(TemporalError::validation().with_message("second must be in 0..=59."));
    }
    if subsecond >= TICKS_PER_SECOND {
        return Err(
            TemporalError::validation().with_message("sub-second ticks must be below one second.")
        );
    }
    let seconds = u64::from(second) + 60 * (u64::from(minute) + 60 * u64::from(hour));
    Ok(seconds * TICKS_PER_SECOND + subsecond)
}

/// Packs clock fields and a fraction of a second into ticks since midnight.
pub fn pack_time_with_fraction(
    hour: u8,
    minute: u8,
    second: u8,
    fraction: f64,
) -> TemporalResult<u64> {
    pack_time(hour, minute, second, fraction_to_ticks(fraction)?)
}

/// Unpacks ticks since midnight into clock fields.
#[must_use]
pub const fn unpack_time(ticks: u64) -> TimeFields {
    debug_assert!(ticks < TICKS_PER_DAY);
    let seconds = ticks / TICKS_PER_SECOND;
    TimeFields {
        hour: (seconds / 3_600) as u8,
        minute: ((seconds / 60) % 60) as u8,
        second: (seconds % 60) as u8,
        subsecond: ticks % TICKS_PER_SECOND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn date_packing_round_trips() {
        let samples = [
            (2014, 4, 20),
            (781_225, 8, 5),
            (0, 1, 1),
            (0, 12, 31),
            (-1, 12, 31),
            (-1, 1, 1),
            (-4_000_000, 2, 29),
            (9999, 12, 31),
            (MAX_YEAR, 12, 31),
            (MIN_YEAR, 1, 1),
        ];
        for (year, month, day) in samples {
            let ordinal = pack_date(year, month, day).unwrap();
            assert_eq!(unpack_date(ordinal), (year, month, day));
            assert_eq!(ordinal < 0, year < 0);
        }
    }

    #[test]
    fn ordinals_follow_chronology() {
        let ordered = [
            (-2, 12, 31),
            (-1, 1, 1),
            (-1, 1, 31),
            (-1, 2, 1),
            (-1, 12, 31),
            (0, 1, 1),
            (0, 12, 31),
            (1, 1, 1),
            (2024, 2, 29),
            (2024, 3, 1),
            (10_000, 1, 1),
        ];
        for pair in ordered.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(pack_date(a.0, a.1, a.2).unwrap() < pack_date(b.0, b.1, b.2).unwrap());
        }
    }

    #[test]
    fn empty_ordinal_is_year_zero() {
        assert_eq!(unpack_date(0), (0, 1, 1));
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let err = pack_date(2023, 2, 29).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(pack_date(2023, 0, 1).is_err());
        assert!(pack_date(2023, 13, 1).is_err());
        assert!(pack_date(2023, 1, 0).is_err());
        assert!(pack_date(2023, 4, 31).is_err());
        assert!(pack_date(MAX_YEAR + 1, 1, 1).is_err());
        assert!(pack_date(12_000, 2, 29).is_ok());
    }

    #[test]
    fn time_packing_round_trips() {
        let ticks = pack_time(18, 45, 30, 12_345).unwrap();
        let fields = unpack_time(ticks);
        assert_eq!(
            fields,
            TimeFields {
                hour: 18,
                minute: 45,
                second: 30,
                subsecond: 12_345
            }
        );

        let last = pack_time(23, 59, 59, TICKS_PER_SECOND - 1).unwrap();
        assert_eq!(last, TICKS_PER_DAY - 1);
    }

    #[test]
    fn time_validation() {
        assert!(pack_time(24, 0, 0, 0).is_err());
        assert!(pack_time(0, 60, 0, 0).is_err());
        assert!(pack_time(0, 0, 60, 0).is_err());
        assert!(pack_time(0, 0, 0, TICKS_PER_SECOND).is_err());
        assert!(pack_time_with_fraction(0, 0, 0, 1.0).is_err());
        assert!(pack_time_with_fraction(0, 0, 0, -0.1).is_err());
        assert!(pack_time_with_fraction(0, 0, 0, f64::NAN).is_err());
    }

    #[test]
    fn fractions_round_to_ticks() {
        assert_eq!(fraction_to_ticks(0.5).unwrap(), TICKS_PER_SECOND / 2);
        assert_eq!(fraction_to_ticks(0.0).unwrap(), 0);
        assert_eq!(fraction_to_ticks(0.999_999_999_999_999_9).unwrap(), TICKS_PER_SECOND - 1);
        let fields = unpack_time(pack_time_with_fraction(1, 2, 3, 0.25).unwrap());
        assert_eq!(fields.fraction(), 0.25);
    }
}
