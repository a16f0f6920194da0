//! This module implements the bounded ISO records that act as the host calendar.
//!
//! The three main record types are:
//!   - `IsoDate`
//!   - `IsoTime`
//!   - `IsoDateTime`
//!
//! plus the signed `IsoDuration`.
//!
//! These records only cover the standard range (years 1 through 9999) at
//! nanosecond precision. Every calendar question they answer is derived
//! from epoch days through the Neri-Schneider equations, and the
//! extended-range types defer to them whenever all operands are standard.

use crate::{calendar::Weekday, TemporalError, TemporalResult, NS_PER_DAY};

pub(crate) mod neri_schneider;

/// The first year representable by the host records.
pub const STANDARD_MIN_YEAR: i64 = 1;
/// The last year representable by the host records.
pub const STANDARD_MAX_YEAR: i64 = 9999;

/// The largest magnitude, in days, an `IsoDuration` may hold.
///
/// This is one more than the distance between `0001-01-01` and `9999-12-31`.
pub const MAX_ISO_DURATION_DAYS: i128 = 3_652_059;

const NS_PER_DAY_128BIT: i128 = NS_PER_DAY as i128;
const MAX_ISO_DURATION_NS: i128 = MAX_ISO_DURATION_DAYS * NS_PER_DAY_128BIT;

/// Returns whether `year` falls in the standard range.
#[inline]
#[must_use]
pub const fn is_standard_year(year: i64) -> bool {
    STANDARD_MIN_YEAR <= year && year <= STANDARD_MAX_YEAR
}

// ==== `IsoDate` section ====

/// `IsoDate` is the host record for a calendar date in the standard range.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    ///
    /// A year outside 1..=9999 is a range error; an invalid month or day is a
    /// validation error.
    pub fn try_new(year: i32, month: u8, day: u8) -> TemporalResult<Self> {
        if !is_standard_year(year.into()) {
            return Err(TemporalError::range().with_message("year is outside the standard range."));
        }
        if !(1..=12).contains(&month) {
            return Err(TemporalError::validation().with_message("month must be in 1..=12."));
        }
        let date = Self::new_unchecked(year, month, 1);
        if day == 0 || day > date.days_in_month() {
            return Err(
                TemporalError::validation().with_message("day is not valid for the given month.")
            );
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates an `IsoDate` from a count of days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i64) -> TemporalResult<Self> {
        if !(MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days) {
            return Err(TemporalError::range().with_message("epoch days exceed the standard range."));
        }
        let (year, month, day) = neri_schneider::ymd_from_epoch_days(epoch_days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(self) -> i64 {
        neri_schneider::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }

    /// Returns whether this date's year has a February 29th.
    #[must_use]
    pub fn is_in_leap_year(&self) -> bool {
        let march_first = neri_schneider::epoch_days_from_gregorian_date(self.year, 3, 1);
        let feb_twenty_eighth = neri_schneider::epoch_days_from_gregorian_date(self.year, 2, 28);
        march_first - feb_twenty_eighth == 2
    }

    /// Returns the length of this date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let start = neri_schneider::epoch_days_from_gregorian_date(self.year, self.month, 1);
        let end = neri_schneider::epoch_days_from_gregorian_date(next_year, next_month, 1);
        (end - start) as u8
    }

    /// Returns the length of this date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        let start = neri_schneider::epoch_days_from_gregorian_date(self.year, 1, 1);
        let end = neri_schneider::epoch_days_from_gregorian_date(self.year + 1, 1, 1);
        (end - start) as u16
    }

    /// Returns the one-based ordinal of this date within its year.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        let start = neri_schneider::epoch_days_from_gregorian_date(self.year, 1, 1);
        (self.to_epoch_days() - start + 1) as u16
    }

    /// Returns the weekday of this date.
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::from_monday_index((self.to_epoch_days() + 3).rem_euclid(7) as u8)
    }

    /// Returns the date `days` days away, failing if it leaves the standard range.
    pub fn add_days(self, days: i64) -> TemporalResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or(TemporalError::range().with_message("day shift overflowed."))?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the signed number of days from `other` to `self`.
    #[inline]
    #[must_use]
    pub const fn days_since(&self, other: &Self) -> i64 {
        self.to_epoch_days() - other.to_epoch_days()
    }
}

const MIN_EPOCH_DAYS: i64 = neri_schneider::epoch_days_from_gregorian_date(1, 1, 1);
const MAX_EPOCH_DAYS: i64 = neri_schneider::epoch_days_from_gregorian_date(9999, 12, 31);

// ==== `IsoTime` section ====

/// An `IsoTime` record holding a wall-clock time at nanosecond precision.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub millisecond: u16, // 0..=999
    pub microsecond: u16, // 0..=999
    pub nanosecond: u16,  // 0..=999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        }
    }

    /// Creates a new validated `IsoTime`.
    pub fn new(
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        microsecond: u16,
        nanosecond: u16,
    ) -> TemporalResult<Self> {
        if !is_valid_time(hour, minute, second, millisecond, microsecond, nanosecond) {
            return Err(TemporalError::validation().with_message("IsoTime is not valid."));
        }
        Ok(Self::new_unchecked(
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
        ))
    }

    /// Returns an `IsoTime` set to 00:00:00.
    #[inline]
    #[must_use]
    pub const fn midnight() -> Self {
        Self::new_unchecked(0, 0, 0, 0, 0, 0)
    }

    /// Returns whether every field is zero.
    #[inline]
    #[must_use]
    pub fn is_midnight(&self) -> bool {
        *self == Self::midnight()
    }

    /// Returns the nanoseconds elapsed since midnight.
    #[must_use]
    pub const fn to_nanoseconds(&self) -> u64 {
        let seconds =
            (self.hour as u64 * 60 + self.minute as u64) * 60 + self.second as u64;
        let subsecond = (self.millisecond as u64 * 1_000 + self.microsecond as u64) * 1_000
            + self.nanosecond as u64;
        seconds * 1_000_000_000 + subsecond
    }

    /// Builds an `IsoTime` from nanoseconds since midnight.
    ///
    /// Values of a day or more wrap around midnight.
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: u64) -> Self {
        let nanoseconds = nanoseconds % NS_PER_DAY;
        let (seconds, subsecond) = (nanoseconds / 1_000_000_000, nanoseconds % 1_000_000_000);
        Self::new_unchecked(
            (seconds / 3_600) as u8,
            ((seconds / 60) % 60) as u8,
            (seconds % 60) as u8,
            (subsecond / 1_000_000) as u16,
            ((subsecond / 1_000) % 1_000) as u16,
            (subsecond % 1_000) as u16,
        )
    }
}

#[inline]
fn is_valid_time(hour: u8, minute: u8, second: u8, ms: u16, mis: u16, ns: u16) -> bool {
    if hour > 23 || minute > 59 || second > 59 {
        return false;
    }
    ms <= 999 && mis <= 999 && ns <= 999
}

// ==== `IsoDateTime` section ====

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` slots.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` from validated records.
    #[inline]
    #[must_use]
    pub const fn new(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Returns nanoseconds since 1970-01-01T00:00:00.
    #[must_use]
    pub fn to_epoch_nanoseconds(&self) -> i128 {
        i128::from(self.date.to_epoch_days()) * NS_PER_DAY_128BIT
            + i128::from(self.time.to_nanoseconds())
    }

    /// Creates an `IsoDateTime` from nanoseconds since 1970-01-01T00:00:00.
    pub fn from_epoch_nanoseconds(nanoseconds: i128) -> TemporalResult<Self> {
        let days = nanoseconds.div_euclid(NS_PER_DAY_128BIT);
        let time = nanoseconds.rem_euclid(NS_PER_DAY_128BIT) as u64;
        let days = i64::try_from(days)
            .map_err(|_| TemporalError::range().with_message("epoch nanoseconds overflowed."))?;
        Ok(Self::new(
            IsoDate::from_epoch_days(days)?,
            IsoTime::from_nanoseconds(time),
        ))
    }

    /// Adds an `IsoDuration`, failing if the result leaves the standard range.
    pub fn checked_add(&self, duration: &IsoDuration) -> TemporalResult<Self> {
        Self::from_epoch_nanoseconds(self.to_epoch_nanoseconds() + duration.as_nanoseconds())
    }

    /// Returns the `IsoDuration` from `other` to `self`.
    #[must_use]
    pub fn since(&self, other: &Self) -> IsoDuration {
        // Any two standard date-times are within `MAX_ISO_DURATION_DAYS`.
        IsoDuration(self.to_epoch_nanoseconds() - other.to_epoch_nanoseconds())
    }
}

// ==== `IsoDuration` section ====

/// A signed, nanosecond precision duration covering the standard range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDuration(i128);

impl IsoDuration {
    /// Creates an `IsoDuration` from a signed nanosecond count.
    pub fn try_from_nanoseconds(nanoseconds: i128) -> TemporalResult<Self> {
        if nanoseconds.abs() > MAX_ISO_DURATION_NS {
            return Err(TemporalError::range().with_message("IsoDuration exceeds its valid range."));
        }
        Ok(Self(nanoseconds))
    }

    /// Creates an `IsoDuration` from whole days plus nanoseconds.
    pub fn try_from_days(days: i64, nanoseconds: i64) -> TemporalResult<Self> {
        Self::try_from_nanoseconds(
            i128::from(days) * NS_PER_DAY_128BIT + i128::from(nanoseconds),
        )
    }

    /// Returns the total signed nanoseconds.
    #[inline]
    #[must_use]
    pub const fn as_nanoseconds(&self) -> i128 {
        self.0
    }

}
