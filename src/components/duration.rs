//! This module implements `SignedDuration`.

use core::time::Duration;

use num_traits::{Euclid, ToPrimitive};
use writeable::Writeable;

use crate::{
    codec::{self, TimeFields},
    formatting::FormattableDuration,
    iso::{IsoDuration, MAX_ISO_DURATION_DAYS},
    Sign, TemporalError, TemporalResult, SECONDS_PER_DAY, TICKS_PER_DAY, TICKS_PER_NANOSECOND,
    TICKS_PER_SECOND,
};

#[cfg(test)]
mod tests;

const TICKS_PER_DAY_128BIT: i128 = TICKS_PER_DAY as i128;
const MAX_TOTAL_TICKS: i128 = i64::MAX as i128 * TICKS_PER_DAY_128BIT;
const MAX_STANDARD_TICKS: i128 = MAX_ISO_DURATION_DAYS * TICKS_PER_DAY_128BIT;

/// A signed span of time at 10 femtosecond resolution.
///
/// The value is held as a whole day count plus a time-of-day fragment that
/// is never negative. The sign lives in the day count: a negative span of
/// twelve hours is stored as `-1` day plus `12:00:00`.
///
/// Invariants:
///
/// - `0 <= time_ticks < TICKS_PER_DAY`
/// - `-i64::MAX <= day_count <= i64::MAX`, and `time_ticks == 0` when
///   `day_count == i64::MAX`, so every value can be negated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedDuration {
    day_count: i64,
    time_ticks: u64,
}

// ==== Construction ====

impl SignedDuration {
    /// A duration of zero length.
    pub const ZERO: Self = Self::new_unchecked(0, 0);

    pub(crate) const fn new_unchecked(day_count: i64, time_ticks: u64) -> Self {
        Self {
            day_count,
            time_ticks,
        }
    }

    /// Creates a duration of whole days.
    pub fn from_days(days: i64) -> TemporalResult<Self> {
        Self::from_parts(days, 0)
    }

    /// Creates a duration from a day count and a time-of-day fragment in ticks.
    pub fn from_parts(day_count: i64, time_ticks: u64) -> TemporalResult<Self> {
        if time_ticks >= TICKS_PER_DAY {
            return Err(TemporalError::validation().with_message("time ticks must be below one day."));
        }
        if day_count == i64::MIN || (day_count == i64::MAX && time_ticks != 0) {
            return Err(TemporalError::range().with_message("duration exceeds the supported range."));
        }
        Ok(Self::new_unchecked(day_count, time_ticks))
    }

    /// Creates a duration of `days` days plus a clock offset.
    pub fn try_new(days: i64, hours: u8, minutes: u8, seconds: u8) -> TemporalResult<Self> {
        Self::try_new_with_ticks(days, hours, minutes, seconds, 0)
    }

    /// Creates a duration with a sub-second fraction in `[0, 1)`.
    pub fn try_new_with_fraction(
        days: i64,
        hours: u8,
        minutes: u8,
        seconds: u8,
        fraction: f64,
    ) -> TemporalResult<Self> {
        Self::from_parts(
            days,
            codec::pack_time_with_fraction(hours, minutes, seconds, fraction)?,
        )
    }

    /// Creates a duration with an exact sub-second tick count.
    pub fn try_new_with_ticks(
        days: i64,
        hours: u8,
        minutes: u8,
        seconds: u8,
        subsecond_ticks: u64,
    ) -> TemporalResult<Self> {
        Self::from_parts(
            days,
            codec::pack_time(hours, minutes, seconds, subsecond_ticks)?,
        )
    }

    /// Creates a duration from a signed total tick count.
    pub fn from_total_ticks(ticks: i128) -> TemporalResult<Self> {
        if ticks.abs() > MAX_TOTAL_TICKS {
            return Err(TemporalError::range().with_message("duration exceeds the supported range."));
        }
        let (days, time) = ticks.div_rem_euclid(&TICKS_PER_DAY_128BIT);
        // Bounded by `MAX_TOTAL_TICKS` above.
        let days = days.to_i64().ok_or(TemporalError::assert())?;
        Ok(Self::new_unchecked(days, time as u64))
    }
}

// ==== Accessors ====

impl SignedDuration {
    /// Returns the signed whole day count.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.day_count
    }

    /// Returns the non-negative time-of-day fragment in ticks.
    #[inline]
    #[must_use]
    pub const fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    fn time_fields(&self) -> TimeFields {
        codec::unpack_time(self.time_ticks)
    }

    /// Returns the hour of the time-of-day fragment.
    #[inline]
    #[must_use]
    pub fn hours(&self) -> u8 {
        self.time_fields().hour
    }

    /// Returns the minute of the time-of-day fragment.
    #[inline]
    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.time_fields().minute
    }

    /// Returns the second of the time-of-day fragment.
    #[inline]
    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.time_fields().second
    }

    /// Returns the sub-second part of the fragment in ticks.
    #[inline]
    #[must_use]
    pub fn subsecond_ticks(&self) -> u64 {
        self.time_fields().subsecond
    }

    /// Returns the sub-second part of the fragment as a fraction of a second.
    #[inline]
    #[must_use]
    pub fn second_fraction(&self) -> f64 {
        self.time_fields().fraction()
    }

    /// Returns the total length in ticks.
    #[inline]
    #[must_use]
    pub fn total_ticks(&self) -> i128 {
        i128::from(self.day_count) * TICKS_PER_DAY_128BIT + i128::from(self.time_ticks)
    }

    /// Returns the sign of this duration.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        if self.day_count < 0 {
            Sign::Negative
        } else if self.day_count == 0 && self.time_ticks == 0 {
            Sign::Zero
        } else {
            Sign::Positive
        }
    }

    /// Returns whether this duration is below zero.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }

    /// Returns whether this duration has zero length.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }

    /// Returns whether this duration fits an `IsoDuration`.
    #[inline]
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.total_ticks().abs() <= MAX_STANDARD_TICKS
    }
}

// ==== Arithmetic ====

impl SignedDuration {
    /// Returns the arithmetic negation.
    ///
    /// A nonzero time fragment borrows one day so the fragment stays
    /// non-negative: `(d, t)` becomes `(-d - 1, TICKS_PER_DAY - t)`.
    #[must_use]
    pub const fn negate(&self) -> Self {
        if self.time_ticks == 0 {
            return Self::new_unchecked(-self.day_count, 0);
        }
        // `!d == -d - 1`, which cannot overflow for any `i64`.
        Self::new_unchecked(!self.day_count, TICKS_PER_DAY - self.time_ticks)
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn abs(&self) -> Self {
        if self.day_count < 0 {
            self.negate()
        } else {
            *self
        }
    }

    /// Adds two durations.
    pub fn add(&self, other: &Self) -> TemporalResult<Self> {
        let mut time_ticks = self.time_ticks + other.time_ticks;
        let mut carry = 0;
        if time_ticks >= TICKS_PER_DAY {
            time_ticks -= TICKS_PER_DAY;
            carry = 1;
        }
        let day_count = self
            .day_count
            .checked_add(other.day_count)
            .and_then(|days| days.checked_add(carry))
            .ok_or(TemporalError::range().with_message("duration exceeds the supported range."))?;
        Self::from_parts(day_count, time_ticks)
    }

    /// Subtracts `other` from this duration.
    pub fn subtract(&self, other: &Self) -> TemporalResult<Self> {
        self.add(&other.negate())
    }
}

// ==== Conversions ====

impl SignedDuration {
    /// Converts to an `IsoDuration`, truncating sub-nanosecond ticks toward zero.
    pub fn to_iso_duration(&self) -> TemporalResult<IsoDuration> {
        if !self.is_standard() {
            return Err(
                TemporalError::range().with_message("duration is outside the standard range.")
            );
        }
        IsoDuration::try_from_nanoseconds(self.total_ticks() / i128::from(TICKS_PER_NANOSECOND))
    }
}

impl From<IsoDuration> for SignedDuration {
    fn from(duration: IsoDuration) -> Self {
        let ticks = duration.as_nanoseconds() * i128::from(TICKS_PER_NANOSECOND);
        let (days, time) = ticks.div_rem_euclid(&TICKS_PER_DAY_128BIT);
        // `IsoDuration` spans at most a few million days.
        Self::new_unchecked(days as i64, time as u64)
    }
}

impl TryFrom<SignedDuration> for IsoDuration {
    type Error = TemporalError;

    fn try_from(duration: SignedDuration) -> Result<Self, Self::Error> {
        duration.to_iso_duration()
    }
}

impl From<Duration> for SignedDuration {
    fn from(duration: Duration) -> Self {
        let seconds = duration.as_secs();
        let days = seconds / SECONDS_PER_DAY;
        let time_ticks = (seconds % SECONDS_PER_DAY) * TICKS_PER_SECOND
            + u64::from(duration.subsec_nanos()) * TICKS_PER_NANOSECOND;
        // `u64::MAX` seconds is roughly 2^47 days.
        Self::new_unchecked(days as i64, time_ticks)
    }
}

impl TryFrom<SignedDuration> for Duration {
    type Error = TemporalError;

    /// Converts to a `core::time::Duration`, truncating sub-nanosecond ticks.
    fn try_from(duration: SignedDuration) -> Result<Self, Self::Error> {
        let days = u64::try_from(duration.day_count).map_err(|_| {
            TemporalError::range().with_message("negative durations have no unsigned form.")
        })?;
        let seconds = days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|s| s.checked_add(duration.time_ticks / TICKS_PER_SECOND))
            .ok_or(TemporalError::range().with_message("duration exceeds u64 seconds."))?;
        let nanos = (duration.time_ticks % TICKS_PER_SECOND) / TICKS_PER_NANOSECOND;
        Ok(Duration::new(seconds, nanos as u32))
    }
}

// ==== Formatting ====

impl SignedDuration {
    fn formattable(&self) -> FormattableDuration {
        let magnitude = self.abs();
        FormattableDuration {
            negative: self.is_negative(),
            days: magnitude.day_count.unsigned_abs(),
            time: magnitude.time_fields(),
        }
    }
}

impl Writeable for SignedDuration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.formattable().write_to(sink)
    }
}

writeable::impl_display_with_writeable!(SignedDuration);
