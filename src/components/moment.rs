//! This module implements `AbsoluteMoment`.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use writeable::Writeable;

use crate::{
    arithmetic, calendar,
    calendar::Weekday,
    codec::{self, TimeFields},
    components::SignedDuration,
    formatting::FormattableMoment,
    iso::{is_standard_year, IsoDate, IsoDateTime, IsoTime},
    TemporalError, TemporalResult, TICKS_PER_DAY, TICKS_PER_NANOSECOND,
};


/// A calendar instant in the proleptic Gregorian calendar, optionally
/// carrying a time of day.
///
/// The date is held as a packed day ordinal (see [`crate::codec`]) and the
/// time of day as ticks of 10 femtoseconds since midnight. Years may range
/// over [`crate::MIN_YEAR`]`..=`[`crate::MAX_YEAR`].
///
/// Equality and ordering compare the day ordinal and then the time ticks,
/// with a date-only value counting as midnight. A date-only value therefore
/// equals the same date at `00:00:00`.
///
/// ```rust
/// use extended_temporal::{AbsoluteMoment, SignedDuration};
///
/// let moment = AbsoluteMoment::try_new_with_time(781_225, 8, 5, 18, 45, 0).unwrap();
/// let later = moment.add(&SignedDuration::from_days(50).unwrap()).unwrap();
/// assert_eq!((later.year(), later.month(), later.day()), (781_225, 9, 24));
/// assert_eq!(later.to_string(), "781225 AC; 09-24; 18:45:00");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AbsoluteMoment {
    day_ordinal: i64,
    time_ticks: u64,
    has_time: bool,
}

// ==== Construction ====

impl AbsoluteMoment {
    /// The empty moment: day ordinal zero with no time of day.
    pub const EMPTY: Self = Self::new_unchecked(0, None);

    pub(crate) const fn new_unchecked(day_ordinal: i64, time_ticks: Option<u64>) -> Self {
        match time_ticks {
            Some(time_ticks) => Self {
                day_ordinal,
                time_ticks,
                has_time: true,
            },
            None => Self {
                day_ordinal,
                time_ticks: 0,
                has_time: false,
            },
        }
    }

    /// Creates a date-only moment.
    pub fn try_new(year: i64, month: u8, day: u8) -> TemporalResult<Self> {
        Ok(Self::new_unchecked(
            codec::pack_date(year, month, day)?,
            None,
        ))
    }

    /// Creates a moment with a time of day to the whole second.
    pub fn try_new_with_time(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TemporalResult<Self> {
        Self::try_new_with_ticks(year, month, day, hour, minute, second, 0)
    }

    /// Creates a moment whose seconds carry a fraction in `[0, 1)`.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new_with_fraction(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        fraction: f64,
    ) -> TemporalResult<Self> {
        let ticks = codec::pack_time_with_fraction(hour, minute, second, fraction)?;
        Ok(Self::new_unchecked(
            codec::pack_date(year, month, day)?,
            Some(ticks),
        ))
    }

    /// Creates a moment whose seconds carry an exact count of sub-second ticks.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new_with_ticks(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        subsecond_ticks: u64,
    ) -> TemporalResult<Self> {
        let ticks = codec::pack_time(hour, minute, second, subsecond_ticks)?;
        Ok(Self::new_unchecked(
            codec::pack_date(year, month, day)?,
            Some(ticks),
        ))
    }

    /// Creates a moment from a packed day ordinal and optional time ticks.
    pub fn from_ordinal(day_ordinal: i64, time_ticks: Option<u64>) -> TemporalResult<Self> {
        let (year, month, day) = codec::unpack_date(day_ordinal);
        codec::validate_date(year, month, day)?;
        if time_ticks.is_some_and(|ticks| ticks >= TICKS_PER_DAY) {
            return Err(TemporalError::validation().with_message("time ticks must be below one day."));
        }
        Ok(Self::new_unchecked(day_ordinal, time_ticks))
    }

    /// Returns this moment without its time of day.
    #[inline]
    #[must_use]
    pub const fn date_only(&self) -> Self {
        Self::new_unchecked(self.day_ordinal, None)
    }

    /// Returns this date at the given time of day.
    pub fn with_time(
        &self,
        hour: u8,
        minute: u8,
        second: u8,
        subsecond_ticks: u64,
    ) -> TemporalResult<Self> {
        let ticks = codec::pack_time(hour, minute, second, subsecond_ticks)?;
        Ok(Self::new_unchecked(self.day_ordinal, Some(ticks)))
    }
}

// ==== Accessors ====

impl AbsoluteMoment {
    /// Returns the packed day ordinal.
    #[inline]
    #[must_use]
    pub const fn day_ordinal(&self) -> i64 {
        self.day_ordinal
    }

    /// Returns the time of day in ticks, if one is present.
    #[inline]
    #[must_use]
    pub const fn time_ticks(&self) -> Option<u64> {
        if self.has_time {
            Some(self.time_ticks)
        } else {
            None
        }
    }

    #[inline]
    fn ymd(&self) -> (i64, u8, u8) {
        codec::unpack_date(self.day_ordinal)
    }

    #[inline]
    fn time_fields(&self) -> TimeFields {
        codec::unpack_time(self.time_ticks)
    }

    /// Returns the proleptic year, which may be zero or negative.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i64 {
        self.ymd().0
    }

    /// Returns the month, `1..=12`.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.ymd().2
    }

    /// Returns the hour, or zero for a date-only moment.
    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.time_fields().hour
    }

    /// Returns the minute, or zero for a date-only moment.
    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.time_fields().minute
    }

    /// Returns the whole second, or zero for a date-only moment.
    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.time_fields().second
    }

    /// Returns the fraction of the current second.
    #[inline]
    #[must_use]
    pub fn second_fraction(&self) -> f64 {
        self.time_fields().fraction()
    }

    /// Returns the sub-second part of the time in ticks.
    #[inline]
    #[must_use]
    pub fn subsecond_ticks(&self) -> u64 {
        self.time_fields().subsecond
    }

    /// Returns whether this moment carries a time of day.
    #[inline]
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.has_time
    }

    /// Returns whether this moment's year has a February 29th.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year())
    }

    /// Returns the length of this moment's month.
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        let (year, month, _) = self.ymd();
        calendar::days_in_month_unchecked(year, month)
    }

    /// Returns the weekday. See [`calendar::day_of_week`] for the caveat
    /// that applies outside the standard range.
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        let (year, month, day) = self.ymd();
        calendar::day_of_week_unchecked(year, month, day)
    }

    /// Returns the one-based day of the year.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        let (year, month, day) = self.ymd();
        calendar::day_of_year_unchecked(year, month, day)
    }

    /// Returns whether this moment can be converted to an `IsoDateTime`.
    #[inline]
    #[must_use]
    pub fn is_standard(&self) -> bool {
        is_standard_year(self.year())
    }

    /// Returns whether this is the empty moment.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.day_ordinal == 0 && !self.has_time
    }

    #[inline]
    fn comparison_key(&self) -> (i64, u64) {
        (self.day_ordinal, self.time_ticks)
    }
}

// ==== Arithmetic ====

impl AbsoluteMoment {
    /// Returns this moment moved by `duration`.
    ///
    /// The result carries a time of day if this moment does or if the
    /// duration has a nonzero time fragment. Fails with a range error when
    /// the resulting year leaves the supported range.
    pub fn add(&self, duration: &SignedDuration) -> TemporalResult<Self> {
        let has_time = self.has_time || duration.time_ticks() != 0;

        if let Some(result) = self.add_on_host(duration) {
            #[cfg(feature = "log")]
            log::trace!("AbsoluteMoment::add: host path");
            return Ok(Self::from_iso_parts(result, has_time));
        }

        let mut time_ticks = self.time_ticks + duration.time_ticks();
        let mut day_shift: i64 = 0;
        if time_ticks >= TICKS_PER_DAY {
            time_ticks -= TICKS_PER_DAY;
            day_shift = 1;
        }
        let day_shift = day_shift
            .checked_add(duration.days())
            .ok_or(TemporalError::range().with_message("day shift overflowed."))?;

        let day_ordinal = if day_shift == 0 {
            self.day_ordinal
        } else {
            let (year, month, day) = self.ymd();
            let (year, month, day) = arithmetic::shift_date(year, month, day, day_shift)?;
            codec::pack_date_unchecked(year, month, day)
        };

        Ok(Self::new_unchecked(
            day_ordinal,
            has_time.then_some(time_ticks),
        ))
    }

    // The host records only hold whole nanoseconds, so finer ticks always
    // take the extended path.
    fn add_on_host(&self, duration: &SignedDuration) -> Option<IsoDateTime> {
        if !self.is_standard()
            || !duration.is_standard()
            || self.time_ticks % TICKS_PER_NANOSECOND != 0
            || duration.time_ticks() % TICKS_PER_NANOSECOND != 0
        {
            return None;
        }
        let start = self.to_iso_date_time().ok()?;
        let duration = duration.to_iso_duration().ok()?;
        start.checked_add(&duration).ok()
    }

    /// Returns this moment moved back by `duration`.
    pub fn subtract(&self, duration: &SignedDuration) -> TemporalResult<Self> {
        self.add(&duration.negate())
    }

    /// Returns the duration from `other` to this moment.
    ///
    /// Date-only moments count as midnight.
    pub fn since(&self, other: &Self) -> TemporalResult<SignedDuration> {
        let (year_one, month_one, day_one) = self.ymd();
        let (year_two, month_two, day_two) = other.ymd();
        let days = arithmetic::date_diff(year_one, month_one, day_one, year_two, month_two, day_two)?;
        let ticks = i128::from(days) * i128::from(TICKS_PER_DAY) + i128::from(self.time_ticks)
            - i128::from(other.time_ticks);
        SignedDuration::from_total_ticks(ticks)
    }

    /// Returns the duration from this moment to `other`.
    pub fn until(&self, other: &Self) -> TemporalResult<SignedDuration> {
        other.since(self)
    }
}

// ==== Conversions ====

impl AbsoluteMoment {
    fn from_iso_parts(date_time: IsoDateTime, has_time: bool) -> Self {
        let IsoDate { year, month, day } = date_time.date;
        let day_ordinal = codec::pack_date_unchecked(i64::from(year), month, day);
        let ticks = date_time.time.to_nanoseconds() * TICKS_PER_NANOSECOND;
        Self::new_unchecked(day_ordinal, has_time.then_some(ticks))
    }

    /// Converts to an `IsoDateTime`, truncating sub-nanosecond ticks.
    ///
    /// Fails with a range error outside the standard range. A date-only
    /// moment converts to midnight.
    pub fn to_iso_date_time(&self) -> TemporalResult<IsoDateTime> {
        let (year, month, day) = self.ymd();
        if !is_standard_year(year) {
            return Err(
                TemporalError::range().with_message("moment is outside the standard range.")
            );
        }
        let date = IsoDate::new_unchecked(year as i32, month, day);
        let time = IsoTime::from_nanoseconds(self.time_ticks / TICKS_PER_NANOSECOND);
        Ok(IsoDateTime::new(date, time))
    }

    /// Creates a moment from an `IsoDateTime`.
    ///
    /// The time of day is omitted when it is exactly midnight.
    #[must_use]
    pub fn from_iso_date_time(date_time: IsoDateTime) -> Self {
        Self::from_iso_parts(date_time, !date_time.time.is_midnight())
    }
}

impl From<IsoDateTime> for AbsoluteMoment {
    fn from(date_time: IsoDateTime) -> Self {
        Self::from_iso_date_time(date_time)
    }
}

impl From<IsoDate> for AbsoluteMoment {
    fn from(date: IsoDate) -> Self {
        Self::from_iso_parts(IsoDateTime::new(date, IsoTime::midnight()), false)
    }
}

impl TryFrom<AbsoluteMoment> for IsoDateTime {
    type Error = TemporalError;

    fn try_from(moment: AbsoluteMoment) -> Result<Self, Self::Error> {
        moment.to_iso_date_time()
    }
}

// ==== Comparison ====

impl PartialEq for AbsoluteMoment {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for AbsoluteMoment {}

impl PartialOrd for AbsoluteMoment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AbsoluteMoment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }
}

impl Hash for AbsoluteMoment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

// ==== Formatting ====

impl Writeable for AbsoluteMoment {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let (year, month, day) = self.ymd();
        FormattableMoment {
            year,
            month,
            day,
            time: self.has_time.then(|| self.time_fields()),
        }
        .write_to(sink)
    }
}

writeable::impl_display_with_writeable!(AbsoluteMoment);
