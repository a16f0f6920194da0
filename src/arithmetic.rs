//! Day-count arithmetic over decomposed dates of any supported year.
//!
//! [`shift_date`] moves a date by a signed number of days and [`date_diff`]
//! measures the signed distance between two dates. Neither walks day by day.
//! Both work in tiers:
//!
//! 1. Inside the standard range the host records answer directly.
//! 2. Spans that stay within a month or a year are handled field by field.
//! 3. Spans of at most [`EXACT_YEAR_THRESHOLD`] years are consumed one
//!    year at a time using each year's real length.
//! 4. Longer spans are estimated with [`MEAN_YEAR_DAYS`] and skipped in whole
//!    400 year Gregorian cycles. Every run of 400 consecutive years holds
//!    exactly [`DAYS_IN_GREGORIAN_CYCLE`] days, so the skip is exact and the
//!    remainder falls back into the tiers above.

use num_traits::ToPrimitive;

use crate::{
    calendar::{day_of_year_unchecked, days_in_month_unchecked, days_in_year},
    codec,
    iso::{is_standard_year, IsoDate},
    TemporalError, TemporalResult, EXACT_YEAR_THRESHOLD, MAX_YEAR, MEAN_YEAR_DAYS, MIN_YEAR,
};

/// The number of days in any 400 consecutive proleptic Gregorian years.
pub const DAYS_IN_GREGORIAN_CYCLE: u64 = 146_097;
const YEARS_IN_GREGORIAN_CYCLE: i64 = 400;

/// Returns whether `days` covers more than [`EXACT_YEAR_THRESHOLD`] average years.
#[inline]
fn exceeds_exact_span(days: u64) -> bool {
    days as f64 / MEAN_YEAR_DAYS > EXACT_YEAR_THRESHOLD as f64
}

#[inline]
fn host_date(year: i64, month: u8, day: u8) -> Option<IsoDate> {
    is_standard_year(year).then(|| IsoDate::new_unchecked(year as i32, month, day))
}

/// Shifts a valid date by `shift` days.
///
/// Fails with a validation error if the date is not valid, and with a range
/// error if the resulting year leaves [`MIN_YEAR`]`..=`[`MAX_YEAR`].
///
/// # Panics
///
/// Panics if the final day lands outside its month, which would mean the
/// tiers above disagree with each other.
pub fn shift_date(year: i64, month: u8, day: u8, shift: i64) -> TemporalResult<(i64, u8, u8)> {
    codec::validate_date(year, month, day)?;
    if shift == 0 {
        return Ok((year, month, day));
    }

    if let Some(date) = host_date(year, month, day) {
        if let Ok(shifted) = date.add_days(shift) {
            #[cfg(feature = "log")]
            log::trace!("shift_date: host path for {shift} days");
            return Ok((i64::from(shifted.year), shifted.month, shifted.day));
        }
    }

    let result = if shift > 0 {
        shift_forward(year, month, day, shift.unsigned_abs())
    } else {
        shift_backward(year, month, day, shift.unsigned_abs())
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&result.0) {
        return Err(TemporalError::range().with_message("shifted year exceeds the supported range."));
    }
    Ok(result)
}

fn shift_forward(mut year: i64, mut month: u8, mut day: u8, mut shift: u64) -> (i64, u8, u8) {
    // Within the current month.
    let left_in_month = u64::from(days_in_month_unchecked(year, month) - day);
    if shift <= left_in_month {
        return (year, month, day + shift as u8);
    }

    // To the first of the next month.
    shift -= left_in_month + 1;
    (year, month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    day = 1;

    // To the first of the next year.
    if month != 1 {
        let left_in_year =
            u64::from(days_in_year(year) - day_of_year_unchecked(year, month, day)) + 1;
        if shift >= left_in_year {
            shift -= left_in_year;
            year += 1;
            month = 1;
        }
    }

    // Whole years, only ever taken from January 1st.
    if month == 1 {
        while shift >= u64::from(days_in_year(year)) {
            let cycles = shift / DAYS_IN_GREGORIAN_CYCLE;
            if cycles > 0 && exceeds_exact_span(shift) {
                #[cfg(feature = "log")]
                log::trace!("shift_date: skipping {cycles} cycles forward");
                shift -= cycles * DAYS_IN_GREGORIAN_CYCLE;
                year += cycles as i64 * YEARS_IN_GREGORIAN_CYCLE;
            } else {
                shift -= u64::from(days_in_year(year));
                year += 1;
            }
        }
    }

    // Whole months inside the landing year.
    loop {
        let length = u64::from(days_in_month_unchecked(year, month));
        if shift < length {
            break;
        }
        shift -= length;
        month += 1;
    }

    let day = u64::from(day) + shift;
    finish(year, month, day)
}

fn shift_backward(mut year: i64, mut month: u8, mut day: u8, mut shift: u64) -> (i64, u8, u8) {
    // Within the current month.
    if shift < u64::from(day) {
        return (year, month, day - shift as u8);
    }

    // To the last day of the previous month.
    shift -= u64::from(day);
    (year, month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    day = days_in_month_unchecked(year, month);

    // To the last day of the previous year.
    if month != 12 {
        let elapsed_in_year = u64::from(day_of_year_unchecked(year, month, day));
        if shift >= elapsed_in_year {
            shift -= elapsed_in_year;
            year -= 1;
            month = 12;
            day = 31;
        }
    }

    // Whole years, only ever taken from December 31st.
    if month == 12 {
        while shift >= u64::from(days_in_year(year)) {
            let cycles = shift / DAYS_IN_GREGORIAN_CYCLE;
            if cycles > 0 && exceeds_exact_span(shift) {
                #[cfg(feature = "log")]
                log::trace!("shift_date: skipping {cycles} cycles backward");
                shift -= cycles * DAYS_IN_GREGORIAN_CYCLE;
                year -= cycles as i64 * YEARS_IN_GREGORIAN_CYCLE;
            } else {
                shift -= u64::from(days_in_year(year));
                year -= 1;
            }
        }
    }

    // Whole months inside the landing year, moving between month ends.
    loop {
        let length = u64::from(days_in_month_unchecked(year, month));
        if shift < length {
            break;
        }
        shift -= length;
        month -= 1;
        day = days_in_month_unchecked(year, month);
    }

    let day = u64::from(day) - shift;
    finish(year, month, day)
}

fn finish(year: i64, month: u8, day: u64) -> (i64, u8, u8) {
    let in_month = (1..=u64::from(days_in_month_unchecked(year, month))).contains(&day);
    if !in_month {
        #[cfg(feature = "log")]
        log::error!("shift_date: day {day} overflowed {year}-{month}");
    }
    assert!(
        in_month,
        "shift_date produced a day outside its month; this is an implementation error."
    );
    (year, month, day as u8)
}

/// Returns the signed number of days from the second date to the first.
///
/// Fails with a validation error if either date is not valid, and with a
/// range error if the distance does not fit in an `i64`.
pub fn date_diff(
    year_one: i64,
    month_one: u8,
    day_one: u8,
    year_two: i64,
    month_two: u8,
    day_two: u8,
) -> TemporalResult<i64> {
    codec::validate_date(year_one, month_one, day_one)?;
    codec::validate_date(year_two, month_two, day_two)?;

    if let (Some(one), Some(two)) = (
        host_date(year_one, month_one, day_one),
        host_date(year_two, month_two, day_two),
    ) {
        #[cfg(feature = "log")]
        log::trace!("date_diff: host path");
        return Ok(one.days_since(&two));
    }

    let first = (year_one, day_of_year_unchecked(year_one, month_one, day_one));
    let second = (year_two, day_of_year_unchecked(year_two, month_two, day_two));
    let (later, earlier, sign) = match first.cmp(&second) {
        core::cmp::Ordering::Equal => return Ok(0),
        core::cmp::Ordering::Greater => (first, second, 1),
        core::cmp::Ordering::Less => (second, first, -1),
    };

    let mut days = i128::from(later.1) - i128::from(earlier.1);
    let mut year = earlier.0;
    while year < later.0 {
        let remaining = later.0 - year;
        if remaining > EXACT_YEAR_THRESHOLD {
            let cycles = remaining / YEARS_IN_GREGORIAN_CYCLE;
            #[cfg(feature = "log")]
            log::trace!("date_diff: summing {cycles} cycles");
            days += i128::from(cycles) * i128::from(DAYS_IN_GREGORIAN_CYCLE);
            year += cycles * YEARS_IN_GREGORIAN_CYCLE;
        } else {
            days += i128::from(days_in_year(year));
            year += 1;
        }
    }

    (days * sign)
        .to_i64()
        .ok_or(TemporalError::range().with_message("date difference exceeds the i64 range."))
}
