//! Diagnostic string rendering through `Writeable`.
//!
//! Moments inside the standard range render ISO-like as
//! `yyyy-MM-dd[ HH:mm:ss]`. Moments outside it spell the era out as
//! `<magnitude> BC|AC; MM-DD[; HH:mm:ss]`, since a four digit year field
//! cannot hold them. Durations render as `[-]d.HH:mm:ss[.fraction]`.

use core::fmt::Write;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{codec::TimeFields, iso::is_standard_year, TICKS_PER_SECOND};

/// Number of decimal digits in a sub-second tick count.
const SUBSECOND_DIGITS: usize = 14;

#[derive(Debug)]
pub(crate) struct FormattableMoment {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub time: Option<TimeFields>,
}

impl Writeable for FormattableMoment {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if is_standard_year(self.year) {
            write!(sink, "{:04}", self.year)?;
            sink.write_char('-')?;
            write_padded_u8(self.month, sink)?;
            sink.write_char('-')?;
            write_padded_u8(self.day, sink)?;
            if let Some(time) = &self.time {
                sink.write_char(' ')?;
                write_clock(time, sink)?;
            }
            return Ok(());
        }

        let era = if self.year < 0 { "BC" } else { "AC" };
        write!(sink, "{} {era}; ", self.year.unsigned_abs())?;
        write_padded_u8(self.month, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.day, sink)?;
        if let Some(time) = &self.time {
            sink.write_str("; ")?;
            write_clock(time, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let has_time = usize::from(self.time.is_some());
        if is_standard_year(self.year) {
            return LengthHint::exact(10 + 9 * has_time);
        }
        LengthHint::between(11 + 10 * has_time, 31 + 10 * has_time)
    }
}

#[derive(Debug)]
pub(crate) struct FormattableDuration {
    pub negative: bool,
    pub days: u64,
    pub time: TimeFields,
}

impl Writeable for FormattableDuration {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.negative {
            sink.write_char('-')?;
        }
        self.days.write_to(sink)?;
        sink.write_char('.')?;
        write_clock(&self.time, sink)?;
        if self.time.subsecond != 0 {
            sink.write_char('.')?;
            write_subsecond(self.time.subsecond, sink)?;
        }
        Ok(())
    }
}

impl_display_with_writeable!(FormattableMoment);
impl_display_with_writeable!(FormattableDuration);

fn write_clock<W: Write + ?Sized>(time: &TimeFields, sink: &mut W) -> core::fmt::Result {
    write_padded_u8(time.hour, sink)?;
    sink.write_char(':')?;
    write_padded_u8(time.minute, sink)?;
    sink.write_char(':')?;
    write_padded_u8(time.second, sink)
}

fn write_padded_u8<W: Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

// Writes the sub-second ticks as a decimal fraction without trailing zeros.
fn write_subsecond<W: Write + ?Sized>(ticks: u64, sink: &mut W) -> core::fmt::Result {
    debug_assert!(ticks < TICKS_PER_SECOND);
    let mut digits = [0u8; SUBSECOND_DIGITS];
    let mut value = ticks;
    let mut precision = 0;
    for i in (0..SUBSECOND_DIGITS).rev() {
        let digit = (value % 10) as u8;
        value /= 10;
        if precision == 0 && digit != 0 {
            precision = i + 1;
        }
        digits[i] = digit;
    }
    for digit in digits.iter().take(precision) {
        digit.write_to(sink)?;
    }
    Ok(())
}
