//! The `extended_temporal` crate implements proleptic Gregorian date and
//! time arithmetic over years far outside the range of ordinary calendar
//! types, at a resolution of 10 femtoseconds.
//!
//! ```rust
//! use extended_temporal::{AbsoluteMoment, SignedDuration};
//!
//! let moment = AbsoluteMoment::try_new_with_time(2014, 4, 20, 18, 45, 0).unwrap();
//! let earlier = moment.subtract(&SignedDuration::try_new(0, 12, 0, 0).unwrap()).unwrap();
//! assert_eq!(earlier, AbsoluteMoment::try_new_with_time(2014, 4, 20, 6, 45, 0).unwrap());
//!
//! // Years beyond 9999 are ordinary values, they just cannot be converted
//! // into the bounded ISO records.
//! let far = AbsoluteMoment::try_new(10_000, 1, 1).unwrap();
//! assert!(!far.is_standard());
//! assert!(far.to_iso_date_time().is_err());
//! ```
//!
//! Two value types carry the public surface, [`AbsoluteMoment`] and
//! [`SignedDuration`]. Both are plain `Copy` values built on a set of pure
//! functions:
//!
//! - [`codec`] packs dates into order preserving day ordinals and clock
//!   times into ticks.
//! - [`calendar`] answers leap year, month length, day of year and weekday
//!   questions for any year.
//! - [`arithmetic`] shifts dates by, and measures them in, arbitrary day
//!   counts without walking day by day.
//! - [`iso`] holds the bounded ISO records used as the host calendar for
//!   years 1 through 9999.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod calendar;
pub mod codec;
pub mod error;
pub mod iso;

mod components;
mod formatting;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::TemporalError;

/// The `extended_temporal` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub use crate::{
    calendar::Weekday,
    components::{AbsoluteMoment, SignedDuration},
};

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i8> for Sign {
    fn from(value: i8) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl Sign {
    /// Returns the sign as `1`, `0` or `-1`.
    #[inline]
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

// Relevant numeric constants
/// Ticks per second: one tick is 10 femtoseconds.
pub const TICKS_PER_SECOND: u64 = 100_000_000_000_000;
/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: u64 = 86_400;
/// Ticks per day constant: 8.64e+18
pub const TICKS_PER_DAY: u64 = TICKS_PER_SECOND * SECONDS_PER_DAY;
/// Ticks per nanosecond constant: 100,000
pub const TICKS_PER_NANOSECOND: u64 = TICKS_PER_SECOND / 1_000_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = SECONDS_PER_DAY * 1_000_000_000;
/// Mean year length in days, used to decide when a span is long enough
/// to skip in whole 400 year cycles.
pub const MEAN_YEAR_DAYS: f64 = 365.242_19;
/// The span, in years, up to which day arithmetic walks year by year.
pub const EXACT_YEAR_THRESHOLD: i64 = 400;
/// The largest supported year: the largest year whose day ordinal fits an `i64`.
pub const MAX_YEAR: i64 = i64::MAX / (codec::DAY_RADIX * codec::MONTH_RADIX) - 1;
/// The smallest supported year.
pub const MIN_YEAR: i64 = -MAX_YEAR;
