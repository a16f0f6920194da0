//! The public value types of `extended_temporal`.
//!
//! - [`AbsoluteMoment`]: a calendar instant with an optional time of day.
//! - [`SignedDuration`]: a signed span of days and time.

mod duration;
mod moment;

#[doc(inline)]
pub use duration::SignedDuration;
#[doc(inline)]
pub use moment::AbsoluteMoment;
