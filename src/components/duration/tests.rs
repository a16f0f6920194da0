use alloc::string::ToString;
use core::time::Duration;

use super::*;
use crate::error::ErrorKind;

const HOUR: u64 = 3_600 * TICKS_PER_SECOND;

#[test]
fn negate_borrows_a_day() {
    let twelve_hours = SignedDuration::try_new(0, 12, 0, 0).unwrap();
    let negated = twelve_hours.negate();
    assert_eq!(negated.days(), -1);
    assert_eq!(negated.time_ticks(), 12 * HOUR);
    assert_eq!(negated.negate(), twelve_hours);

    let whole = SignedDuration::from_days(7).unwrap();
    assert_eq!(whole.negate(), SignedDuration::from_days(-7).unwrap());
    assert_eq!(SignedDuration::ZERO.negate(), SignedDuration::ZERO);
}

#[test]
fn negate_at_the_edges() {
    let max = SignedDuration::from_days(i64::MAX).unwrap();
    let min = max.negate();
    assert_eq!(min.days(), -i64::MAX);
    assert_eq!(min.negate(), max);

    let almost = SignedDuration::from_parts(-i64::MAX, 1).unwrap();
    let negated = almost.negate();
    assert_eq!(negated.days(), i64::MAX - 1);
    assert_eq!(negated.time_ticks(), TICKS_PER_DAY - 1);
    assert_eq!(negated.negate(), almost);
}

#[test]
fn construction_errors() {
    let err = SignedDuration::from_parts(0, TICKS_PER_DAY).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let err = SignedDuration::from_days(i64::MIN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(SignedDuration::from_parts(i64::MAX, 1).is_err());
    assert!(SignedDuration::try_new(0, 24, 0, 0).is_err());
    assert!(SignedDuration::try_new_with_fraction(0, 0, 0, 0, -0.1).is_err());
    assert!(SignedDuration::try_new_with_ticks(0, 0, 0, 0, TICKS_PER_SECOND).is_err());
}

#[test]
fn add_and_subtract_carry() {
    let eighteen = SignedDuration::try_new(1, 18, 0, 0).unwrap();
    let twelve = SignedDuration::try_new(0, 12, 0, 0).unwrap();
    let sum = eighteen.add(&twelve).unwrap();
    assert_eq!(sum, SignedDuration::try_new(2, 6, 0, 0).unwrap());

    let difference = twelve.subtract(&eighteen).unwrap();
    assert_eq!(difference.total_ticks(), -30 * i128::from(HOUR));
    assert_eq!(difference.days(), -2);
    assert_eq!(difference.hours(), 18);
    assert_eq!(difference.subtract(&difference).unwrap(), SignedDuration::ZERO);
}

#[test]
fn add_overflow_is_a_range_error() {
    let max = SignedDuration::from_days(i64::MAX).unwrap();
    let err = max.add(&SignedDuration::from_parts(0, 1).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(max.negate().subtract(&SignedDuration::from_days(1).unwrap()).is_err());
}

#[test]
fn total_ticks_round_trip() {
    let values = [
        SignedDuration::ZERO,
        SignedDuration::try_new_with_ticks(3, 1, 2, 3, 4).unwrap(),
        SignedDuration::try_new(-5, 23, 59, 59).unwrap(),
        SignedDuration::from_days(i64::MAX).unwrap(),
        SignedDuration::from_days(-i64::MAX).unwrap(),
    ];
    for value in values {
        assert_eq!(SignedDuration::from_total_ticks(value.total_ticks()).unwrap(), value);
    }
    assert!(SignedDuration::from_total_ticks(MAX_TOTAL_TICKS + 1).is_err());
    assert!(SignedDuration::from_total_ticks(-MAX_TOTAL_TICKS - 1).is_err());
}

#[test]
fn sign_and_abs() {
    let negative = SignedDuration::try_new(-1, 12, 0, 0).unwrap();
    assert_eq!(negative.sign(), Sign::Negative);
    assert_eq!(negative.sign().as_i8(), -1);
    assert!(negative.is_negative());
    assert_eq!(negative.abs(), SignedDuration::try_new(0, 12, 0, 0).unwrap());

    assert!(SignedDuration::ZERO.is_zero());
    assert_eq!(SignedDuration::ZERO.sign(), Sign::from(0));
    let tick = SignedDuration::from_parts(0, 1).unwrap();
    assert_eq!(tick.sign(), Sign::Positive);
    assert_eq!(tick.abs(), tick);
}

#[test]
fn ordering_matches_total_ticks() {
    let values = [
        SignedDuration::try_new(-2, 0, 0, 0).unwrap(),
        SignedDuration::try_new(-1, 12, 0, 0).unwrap(),
        SignedDuration::ZERO,
        SignedDuration::try_new(0, 0, 0, 1).unwrap(),
        SignedDuration::try_new(1, 0, 0, 0).unwrap(),
    ];
    for pair in values.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].total_ticks() < pair[1].total_ticks());
    }
}

#[test]
fn iso_duration_conversions() {
    let iso = IsoDuration::try_from_days(-3, 1).unwrap();
    let duration = SignedDuration::from(iso);
    assert_eq!(duration.days(), -3);
    assert_eq!(duration.time_ticks(), TICKS_PER_NANOSECOND);
    assert_eq!(IsoDuration::try_from(duration).unwrap(), iso);

    // Sub-nanosecond ticks truncate toward zero.
    let fine = SignedDuration::from_parts(-1, TICKS_PER_DAY - 1).unwrap();
    assert_eq!(fine.to_iso_duration().unwrap().as_nanoseconds(), 0);

    let too_long = SignedDuration::from_days(3_652_060).unwrap();
    assert!(!too_long.is_standard());
    assert_eq!(too_long.to_iso_duration().unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn core_duration_conversions() {
    let core = Duration::new(SECONDS_PER_DAY * 2 + 61, 500);
    let duration = SignedDuration::from(core);
    assert_eq!(duration.days(), 2);
    assert_eq!(duration.minutes(), 1);
    assert_eq!(duration.seconds(), 1);
    assert_eq!(duration.subsecond_ticks(), 500 * TICKS_PER_NANOSECOND);
    assert_eq!(Duration::try_from(duration).unwrap(), core);

    let negative = SignedDuration::try_new(-1, 23, 0, 0).unwrap();
    assert_eq!(Duration::try_from(negative).unwrap_err().kind(), ErrorKind::Range);
    let huge = SignedDuration::from_days(i64::MAX).unwrap();
    assert!(Duration::try_from(huge).is_err());
}

#[test]
fn fraction_accessors() {
    let duration = SignedDuration::try_new_with_fraction(0, 0, 0, 1, 0.25).unwrap();
    assert_eq!(duration.second_fraction(), 0.25);
    assert_eq!(duration.subsecond_ticks(), TICKS_PER_SECOND / 4);
}

#[test]
fn display() {
    assert_eq!(SignedDuration::ZERO.to_string(), "0.00:00:00");
    assert_eq!(
        SignedDuration::try_new(0, 12, 0, 0).unwrap().negate().to_string(),
        "-0.12:00:00"
    );
    assert_eq!(
        SignedDuration::try_new(-4, 12, 0, 0).unwrap().to_string(),
        "-3.12:00:00"
    );
    assert_eq!(
        SignedDuration::try_new_with_fraction(50, 1, 2, 3, 0.25)
            .unwrap()
            .to_string(),
        "50.01:02:03.25"
    );
}
