//! Gregorian Date Calculations
//!
//! This module contains the logic for Gregorian Date Calculations based
//! off Cassio Neri and Lorenz Schneider's paper, [Euclidean affine functions
//! and their application to calendar algorithms][eaf-calendar-algorithms].
//!
//! ## General Usage Note
//!
//! Unless specified, Rata Die refers to the computational rata die as referenced
//! in the paper, i.e. a day count in a calendar whose years begin on March 1st.
//!
//! ## Shift window
//!
//! The equations are only valid for non-negative computational years, so
//! inputs are shifted forward by a whole number of 400 year cycles before
//! evaluation and shifted back afterwards. A shift of 680 cycles keeps
//! every year from -272 000 upward valid, which covers the years 1 through
//! 10 000 the host records pass in.
//!
//! [eaf-calendar-algorithms]: https://onlinelibrary.wiley.com/doi/full/10.1002/spe.3172

pub const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;
pub const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

const SHIFT_CONSTANT: i64 = 680;
const YEAR_SHIFT: i64 = 400 * SHIFT_CONSTANT;
const RATA_DIE_SHIFT: i64 = SHIFT_CONSTANT * DAYS_IN_A_400Y_CYCLE + EPOCH_COMPUTATIONAL_RATA_DIE;

const TWO_POWER_SIXTEEN: u64 = 65_536; // 2^16 constant

/// Returns the number of days since 1970-01-01 for a Gregorian date.
pub const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    let (comp_year, comp_month, comp_day, century) = rata_die_first_equations(year, month, day);
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day - RATA_DIE_SHIFT
}

// Returns Y, M, D, C
const fn rata_die_first_equations(year: i32, month: u8, day: u8) -> (i64, i64, i64, i64) {
    let j = (month <= 2) as i64;
    let computational_year = year as i64 + YEAR_SHIFT - j;
    let computational_month = month as i64 + 12 * j;
    let computational_day = day as i64 - 1;
    (
        computational_year,
        computational_month,
        computational_day,
        computational_year / 100,
    )
}

// Returns C, N_c
const fn first_equations(rata_die: u64) -> (u64, u64) {
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE as u64;
    let day_of_century = (n_one % DAYS_IN_A_400Y_CYCLE as u64) / 4;
    (century, day_of_century)
}

// Returns Y, N_y
const fn second_equations(rata_die: u64) -> (u64, u64) {
    let (century, day_of_century) = first_equations(rata_die);
    let n_two = 4 * day_of_century + 3;
    let year_of_century = n_two / 1461;
    let day_of_year = (n_two % 1461) / 4;
    (100 * century + year_of_century, day_of_year)
}

// Returns Y, M, D, N_y
const fn third_equations(rata_die: u64) -> (u64, u64, u64, u64) {
    let (year, day_of_year) = second_equations(rata_die);
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141;
    (year, month, day, day_of_year)
}

/// Returns the Gregorian `(year, month, day)` for a count of days since 1970-01-01.
///
/// The caller is responsible for keeping `epoch_days` inside the shift window.
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let rata_die = (epoch_days + RATA_DIE_SHIFT) as u64;
    let (year, month, day, day_of_year) = third_equations(rata_die);
    let j = (day_of_year >= 306) as u64;
    let year = (year + j) as i64 - YEAR_SHIFT;
    let month = month - 12 * j;
    (year as i32, month as u8, (day + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_ymd() {
        assert_eq!(ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
    }

    #[test]
    fn standard_range_bounds() {
        let min = epoch_days_from_gregorian_date(1, 1, 1);
        assert_eq!(min, -719_162);
        assert_eq!(ymd_from_epoch_days(min), (1, 1, 1));

        let max = epoch_days_from_gregorian_date(9999, 12, 31);
        assert_eq!(max, 2_932_896);
        assert_eq!(ymd_from_epoch_days(max), (9999, 12, 31));

        // Year lengths near the top of the range read January 1st of 10000.
        let after = epoch_days_from_gregorian_date(10_000, 1, 1);
        assert_eq!(after, max + 1);
        assert_eq!(ymd_from_epoch_days(after), (10_000, 1, 1));
    }

    #[test]
    fn leap_day_boundaries() {
        let feb_29 = epoch_days_from_gregorian_date(2000, 2, 29);
        assert_eq!(ymd_from_epoch_days(feb_29 + 1), (2000, 3, 1));
        let feb_28 = epoch_days_from_gregorian_date(1900, 2, 28);
        assert_eq!(ymd_from_epoch_days(feb_28 + 1), (1900, 3, 1));
    }

    #[test]
    fn round_trips_across_a_cycle() {
        let start = epoch_days_from_gregorian_date(1600, 1, 1);
        for offset in 0..DAYS_IN_A_400Y_CYCLE {
            let days = start + offset;
            let (y, m, d) = ymd_from_epoch_days(days);
            assert_eq!(epoch_days_from_gregorian_date(y, m, d), days);
        }
    }
}
