//! Core pricing calculation functions.
//!
//! Pure functions for lift pass pricing - no database access, no shared state.
//! Callers resolve the base cost and holiday snapshot first, then evaluate.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calendar::{CalendarDate, HolidayCalendar};
use super::models::TicketType;

/// Weekday reduction (percent) for day tickets on a non-holiday Monday.
pub const WEEKDAY_REDUCTION_PERCENT: u32 = 35;

/// Visitors younger than this ride for free.
pub const FREE_ENTRY_BELOW_AGE: u32 = 6;

/// Day tickets use the child rate below this age.
pub const CHILD_RATE_BELOW_AGE: u32 = 15;

/// Senior rates apply strictly above this age.
pub const SENIOR_RATE_ABOVE_AGE: u32 = 64;

const NIGHT_SENIOR_RATE: Decimal = dec!(0.4);
const DAY_CHILD_RATE: Decimal = dec!(0.7);
const DAY_SENIOR_RATE: Decimal = dec!(0.75);

/// Round a fractional cost up to the next whole unit.
///
/// Saturates at `0` and `u32::MAX` instead of wrapping.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use lift_pass_pricing::pricing::ceil_cost;
///
/// assert_eq!(ceil_cost(dec!(65.65)), 66);
/// assert_eq!(ceil_cost(dec!(65)), 65);
/// ```
pub fn ceil_cost(amount: Decimal) -> u32 {
    let rounded = amount.ceil();
    if rounded <= Decimal::ZERO {
        0
    } else {
        rounded.to_u32().unwrap_or(u32::MAX)
    }
}

/// Weekday reduction in percent for the given visit date.
///
/// 35 when the date is a Monday that is not a holiday, otherwise 0.
/// No date means no reduction.
pub fn weekday_reduction<C>(date: Option<CalendarDate>, calendar: &C) -> u32
where
    C: HolidayCalendar + ?Sized,
{
    match date {
        Some(d) if d.is_monday() && !calendar.is_holiday(d) => WEEKDAY_REDUCTION_PERCENT,
        _ => 0,
    }
}

/// Calculate the cost of a lift pass.
///
/// Night tickets ignore the date. Every other ticket type is priced as a
/// day ticket, where a non-holiday Monday earns the weekday reduction.
pub fn compute_cost<C>(
    age: Option<u32>,
    ticket_type: &TicketType,
    base_cost: u32,
    date: Option<CalendarDate>,
    calendar: &C,
) -> u32
where
    C: HolidayCalendar + ?Sized,
{
    match ticket_type {
        TicketType::Night => night_ticket_cost(age, base_cost),
        // Unrecognized types fall through to day pricing rather than failing.
        // Kept as-is for compatibility with existing price lists.
        TicketType::Day | TicketType::Other(_) => {
            let reduction = weekday_reduction(date, calendar);
            day_ticket_cost(age, base_cost, reduction)
        }
    }
}

fn night_ticket_cost(age: Option<u32>, base_cost: u32) -> u32 {
    match age {
        None => 0,
        Some(a) if a < FREE_ENTRY_BELOW_AGE => 0,
        Some(a) if a > SENIOR_RATE_ABOVE_AGE => {
            ceil_cost(Decimal::from(base_cost) * NIGHT_SENIOR_RATE)
        }
        Some(_) => base_cost,
    }
}

fn day_ticket_cost(age: Option<u32>, base_cost: u32, reduction: u32) -> u32 {
    let base = Decimal::from(base_cost);
    let remaining = Decimal::ONE - Decimal::from(reduction) / Decimal::ONE_HUNDRED;

    match age {
        None => ceil_cost(base * remaining),
        Some(a) if a < FREE_ENTRY_BELOW_AGE => 0,
        // Child rate never stacks with the weekday reduction.
        Some(a) if a < CHILD_RATE_BELOW_AGE => ceil_cost(base * DAY_CHILD_RATE),
        Some(a) if a > SENIOR_RATE_ABOVE_AGE => ceil_cost(base * DAY_SENIOR_RATE * remaining),
        Some(_) => ceil_cost(base * remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calendar::HolidaySet;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    // 2019-02-11 and 2019-02-18 are Mondays; 2019-02-13 is a Wednesday
    fn monday() -> CalendarDate {
        date(2019, 2, 11)
    }

    fn holiday_monday() -> CalendarDate {
        date(2019, 2, 18)
    }

    fn wednesday() -> CalendarDate {
        date(2019, 2, 13)
    }

    fn holidays() -> HolidaySet {
        HolidaySet::new(vec![date(2019, 2, 18), date(2019, 2, 25), date(2019, 3, 4)])
    }

    fn day(age: Option<u32>, base: u32, d: Option<CalendarDate>) -> u32 {
        compute_cost(age, &TicketType::Day, base, d, &holidays())
    }

    fn night(age: Option<u32>, base: u32, d: Option<CalendarDate>) -> u32 {
        compute_cost(age, &TicketType::Night, base, d, &holidays())
    }

    // ==================== ceil_cost tests ====================

    #[test]
    fn test_ceil_cost_rounds_up() {
        assert_eq!(ceil_cost(dec!(65.65)), 66);
        assert_eq!(ceil_cost(dec!(48.75)), 49);
        assert_eq!(ceil_cost(dec!(0.01)), 1);
    }

    #[test]
    fn test_ceil_cost_whole_values_unchanged() {
        assert_eq!(ceil_cost(dec!(0)), 0);
        assert_eq!(ceil_cost(dec!(70)), 70);
        assert_eq!(ceil_cost(dec!(7.000)), 7);
    }

    #[test]
    fn test_ceil_cost_saturates_out_of_range() {
        assert_eq!(ceil_cost(dec!(5000000000)), u32::MAX);
        assert_eq!(ceil_cost(Decimal::from(u32::MAX) + dec!(0.5)), u32::MAX);
        assert_eq!(ceil_cost(dec!(-3.5)), 0);
    }

    #[test]
    fn test_max_base_cost_stays_in_range() {
        let cost = compute_cost(None, &TicketType::Day, u32::MAX, None, &HolidaySet::default());
        assert_eq!(cost, u32::MAX);
    }

    // ==================== weekday_reduction tests ====================

    #[test]
    fn test_weekday_reduction() {
        assert_eq!(weekday_reduction(Some(monday()), &holidays()), 35);
        assert_eq!(weekday_reduction(Some(holiday_monday()), &holidays()), 0);
        assert_eq!(weekday_reduction(Some(wednesday()), &holidays()), 0);
        assert_eq!(weekday_reduction(None, &holidays()), 0);
    }

    // ==================== night ticket tests ====================

    #[test]
    fn test_night_without_age_is_free() {
        for base in [0, 1, 19, 100, 12345] {
            assert_eq!(night(None, base, Some(monday())), 0);
        }
    }

    #[test]
    fn test_night_under_six_is_free() {
        assert_eq!(night(Some(0), 19, None), 0);
        assert_eq!(night(Some(5), 19, None), 0);
    }

    #[test]
    fn test_night_adult_pays_base() {
        for age in 6..=64 {
            assert_eq!(night(Some(age), 19, None), 19);
        }
    }

    #[test]
    fn test_night_senior_rate() {
        assert_eq!(night(Some(65), 19, None), 8); // ceil(7.6)
        assert_eq!(night(Some(80), 100, None), 40);
        assert_eq!(night(Some(65), 101, None), 41); // ceil(40.4)
    }

    #[test]
    fn test_night_ignores_date() {
        for age in [None, Some(3), Some(30), Some(70)] {
            let undated = night(age, 101, None);
            assert_eq!(night(age, 101, Some(monday())), undated);
            assert_eq!(night(age, 101, Some(holiday_monday())), undated);
            assert_eq!(night(age, 101, Some(wednesday())), undated);
        }
    }

    // ==================== day ticket tests ====================

    #[test]
    fn test_day_adult_discounted_monday() {
        assert_eq!(day(Some(30), 100, Some(monday())), 65);
    }

    #[test]
    fn test_day_adult_holiday_monday_no_reduction() {
        assert_eq!(day(Some(30), 100, Some(holiday_monday())), 100);
    }

    #[test]
    fn test_day_adult_other_weekday_no_reduction() {
        assert_eq!(day(Some(30), 100, Some(wednesday())), 100);
    }

    #[test]
    fn test_day_adult_ceiling_behavior() {
        assert_eq!(day(Some(30), 101, Some(monday())), 66); // ceil(65.65)
    }

    #[test]
    fn test_day_without_age() {
        assert_eq!(day(None, 35, None), 35);
        assert_eq!(day(None, 100, Some(monday())), 65);
        assert_eq!(day(None, 35, Some(monday())), 23); // ceil(22.75)
    }

    #[test]
    fn test_day_under_six_is_free() {
        assert_eq!(day(Some(5), 100, None), 0);
        assert_eq!(day(Some(5), 100, Some(monday())), 0);
        assert_eq!(day(Some(0), 100, Some(holiday_monday())), 0);
    }

    #[test]
    fn test_day_child_rate_ignores_weekday_reduction() {
        assert_eq!(day(Some(10), 100, None), 70);
        assert_eq!(day(Some(10), 100, Some(monday())), 70);
        assert_eq!(day(Some(6), 35, Some(monday())), 25); // ceil(24.5)
        assert_eq!(day(Some(14), 35, None), 25);
    }

    #[test]
    fn test_day_child_rate_is_exact() {
        // 10 * 0.7 is exactly 7 in decimal arithmetic
        assert_eq!(day(Some(10), 10, None), 7);
    }

    #[test]
    fn test_day_senior_rate_stacks_with_reduction() {
        assert_eq!(day(Some(70), 100, Some(monday())), 49); // ceil(48.75)
        assert_eq!(day(Some(70), 100, Some(holiday_monday())), 75);
        assert_eq!(day(Some(65), 35, None), 27); // ceil(26.25)
    }

    #[test]
    fn test_day_age_band_boundaries() {
        assert_eq!(day(Some(5), 100, None), 0);
        assert_eq!(day(Some(6), 100, None), 70);
        assert_eq!(day(Some(14), 100, None), 70);
        assert_eq!(day(Some(15), 100, None), 100);
        assert_eq!(day(Some(64), 100, None), 100);
        assert_eq!(day(Some(65), 100, None), 75);
    }

    #[test]
    fn test_unknown_type_priced_as_day() {
        let other = TicketType::Other("season".to_string());
        assert_eq!(
            compute_cost(Some(30), &other, 100, Some(monday()), &holidays()),
            65
        );
        assert_eq!(compute_cost(None, &other, 100, None, &holidays()), 100);
    }

    #[test]
    fn test_zero_base_cost() {
        assert_eq!(day(Some(30), 0, Some(monday())), 0);
        assert_eq!(night(Some(70), 0, None), 0);
    }

    #[test]
    fn test_compute_cost_through_trait_object() {
        let calendar: &dyn HolidayCalendar = &holidays();
        assert_eq!(
            compute_cost(Some(30), &TicketType::Day, 100, Some(monday()), calendar),
            65
        );
    }
}
