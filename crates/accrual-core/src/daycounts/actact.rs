//! Actual/Actual day count conventions.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The period is split into calendar-year segments: days falling in a
/// leap year are divided by 366, days in a non-leap year by 365, and the
/// fractions are summed. At each year boundary the start of a segment is
/// inclusive and the end exclusive.
///
/// # Formula
///
/// $$\text{Accrual Factor} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
///
/// Runs in O(calendar years spanned); every other convention in this
/// crate is O(1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start == end {
            return Decimal::ZERO;
        }
        if start > end {
            return -self.year_fraction(end, start);
        }

        if start.year() == end.year() {
            let days = start.days_between(&end);
            return Decimal::from(days) / Decimal::from(start.days_in_year());
        }

        // Days from start through Dec 31 of start's year, inclusive.
        let first_segment = start.days_between(&start.end_of_year()) + 1;
        let mut total = Decimal::from(first_segment) / Decimal::from(start.days_in_year());

        // Each full intervening year contributes its whole length over
        // its own basis, which is exactly 1.
        let intervening_years = i64::from(end.year() - start.year() - 1);
        total += Decimal::from(intervening_years);

        // Days from Jan 1 of end's year up to but excluding end.
        let last_segment = end.start_of_year().days_between(&end);
        total += Decimal::from(last_segment) / Decimal::from(end.days_in_year());

        total
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
