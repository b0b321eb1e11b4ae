//! 30/360 day count conventions.
//!
//! All four variants share the same formula, applied after
//! convention-specific adjustment of local copies of the date
//! components. The original dates are never modified, and every D1 rule
//! is evaluated against the original D1 value.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// The shared 30/360 day count formula over adjusted components.
fn thirty360_days(y1: i64, m1: i64, d1: i64, y2: i64, m2: i64, d2: i64) -> i64 {
    360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
}

// =============================================================================
// 30/360 US (Bond Basis)
// =============================================================================

/// 30/360 US day count convention (Bond Basis).
///
/// # Usage
///
/// - US corporate bonds
/// - US agency bonds
/// - US municipal bonds
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 AND the original D1 was 30 or 31, change D2 to 30
///
/// The D2 rule inspects the original D1, not the adjusted value. The two
/// happen to coincide here, but the asymmetry is part of the published
/// definition and the other variants do not share it.
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let original_d1 = start.day() as i64;
        let mut d1 = original_d1;
        let mut d2 = end.day() as i64;

        // Rule 1: If D1 is 31, change D1 to 30
        if original_d1 == 31 {
            d1 = 30;
        }

        // Rule 2: If D2 is 31 AND original D1 was 30 or 31, change D2 to 30
        if d2 == 31 && (original_d1 == 30 || original_d1 == 31) {
            d2 = 30;
        }

        thirty360_days(
            start.year() as i64,
            start.month() as i64,
            d1,
            end.year() as i64,
            end.month() as i64,
            d2,
        )
    }
}

// =============================================================================
// 30E/360 (Eurobond Basis)
// =============================================================================

/// 30E/360 day count convention (Eurobond Basis).
///
/// # Usage
///
/// - Eurobonds
/// - Some European corporate bonds
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, change D2 to 30
///
/// Simpler than 30/360 US: the D2 adjustment is unconditional and there
/// is no February handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 {
            d2 = 30;
        }

        thirty360_days(
            start.year() as i64,
            start.month() as i64,
            d1,
            end.year() as i64,
            end.month() as i64,
            d2,
        )
    }
}

// =============================================================================
// 30E/360 ISDA
// =============================================================================

/// 30E/360 ISDA day count convention.
///
/// A variant of 30E/360 with month-end handling, including a February
/// month-end rule that is suppressed on the final payment of a schedule.
///
/// # Usage
///
/// - ISDA interest rate swaps
/// - Some structured products
///
/// # Rules
///
/// 1. If D1 is the last day of its month, change D1 to 30
/// 2. If D2 is 31, OR D2 is the last day of February and the end date is
///    not the termination date, change D2 to 30
///
/// The termination date is the final maturity date of the schedule and
/// is a required parameter of this convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thirty360EIsda {
    termination_date: Date,
}

impl Thirty360EIsda {
    /// Creates a new 30E/360 ISDA convention.
    ///
    /// # Arguments
    ///
    /// * `termination_date` - The final maturity date of the schedule
    #[must_use]
    pub fn new(termination_date: Date) -> Self {
        Self { termination_date }
    }

    /// Returns the termination date of the schedule.
    #[must_use]
    pub fn termination_date(&self) -> Date {
        self.termination_date
    }
}

impl DayCount for Thirty360EIsda {
    fn name(&self) -> &'static str {
        "30E/360 ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        // Rule 1: If D1 is the last day of its month, change D1 to 30
        if start.is_end_of_month() {
            d1 = 30;
        }

        // Rule 2: If D2 is 31, or D2 is the last day of February and the
        // end date is not the termination date, change D2 to 30
        let feb_eom = end.month() == 2 && end.is_end_of_month();
        if d2 == 31 || (feb_eom && end != self.termination_date) {
            d2 = 30;
        }

        thirty360_days(
            start.year() as i64,
            start.month() as i64,
            d1,
            end.year() as i64,
            end.month() as i64,
            d2,
        )
    }
}

// =============================================================================
// 30E+/360 ISDA
// =============================================================================

/// 30E+/360 ISDA day count convention.
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, roll the end date forward one calendar day: D2 becomes
///    1, M2 advances by one month, and the year rolls over when M2 was
///    December
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360EPlusIsda;

impl DayCount for Thirty360EPlusIsda {
    fn name(&self) -> &'static str {
        "30E+/360 ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut d1 = start.day() as i64;
        if d1 == 31 {
            d1 = 30;
        }

        // A 31st end date rolls to the first of the next month, carrying
        // the month and year components with it.
        let rolled = if end.day() == 31 { end.add_days(1) } else { end };

        thirty360_days(
            start.year() as i64,
            start.month() as i64,
            d1,
            rolled.year() as i64,
            rolled.month() as i64,
            rolled.day() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // =========================================================================
    // 30/360 US
    // =========================================================================

    #[test]
    fn test_thirty360us_full_year() {
        let dc = Thirty360US;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 360);
        assert_eq!(dc.year_fraction(start, end), dec!(1));
    }

    #[test]
    fn test_thirty360us_d2_31_stays_31() {
        let dc = Thirty360US;

        // D1 = 15 < 30, so D2 = 31 is kept
        let start = Date::from_ymd(2017, 1, 15).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        // Days = 30*(3-1) + (31-15) = 76
        assert_eq!(dc.day_count(start, end), 76);
        assert_eq!(dc.year_fraction(start, end), dec!(76) / dec!(360));
    }

    #[test]
    fn test_thirty360us_both_month_end() {
        let dc = Thirty360US;

        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        // D1 = 30, D2 = 30 (original D1 was 31)
        assert_eq!(dc.day_count(start, end), 60);
    }

    #[test]
    fn test_thirty360us_feb_end_unadjusted() {
        let dc = Thirty360US;

        // No February rule in this variant: D2 = 28 stays
        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 2, 28).unwrap();

        // Days = 30*(2-1) + (28-30) = 28
        assert_eq!(dc.day_count(start, end), 28);
    }

    #[test]
    fn test_thirty360us_d1_30_triggers_d2_rule() {
        let dc = Thirty360US;

        let start = Date::from_ymd(2025, 4, 30).unwrap();
        let end = Date::from_ymd(2025, 5, 31).unwrap();

        // D1 = 30 (unadjusted), D2 = 31 -> 30
        assert_eq!(dc.day_count(start, end), 30);
    }

    #[test]
    fn test_thirty360us_same_day() {
        let dc = Thirty360US;
        let date = Date::from_ymd(2025, 6, 15).unwrap();

        assert_eq!(dc.day_count(date, date), 0);
        assert_eq!(dc.year_fraction(date, date), dec!(0));
    }

    #[test]
    fn test_thirty360us_reversed_negates() {
        let dc = Thirty360US;
        let start = Date::from_ymd(2025, 3, 15).unwrap();
        let end = Date::from_ymd(2025, 6, 15).unwrap();

        assert_eq!(dc.day_count(end, start), -90);
    }

    // =========================================================================
    // 30E/360
    // =========================================================================

    #[test]
    fn test_thirty360e_d2_31_always_30() {
        let dc = Thirty360E;
        let start = Date::from_ymd(2017, 1, 15).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        // D1 = 15, D2 = 30 (unconditional)
        assert_eq!(dc.day_count(start, end), 75);
        assert_eq!(dc.year_fraction(start, end), dec!(75) / dec!(360));
    }

    #[test]
    fn test_thirty360e_d1_31_d2_31() {
        let dc = Thirty360E;
        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        assert_eq!(dc.day_count(start, end), 60);
    }

    #[test]
    fn test_thirty360e_feb_no_special_handling() {
        let dc = Thirty360E;
        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 2, 28).unwrap();

        // D1 = 30, D2 = 28
        assert_eq!(dc.day_count(start, end), 28);
    }

    #[test]
    fn test_thirty360e_vs_us_difference() {
        let us = Thirty360US;
        let eu = Thirty360E;

        let start = Date::from_ymd(2017, 1, 15).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        // US keeps D2 = 31 because D1 < 30; 30E adjusts unconditionally
        assert_eq!(us.day_count(start, end), 76);
        assert_eq!(eu.day_count(start, end), 75);
    }

    // =========================================================================
    // 30E/360 ISDA
    // =========================================================================

    #[test]
    fn test_thirty360e_isda_d2_31() {
        let termination = Date::from_ymd(2017, 4, 1).unwrap();
        let dc = Thirty360EIsda::new(termination);

        let start = Date::from_ymd(2017, 1, 15).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        // D1 = 15 (not month end), D2 = 30
        assert_eq!(dc.day_count(start, end), 75);
    }

    #[test]
    fn test_thirty360e_isda_both_month_end() {
        let termination = Date::from_ymd(2017, 4, 1).unwrap();
        let dc = Thirty360EIsda::new(termination);

        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        assert_eq!(dc.day_count(start, end), 60);
    }

    #[test]
    fn test_thirty360e_isda_feb_eom_rule_fires() {
        let termination = Date::from_ymd(2017, 4, 1).unwrap();
        let dc = Thirty360EIsda::new(termination);

        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 2, 28).unwrap();

        // Feb 28 2017 is the last day of February and not the
        // termination date, so D2 = 30
        assert_eq!(dc.day_count(start, end), 30);
        assert_eq!(dc.year_fraction(start, end), dec!(30) / dec!(360));
    }

    #[test]
    fn test_thirty360e_isda_feb_eom_suppressed_at_termination() {
        let termination = Date::from_ymd(2017, 2, 28).unwrap();
        let dc = Thirty360EIsda::new(termination);

        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = termination;

        // End equals the termination date, so D2 = 28 is kept
        assert_eq!(dc.day_count(start, end), 28);
    }

    #[test]
    fn test_thirty360e_isda_feb_eom_leap_year() {
        let termination = Date::from_ymd(2025, 2, 28).unwrap();
        let dc = Thirty360EIsda::new(termination);

        let start = Date::from_ymd(2024, 1, 31).unwrap();
        let end = Date::from_ymd(2024, 2, 29).unwrap();

        // Feb 29 2024 is a month end away from termination, D2 = 30
        assert_eq!(dc.day_count(start, end), 30);
    }

    #[test]
    fn test_thirty360e_isda_feb_28_in_leap_year_not_eom() {
        let termination = Date::from_ymd(2025, 2, 28).unwrap();
        let dc = Thirty360EIsda::new(termination);

        let start = Date::from_ymd(2024, 1, 31).unwrap();
        let end = Date::from_ymd(2024, 2, 28).unwrap();

        // Feb 28 2024 is not the last day of a leap-year February
        assert_eq!(dc.day_count(start, end), 28);
    }

    #[test]
    fn test_thirty360e_isda_d1_feb_eom() {
        let termination = Date::from_ymd(2018, 1, 1).unwrap();
        let dc = Thirty360EIsda::new(termination);

        let start = Date::from_ymd(2017, 2, 28).unwrap();
        let end = Date::from_ymd(2017, 6, 15).unwrap();

        // D1 is the last day of February, so D1 = 30
        assert_eq!(dc.day_count(start, end), 30 * 4 + (15 - 30));
    }

    // =========================================================================
    // 30E+/360 ISDA
    // =========================================================================

    #[test]
    fn test_thirty360eplus_mid_month_start() {
        let dc = Thirty360EPlusIsda;

        let start = Date::from_ymd(2017, 1, 15).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        // End rolls to Apr 1: 30*(4-1) + (1-15) = 76
        assert_eq!(dc.day_count(start, end), 76);
        assert_eq!(dc.year_fraction(start, end), dec!(76) / dec!(360));
    }

    #[test]
    fn test_thirty360eplus_both_month_end() {
        let dc = Thirty360EPlusIsda;

        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 3, 31).unwrap();

        // D1 = 30, end rolls to Apr 1: 30*(4-1) + (1-30) = 61
        assert_eq!(dc.day_count(start, end), 61);
    }

    #[test]
    fn test_thirty360eplus_feb_end_unadjusted() {
        let dc = Thirty360EPlusIsda;

        let start = Date::from_ymd(2017, 1, 31).unwrap();
        let end = Date::from_ymd(2017, 2, 28).unwrap();

        assert_eq!(dc.day_count(start, end), 28);
    }

    #[test]
    fn test_thirty360eplus_december_year_rollover() {
        let dc = Thirty360EPlusIsda;

        let start = Date::from_ymd(2017, 11, 15).unwrap();
        let end = Date::from_ymd(2017, 12, 31).unwrap();

        // End rolls to Jan 1 2018: 360*1 + 30*(1-11) + (1-15) = 46
        assert_eq!(dc.day_count(start, end), 46);
    }
}
