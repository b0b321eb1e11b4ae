//! Actual/365 day count conventions.
//!
//! This module provides the ACT/365 Fixed, ACT/365A, NL/365, and
//! ACT/365L variants, together with the [`CouponType`] parameter
//! required by ACT/365L.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayCount;
use crate::error::AccrualError;
use crate::types::{is_leap_year, Date};

/// Checks whether February 29 of `year` falls strictly after `after` and
/// on or before `upto`.
///
/// The lower bound is exclusive and the upper bound inclusive across all
/// leap-day-sensitive conventions in this module.
fn leap_day_in_window(year: i32, after: Date, upto: Date) -> bool {
    if !is_leap_year(year) {
        return false;
    }
    let feb29 = Date::from_ymd(year, 2, 29).expect("Feb 29 exists in a leap year");
    feb29 > after && feb29 <= upto
}

/// Checks whether any February 29 falls strictly after `start` and on or
/// before `end`.
fn contains_leap_day(start: Date, end: Date) -> bool {
    if start >= end {
        return false;
    }
    (start.year()..=end.year()).any(|year| leap_day_in_window(year, start, end))
}

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of calendar days between dates.
/// The year basis is always 365 days, ignoring leap years.
///
/// # Usage
///
/// - UK Gilts
/// - AUD and NZD markets
/// - Sterling interest rate swaps (fixed leg)
///
/// # Formula
///
/// $$\text{Accrual Factor} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 A day count convention.
///
/// The numerator is the actual number of days. The denominator is 366 if
/// February 29 of either endpoint's year falls within the period
/// (start exclusive, end inclusive), otherwise 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365A;

impl DayCount for Act365A {
    fn name(&self) -> &'static str {
        "ACT/365A"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        let basis = if leap_day_in_window(start.year(), start, end)
            || leap_day_in_window(end.year(), start, end)
        {
            366
        } else {
            365
        };
        Decimal::from(days) / Decimal::from(basis)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// NL/365 (No-Leap) day count convention.
///
/// The numerator is the actual number of days, reduced by one when the
/// period contains a February 29 (start exclusive, end inclusive).
/// The year basis is always 365 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nl365;

impl DayCount for Nl365 {
    fn name(&self) -> &'static str {
        "NL/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let days = start.days_between(&end);
        if contains_leap_day(start, end) {
            days - 1
        } else {
            days
        }
    }
}

/// Coupon frequency parameter for the ACT/365L convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CouponType {
    /// Semi-annual coupon periods.
    SemiAnnual,
    /// Annual coupon periods.
    Annual,
}

impl std::fmt::Display for CouponType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CouponType::SemiAnnual => write!(f, "semi-annual"),
            CouponType::Annual => write!(f, "annual"),
        }
    }
}

impl FromStr for CouponType {
    type Err = AccrualError;

    /// Parses a coupon type from a string.
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::InvalidCouponType` for anything other than
    /// a semi-annual or annual spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "semi-annual" | "semiannual" | "semi_annual" => Ok(CouponType::SemiAnnual),
            "annual" => Ok(CouponType::Annual),
            _ => Err(AccrualError::invalid_coupon_type(s)),
        }
    }
}

/// Actual/365 L day count convention.
///
/// The denominator depends on the coupon frequency and the scheduled end
/// of the coupon period containing the accrual end date:
///
/// - **Semi-annual**: 366 if the coupon end date falls in a leap year,
///   otherwise 365.
/// - **Annual**: 366 if February 29 of the accrual start's year or the
///   coupon end's year falls within (start, coupon end], otherwise 365.
///
/// Both the coupon type and the coupon end date are required at
/// construction; the dispatcher rejects a missing parameter before a
/// value of this type ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Act365L {
    coupon_type: CouponType,
    coupon_end_date: Date,
}

impl Act365L {
    /// Creates a new ACT/365L convention.
    ///
    /// # Arguments
    ///
    /// * `coupon_type` - Semi-annual or annual coupon frequency
    /// * `coupon_end_date` - Scheduled end of the coupon period containing
    ///   the accrual end date
    #[must_use]
    pub fn new(coupon_type: CouponType, coupon_end_date: Date) -> Self {
        Self {
            coupon_type,
            coupon_end_date,
        }
    }

    fn basis(&self, start: Date) -> u32 {
        match self.coupon_type {
            CouponType::SemiAnnual => {
                if is_leap_year(self.coupon_end_date.year()) {
                    366
                } else {
                    365
                }
            }
            CouponType::Annual => {
                let upto = self.coupon_end_date;
                if leap_day_in_window(start.year(), start, upto)
                    || leap_day_in_window(upto.year(), start, upto)
                {
                    366
                } else {
                    365
                }
            }
        }
    }
}

impl DayCount for Act365L {
    fn name(&self) -> &'static str {
        "ACT/365L"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(self.basis(start))
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
