//! Domain types for accrual calculations.
//!
//! This module provides the calendar primitives the day count
//! conventions are built on:
//!
//! - [`Date`]: Calendar date with leap-year and month-end queries
//! - [`days_in_month`] / [`is_leap_year`]: Free calendar helpers

mod date;

pub use date::{days_in_month, is_leap_year, Date};
