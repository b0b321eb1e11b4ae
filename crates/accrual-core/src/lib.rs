//! # Accrual Core
//!
//! Day count conventions and accrual factor calculations for fixed
//! income instruments.
//!
//! This crate computes the fractional-year accrual factor between two
//! calendar dates under a selectable day count convention:
//!
//! - **30/360 family**: 30/360 US, 30E/360, 30E/360 ISDA, 30E+/360 ISDA
//! - **Actual family**: ACT/360, ACT/365 Fixed, ACT/365A, NL/365,
//!   ACT/365L, ACT/ACT ISDA
//!
//! Every calculation is a pure, synchronous function of its inputs: no
//! I/O, no shared state, safe to call concurrently without coordination.
//! ACT/ACT ICMA and BUS/252 are recognized identifiers that fail with a
//! [`NotImplemented`](error::AccrualError::NotImplemented) error rather
//! than being approximated.
//!
//! ## Design Philosophy
//!
//! - **Edge cases first**: each convention applies its published
//!   month-end, leap-day, and termination-date adjustments in the
//!   documented order, on local copies of the date components
//! - **Exact arithmetic**: factors are `rust_decimal::Decimal`, so
//!   repeated calls with identical inputs are bit-identical
//! - **Explicit over implicit**: required parameters are validated
//!   eagerly and missing ones are an error, never a default
//!
//! ## Example
//!
//! ```rust
//! use accrual_core::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let start = Date::from_ymd(2017, 1, 15)?;
//! let end = Date::from_ymd(2017, 3, 31)?;
//!
//! let result = accrual_factor(
//!     DayCountConvention::Thirty360US,
//!     start,
//!     end,
//!     &DayCountParams::default(),
//! )?;
//!
//! assert_eq!(result.factor, Decimal::from(76) / Decimal::from(360));
//! # Ok::<(), accrual_core::AccrualError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{
        accrual_factor, Accrual, CouponType, DayCount, DayCountConvention, DayCountParams,
    };
    pub use crate::error::{AccrualError, AccrualResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use daycounts::{accrual_factor, DayCount, DayCountConvention, DayCountParams};
pub use error::{AccrualError, AccrualResult};
pub use types::Date;
