//! Day count conventions for accrual calculations.
//!
//! Day count conventions determine how accrued interest is calculated
//! by specifying how to count days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! ## ACT Family (Actual numerator)
//!
//! - [`Act360`]: Actual/360 - Money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - UK Gilts, AUD/NZD
//! - [`Act365A`]: Actual/365 A - Leap-year-sensitive basis
//! - [`Nl365`]: NL/365 - Leap days removed from the numerator
//! - [`Act365L`]: Actual/365 L - Basis driven by the coupon period
//! - [`ActActIsda`]: Actual/Actual ISDA - Calendar-year split
//!
//! ## 30/360 Family (Assumes 30-day months, 360-day years)
//!
//! - [`Thirty360US`]: 30/360 US (Bond Basis)
//! - [`Thirty360E`]: 30E/360 (Eurobond Basis)
//! - [`Thirty360EIsda`]: 30E/360 ISDA - Month-end rules, termination-aware
//! - [`Thirty360EPlusIsda`]: 30E+/360 ISDA - Rolls a 31st end date forward
//!
//! ## Recognized but not implemented
//!
//! ACT/ACT ICMA and BUS/252 are valid identifiers that fail with
//! [`AccrualError::NotImplemented`] when a calculation is requested.
//! They are never silently approximated.
//!
//! # Usage
//!
//! ```rust
//! use accrual_core::daycounts::{accrual_factor, DayCountConvention, DayCountParams};
//! use accrual_core::types::Date;
//! use rust_decimal::Decimal;
//!
//! let start = Date::from_ymd(2017, 1, 15).unwrap();
//! let end = Date::from_ymd(2017, 3, 31).unwrap();
//!
//! let result = accrual_factor(
//!     DayCountConvention::Act360,
//!     start,
//!     end,
//!     &DayCountParams::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.convention, "ACT/360");
//! assert_eq!(result.factor, Decimal::from(75) / Decimal::from(360));
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::{Act365A, Act365Fixed, Act365L, CouponType, Nl365};
pub use actact::ActActIsda;
pub use thirty360::{Thirty360E, Thirty360EIsda, Thirty360EPlusIsda, Thirty360US};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AccrualError, AccrualResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the accrual factor calculation between two
/// dates according to a specific market convention.
///
/// # Implementation Notes
///
/// - `year_fraction` returns the fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Every implementation is a deterministic pure function of its
///   declared inputs; adjusted date components are local working copies
///   and the arguments are never modified
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the canonical name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the accrual factor between two dates.
    ///
    /// # Arguments
    ///
    /// * `start` - Begin date of the accrual period
    /// * `end` - End date of the accrual period
    ///
    /// # Returns
    ///
    /// The fraction of a year between the two dates. Negative when
    /// `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days (NL/365 removes
    /// leap days). For 30/360 conventions it uses the 30-day month
    /// assumption after the convention's date adjustments.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of all recognized day count conventions.
///
/// This enum provides a convenient way to select conventions at runtime
/// and convert to boxed trait objects via [`DayCountConvention::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    // =========================================================================
    // ACT Family
    // =========================================================================
    /// Actual/360 - Money market instruments, FRNs
    Act360,

    /// Actual/365 Fixed - UK Gilts, AUD/NZD markets
    Act365Fixed,

    /// Actual/365 A - 366-day basis when the period spans a leap day
    Act365A,

    /// NL/365 - Leap days excluded from the numerator
    Nl365,

    /// Actual/365 L - Basis determined by the coupon period
    Act365L,

    /// Actual/Actual ISDA - Calendar-year split
    ActActIsda,

    /// Actual/Actual ICMA - Period-based calculation (not implemented)
    ActActIcma,

    // =========================================================================
    // 30/360 Family
    // =========================================================================
    /// 30/360 US (Bond Basis) - US corporate, agency, municipal bonds
    Thirty360US,

    /// 30E/360 (Eurobond Basis) - Eurobonds, European corporates
    Thirty360E,

    /// 30E/360 ISDA - Month-end handling with termination-date exception
    Thirty360EIsda,

    /// 30E+/360 ISDA - Rolls a 31st end date into the next month
    Thirty360EPlusIsda,

    // =========================================================================
    // Business-day based
    // =========================================================================
    /// Business/252 - Brazilian convention (not implemented)
    Business252,
}

/// Convention-specific parameters for [`DayCountConvention::build`].
///
/// Most conventions take no parameters. 30E/360 ISDA requires
/// `termination_date`; ACT/365L requires `coupon_type` and
/// `coupon_end_date`. Parameters irrelevant to the selected convention
/// are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayCountParams {
    /// Final maturity date of the schedule (30E/360 ISDA).
    pub termination_date: Option<Date>,
    /// Coupon frequency (ACT/365L).
    pub coupon_type: Option<CouponType>,
    /// Scheduled end of the coupon period containing the accrual end
    /// date (ACT/365L).
    pub coupon_end_date: Option<Date>,
}

/// The result of a dispatched accrual factor calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accrual {
    /// Canonical name of the convention that produced the factor.
    pub convention: &'static str,
    /// The accrual factor.
    pub factor: Decimal,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation, validating
    /// convention-specific parameters eagerly.
    ///
    /// # Errors
    ///
    /// - `MissingParameter` if the convention requires a parameter that
    ///   `params` does not carry
    /// - `NotImplemented` for ACT/ACT ICMA and BUS/252
    pub fn build(&self, params: &DayCountParams) -> AccrualResult<Box<dyn DayCount>> {
        match self {
            // ACT Family
            DayCountConvention::Act360 => Ok(Box::new(Act360)),
            DayCountConvention::Act365Fixed => Ok(Box::new(Act365Fixed)),
            DayCountConvention::Act365A => Ok(Box::new(Act365A)),
            DayCountConvention::Nl365 => Ok(Box::new(Nl365)),
            DayCountConvention::Act365L => {
                let coupon_type = params
                    .coupon_type
                    .ok_or_else(|| AccrualError::missing_parameter(self.name(), "coupon_type"))?;
                let coupon_end_date = params.coupon_end_date.ok_or_else(|| {
                    AccrualError::missing_parameter(self.name(), "coupon_end_date")
                })?;
                Ok(Box::new(Act365L::new(coupon_type, coupon_end_date)))
            }
            DayCountConvention::ActActIsda => Ok(Box::new(ActActIsda)),

            // 30/360 Family
            DayCountConvention::Thirty360US => Ok(Box::new(Thirty360US)),
            DayCountConvention::Thirty360E => Ok(Box::new(Thirty360E)),
            DayCountConvention::Thirty360EIsda => {
                let termination_date = params.termination_date.ok_or_else(|| {
                    AccrualError::missing_parameter(self.name(), "termination_date")
                })?;
                Ok(Box::new(Thirty360EIsda::new(termination_date)))
            }
            DayCountConvention::Thirty360EPlusIsda => Ok(Box::new(Thirty360EPlusIsda)),

            // Recognized identifiers without an implementation
            DayCountConvention::ActActIcma | DayCountConvention::Business252 => {
                Err(AccrualError::not_implemented(self.name()))
            }
        }
    }

    /// Creates a boxed day count implementation for a convention that
    /// takes no parameters.
    ///
    /// # Errors
    ///
    /// Same as [`DayCountConvention::build`] with default parameters.
    pub fn to_day_count(&self) -> AccrualResult<Box<dyn DayCount>> {
        self.build(&DayCountParams::default())
    }

    /// Returns the canonical name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::Act365A => "ACT/365A",
            DayCountConvention::Nl365 => "NL/365",
            DayCountConvention::Act365L => "ACT/365L",
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::ActActIcma => "ACT/ACT ICMA",
            DayCountConvention::Thirty360US => "30/360 US",
            DayCountConvention::Thirty360E => "30E/360",
            DayCountConvention::Thirty360EIsda => "30E/360 ISDA",
            DayCountConvention::Thirty360EPlusIsda => "30E+/360 ISDA",
            DayCountConvention::Business252 => "BUS/252",
        }
    }

    /// Returns all recognized day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act365A,
            DayCountConvention::Nl365,
            DayCountConvention::Act365L,
            DayCountConvention::ActActIsda,
            DayCountConvention::ActActIcma,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
            DayCountConvention::Thirty360EIsda,
            DayCountConvention::Thirty360EPlusIsda,
            DayCountConvention::Business252,
        ]
    }

    /// Returns whether the convention has an implementation.
    #[must_use]
    pub const fn is_implemented(&self) -> bool {
        !matches!(
            self,
            DayCountConvention::ActActIcma | DayCountConvention::Business252
        )
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = AccrualError;

    /// Parses a day count convention from a string.
    ///
    /// Supports canonical names ("ACT/360", "30E/360 ISDA"), enum-style
    /// names ("Act360", "Thirty360US"), and common aliases ("BOND",
    /// "EUROBOND").
    ///
    /// # Errors
    ///
    /// Returns `AccrualError::UnknownConvention` for unrecognized
    /// identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365FIXED" | "ACT365" => Ok(DayCountConvention::Act365Fixed),

            "ACT/365A" | "ACT/365 A" | "ACT365A" => Ok(DayCountConvention::Act365A),

            "NL/365" | "NL365" | "ACT/365NL" | "NO-LEAP/365" => Ok(DayCountConvention::Nl365),

            "ACT/365L" | "ACT/365 L" | "ACT365L" => Ok(DayCountConvention::Act365L),

            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA" | "ACTACTISDA"
            | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            "ACT/ACT ICMA" | "ACTUAL/ACTUAL ICMA" | "ACTACTICMA" | "ISMA" => {
                Ok(DayCountConvention::ActActIcma)
            }

            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY360US" | "30/360US" => {
                Ok(DayCountConvention::Thirty360US)
            }

            "30E/360" | "EUROBOND" | "THIRTY360E" | "30E360" => Ok(DayCountConvention::Thirty360E),

            "30E/360 ISDA" | "THIRTY360EISDA" | "30E/360ISDA" => {
                Ok(DayCountConvention::Thirty360EIsda)
            }

            "30E+/360 ISDA" | "30E+/360" | "THIRTY360EPLUSISDA" | "30E+/360ISDA" => {
                Ok(DayCountConvention::Thirty360EPlusIsda)
            }

            "BUS/252" | "BU/252" | "BUSINESS/252" | "BUSINESS252" => {
                Ok(DayCountConvention::Business252)
            }

            _ => Err(AccrualError::unknown_convention(s)),
        }
    }
}

/// Computes the accrual factor between two dates under a convention.
///
/// This is the single dispatch surface of the crate: the convention is
/// built (validating its parameters), the factor is computed, and the
/// result carries the convention's canonical name alongside it.
///
/// # Errors
///
/// Propagates the errors of [`DayCountConvention::build`].
pub fn accrual_factor(
    convention: DayCountConvention,
    start: Date,
    end: Date,
    params: &DayCountParams,
) -> AccrualResult<Accrual> {
    let dc = convention.build(params)?;
    let factor = dc.year_fraction(start, end);
    log::debug!("{}: {} -> {} = {}", dc.name(), start, end, factor);
    Ok(Accrual {
        convention: dc.name(),
        factor,
    })
}
