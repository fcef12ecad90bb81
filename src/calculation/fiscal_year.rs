//! Fiscal year and billing period detection.
//!
//! The city's fiscal year runs July 1 to June 30 and is named for the
//! calendar year in which it ends. Bills issued in the first half (July to
//! December) are preliminary estimates; bills in the second half are actual.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// First month (1-based) of the fiscal year.
pub const FISCAL_YEAR_START_MONTH: u32 = 7;

/// A city fiscal year, identified by the calendar year in which it ends.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::FiscalYear;
/// use chrono::NaiveDate;
///
/// let fy = FiscalYear::from_date(NaiveDate::from_ymd_opt(2024, 9, 15).unwrap());
/// assert_eq!(fy, FiscalYear(2025));
/// assert_eq!(fy.start_date(), NaiveDate::from_ymd_opt(2024, 7, 1));
/// assert_eq!(fy.to_string(), "FY2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FiscalYear(pub i32);

impl FiscalYear {
    /// Returns the fiscal year containing a date.
    pub fn from_date(date: NaiveDate) -> Self {
        if date.month() >= FISCAL_YEAR_START_MONTH {
            FiscalYear(date.year() + 1)
        } else {
            FiscalYear(date.year())
        }
    }

    /// July 1 of the previous calendar year.
    ///
    /// `None` only at the edge of chrono's representable range.
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0 - 1, FISCAL_YEAR_START_MONTH, 1)
    }

    /// June 30 of the fiscal year's own calendar year.
    pub fn end_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 6, 30)
    }

    /// Whether a date falls inside this fiscal year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        FiscalYear::from_date(date) == *self
    }

    /// The following fiscal year.
    pub fn next(&self) -> Self {
        FiscalYear(self.0 + 1)
    }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FY{}", self.0)
    }
}

/// The billing half of the fiscal year a date falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillPeriod {
    /// July through December: preliminary bills estimated from last year.
    Preliminary,
    /// January through June: actual bills at the final tax rate.
    Actual,
}

impl BillPeriod {
    /// Returns the billing half a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        if is_prelim_period(date) {
            BillPeriod::Preliminary
        } else {
            BillPeriod::Actual
        }
    }
}

impl std::fmt::Display for BillPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillPeriod::Preliminary => write!(f, "Preliminary"),
            BillPeriod::Actual => write!(f, "Actual"),
        }
    }
}

/// Returns the fiscal year number for a date.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::get_fiscal_year;
/// use chrono::NaiveDate;
///
/// assert_eq!(get_fiscal_year(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()), 2024);
/// assert_eq!(get_fiscal_year(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()), 2025);
/// ```
pub fn get_fiscal_year(date: NaiveDate) -> i32 {
    FiscalYear::from_date(date).0
}

/// Whether a date falls in the preliminary half (month index 6..=11).
pub fn is_prelim_period(date: NaiveDate) -> bool {
    (6..=11).contains(&date.month0())
}
