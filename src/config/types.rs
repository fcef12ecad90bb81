//! Configuration types for exemption calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! statutory defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AssessmentError, AssessmentResult};
use crate::models::ExemptionType;

/// Metadata about the assessing jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code for the jurisdiction (e.g., "boston").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// URL to the assessing department's exemption guidance.
    pub source_url: String,
}

/// A month and day without a year, written `MM-DD` in configuration.
///
/// Only dates that exist in every year are accepted, so `02-29` is rejected.
///
/// # Example
///
/// ```
/// use assessing_core::config::MonthDay;
/// use chrono::NaiveDate;
///
/// let deadline: MonthDay = "04-01".parse().unwrap();
/// assert_eq!(deadline.on(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// assert!("02-29".parse::<MonthDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month-day, rejecting dates that do not exist in every year.
    pub fn new(month: u32, day: u32) -> AssessmentResult<Self> {
        // 2023 is not a leap year
        if NaiveDate::from_ymd_opt(2023, month, day).is_none() {
            return Err(AssessmentError::InvalidArgument {
                field: "month_day".to_string(),
                message: format!("{:02}-{:02} is not a date in every year", month, day),
            });
        }
        Ok(Self { month, day })
    }

    /// The month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns this month-day in the given calendar year.
    pub fn on(&self, year: i32) -> AssessmentResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or_else(|| {
            AssessmentError::InvalidArgument {
                field: "calendar_year".to_string(),
                message: format!("year {} is outside the supported date range", year),
            }
        })
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl std::str::FromStr for MonthDay {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AssessmentError::InvalidArgument {
            field: "month_day".to_string(),
            message: format!("expected MM-DD, got '{}'", s),
        };

        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;
        Self::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = AssessmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

/// The yearly date anchors of one exemption type.
///
/// Within calendar year Y, applications are accepted from `opens` through
/// `deadline`; from the day after `deadline` through `cycle_ends` an
/// ungranted exemption has missed the cycle; after `cycle_ends` the next
/// cycle has not opened yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionWindow {
    /// Display name used in messages (e.g., "Residential Exemption").
    pub name: String,
    /// First day applications are accepted.
    pub opens: MonthDay,
    /// Last day applications are accepted.
    pub deadline: MonthDay,
    /// Last day of the cycle.
    pub cycle_ends: MonthDay,
}

impl ExemptionWindow {
    fn validate(&self, exemption_type: ExemptionType) -> AssessmentResult<()> {
        let invalid = |message: String| AssessmentError::InvalidCalendar {
            exemption_type: exemption_type.key().to_string(),
            message,
        };

        if self.deadline < self.opens {
            return Err(invalid(format!(
                "deadline {} falls before opening {}",
                self.deadline, self.opens
            )));
        }
        if self.cycle_ends < self.deadline {
            return Err(invalid(format!(
                "cycle end {} falls before deadline {}",
                self.cycle_ends, self.deadline
            )));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Exemptions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExemptionsConfig {
    /// Residential exemption anchors.
    pub residential: ExemptionWindow,
    /// Personal exemption anchors.
    pub personal: ExemptionWindow,
}

/// The complete exemption calendar: jurisdiction metadata plus the validated
/// anchors of every exemption type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemptionCalendar {
    jurisdiction: JurisdictionMetadata,
    residential: ExemptionWindow,
    personal: ExemptionWindow,
}

impl ExemptionCalendar {
    /// Creates a calendar, validating the anchors of each exemption type.
    pub fn new(
        jurisdiction: JurisdictionMetadata,
        residential: ExemptionWindow,
        personal: ExemptionWindow,
    ) -> AssessmentResult<Self> {
        residential.validate(ExemptionType::Residential)?;
        personal.validate(ExemptionType::Personal)?;
        Ok(Self {
            jurisdiction,
            residential,
            personal,
        })
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.jurisdiction
    }

    /// Returns the anchors for an exemption type.
    pub fn window(&self, exemption_type: ExemptionType) -> &ExemptionWindow {
        match exemption_type {
            ExemptionType::Residential => &self.residential,
            ExemptionType::Personal => &self.personal,
        }
    }
}

impl Default for ExemptionCalendar {
    /// The City of Boston calendar: both exemptions are filed between the
    /// January actual bill and April 1, and the cycle closes with the fiscal
    /// year on June 30.
    fn default() -> Self {
        let anchor = |month, day| MonthDay { month, day };
        Self {
            jurisdiction: JurisdictionMetadata {
                code: "boston".to_string(),
                name: "City of Boston".to_string(),
                source_url: "https://www.boston.gov/departments/assessing".to_string(),
            },
            residential: ExemptionWindow {
                name: "Residential Exemption".to_string(),
                opens: anchor(1, 1),
                deadline: anchor(4, 1),
                cycle_ends: anchor(6, 30),
            },
            personal: ExemptionWindow {
                name: "Personal Exemption".to_string(),
                opens: anchor(1, 1),
                deadline: anchor(4, 1),
                cycle_ends: anchor(6, 30),
            },
        }
    }
}
