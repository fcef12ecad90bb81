//! Exemption type and exemption amount models.
//!
//! This module contains the [`ExemptionType`] tag and the [`ExemptionAmounts`]
//! read from a property record.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AssessmentError, AssessmentResult};

/// The kind of exemption being evaluated.
///
/// Both kinds follow the same phase state machine; they differ only in their
/// calendar anchors and display names.
///
/// # Example
///
/// ```
/// use assessing_core::models::ExemptionType;
///
/// let exemption_type: ExemptionType = "Residential".parse().unwrap();
/// assert_eq!(exemption_type, ExemptionType::Residential);
/// assert!("Senior".parse::<ExemptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExemptionType {
    /// The residential exemption for owner-occupied homes.
    #[serde(alias = "Residential")]
    Residential,
    /// Personal exemptions (seniors, veterans, blind, surviving spouses).
    #[serde(alias = "Personal")]
    Personal,
}

impl ExemptionType {
    /// Returns both exemption types in the order they are resolved.
    pub fn all() -> [ExemptionType; 2] {
        [ExemptionType::Residential, ExemptionType::Personal]
    }

    /// Returns the snake_case key used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            ExemptionType::Residential => "residential",
            ExemptionType::Personal => "personal",
        }
    }
}

impl std::fmt::Display for ExemptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExemptionType::Residential => write!(f, "Residential"),
            ExemptionType::Personal => write!(f, "Personal"),
        }
    }
}

impl FromStr for ExemptionType {
    type Err = AssessmentError;

    /// Parses `Residential`/`Personal` in any letter case.
    ///
    /// Anything else is rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Ok(ExemptionType::Residential),
            "personal" => Ok(ExemptionType::Personal),
            _ => Err(AssessmentError::UnknownExemptionType {
                value: s.to_string(),
            }),
        }
    }
}

/// Exemption amounts and approval flags from a property record.
///
/// The amount says whether an exemption is on the bill (granted); the flag is
/// the separate administrative approval signal. The two are never derived
/// from each other.
///
/// # Example
///
/// ```
/// use assessing_core::models::ExemptionAmounts;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amounts = ExemptionAmounts {
///     residential_exemption_amount: Decimal::from_str("3716.40").unwrap(),
///     residential_exemption_flag: true,
///     personal_exemption_amount: Decimal::ZERO,
///     personal_exemption_flag: false,
/// };
///
/// assert!(amounts.residential_granted());
/// assert!(!amounts.personal_granted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExemptionAmounts {
    /// Residential exemption amount applied to the bill.
    pub residential_exemption_amount: Decimal,
    /// Whether the residential exemption application was approved.
    pub residential_exemption_flag: bool,
    /// Personal exemption amount applied to the bill.
    pub personal_exemption_amount: Decimal,
    /// Whether the personal exemption application was approved.
    pub personal_exemption_flag: bool,
}

impl ExemptionAmounts {
    /// Returns the amount recorded for the given exemption type.
    pub fn amount(&self, exemption_type: ExemptionType) -> Decimal {
        match exemption_type {
            ExemptionType::Residential => self.residential_exemption_amount,
            ExemptionType::Personal => self.personal_exemption_amount,
        }
    }

    /// Returns the approval flag recorded for the given exemption type.
    pub fn flag(&self, exemption_type: ExemptionType) -> bool {
        match exemption_type {
            ExemptionType::Residential => self.residential_exemption_flag,
            ExemptionType::Personal => self.personal_exemption_flag,
        }
    }

    /// Whether a residential exemption amount is on the bill.
    pub fn residential_granted(&self) -> bool {
        self.residential_exemption_amount > Decimal::ZERO
    }

    /// Whether a personal exemption amount is on the bill.
    pub fn personal_granted(&self) -> bool {
        self.personal_exemption_amount > Decimal::ZERO
    }

    /// Returns the granted count (0 or 1) for the given exemption type.
    pub fn granted_count(&self, exemption_type: ExemptionType) -> u8 {
        granted_count(self.amount(exemption_type))
    }
}

/// Maps an exemption amount to its granted count: 1 iff the amount is positive.
///
/// # Example
///
/// ```
/// use assessing_core::models::granted_count;
/// use rust_decimal::Decimal;
///
/// assert_eq!(granted_count(Decimal::new(125, 0)), 1);
/// assert_eq!(granted_count(Decimal::ZERO), 0);
/// assert_eq!(granted_count(Decimal::new(-5, 0)), 0);
/// ```
pub fn granted_count(amount: Decimal) -> u8 {
    if amount > Decimal::ZERO { 1 } else { 0 }
}

/// Validates a raw granted count.
pub(crate) fn check_granted_count(granted_count: u8) -> AssessmentResult<bool> {
    match granted_count {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(AssessmentError::InvalidArgument {
            field: "granted_count".to_string(),
            message: format!("must be 0 or 1, got {}", other),
        }),
    }
}
