//! Property record and tax section models.
//!
//! This module contains the [`PropertyRecord`] supplied by the property data
//! lookup, its raw [`TaxFigures`], and the [`PropertyTaxCalculations`] record
//! consumed by tax section displays.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::calculation::BillPeriod;

use super::{ExemptionAmounts, ExemptionPhaseData};

/// A raw tax figure as delivered by the property data source.
///
/// Figures arrive either as numbers or as strings that may already be
/// formatted for display (e.g. `"$9,427.20"`).
///
/// # Example
///
/// ```
/// use assessing_core::models::TaxValue;
///
/// let number: TaxValue = serde_json::from_str("1250").unwrap();
/// assert_eq!(number, TaxValue::Number(1250.0));
///
/// let text: TaxValue = serde_json::from_str("\"$9,427.20\"").unwrap();
/// assert_eq!(text, TaxValue::Text("$9,427.20".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaxValue {
    /// A numeric figure.
    Number(f64),
    /// A textual figure, possibly pre-formatted.
    Text(String),
}

impl From<f64> for TaxValue {
    fn from(value: f64) -> Self {
        TaxValue::Number(value)
    }
}

impl From<i64> for TaxValue {
    fn from(value: i64) -> Self {
        TaxValue::Number(value as f64)
    }
}

impl From<Decimal> for TaxValue {
    fn from(value: Decimal) -> Self {
        TaxValue::Number(value.to_f64().unwrap_or(f64::NAN))
    }
}

impl From<&str> for TaxValue {
    fn from(value: &str) -> Self {
        TaxValue::Text(value.to_string())
    }
}

impl From<String> for TaxValue {
    fn from(value: String) -> Self {
        TaxValue::Text(value)
    }
}

/// The raw tax lines of a property record.
///
/// Missing lines are `None` and render as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaxFigures {
    /// Tax before exemptions.
    #[serde(default)]
    pub gross_tax: Option<TaxValue>,
    /// Residential exemption line.
    #[serde(default)]
    pub residential_exemption: Option<TaxValue>,
    /// Personal exemption line.
    #[serde(default)]
    pub personal_exemption: Option<TaxValue>,
    /// Community Preservation Act surcharge line.
    #[serde(default)]
    pub community_preservation: Option<TaxValue>,
    /// Tax after exemptions and surcharges.
    #[serde(default)]
    pub net_tax: Option<TaxValue>,
}

/// Display strings for each tax line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTaxFigures {
    /// Tax before exemptions.
    pub gross_tax: String,
    /// Residential exemption line.
    pub residential_exemption: String,
    /// Personal exemption line.
    pub personal_exemption: String,
    /// Community Preservation Act surcharge line.
    pub community_preservation: String,
    /// Tax after exemptions and surcharges.
    pub net_tax: String,
}

/// A property record from the external property data lookup.
///
/// # Example
///
/// ```
/// use assessing_core::models::PropertyRecord;
///
/// let json = r#"{
///     "parcel_id": "0504203000",
///     "exemptions": {
///         "residential_exemption_amount": 3716.40,
///         "residential_exemption_flag": true,
///         "personal_exemption_amount": 0,
///         "personal_exemption_flag": false
///     },
///     "tax": { "gross_tax": 9427.2, "net_tax": "$5,710.80" }
/// }"#;
///
/// let record: PropertyRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.parcel_id, "0504203000");
/// assert!(record.exemptions.residential_granted());
/// assert!(record.tax.personal_exemption.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// The parcel identifier.
    pub parcel_id: String,
    /// Exemption amounts and approval flags.
    pub exemptions: ExemptionAmounts,
    /// Raw tax lines.
    #[serde(default)]
    pub tax: TaxFigures,
}

/// Everything the tax section of a parcel page displays.
///
/// Computed from a single evaluation date, so the fiscal year, the period
/// and both exemption phases always agree with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTaxCalculations {
    /// The parcel identifier.
    pub parcel_id: String,
    /// The fiscal year containing the evaluation date.
    pub fiscal_year: i32,
    /// The fiscal year as shown in headings (e.g. `"FY2025"`).
    pub display_fy: String,
    /// Whether the evaluation date falls in the preliminary billing half.
    pub is_prelim_period: bool,
    /// The billing half the evaluation date falls in.
    pub bill_period: BillPeriod,
    /// Exemption phases, flags and the calendar year.
    #[serde(flatten)]
    pub phases: ExemptionPhaseData,
    /// Display strings for the tax lines.
    pub figures: FormattedTaxFigures,
}

impl PropertyTaxCalculations {
    /// The calendar year the exemption phases were resolved against.
    pub fn calendar_year(&self) -> i32 {
        self.phases.calendar_year
    }
}
