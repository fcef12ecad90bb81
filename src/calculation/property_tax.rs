//! Tax section calculations for a parcel page.
//!
//! This module assembles everything the tax section displays from one
//! evaluation date: the fiscal year and billing half, both exemption phases,
//! and the formatted tax lines.

use chrono::NaiveDate;

use crate::config::ExemptionCalendar;
use crate::error::AssessmentResult;
use crate::models::{FormattedTaxFigures, PropertyRecord, PropertyTaxCalculations, TaxFigures};

use super::{BillPeriod, FiscalYear, format_optional_tax_value, get_exemption_phases};

/// Formats every tax line of a record.
pub fn format_tax_figures(figures: &TaxFigures) -> FormattedTaxFigures {
    FormattedTaxFigures {
        gross_tax: format_optional_tax_value(figures.gross_tax.as_ref()),
        residential_exemption: format_optional_tax_value(figures.residential_exemption.as_ref()),
        personal_exemption: format_optional_tax_value(figures.personal_exemption.as_ref()),
        community_preservation: format_optional_tax_value(figures.community_preservation.as_ref()),
        net_tax: format_optional_tax_value(figures.net_tax.as_ref()),
    }
}

/// Computes the tax section of a property for `today`.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::get_property_tax_calculations;
/// use assessing_core::config::ExemptionCalendar;
/// use assessing_core::models::{ExemptionAmounts, PropertyRecord, TaxFigures};
/// use chrono::NaiveDate;
///
/// let record = PropertyRecord {
///     parcel_id: "0504203000".to_string(),
///     exemptions: ExemptionAmounts::default(),
///     tax: TaxFigures::default(),
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
///
/// let calculations =
///     get_property_tax_calculations(&record, today, &ExemptionCalendar::default()).unwrap();
/// assert_eq!(calculations.fiscal_year, 2025);
/// assert_eq!(calculations.display_fy, "FY2025");
/// assert!(calculations.is_prelim_period);
/// assert_eq!(calculations.calendar_year(), 2024);
/// ```
pub fn get_property_tax_calculations(
    record: &PropertyRecord,
    today: NaiveDate,
    calendar: &ExemptionCalendar,
) -> AssessmentResult<PropertyTaxCalculations> {
    let fiscal_year = FiscalYear::from_date(today);
    let bill_period = BillPeriod::from_date(today);
    let phases = get_exemption_phases(&record.exemptions, today, calendar)?;

    Ok(PropertyTaxCalculations {
        parcel_id: record.parcel_id.clone(),
        fiscal_year: fiscal_year.0,
        display_fy: fiscal_year.to_string(),
        is_prelim_period: bill_period == BillPeriod::Preliminary,
        bill_period,
        phases,
        figures: format_tax_figures(&record.tax),
    })
}
