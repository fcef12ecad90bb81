//! Exemption aggregation across exemption types.
//!
//! This module combines the residential and personal exemption amounts and
//! flags of a property record into one [`ExemptionPhaseData`], resolving both
//! phases against the same date and calendar year.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::ExemptionCalendar;
use crate::error::AssessmentResult;
use crate::models::{ExemptionAmounts, ExemptionPhase, ExemptionPhaseData, ExemptionType};

use super::{ExemptionPhaseParams, get_exemption_phase};

fn resolve(
    amounts: &ExemptionAmounts,
    exemption_type: ExemptionType,
    today: NaiveDate,
    calendar_year: i32,
    calendar: &ExemptionCalendar,
) -> AssessmentResult<ExemptionPhase> {
    let granted_count = amounts.granted_count(exemption_type);
    let approved = amounts.flag(exemption_type);

    if approved != (granted_count == 1) {
        debug!(
            %exemption_type,
            approved,
            amount = %amounts.amount(exemption_type),
            "Approval flag and granted amount disagree"
        );
    }

    let params = ExemptionPhaseParams::new(granted_count, exemption_type).with_approved(approved);
    get_exemption_phase(today, calendar_year, &params, calendar)
}

/// Resolves both exemption phases of a property for `today`.
///
/// Granted booleans come from the amounts alone; the flags are passed
/// through unchanged as the approved booleans.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::get_exemption_phases;
/// use assessing_core::config::ExemptionCalendar;
/// use assessing_core::models::{ExemptionAmounts, PhaseLabel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let amounts = ExemptionAmounts {
///     residential_exemption_amount: Decimal::new(371640, 2),
///     residential_exemption_flag: true,
///     personal_exemption_amount: Decimal::ZERO,
///     personal_exemption_flag: false,
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// let data = get_exemption_phases(&amounts, today, &ExemptionCalendar::default()).unwrap();
/// assert_eq!(data.calendar_year, 2024);
/// assert!(data.residential_granted);
/// assert_eq!(data.residential_phase.phase, PhaseLabel::Granted);
/// assert!(data.personal_phase.message.is_some());
/// ```
pub fn get_exemption_phases(
    amounts: &ExemptionAmounts,
    today: NaiveDate,
    calendar: &ExemptionCalendar,
) -> AssessmentResult<ExemptionPhaseData> {
    let calendar_year = today.year();

    let [residential_phase, personal_phase] = ExemptionType::all()
        .map(|exemption_type| resolve(amounts, exemption_type, today, calendar_year, calendar));

    Ok(ExemptionPhaseData {
        residential_phase: residential_phase?,
        personal_phase: personal_phase?,
        residential_exemption_approved: amounts.residential_exemption_flag,
        personal_exemption_approved: amounts.personal_exemption_flag,
        residential_granted: amounts.residential_granted(),
        personal_granted: amounts.personal_granted(),
        calendar_year,
    })
}
