//! Exemption phase resolution.
//!
//! This module places an evaluation date within the yearly exemption cycle of
//! one exemption type and explains the result to the owner. Residential and
//! personal exemptions share the state machine below and differ only in the
//! anchors and names taken from the [`ExemptionCalendar`].
//!
//! ```text
//!  Jan 1 ........ opens ....... deadline ....... cycle_ends ....... Dec 31
//!  |  NotOpen     |  OpenForApplication  |  Missed       |  NotOpen (next)  |
//! ```
//!
//! A granted exemption is `Granted` on every date. An approved but not yet
//! granted exemption is `UnderReview` from `opens` through `cycle_ends`.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{ExemptionCalendar, ExemptionWindow};
use crate::error::AssessmentResult;
use crate::models::{ExemptionPhase, ExemptionType, PhaseLabel, check_granted_count};

use super::FiscalYear;

/// Inputs describing one exemption for phase resolution.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::ExemptionPhaseParams;
/// use assessing_core::models::ExemptionType;
///
/// let params = ExemptionPhaseParams::from_raw(0, "Personal").unwrap();
/// assert_eq!(params.exemption_type, ExemptionType::Personal);
/// assert!(ExemptionPhaseParams::from_raw(0, "Senior").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExemptionPhaseParams {
    /// 1 if the exemption amount is on the bill, 0 otherwise.
    pub granted_count: u8,
    /// Which exemption is being resolved.
    pub exemption_type: ExemptionType,
    /// The administrative approval flag.
    pub approved: bool,
}

impl ExemptionPhaseParams {
    /// Creates params for an exemption with no approval on record.
    pub fn new(granted_count: u8, exemption_type: ExemptionType) -> Self {
        Self {
            granted_count,
            exemption_type,
            approved: false,
        }
    }

    /// Creates params from an untyped exemption type string.
    ///
    /// Unknown types are rejected instead of falling back to a default.
    pub fn from_raw(granted_count: u8, exemption_type: &str) -> AssessmentResult<Self> {
        Ok(Self::new(granted_count, exemption_type.parse()?))
    }

    /// Sets the administrative approval flag.
    pub fn with_approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }
}

/// Where a date falls within the cycle it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleStage {
    BeforeOpening,
    Open,
    PastDeadline,
}

/// The concrete dates of one exemption cycle.
#[derive(Debug, Clone, Copy)]
struct CycleDates {
    opens: NaiveDate,
    deadline: NaiveDate,
    cycle_ends: NaiveDate,
}

impl CycleDates {
    fn for_year(window: &ExemptionWindow, calendar_year: i32) -> AssessmentResult<Self> {
        Ok(Self {
            opens: window.opens.on(calendar_year)?,
            deadline: window.deadline.on(calendar_year)?,
            cycle_ends: window.cycle_ends.on(calendar_year)?,
        })
    }

    /// The first cycle from `calendar_year` onwards that has not ended by `now`.
    fn current(
        window: &ExemptionWindow,
        calendar_year: i32,
        now: NaiveDate,
    ) -> AssessmentResult<Self> {
        let mut year = calendar_year;
        let mut cycle = Self::for_year(window, year)?;
        while now > cycle.cycle_ends {
            year += 1;
            cycle = Self::for_year(window, year)?;
        }
        Ok(cycle)
    }

    /// Callers pass a `now` no later than `cycle_ends`.
    fn stage(&self, now: NaiveDate) -> CycleStage {
        if now < self.opens {
            CycleStage::BeforeOpening
        } else if now <= self.deadline {
            CycleStage::Open
        } else {
            CycleStage::PastDeadline
        }
    }

    /// The fiscal year whose bills this cycle's applications apply to.
    fn fiscal_year(&self) -> FiscalYear {
        FiscalYear::from_date(self.opens)
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Resolves the phase of one exemption on `now` for the cycle of `calendar_year`.
///
/// Once `now` is past the end of that cycle, the following cycle is used, so
/// the message always points at the next date the owner can act on.
///
/// # Errors
///
/// Returns `InvalidArgument` if `granted_count` is not 0 or 1, or if the
/// calendar year cannot be represented as a date.
///
/// # Example
///
/// ```
/// use assessing_core::calculation::{ExemptionPhaseParams, get_exemption_phase};
/// use assessing_core::config::ExemptionCalendar;
/// use assessing_core::models::{ExemptionType, PhaseLabel};
/// use chrono::NaiveDate;
///
/// let calendar = ExemptionCalendar::default();
/// let now = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
///
/// let granted = ExemptionPhaseParams::new(1, ExemptionType::Residential);
/// let phase = get_exemption_phase(now, 2024, &granted, &calendar).unwrap();
/// assert_eq!(phase.phase, PhaseLabel::Granted);
/// assert!(phase.message.is_none());
///
/// let missing = ExemptionPhaseParams::new(0, ExemptionType::Personal);
/// let phase = get_exemption_phase(now, 2024, &missing, &calendar).unwrap();
/// assert_eq!(phase.phase, PhaseLabel::OpenForApplication);
/// assert!(phase.message.unwrap().contains("April 1, 2024"));
/// ```
pub fn get_exemption_phase(
    now: NaiveDate,
    calendar_year: i32,
    params: &ExemptionPhaseParams,
    calendar: &ExemptionCalendar,
) -> AssessmentResult<ExemptionPhase> {
    let granted = check_granted_count(params.granted_count)?;
    let window = calendar.window(params.exemption_type);
    let cycle = CycleDates::current(window, calendar_year, now)?;
    let stage = cycle.stage(now);
    let fy = cycle.fiscal_year();

    let phase = if granted {
        ExemptionPhase::granted()
    } else if params.approved && matches!(stage, CycleStage::Open | CycleStage::PastDeadline) {
        ExemptionPhase::explained(
            PhaseLabel::UnderReview,
            format!(
                "The {} {} application is being processed and will appear on a future tax bill.",
                fy, window.name
            ),
        )
    } else {
        match stage {
            CycleStage::BeforeOpening => ExemptionPhase::explained(
                PhaseLabel::NotOpen,
                format!(
                    "Applications for the {} {} open on {}.",
                    fy, window.name, long_date(cycle.opens)
                ),
            ),
            CycleStage::Open => ExemptionPhase::explained(
                PhaseLabel::OpenForApplication,
                format!(
                    "The {} {} has not been applied to this property. Applications are due by {}.",
                    fy, window.name, long_date(cycle.deadline)
                ),
            ),
            CycleStage::PastDeadline => ExemptionPhase::explained(
                PhaseLabel::Missed,
                format!(
                    "The deadline to apply for the {} {} was {}.",
                    fy, window.name, long_date(cycle.deadline)
                ),
            ),
        }
    };

    debug!(
        exemption_type = %params.exemption_type,
        %now,
        calendar_year,
        granted,
        approved = params.approved,
        phase = %phase.phase,
        "Resolved exemption phase"
    );

    Ok(phase)
}
