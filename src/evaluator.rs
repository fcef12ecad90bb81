//! Evaluation entry point for the presentation layer.
//!
//! An [`Evaluator`] owns the clock and the exemption calendar. Each call
//! samples the clock once and threads that single date through every
//! calculation it runs.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::calculation::{get_exemption_phases, get_property_tax_calculations};
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::ExemptionCalendar;
use crate::error::AssessmentResult;
use crate::models::{ExemptionAmounts, ExemptionPhaseData, PropertyRecord, PropertyTaxCalculations};

/// Runs exemption and tax calculations against an injected clock.
///
/// # Example
///
/// ```
/// use assessing_core::config::ExemptionCalendar;
/// use assessing_core::evaluator::Evaluator;
/// use assessing_core::models::ExemptionAmounts;
/// use chrono::NaiveDate;
///
/// let evaluator = Evaluator::with_system_clock(ExemptionCalendar::default())
///     .as_of(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
///
/// let data = evaluator.exemption_phases(&ExemptionAmounts::default()).unwrap();
/// assert_eq!(data.calendar_year, 2024);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator<C: Clock> {
    clock: C,
    calendar: Arc<ExemptionCalendar>,
}

impl Evaluator<SystemClock> {
    /// Creates an evaluator reading the wall clock in Boston time.
    pub fn with_system_clock(calendar: ExemptionCalendar) -> Self {
        Self::new(SystemClock::default(), calendar)
    }
}

impl<C: Clock> Evaluator<C> {
    /// Creates an evaluator with the given clock and calendar.
    pub fn new(clock: C, calendar: ExemptionCalendar) -> Self {
        Self {
            clock,
            calendar: Arc::new(calendar),
        }
    }

    /// Returns an evaluator pinned to `date` that shares this calendar.
    pub fn as_of(&self, date: NaiveDate) -> Evaluator<FixedClock> {
        Evaluator {
            clock: FixedClock::new(date),
            calendar: Arc::clone(&self.calendar),
        }
    }

    /// Returns the exemption calendar.
    pub fn calendar(&self) -> &ExemptionCalendar {
        &self.calendar
    }

    /// Returns the date the next evaluation would use.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Resolves both exemption phases of a property.
    pub fn exemption_phases(
        &self,
        amounts: &ExemptionAmounts,
    ) -> AssessmentResult<ExemptionPhaseData> {
        get_exemption_phases(amounts, self.clock.today(), &self.calendar)
    }

    /// Computes the tax section of a property.
    pub fn property_tax_calculations(
        &self,
        record: &PropertyRecord,
    ) -> AssessmentResult<PropertyTaxCalculations> {
        get_property_tax_calculations(record, self.clock.today(), &self.calendar)
    }
}
