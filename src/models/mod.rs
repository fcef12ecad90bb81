//! Core data models for the assessing core.
//!
//! This module contains the domain models read from property records and
//! produced for the presentation layer.

mod exemption;
mod phase;
mod property;

pub(crate) use exemption::check_granted_count;
pub use exemption::{ExemptionAmounts, ExemptionType, granted_count};
pub use phase::{ExemptionPhase, ExemptionPhaseData, PhaseLabel};
pub use property::{
    FormattedTaxFigures, PropertyRecord, PropertyTaxCalculations, TaxFigures, TaxValue,
};
